pub mod round_robin;
pub mod value_greedy;

use crate::problem::ride_assignment_problem::RideAssignmentProblem;

use super::car::{Car, CarIdx};

/// One idle car per fleet slot, parked at the origin.
pub fn create_fleet(problem: &RideAssignmentProblem) -> Vec<Car> {
    (0..problem.num_cars())
        .map(|index| Car::new(CarIdx::new(index)))
        .collect()
}
