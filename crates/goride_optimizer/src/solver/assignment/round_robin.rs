use tracing::{Level, instrument};

use crate::{
    problem::{ride::Ride, ride_assignment_problem::RideAssignmentProblem},
    solver::{car::Car, evaluation::MoveEvaluator},
};

use super::create_fleet;

/// Baseline without any value comparison: rides sorted by earliest start are
/// dealt to the cars in turn, ride `i` going to car `i mod cars`. Every ride
/// is committed, whether or not it still earns anything.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn assign_round_robin(problem: &RideAssignmentProblem, evaluator: &MoveEvaluator) -> Vec<Car> {
    let mut cars = create_fleet(problem);
    if cars.is_empty() {
        return cars;
    }

    let mut rides: Vec<&Ride> = problem.rides().iter().collect();
    rides.sort_by_key(|ride| ride.earliest_start());

    let num_cars = cars.len();
    for (position, ride) in rides.into_iter().enumerate() {
        let car = &mut cars[position % num_cars];
        let ride_move = evaluator.evaluate(car, ride);
        car.commit(ride_move);
    }

    cars
}
