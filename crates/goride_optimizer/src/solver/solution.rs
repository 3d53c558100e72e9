use std::fmt::Write;

use fxhash::FxHashSet;
use serde::Serialize;

use crate::problem::{ride::RideIdx, ride_assignment_problem::RideAssignmentProblem};

use super::car::{Car, CarIdx};

/// The routes of every car after assignment.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    cars: Vec<Car>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolutionSummary {
    pub score: u64,
    pub max_score: u64,
    pub assigned: usize,
    pub unassigned: usize,
    pub routes: Vec<Vec<RideIdx>>,
}

impl Solution {
    pub fn new(cars: Vec<Car>) -> Self {
        Solution { cars }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, index: CarIdx) -> &Car {
        &self.cars[index]
    }

    /// Sum of the scores of every committed move.
    pub fn total_score(&self) -> u64 {
        self.cars.iter().map(Car::score).sum()
    }

    pub fn num_assigned(&self) -> usize {
        self.cars.iter().map(|car| car.moves().len()).sum()
    }

    pub fn assigned_rides(&self) -> FxHashSet<RideIdx> {
        self.cars.iter().flat_map(Car::ride_ids).collect()
    }

    pub fn unassigned_rides(&self, problem: &RideAssignmentProblem) -> Vec<RideIdx> {
        let assigned = self.assigned_rides();

        problem
            .ride_ids()
            .filter(|ride| !assigned.contains(ride))
            .collect()
    }

    /// One line per car: the car index followed by its rides in the order
    /// they were committed.
    pub fn to_submission(&self) -> String {
        let mut submission = String::new();

        for car in &self.cars {
            let _ = write!(submission, "{}", car.index());
            for ride in car.ride_ids() {
                let _ = write!(submission, " {ride}");
            }
            submission.push('\n');
        }

        submission
    }

    pub fn summary(&self, problem: &RideAssignmentProblem) -> SolutionSummary {
        let assigned = self.num_assigned();

        SolutionSummary {
            score: self.total_score(),
            max_score: problem.max_score(),
            assigned,
            unassigned: problem.num_rides().saturating_sub(assigned),
            routes: self
                .cars
                .iter()
                .map(|car| car.ride_ids().collect())
                .collect(),
        }
    }
}
