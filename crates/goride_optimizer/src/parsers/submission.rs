//! Submissions list, one line per car, the car index followed by the rides it
//! serves in order. Parsing a submission replays every route against the
//! problem so that its score can be recomputed independently of the solver.

use std::path::Path;

use anyhow::Context;
use fxhash::FxHashSet;
use thiserror::Error;

use crate::{
    problem::{ride::RideIdx, ride_assignment_problem::RideAssignmentProblem},
    solver::{
        assignment::create_fleet,
        car::CarIdx,
        evaluation::MoveEvaluator,
        solution::Solution,
        solver_params::SolverParams,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },

    #[error("Line {line}: car {car} does not exist")]
    UnknownCar { line: usize, car: usize },

    #[error("Line {line}: car {car} is listed twice")]
    DuplicateCar { line: usize, car: usize },

    #[error("Line {line}: ride {ride} does not exist")]
    UnknownRide { line: usize, ride: usize },

    #[error("Line {line}: ride {ride} is already assigned")]
    DuplicateRide { line: usize, ride: usize },
}

pub fn parse_submission(
    text: &str,
    problem: &RideAssignmentProblem,
) -> Result<Solution, SubmissionError> {
    let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());
    let mut cars = create_fleet(problem);
    let mut seen_cars = FxHashSet::default();
    let mut seen_rides = FxHashSet::default();

    for (index, text) in text.lines().enumerate() {
        let line = index + 1;
        let mut tokens = text.split_whitespace();

        let Some(car_token) = tokens.next() else {
            continue;
        };

        let car = parse_index(car_token, line)?;
        if car >= cars.len() {
            return Err(SubmissionError::UnknownCar { line, car });
        }
        if !seen_cars.insert(car) {
            return Err(SubmissionError::DuplicateCar { line, car });
        }

        let car = &mut cars[CarIdx::new(car)];
        for token in tokens {
            let ride = parse_index(token, line)?;
            if ride >= problem.num_rides() {
                return Err(SubmissionError::UnknownRide { line, ride });
            }
            if !seen_rides.insert(ride) {
                return Err(SubmissionError::DuplicateRide { line, ride });
            }

            let ride_move = evaluator.evaluate(car, problem.ride(RideIdx::new(ride)));
            car.commit(ride_move);
        }
    }

    Ok(Solution::new(cars))
}

pub fn parse_submission_file<P: AsRef<Path>>(
    path: P,
    problem: &RideAssignmentProblem,
) -> Result<Solution, anyhow::Error> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_submission(&content, problem)
        .with_context(|| format!("Invalid submission {}", path.display()))
}

fn parse_index(token: &str, line: usize) -> Result<usize, SubmissionError> {
    token.parse().map_err(|_| SubmissionError::InvalidInteger {
        line,
        token: token.to_owned(),
    })
}
