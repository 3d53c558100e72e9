use crate::problem::{city::City, position::Time, ride::Ride};

use super::{car::Car, ride_move::RideMove, solver_params::SolverParams};

/// Reward earned by a ride picked up at `begin` and dropped off at `end`:
/// the bonus when it begins no later than its earliest start, plus its
/// length when it finishes by its deadline.
pub fn compute_move_score(ride: &Ride, begin: Time, end: Time, bonus: u64) -> u64 {
    let mut score = 0;

    if begin <= ride.earliest_start() {
        score += bonus;
    }

    if end <= ride.latest_finish() {
        score += ride.len();
    }

    score
}

/// Scores and ranks candidate moves for a fixed city and weights.
#[derive(Debug, Clone, Copy)]
pub struct MoveEvaluator {
    bonus: u64,
    steps: Time,
    alpha: f64,
    beta: f64,
}

impl MoveEvaluator {
    pub fn new(city: &City, params: &SolverParams) -> Self {
        MoveEvaluator {
            bonus: city.bonus,
            steps: city.steps,
            alpha: params.alpha,
            beta: params.beta,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Computes the move `car` would make by serving `ride` next. Neither the
    /// car nor the ride is modified.
    pub fn evaluate(&self, car: &Car, ride: &Ride) -> RideMove {
        let start = car.time();
        let approach = car.position().distance_to(&ride.pickup());
        let begin = start
            .saturating_add(approach)
            .max(ride.earliest_start());
        let end = begin.saturating_add(ride.len());

        let score = compute_move_score(ride, begin, end, self.bonus);

        RideMove {
            car: car.index(),
            ride: ride.index(),
            from: car.position(),
            to: ride.dropoff(),
            start,
            begin,
            end,
            score,
            value: self.value(score, start, end),
        }
    }

    /// Reward per unit of busy time, minus a penalty growing with how late in
    /// the horizon the move ends.
    ///
    /// A move that keeps the car busy for no time at all (already at the
    /// pickup, zero length ride, no waiting) is treated as lasting one step.
    pub fn value(&self, score: u64, start: Time, end: Time) -> f64 {
        let busy = end.saturating_sub(start).max(1);

        self.alpha * score as f64 / busy as f64 - self.beta * end as f64 / self.steps as f64
    }
}
