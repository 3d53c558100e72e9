use serde::Serialize;

use crate::problem::{
    position::{Position, Time},
    ride::RideIdx,
};

use super::car::CarIdx;

/// Assignment of one ride to one car, either a candidate being compared or a
/// move already committed to the car's route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RideMove {
    pub car: CarIdx,
    pub ride: RideIdx,

    /// Where the car is when it accepts the ride.
    pub from: Position,

    /// Dropoff of the ride, the car's position once the move is done.
    pub to: Position,

    /// Car clock when it accepts the ride.
    pub start: Time,

    /// Time the car picks the passenger up, after driving empty and waiting
    /// for the earliest start.
    pub begin: Time,

    /// Time the passenger is dropped off.
    pub end: Time,

    pub score: u64,

    /// Desirability used to rank candidates. Never part of the final score.
    pub value: f64,
}

impl RideMove {
    /// Time spent driving empty to the pickup point and waiting there.
    pub fn idle_duration(&self) -> Time {
        self.begin - self.start
    }
}
