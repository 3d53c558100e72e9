use serde::Serialize;

use crate::define_index_newtype;

use super::position::{Position, Time};

define_index_newtype!(RideIdx, Ride);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ride {
    index: RideIdx,
    pickup: Position,
    dropoff: Position,
    earliest_start: Time,
    latest_finish: Time,
    length: u64,
}

impl Ride {
    pub fn new(
        index: RideIdx,
        pickup: Position,
        dropoff: Position,
        earliest_start: Time,
        latest_finish: Time,
    ) -> Self {
        Ride {
            index,
            pickup,
            dropoff,
            earliest_start,
            latest_finish,
            length: pickup.distance_to(&dropoff),
        }
    }

    pub fn index(&self) -> RideIdx {
        self.index
    }

    pub fn pickup(&self) -> Position {
        self.pickup
    }

    pub fn dropoff(&self) -> Position {
        self.dropoff
    }

    /// The ride may not begin before this time.
    pub fn earliest_start(&self) -> Time {
        self.earliest_start
    }

    /// The ride only earns its length if it is finished by this time.
    pub fn latest_finish(&self) -> Time {
        self.latest_finish
    }

    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
