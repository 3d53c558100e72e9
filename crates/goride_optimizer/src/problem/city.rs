use serde::Serialize;

use super::position::Time;

/// Header of an instance: grid size, fleet size, ride count, early start
/// bonus and simulation horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub rows: u64,
    pub cols: u64,
    pub cars: usize,
    pub rides: usize,
    pub bonus: u64,
    /// Exclusive end of the valid time range.
    pub steps: Time,
}

impl City {
    pub fn is_within_horizon(&self, time: Time) -> bool {
        time < self.steps
    }
}
