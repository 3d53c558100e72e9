use crate::problem::{ride::RideIdx, ride_assignment_problem::RideAssignmentProblem};

/// Rides that have not been given to any car yet.
///
/// Removal swaps the last ride into the freed slot, so the iteration order of
/// the remaining rides changes after every removal. The order is still fully
/// determined by the initial order and the sequence of removals.
#[derive(Debug, Clone)]
pub struct RidePool {
    rides: Vec<RideIdx>,
}

impl RidePool {
    /// A pool holding every ride of the problem, in index order.
    pub fn from_problem(problem: &RideAssignmentProblem) -> Self {
        RidePool {
            rides: problem.ride_ids().collect(),
        }
    }

    pub fn new(rides: Vec<RideIdx>) -> Self {
        RidePool { rides }
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    pub fn as_slice(&self) -> &[RideIdx] {
        &self.rides
    }

    pub fn iter(&self) -> impl Iterator<Item = RideIdx> + '_ {
        self.rides.iter().copied()
    }

    /// Removes the ride at `position` in O(1) and returns it.
    pub fn take(&mut self, position: usize) -> RideIdx {
        self.rides.swap_remove(position)
    }
}
