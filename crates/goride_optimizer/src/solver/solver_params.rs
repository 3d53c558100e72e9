use std::fmt;

use serde::Serialize;

pub const DEFAULT_ALPHA: f64 = 0.8;
pub const DEFAULT_BETA: f64 = 2.2;

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Weight of the reward earned per unit of time the car is busy.
    pub alpha: f64,

    /// Weight of the penalty for finishing late in the horizon.
    pub beta: f64,

    pub strategy: AssignmentStrategy,

    /// Threads used to evaluate candidates within one instance.
    pub evaluation_threads: Threads,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AssignmentStrategy {
    /// Each car in turn repeatedly takes the ride with the highest value
    /// until its clock passes the horizon or no ride is left.
    ValueGreedy,

    /// Rides sorted by earliest start are dealt to the cars in turn.
    RoundRobin,
}

impl fmt::Display for AssignmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStrategy::ValueGreedy => write!(f, "value-greedy"),
            AssignmentStrategy::RoundRobin => write!(f, "round-robin"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            strategy: AssignmentStrategy::ValueGreedy,
            evaluation_threads: Threads::Single,
        }
    }
}
