use std::path::Path;

use crate::problem::ride_assignment_problem::RideAssignmentProblem;

pub trait DatasetParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<RideAssignmentProblem, anyhow::Error>;
}
