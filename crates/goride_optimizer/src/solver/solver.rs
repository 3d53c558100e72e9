use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    problem::ride_assignment_problem::RideAssignmentProblem,
    solver::assignment::{round_robin::assign_round_robin, value_greedy::assign_by_value},
    timer_debug,
};

use super::{
    evaluation::MoveEvaluator,
    solution::Solution,
    solver_params::{AssignmentStrategy, SolverParams},
};

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Failed to build the evaluation thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub struct Solver {
    problem: Arc<RideAssignmentProblem>,
    params: SolverParams,
}

impl Solver {
    pub fn new(problem: RideAssignmentProblem, params: SolverParams) -> Self {
        Solver {
            problem: Arc::new(problem),
            params,
        }
    }

    pub fn problem(&self) -> &Arc<RideAssignmentProblem> {
        &self.problem
    }

    pub fn solve(&self) -> Result<Solution, SolverError> {
        let problem = self.problem.as_ref();
        let evaluator = MoveEvaluator::new(problem.city(), &self.params);

        debug!(
            strategy = %self.params.strategy,
            cars = problem.num_cars(),
            rides = problem.num_rides(),
            alpha = evaluator.alpha(),
            beta = evaluator.beta(),
            "Start assignment"
        );

        let cars = match self.params.strategy {
            AssignmentStrategy::ValueGreedy => {
                let threads = self.params.evaluation_threads.number_of_threads();
                let thread_pool = if threads > 1 {
                    Some(
                        rayon::ThreadPoolBuilder::new()
                            .num_threads(threads)
                            .build()?,
                    )
                } else {
                    None
                };

                timer_debug!(
                    "Value greedy assignment",
                    assign_by_value(problem, &evaluator, thread_pool.as_ref())
                )
            }
            AssignmentStrategy::RoundRobin => timer_debug!(
                "Round robin assignment",
                assign_round_robin(problem, &evaluator)
            ),
        };

        let solution = Solution::new(cars);

        info!(
            score = solution.total_score(),
            assigned = solution.num_assigned(),
            rides = problem.num_rides(),
            "Assignment complete"
        );

        Ok(solution)
    }
}
