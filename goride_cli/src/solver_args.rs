use clap::{Args, ValueEnum};
use goride_optimizer::solver::solver_params::{
    AssignmentStrategy, DEFAULT_ALPHA, DEFAULT_BETA, SolverParams, Threads,
};

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    ValueGreedy,
    RoundRobin,
}

impl From<StrategyArg> for AssignmentStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::ValueGreedy => AssignmentStrategy::ValueGreedy,
            StrategyArg::RoundRobin => AssignmentStrategy::RoundRobin,
        }
    }
}

#[derive(Args)]
pub struct SolverArgs {
    /// Weight of the reward earned per unit of busy time
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Weight of the penalty for finishing late in the horizon
    #[arg(long, default_value_t = DEFAULT_BETA)]
    beta: f64,

    #[arg(long, value_enum, default_value_t = StrategyArg::ValueGreedy)]
    strategy: StrategyArg,

    /// Threads evaluating candidates within one instance (0 = all cores)
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

impl SolverArgs {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            alpha: self.alpha,
            beta: self.beta,
            strategy: self.strategy.into(),
            evaluation_threads: match self.threads {
                0 => Threads::Auto,
                1 => Threads::Single,
                n => Threads::Multi(n),
            },
        }
    }
}
