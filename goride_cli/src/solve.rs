use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use goride_optimizer::{
    parsers::{hashcode::HashCodeParser, parser::DatasetParser},
    solver::solver::Solver,
};
use tracing::info;

use crate::solver_args::SolverArgs;

#[derive(Args)]
pub struct SolveArgs {
    /// The instance to solve
    #[arg(short, long)]
    input: PathBuf,

    /// Submission file, printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    solver: SolverArgs,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let problem = HashCodeParser.parse(&args.input)?;
    let solver = Solver::new(problem, args.solver.solver_params());

    let solution = solver.solve()?;
    let summary = solution.summary(solver.problem());

    info!(
        "Finished: score = {}, max score = {}, assigned = {}, unassigned = {}",
        summary.score, summary.max_score, summary.assigned, summary.unassigned,
    );

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(&path, solution.to_submission())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => print!("{}", solution.to_submission()),
    }

    Ok(())
}
