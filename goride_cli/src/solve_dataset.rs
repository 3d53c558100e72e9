use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use goride_optimizer::{
    parsers::{hashcode::HashCodeParser, parser::DatasetParser},
    solver::{solver::Solver, solver_params::SolverParams},
};
use indicatif::{ProgressBar, ProgressStyle};
use jiff::Timestamp;
use rayon::prelude::*;
use tracing::info;

use crate::{
    file_utils::{display_name, find_submission_conflict, read_folder, submission_file_name},
    report::{DatasetReport, InstanceReport},
    solver_args::SolverArgs,
};

pub const TEXT_REPORT_FILE: &str = "README";
pub const JSON_REPORT_FILE: &str = "report.json";

#[derive(Args)]
pub struct SolveDatasetArgs {
    /// Directory of instances, or a single instance
    #[arg(short = 'i', long)]
    dataset: PathBuf,

    /// Output folder for the .out submissions and the reports
    #[arg(short, long)]
    output: PathBuf,

    /// Number of instances solved at the same time
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    #[command(flatten)]
    solver: SolverArgs,
}

fn solve_instance(
    path: &Path,
    output: &Path,
    params: &SolverParams,
) -> anyhow::Result<InstanceReport> {
    let name = display_name(path);
    let started = Timestamp::now();

    let problem = HashCodeParser.parse(path)?;
    let solver = Solver::new(problem, params.clone());
    let solution = solver
        .solve()
        .with_context(|| format!("Failed to solve {name}"))?;

    let duration = Timestamp::now().duration_since(started);
    let summary = solution.summary(solver.problem());

    let submission_path = output.join(submission_file_name(path));
    std::fs::write(&submission_path, solution.to_submission())
        .with_context(|| format!("Failed to write {}", submission_path.display()))?;

    info!("{}: score = {}, duration = {:#}", name, summary.score, duration);

    Ok(InstanceReport {
        name,
        score: summary.score,
        max_score: summary.max_score,
        cars: solver.problem().num_cars(),
        rides: solver.problem().num_rides(),
        assigned: summary.assigned,
        duration,
    })
}

pub fn run(args: SolveDatasetArgs) -> Result<(), anyhow::Error> {
    info!("Solving dataset {:?}", args.dataset);
    let paths = if args.dataset.is_file() {
        vec![args.dataset.clone()]
    } else {
        read_folder(&args.dataset)
            .with_context(|| format!("Failed to read {}", args.dataset.display()))?
    };

    if let Some((first, second)) = find_submission_conflict(&paths) {
        anyhow::bail!(
            "{} and {} would both be written to {}",
            first.display(),
            second.display(),
            args.output.join(submission_file_name(first)).display()
        );
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let params = args.solver.solver_params();

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} ({elapsed})")?);

    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.max(1))
        .build()?;

    // Results keep the sorted file order; the first failure aborts the run.
    let instances = thread_pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let report = solve_instance(path, &args.output, &params);
                bar.inc(1);
                report
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
    })?;

    bar.finish_and_clear();

    let report = DatasetReport::new(&params, instances);

    std::fs::write(args.output.join(TEXT_REPORT_FILE), report.to_text())?;
    std::fs::write(
        args.output.join(JSON_REPORT_FILE),
        serde_json::to_string_pretty(&report)?,
    )?;

    println!("{}", report.to_table());
    info!("total: {}", report.total);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const EXAMPLE: &str = "3 4 2 3 2 10
0 0 1 3 2 9
1 2 1 0 0 9
2 0 2 2 0 9
";

    #[test]
    fn test_solve_instance_writes_submission() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a_example.in");
        fs::write(&input, EXAMPLE).unwrap();

        let report = solve_instance(&input, dir.path(), &SolverParams::default()).unwrap();

        assert_eq!(report.name, "a_example.in");
        assert_eq!(report.score, 4);
        assert_eq!(report.rides, 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("a_example.out")).unwrap(),
            "0 2 1 0\n1\n"
        );
    }

    #[test]
    fn test_solve_instance_rejects_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.in");
        fs::write(&input, "3 4 2 3 2\n").unwrap();

        let result = solve_instance(&input, dir.path(), &SolverParams::default());

        assert!(result.is_err());
        assert!(!dir.path().join("broken.out").exists());
    }
}
