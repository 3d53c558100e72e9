use std::path::PathBuf;

use clap::Args;
use goride_optimizer::parsers::{
    hashcode::HashCodeParser, parser::DatasetParser, submission::parse_submission_file,
};
use tracing::info;

#[derive(Args)]
pub struct ScoreArgs {
    /// The instance the submission was made for
    #[arg(short, long)]
    input: PathBuf,

    /// The submission to score
    #[arg(short, long)]
    submission: PathBuf,
}

pub fn run(args: ScoreArgs) -> anyhow::Result<()> {
    let problem = HashCodeParser.parse(&args.input)?;
    let solution = parse_submission_file(&args.submission, &problem)?;
    let summary = solution.summary(&problem);

    info!(
        "Submission {:?}: score = {}, max score = {}, assigned = {}, unassigned = {}",
        args.submission, summary.score, summary.max_score, summary.assigned, summary.unassigned,
    );
    println!("{}", summary.score);

    Ok(())
}
