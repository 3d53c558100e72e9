use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{score::ScoreArgs, solve::SolveArgs, solve_dataset::SolveDatasetArgs};

mod file_utils;
mod report;
mod score;
mod solve;
mod solve_dataset;
mod solver_args;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign the rides of a single instance
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Assign every instance of a directory and write a report
    #[command(visible_alias = "d")]
    SolveDataset {
        #[command(flatten)]
        args: SolveDatasetArgs,
    },
    /// Recompute the score of an existing submission
    Score {
        #[command(flatten)]
        args: ScoreArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Solve { args } => solve::run(args)?,
        Commands::SolveDataset { args } => solve_dataset::run(args)?,
        Commands::Score { args } => score::run(args)?,
    }

    Ok(())
}
