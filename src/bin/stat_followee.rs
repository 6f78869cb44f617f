//! Count followees per user in a social-graph edge file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plsa_tools::io::{create_writer, open_reader};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use plsa_tools::stats::followee::write_counts;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stat-followee", version, about)]
struct Args {
    /// The input followee file
    #[arg(short, long, default_value = "followee.dat")]
    inf: PathBuf,

    /// The output num_followee file
    #[arg(short, long, default_value = "num_followee.dat")]
    outf: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let users = write_counts(open_reader(&args.inf)?, create_writer(&args.outf)?)?;

    display_summary("Followee counts written.", &args.outf, &[SummaryLine::new("Users", users)]);
    Ok(())
}
