//! Per-row Shannon entropy of a probability matrix file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plsa_tools::io::{create_writer, open_reader};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use plsa_tools::stats::entropy::write_entropies;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "calc-entropy", version, about)]
struct Args {
    /// The input probability file (`rows cols` header, then one row per line)
    #[arg(short, long, default_value = "topic-cel-prob.dat.final")]
    inf: PathBuf,

    /// The output entropy file
    #[arg(short, long, default_value = "topic-cel-entropy.dat")]
    outf: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let stats = write_entropies(open_reader(&args.inf)?, create_writer(&args.outf)?)?;

    display_summary(
        "Entropy written.",
        &args.outf,
        &[
            SummaryLine::new("Declared shape", format!("{} x {}", stats.header.rows, stats.header.cols)),
            SummaryLine::new("Rows", stats.rows),
        ],
    );
    Ok(())
}
