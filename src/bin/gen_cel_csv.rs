//! Convert the celebrity id-name file to semicolon-separated CSV.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plsa_tools::export::csv::write_csv;
use plsa_tools::io::{create_writer, open_reader};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gen-cel-csv", version, about)]
struct Args {
    /// The input id-name file
    #[arg(short, long, default_value = "cel_id_name.txt")]
    inf: PathBuf,

    /// The output csv file
    #[arg(short, long, default_value = "cel_id_name.csv")]
    outf: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let rows = write_csv(open_reader(&args.inf)?, create_writer(&args.outf)?)?;

    display_summary("CSV written.", &args.outf, &[SummaryLine::new("Rows", rows)]);
    Ok(())
}
