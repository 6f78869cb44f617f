//! Annotate the celebrities sections of a topic report with screen names.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use plsa_tools::io::{create_writer, open_reader};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use plsa_tools::report::names::{annotate_report, IdNameMap};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "add-cel-name", version, about)]
struct Args {
    /// The input id-name file
    #[arg(short = 'c', long, default_value = "cel_id_name.txt")]
    id_name_path: PathBuf,

    /// The input topics file
    #[arg(short, long, default_value = "topics.dat.final")]
    inf: PathBuf,

    /// The output topics file with celebrity names
    #[arg(short, long, default_value = "topics.dat")]
    outf: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let names = IdNameMap::load(open_reader(&args.id_name_path)?)?;
    if names.is_empty() {
        println!("{} id-name file has no entries", "Warning:".yellow());
    }

    let stats = annotate_report(open_reader(&args.inf)?, create_writer(&args.outf)?, &names)?;

    display_summary(
        "Names added.",
        &args.outf,
        &[
            SummaryLine::new("Known celebrities", names.len()),
            SummaryLine::new("Lines copied", stats.lines),
            SummaryLine::new("Lines annotated", stats.annotated),
        ],
    );
    Ok(())
}
