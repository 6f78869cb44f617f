//! Render an ExPLSA topics file as topic-word and topic-celebrity tables.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plsa_tools::io::{open_reader, read_to_string, write_string};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use plsa_tools::report::html::render_dual;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gen-explsa-html", version, about)]
struct Args {
    /// The input topics file
    #[arg(short, long, default_value = "../explsa/topics.dat")]
    inf: PathBuf,

    /// The output topics html file
    #[arg(short, long, default_value = "tm.html")]
    outf: PathBuf,

    /// The input header html file
    #[arg(short = 'b', long, default_value = "header.html")]
    header: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let header = read_to_string(&args.header)?;
    let html = render_dual(&header, open_reader(&args.inf)?)?;
    write_string(&args.outf, &html)?;

    display_summary("HTML written.", &args.outf, &[SummaryLine::new("Bytes", html.len())]);
    Ok(())
}
