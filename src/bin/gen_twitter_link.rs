//! Build an HTML table of profile links for every celebrity.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plsa_tools::config::Config;
use plsa_tools::export::links::write_link_table;
use plsa_tools::io::{create_writer, open_reader};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gen-twitter-link", version, about)]
struct Args {
    /// The input id-name file
    #[arg(short, long, default_value = "cel_id_name.txt")]
    inf: PathBuf,

    /// The output html file of celebrity profile links
    #[arg(short, long, default_value = "cel_link.html")]
    outf: PathBuf,

    /// Profile URL prefix (default: PLSA_PROFILE_BASE_URL or https://twitter.com/)
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let config = Config::load()?;
    let base_url = config.base_url_or(args.base_url);

    let links = write_link_table(open_reader(&args.inf)?, create_writer(&args.outf)?, &base_url)?;

    display_summary(
        "Links written.",
        &args.outf,
        &[
            SummaryLine::new("Base URL", &base_url),
            SummaryLine::new("Links", links),
        ],
    );
    Ok(())
}
