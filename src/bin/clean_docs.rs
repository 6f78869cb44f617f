//! Clean a one-document-per-line corpus for topic modeling.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use plsa_tools::config::Config;
use plsa_tools::io::{create_writer, open_reader};
use plsa_tools::output::terminal::{display_summary, SummaryLine};
use plsa_tools::text::clean::{clean_documents, cleaned_path, StopwordSet};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "clean-docs", version, about)]
struct Args {
    /// The input doc file
    #[arg(short, long, default_value = "tweet_docs.dat")]
    file: PathBuf,

    /// The suffix of the output cleaned file (`<file>.<suffix>`)
    #[arg(short, long, default_value = "clean")]
    suffix: String,

    /// The stop words file
    #[arg(short = 't', long, default_value = "stopwords.dat")]
    stop: PathBuf,

    /// Log interval in input lines (default: PLSA_LOG_INTERVAL or 10000)
    #[arg(short, long)]
    nlog: Option<usize>,

    /// Also drop the built-in English stopword list
    #[arg(long)]
    builtin_stopwords: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    plsa_tools::logging::init();

    let args = Args::parse();
    info!(?args, "options");

    let config = Config::load()?;
    let log_interval = config.log_interval_or(args.nlog)?;

    let mut stopwords = StopwordSet::load(open_reader(&args.stop)?)?;
    if args.builtin_stopwords {
        stopwords.extend_builtin_english();
    }
    if stopwords.is_empty() {
        println!("{} stopword list is empty, only length filtering applies", "Warning:".yellow());
    }
    info!(stopwords = stopwords.len(), "Loaded stopwords");

    let outf = cleaned_path(&args.file, &args.suffix);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} [{elapsed_precise}] {pos} lines ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(200));

    let stats = clean_documents(
        open_reader(&args.file)?,
        create_writer(&outf)?,
        &stopwords,
        log_interval,
        &pb,
    )?;
    pb.finish_and_clear();

    display_summary(
        "Documents cleaned.",
        &outf,
        &[
            SummaryLine::new("Stopwords", stopwords.len()),
            SummaryLine::new("Lines read", stats.lines_read),
            SummaryLine::new("Lines written", stats.lines_written),
            SummaryLine::new("All tokens", stats.tokens),
        ],
    );
    Ok(())
}
