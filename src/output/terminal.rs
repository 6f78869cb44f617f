// Colored terminal summaries for the pipeline tools.
//
// Logs go to tracing; this is the short human-facing recap printed once a
// tool has finished writing its output file.

use std::path::Path;

use colored::Colorize;

/// One labelled figure in a run summary.
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl SummaryLine {
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// Print a finished-run summary: bold title with the output path, then
/// one dimmed label per figure.
pub fn display_summary(title: &str, output: &Path, lines: &[SummaryLine]) {
    println!(
        "\n{} {}",
        title.bold(),
        format!("-> {}", output.display()).dimmed()
    );
    let width = lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
    for line in lines {
        println!(
            "  {}  {}",
            format!("{:<width$}", line.label).dimmed(),
            line.value.green()
        );
    }
}
