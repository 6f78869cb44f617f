// Semicolon-separated export with a blank trailing column.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Field separator of the exported rows.
pub const SEPARATOR: &str = ";";

/// Format one line: its tokens joined by `;`, plus an empty last field.
pub fn csv_row(line: &str) -> String {
    let mut fields: Vec<&str> = line.split_whitespace().collect();
    fields.push("");
    fields.join(SEPARATOR)
}

/// Convert every input line. Returns the number of rows written.
pub fn write_csv<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut rows = 0;
    for line in input.lines() {
        let line = line.with_context(|| format!("Failed to read line {}", rows + 1))?;
        writeln!(output, "{}", csv_row(&line))?;
        rows += 1;
    }
    output.flush()?;
    Ok(rows)
}
