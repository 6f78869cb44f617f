// Followee counts: how many accounts each user follows.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Write the token count of each input line, one integer per line.
///
/// Returns the number of lines processed. Tokens are neither validated nor
/// deduplicated.
pub fn write_counts<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut lines = 0;
    for line in input.lines() {
        let line = line.with_context(|| format!("Failed to read followee line {}", lines + 1))?;
        writeln!(output, "{}", line.split_whitespace().count())?;
        lines += 1;
    }
    output.flush()?;
    Ok(lines)
}
