// Shannon entropy of each row of a probability matrix.
//
// The trainer dumps matrices such as p(topic | celebrity) as a `rows cols`
// header followed by one whitespace-separated row per line. A low-entropy
// row means the celebrity is concentrated on few topics.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Shannon entropy in bits. Non-positive entries contribute nothing, and rows
/// are not required to sum to 1.
pub fn shannon_entropy(probs: &[f64]) -> f64 {
    // Subtracting from +0.0 keeps a certain row at +0.0 rather than -0.0
    probs
        .iter()
        .filter(|&&p| p > 0.0)
        .fold(0.0, |h, &p| h - p * p.log2())
}

/// Declared matrix shape from the header line. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixHeader {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixHeader {
    fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let (Some(rows), Some(cols)) = (tokens.next(), tokens.next()) else {
            anyhow::bail!("Malformed header line 1: expected `rows cols`, got {line:?}");
        };
        Ok(Self {
            rows: rows
                .parse()
                .with_context(|| format!("Malformed header line 1: bad row count {rows:?}"))?,
            cols: cols
                .parse()
                .with_context(|| format!("Malformed header line 1: bad column count {cols:?}"))?,
        })
    }
}

/// Result of an entropy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyStats {
    pub header: MatrixHeader,
    /// Data rows actually read (and written)
    pub rows: usize,
}

/// Parse one data row of probabilities.
pub fn parse_row(line: &str, lineno: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Malformed line {lineno}: bad probability {token:?}"))
        })
        .collect()
}

/// Write the entropy of every data row as `%f`-style text, one per line.
///
/// The header's row count is not enforced; a mismatch only logs a warning.
pub fn write_entropies<R: BufRead, W: Write>(input: R, mut output: W) -> Result<EntropyStats> {
    let mut lines = input.lines();
    let first = lines
        .next()
        .context("Probability file is empty: missing `rows cols` header")?
        .context("Failed to read header line")?;
    let header = MatrixHeader::parse(&first)?;
    info!(rows = header.rows, cols = header.cols, "Read matrix header");

    let mut rows = 0;
    for (idx, line) in lines.enumerate() {
        let lineno = idx + 2;
        let line = line.with_context(|| format!("Failed to read line {lineno}"))?;
        let probs = parse_row(&line, lineno)?;
        writeln!(output, "{:.6}", shannon_entropy(&probs))?;
        rows += 1;
    }
    output.flush()?;

    if rows != header.rows {
        warn!(declared = header.rows, actual = rows, "Row count differs from header");
    }
    Ok(EntropyStats { header, rows })
}
