// HTML table of profile links, one per celebrity.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// One table row linking `base_url + name`. Neither part is escaped.
pub fn link_row(index: usize, base_url: &str, name: &str) -> String {
    format!(
        "<tr><td>{index}</td><td><a href={base_url}{name} target=\"_blank\">{name}</a></td></tr>\n"
    )
}

/// Write the link table for an `id name` file. Returns the number of links.
///
/// The row index is the zero-based input line number; blank lines produce
/// no row but still advance the index.
pub fn write_link_table<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    base_url: &str,
) -> Result<usize> {
    let mut links = 0;
    output.write_all(b"<table border=\"1\">\n")?;
    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read id-name line {}", i + 1))?;
        let mut tokens = line.split_whitespace();
        if tokens.next().is_none() {
            continue;
        }
        let Some(name) = tokens.next() else {
            anyhow::bail!("Malformed id-name line {}: expected `id name`, got {line:?}", i + 1);
        };
        output.write_all(link_row(i, base_url, name).as_bytes())?;
        links += 1;
    }
    output.write_all(b"</table>\n")?;
    output.flush()?;
    Ok(links)
}
