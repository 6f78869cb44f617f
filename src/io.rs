// Buffered file open/create with the path attached to every error.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

/// Open an input file for buffered line reading.
pub fn open_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Create (or truncate) an output file for buffered writing.
pub fn create_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Read a whole file into memory, e.g. an HTML header fragment.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write a complete document in one go.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Read the next raw line, terminator included, into `buf`.
///
/// Works on bytes so input that is not valid UTF-8 can still be copied or
/// filtered. Returns `false` at end of input.
pub fn read_raw_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    Ok(input.read_until(b'\n', buf)? > 0)
}

/// Strip a trailing `\n` or `\r\n` from a raw line.
pub fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
