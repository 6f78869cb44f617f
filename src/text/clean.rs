// Document cleaning for the trainer corpus.
//
// Input is one document per line (e.g. concatenated tweets of one user). The
// output keeps only plain lowercase words, so the vocabulary the trainer
// builds is not polluted by mentions, URLs, numbers and punctuation.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::io::{read_raw_line, trim_line_end};

/// Words excluded from the cleaned corpus.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load every whitespace-separated token of a stopword file.
    pub fn load<R: BufRead>(mut input: R) -> Result<Self> {
        let mut words = HashSet::new();
        let mut raw = Vec::new();
        while read_raw_line(&mut input, &mut raw).context("Failed to read stopword file")? {
            let line = String::from_utf8_lossy(&raw);
            words.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(Self { words })
    }

    /// Merge in the English list shipped with the `stop-words` crate.
    pub fn extend_builtin_english(&mut self) {
        let builtin: Vec<String> = get(LANGUAGE::English);
        self.words.extend(builtin);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Normalize one already-lowercased token, or reject it.
///
/// Checks run on bytes: every byte except the last must be `a-z`, so any
/// token holding non-ASCII text is dropped. A non-letter last byte is
/// stripped, and what remains must be at least two bytes long.
pub fn clean_token<T: AsRef<[u8]> + ?Sized>(token: &T) -> Option<&str> {
    let bytes = token.as_ref();
    let (&last, head) = bytes.split_last()?;
    if !head.iter().all(u8::is_ascii_lowercase) {
        return None;
    }
    let word = if last.is_ascii_lowercase() { bytes } else { head };
    if word.len() <= 1 {
        return None;
    }
    // All bytes are a-z at this point
    std::str::from_utf8(word).ok()
}

/// Clean one document line. Returns the surviving tokens in order.
///
/// Only ASCII letters are lowercased; the line need not be valid UTF-8.
pub fn clean_line<T: AsRef<[u8]> + ?Sized>(line: &T, stopwords: &StopwordSet) -> Vec<String> {
    let lower = line.as_ref().to_ascii_lowercase();
    lower
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .filter_map(clean_token)
        .filter(|word| !stopwords.contains(word))
        .map(str::to_string)
        .collect()
}

/// Output path for a cleaned corpus: the input path with `.<suffix>` appended.
pub fn cleaned_path(file: &Path, suffix: &str) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Totals reported after a cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Input lines read
    pub lines_read: usize,
    /// Non-empty cleaned lines written
    pub lines_written: usize,
    /// Tokens kept across all written lines
    pub tokens: usize,
}

/// Clean a whole corpus, one document per line.
///
/// Lines that end up with no tokens are left out of the output entirely.
/// Progress is logged every `log_interval` input lines and mirrored on `pb`
/// (pass `ProgressBar::hidden()` when no terminal display is wanted).
pub fn clean_documents<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    stopwords: &StopwordSet,
    log_interval: usize,
    pb: &ProgressBar,
) -> Result<CleanStats> {
    if log_interval == 0 {
        anyhow::bail!("Log interval must be a positive number of lines");
    }

    let mut stats = CleanStats::default();
    let mut raw = Vec::new();
    while read_raw_line(&mut input, &mut raw)
        .with_context(|| format!("Failed to read document line {}", stats.lines_read + 1))?
    {
        let i = stats.lines_read;
        if i % log_interval == 0 {
            info!(line = i, "Cleaning documents");
            pb.set_message(format!("line# {i}"));
        }
        pb.inc(1);
        stats.lines_read += 1;

        let tokens = clean_line(trim_line_end(&raw), stopwords);
        if tokens.is_empty() {
            continue;
        }
        writeln!(output, "{}", tokens.join(" "))?;
        stats.lines_written += 1;
        stats.tokens += tokens.len();
    }

    output.flush()?;
    info!(all_tokens = stats.tokens, "Finished cleaning");
    Ok(stats)
}
