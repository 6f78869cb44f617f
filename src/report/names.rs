// Celebrity name annotation for topic reports.
//
// The trainers only know celebrities by opaque account id. This joins an
// id -> screen name table into the celebrities sections of a report so the
// downstream HTML shows readable names.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use super::{classify, LineKind, Section};
use crate::io::read_raw_line;

/// Lookup table from celebrity id to display name.
#[derive(Debug, Clone, Default)]
pub struct IdNameMap {
    names: HashMap<String, String>,
}

impl IdNameMap {
    /// Build the map from `id name` lines. Blank lines are skipped, and a
    /// repeated id keeps the last name seen.
    pub fn load<R: BufRead>(mut input: R) -> Result<Self> {
        let mut names = HashMap::new();
        let mut raw = Vec::new();
        let mut lineno = 0;
        while read_raw_line(&mut input, &mut raw)
            .with_context(|| format!("Failed to read id-name line {}", lineno + 1))?
        {
            lineno += 1;
            let line = String::from_utf8_lossy(&raw);
            let mut tokens = line.split_whitespace();
            let Some(id) = tokens.next() else {
                continue;
            };
            let Some(name) = tokens.next() else {
                anyhow::bail!("Malformed id-name line {lineno}: expected `id name`, got {line:?}");
            };
            names.insert(id.to_string(), name.to_string());
        }
        info!(entries = names.len(), "Loaded id-name map");
        Ok(Self { names })
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for IdNameMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Counts reported after annotating a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateStats {
    pub lines: usize,
    pub annotated: usize,
}

/// Copy a topic report, prefixing each celebrity line with `name\t`.
///
/// Lines are copied as raw bytes with their original line endings, so input
/// that is not valid UTF-8 passes through untouched. Only data lines inside
/// a celebrities section are touched; everything else is written unchanged.
pub fn annotate_report<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    names: &IdNameMap,
) -> Result<AnnotateStats> {
    let mut stats = AnnotateStats::default();
    let mut active = false;
    let mut raw = Vec::new();

    while read_raw_line(&mut input, &mut raw)
        .with_context(|| format!("Failed to read report line {}", stats.lines + 1))?
    {
        stats.lines += 1;
        // Classification only needs the ASCII markers; the raw bytes are what gets written
        let line = String::from_utf8_lossy(&raw);

        match classify(&line) {
            LineKind::SectionMarker(Section::Celebrities) => active = true,
            LineKind::TopicHeader | LineKind::SectionMarker(Section::Words) => active = false,
            LineKind::Data if active => {
                // Data lines are never blank, so a first token exists
                let id = line.split_whitespace().next().unwrap_or_default();
                let Some(name) = names.get(id) else {
                    anyhow::bail!("No name for celebrity id {id:?} on report line {}", stats.lines);
                };
                write!(output, "{name}\t")?;
                stats.annotated += 1;
            }
            LineKind::Data | LineKind::Blank => {}
        }
        output.write_all(&raw)?;
    }

    output.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn alice() -> IdNameMap {
        [("7".to_string(), "Alice".to_string())].into_iter().collect()
    }

    #[test]
    fn test_load_skips_blank_and_keeps_last() {
        let map = IdNameMap::load(Cursor::new("7 Alice\n\n8 Bob\n7 Alicia\n")).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("7"), Some("Alicia"));
        assert_eq!(map.get("8"), Some("Bob"));
        assert_eq!(map.get("9"), None);
    }

    #[test]
    fn test_load_rejects_single_token_line() {
        let err = IdNameMap::load(Cursor::new("7 Alice\n8\n")).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_annotate_active_block() {
        let report = "Topic #0:\n  Top 1 celebrities:\n7 0.42\n";
        let mut out = Vec::new();
        let stats = annotate_report(Cursor::new(report), &mut out, &alice()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Topic #0:\n  Top 1 celebrities:\nAlice\t7 0.42\n"
        );
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.annotated, 1);
    }

    #[test]
    fn test_lines_outside_block_unchanged() {
        // No trailing newline and CRLF endings survive as-is
        let report = "Topic #0:\r\n  Top 1 words:\r\n9 0.1\r\nTopic #1:\r\n9 0.2";
        let mut out = Vec::new();
        annotate_report(Cursor::new(report), &mut out, &alice()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report);
    }

    #[test]
    fn test_invalid_utf8_outside_block_copied_verbatim() {
        let report: &[u8] = b"Topic #0:\n  Top 1 words:\n\tcaf\xe9\t0.1\n  Top 1 celebrities:\n7 0.4\n";
        let mut out = Vec::new();
        let stats = annotate_report(Cursor::new(report), &mut out, &alice()).unwrap();
        assert_eq!(stats.annotated, 1);
        assert_eq!(
            out,
            b"Topic #0:\n  Top 1 words:\n\tcaf\xe9\t0.1\n  Top 1 celebrities:\nAlice\t7 0.4\n"
        );
    }

    #[test]
    fn test_header_ends_block() {
        let report = "  Top 1 celebrities:\n7 0.4\nTopic #1:\n8 0.3\n";
        let mut out = Vec::new();
        annotate_report(Cursor::new(report), &mut out, &alice()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Top 1 celebrities:\nAlice\t7 0.4\nTopic #1:\n8 0.3\n"
        );
    }

    #[test]
    fn test_lookup_miss_fails() {
        let report = "  Top 1 celebrities:\n8 0.4\n";
        let err = annotate_report(Cursor::new(report), Vec::new(), &alice()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"8\"") && msg.contains("line 2"), "{msg}");
    }
}
