// Topic report parsing — line classification and per-topic records.
//
// A topic report is the text the PLSA/ExPLSA trainers write: a `Topic #N:`
// header per topic, optionally followed by `Top K words:` and
// `Top K celebrities:` sections, each listing one `label prob` entry per line.

pub mod html;
pub mod names;

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::debug;

/// Prefix of the line that opens a new topic block.
pub const TOPIC_HEADER: &str = "Topic #";
/// Marker text of a top-words section line.
pub const WORDS_MARKER: &str = "words:";
/// Marker text of a top-celebrities section line.
pub const CELEBRITIES_MARKER: &str = "celebrities:";

/// Which sub-list of a topic block a data line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Words,
    Celebrities,
}

impl Section {
    /// Token position of the probability in a data line of this section.
    ///
    /// Celebrity lines carry `name id prob` once annotated with names,
    /// word lines carry `word prob`.
    pub fn value_index(self) -> usize {
        match self {
            Section::Words => 1,
            Section::Celebrities => 2,
        }
    }
}

/// Classification of a single report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    TopicHeader,
    SectionMarker(Section),
    Blank,
    Data,
}

/// Classify a report line. Header detection wins over marker detection.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(TOPIC_HEADER) {
        LineKind::TopicHeader
    } else if line.contains(WORDS_MARKER) {
        LineKind::SectionMarker(Section::Words)
    } else if line.contains(CELEBRITIES_MARKER) {
        LineKind::SectionMarker(Section::Celebrities)
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Data
    }
}

/// One table cell pair: the label and its probability, both kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub label: String,
    pub value: String,
}

/// Everything listed under one `Topic #` header.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// 1-based ordinal of the topic in the report
    pub id: usize,
    /// Top words, `None` if the block had no words section
    pub words: Option<Vec<Cell>>,
    /// Top celebrities, `None` if the block had no celebrities section
    pub celebrities: Option<Vec<Cell>>,
}

impl Topic {
    fn new(id: usize) -> Self {
        Self {
            id,
            words: None,
            celebrities: None,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<Cell> {
        let slot = match section {
            Section::Words => &mut self.words,
            Section::Celebrities => &mut self.celebrities,
        };
        slot.get_or_insert_with(Vec::new)
    }
}

/// How section markers are interpreted while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Plain PLSA output: every data line is a word entry, markers are ignored.
    Single,
    /// ExPLSA output: markers switch between the words and celebrities lists.
    Dual,
}

/// Parse a topic report into ordered per-topic records.
///
/// A record is opened by each topic header and closed by the next header or
/// by the end of input.
pub fn parse_topics<R: BufRead>(input: R, mode: ParseMode) -> Result<Vec<Topic>> {
    let mut topics: Vec<Topic> = Vec::new();
    let mut section: Option<Section> = None;

    for (idx, line) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("Failed to read report line {lineno}"))?;

        match classify(&line) {
            LineKind::TopicHeader => {
                let mut topic = Topic::new(topics.len() + 1);
                section = match mode {
                    ParseMode::Single => {
                        topic.section_mut(Section::Words);
                        Some(Section::Words)
                    }
                    ParseMode::Dual => None,
                };
                topics.push(topic);
            }
            LineKind::SectionMarker(marker) => {
                if mode == ParseMode::Dual {
                    let Some(topic) = topics.last_mut() else {
                        anyhow::bail!("Section marker on line {lineno} appears before any topic header");
                    };
                    topic.section_mut(marker);
                    section = Some(marker);
                }
            }
            LineKind::Blank => {}
            LineKind::Data => {
                let Some(topic) = topics.last_mut() else {
                    anyhow::bail!("Data line {lineno} appears before any topic header");
                };
                let Some(current) = section else {
                    debug!(line = lineno, topic = topic.id, "Skipping data line outside a section");
                    continue;
                };
                let cell = parse_cell(&line, current, lineno)?;
                topic.section_mut(current).push(cell);
            }
        }
    }

    Ok(topics)
}

fn parse_cell(line: &str, section: Section, lineno: usize) -> Result<Cell> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let value_index = section.value_index();
    if tokens.len() <= value_index {
        anyhow::bail!(
            "Malformed line {lineno}: expected at least {} tokens, found {} in {line:?}",
            value_index + 1,
            tokens.len()
        );
    }
    Ok(Cell {
        label: tokens[0].to_string(),
        value: tokens[value_index].to_string(),
    })
}
