// Static HTML tables for topic reports.
//
// Each topic becomes a pair of rows: labels on a `word` row and the matching
// probabilities on a `prob` row, both led by a `topic#N` cell. Values are
// inserted as-is, without escaping.

use std::io::BufRead;

use anyhow::Result;
use tracing::info;

use super::{parse_topics, Cell, ParseMode, Topic};

/// Closing markup appended after the body; the page's scripts log into `#log`.
pub const FOOTER: &str = "<div id='log'></div></html>";

/// Render a plain PLSA report (words only) as a single table.
pub fn render_single<R: BufRead>(header: &str, input: R) -> Result<String> {
    let topics = parse_topics(input, ParseMode::Single)?;
    info!(topics = topics.len(), "Parsed PLSA topics");

    let mut body = String::from("<body>\n<h2>Topic-Word</h2>\n");
    body.push_str(&table("topics", topics.iter().map(|t| (t.id, words_of(t)))));
    body.push_str("</body>\n");

    Ok(document(header, &body))
}

/// Render an ExPLSA report as a topic-word table and a topic-celebrity table.
pub fn render_dual<R: BufRead>(header: &str, input: R) -> Result<String> {
    let topics = parse_topics(input, ParseMode::Dual)?;
    info!(topics = topics.len(), "Parsed ExPLSA topics");

    let word_rows = topics
        .iter()
        .filter_map(|t| t.words.as_deref().map(|cells| (t.id, cells)));
    let cel_rows = topics
        .iter()
        .filter_map(|t| t.celebrities.as_deref().map(|cells| (t.id, cells)));

    let mut body = String::from("<body>\n<h2>Topic-Word</h2>");
    body.push_str(&table("topic-word", word_rows));
    body.push_str("<h2>Topic-Celebrity</h2>");
    body.push_str(&table("topic-cel", cel_rows));
    body.push_str("</body>\n");

    Ok(document(header, &body))
}

fn words_of(topic: &Topic) -> &[Cell] {
    topic.words.as_deref().unwrap_or(&[])
}

fn document(header: &str, body: &str) -> String {
    format!("{header}\n{body}\n{FOOTER}")
}

fn table<'a>(id: &str, rows: impl Iterator<Item = (usize, &'a [Cell])>) -> String {
    let mut html = format!("<table id='{id}' border='1'>\n");
    for (topic_id, cells) in rows {
        html.push_str(&row_pair(topic_id, cells));
    }
    html.push_str("</table>\n");
    html
}

/// The `word` and `prob` rows for one topic.
pub fn row_pair(topic_id: usize, cells: &[Cell]) -> String {
    let mut labels = format!("<tr class='word'><td>topic#{topic_id}</td>");
    let mut values = format!("<tr class='prob'><td>topic#{topic_id}</td>");
    for cell in cells {
        labels.push_str(&format!("<td>{}</td>", cell.label));
        values.push_str(&format!("<td>{}</td>", cell.value));
    }
    labels.push_str("</tr>\n");
    values.push_str("</tr>\n");
    labels + &values
}
