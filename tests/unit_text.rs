// Unit tests for document cleaning.
//
// Tests token-level rules (interior punctuation, trailing punctuation,
// length filter) and corpus-level behavior (stopwords from a file, omitted
// empty lines, token totals).

use std::io::Cursor;

use indicatif::ProgressBar;
use plsa_tools::text::clean::{clean_documents, clean_line, clean_token, StopwordSet};

fn stopwords(text: &str) -> StopwordSet {
    StopwordSet::load(Cursor::new(text.to_string())).unwrap()
}

#[test]
fn quick_fox_example() {
    let stop = stopwords("the\n");
    assert_eq!(clean_line("The Quick fox.", &stop), vec!["quick", "fox"]);
}

#[test]
fn interior_apostrophe_drops_token() {
    assert_eq!(clean_token("it's"), None);
    assert_eq!(clean_token("don't"), None);
}

#[test]
fn trailing_punctuation_is_stripped_once() {
    assert_eq!(clean_token("done,"), Some("done"));
    assert_eq!(clean_token("done?!"), None);
}

#[test]
fn stopword_checked_after_stripping() {
    let stop = stopwords("and");
    assert!(clean_line("and, more", &stop) == vec!["more"]);
}

#[test]
fn uppercase_input_is_lowercased_before_validation() {
    let stop = StopwordSet::default();
    assert_eq!(clean_line("HELLO World!", &stop), vec!["hello", "world"]);
}

#[test]
fn hashtags_mentions_and_urls_are_dropped() {
    let stop = StopwordSet::default();
    let line = "#rust @ferris https://example.com rocks";
    assert_eq!(clean_line(line, &stop), vec!["rocks"]);
}

#[test]
fn corpus_totals_and_empty_lines() {
    let stop = stopwords("a an the\nof to\n");
    let docs = "A tale of two cities.\n:) :) :)\nTo the lighthouse\n";
    let mut out = Vec::new();
    let stats = clean_documents(
        Cursor::new(docs),
        &mut out,
        &stop,
        10_000,
        &ProgressBar::hidden(),
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "tale two cities\nlighthouse\n"
    );
    assert_eq!(stats.lines_read, 3);
    assert_eq!(stats.lines_written, 2);
    assert_eq!(stats.tokens, 4);
}

#[test]
fn non_ascii_tokens_are_dropped_not_truncated() {
    let stop = StopwordSet::default();
    assert_eq!(clean_line("caf\u{e9} na\u{ef}ve love\u{1f600} ok", &stop), vec!["ok"]);
}

#[test]
fn invalid_utf8_line_does_not_abort_corpus() {
    let stop = StopwordSet::default();
    let docs: &[u8] = b"good line here\n\xff\xfe\nnext line\n";
    let mut out = Vec::new();
    let stats = clean_documents(
        Cursor::new(docs),
        &mut out,
        &stop,
        10_000,
        &ProgressBar::hidden(),
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "good line here\nnext line\n"
    );
    assert_eq!(stats.lines_read, 3);
    assert_eq!(stats.lines_written, 2);
}
