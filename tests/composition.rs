// Composition tests — chaining the tools through files on disk.
//
// Mirrors the pipeline convention where one tool's default output file is
// the next tool's input: add names to an ExPLSA report, then render it.
// Files are written under the system temp directory.

use std::fs;
use std::path::PathBuf;

use plsa_tools::io::{create_writer, open_reader, read_to_string, write_string};
use plsa_tools::report::html::render_dual;
use plsa_tools::report::names::{annotate_report, IdNameMap};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plsa-tools-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn names_then_html_through_files() {
    let dir = scratch_dir("chain");
    let id_names = dir.join("cel_id_name.txt");
    let final_topics = dir.join("topics.dat.final");
    let topics = dir.join("topics.dat");
    let header = dir.join("header.html");
    let html_path = dir.join("tm.html");

    fs::write(&id_names, "1001 espn\n1002 nba\n").unwrap();
    fs::write(
        &final_topics,
        "Topic #0:\n  Top 1 words:\n\tgame\t0.04\n  Top 2 celebrities:\n\t1001\t0.3\n\t1002\t0.1\n",
    )
    .unwrap();
    fs::write(&header, "<html><head><title>tm</title></head>").unwrap();

    let names = IdNameMap::load(open_reader(&id_names).unwrap()).unwrap();
    annotate_report(
        open_reader(&final_topics).unwrap(),
        create_writer(&topics).unwrap(),
        &names,
    )
    .unwrap();

    let html = render_dual(
        &read_to_string(&header).unwrap(),
        open_reader(&topics).unwrap(),
    )
    .unwrap();
    write_string(&html_path, &html).unwrap();

    let written = fs::read_to_string(&html_path).unwrap();
    assert!(written.starts_with("<html><head><title>tm</title></head>\n<body>\n"));
    assert!(written.contains("<td>espn</td><td>nba</td>"));
    assert!(written.contains("<td>0.3</td><td>0.1</td>"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_input_reports_path() {
    let dir = scratch_dir("missing");
    let err = open_reader(&dir.join("nope.dat")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.dat"));
    fs::remove_dir_all(&dir).unwrap();
}
