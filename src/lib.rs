// plsa-tools: report and preprocessing utilities for a PLSA/ExPLSA pipeline
//
// This is the library root. Each module holds the transform behind one or
// more of the binaries in src/bin; the binaries only parse flags, open files
// and print a summary.

pub mod config;
pub mod export;
pub mod io;
pub mod logging;
pub mod output;
pub mod report;
pub mod stats;
pub mod text;
