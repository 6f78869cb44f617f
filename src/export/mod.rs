// Exports of the celebrity id-name table for spreadsheets and browsers.

pub mod csv;
pub mod links;
