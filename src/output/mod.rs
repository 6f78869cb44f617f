// Output formatting — the end-of-run summary each tool prints.

pub mod terminal;
