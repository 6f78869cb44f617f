// Text preprocessing for the topic model's document corpus.

pub mod clean;
