// Per-row statistics over model output and social-graph files.

pub mod entropy;
pub mod followee;
