//! Command-line driver and HTML rendering for the `llgram` analyzer.

pub mod cli;
pub mod render;
