//! Command-line interface

mod args;
mod batch;

pub use args::Args;
pub use batch::{write_matches, write_resolved};
