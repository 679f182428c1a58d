//! CLI argument parsing for the roadmap dashboard.

mod args;

pub use args::{CliConfig, parse_args};
