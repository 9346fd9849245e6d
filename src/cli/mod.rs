//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Payload input (hex arguments, stdin lines, raw files)
//! - Output formatting (tree, summary table, JSON)

mod args;
pub mod input;
mod output;

pub use args::Args;
pub use input::Payload;
pub use output::{field_value_to_json, render_item, write_field_table, OutputFormat, OutputFormatter};
