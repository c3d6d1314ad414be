//! CLI module
//!
//! Command-line interface for generating page descriptors.
//!
//! # Commands
//!
//! - `paginate` - Split a records file into listing pages
//! - `linked` - Create one linked page per record
//! - `run` - Run the jobs of a build plan
//! - `validate` - Check a build plan without building

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{parse_context, Runner};
