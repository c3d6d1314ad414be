//! YAML Loader module
//!
//! Parse build plans from YAML files and load record files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `BuildPlan` - Declarative list of page generation jobs
//! - `JobDefinition` - One pagination or linked pages job
//! - Record loading from JSON, JSON Lines and YAML files

mod parser;
mod types;

pub use parser::{load_plan, load_plan_from_str, load_records, parse_records, RecordFormat};
pub use types::{BuildPlan, JobDefinition, JobKind, JobSetup};

#[cfg(test)]
mod tests;
