//! YAML parser for build plans and record file loading
//!
//! Parses and validates build plans, and reads record files in JSON,
//! JSON Lines or YAML form.

use crate::error::{Error, Result};
use crate::loader::types::{BuildPlan, JobDefinition};
use crate::types::JsonValue;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a build plan from a YAML file
pub fn load_plan(path: impl AsRef<Path>) -> Result<BuildPlan> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read plan file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_plan_from_str(&content)
}

/// Load a build plan from a YAML string
pub fn load_plan_from_str(yaml: &str) -> Result<BuildPlan> {
    let plan: BuildPlan = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse plan YAML: {e}")))?;

    validate_plan(&plan)?;
    Ok(plan)
}

/// Validate a build plan
fn validate_plan(plan: &BuildPlan) -> Result<()> {
    if plan.jobs.is_empty() {
        return Err(Error::config("Plan must have at least one job"));
    }

    let job_names: HashSet<_> = plan.jobs.iter().map(|j| &j.name).collect();
    if job_names.len() != plan.jobs.len() {
        return Err(Error::config("Duplicate job names found"));
    }

    for job in &plan.jobs {
        validate_job(job)?;
    }

    Ok(())
}

/// Validate a job definition
fn validate_job(job: &JobDefinition) -> Result<()> {
    if job.name.is_empty() {
        return Err(Error::config("Job name cannot be empty"));
    }

    if job.component.is_empty() {
        return Err(Error::config(format!(
            "Job '{}' component cannot be empty",
            job.name
        )));
    }

    if job.records.as_os_str().is_empty() {
        return Err(Error::config(format!(
            "Job '{}' records path cannot be empty",
            job.name
        )));
    }

    // Surface bad limits and templates at load time rather than mid-build
    job.kind.setup(&JsonValue::Null).map_err(|e| {
        Error::config(format!(
            "Job '{}' has invalid {} settings: {e}",
            job.name,
            job.kind_name()
        ))
    })?;

    Ok(())
}

// ============================================================================
// Records
// ============================================================================

/// On-disk format of a records file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// A JSON array
    Json,
    /// One JSON value per line
    JsonLines,
    /// A YAML sequence
    Yaml,
}

impl RecordFormat {
    /// Detect the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl" | "ndjson") => Self::JsonLines,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Load records from a file, detecting its format from the extension
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<JsonValue>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::records(path.display().to_string(), e.to_string())
        }
    })?;

    parse_records(&content, RecordFormat::from_path(path))
        .map_err(|e| Error::records(path.display().to_string(), e.to_string()))
}

/// Parse records from a string
pub fn parse_records(content: &str, format: RecordFormat) -> Result<Vec<JsonValue>> {
    match format {
        RecordFormat::Json => match serde_json::from_str::<JsonValue>(content)? {
            JsonValue::Array(records) => Ok(records),
            other => Err(Error::config(format!(
                "expected a JSON array of records, found {}",
                json_kind(&other)
            ))),
        },
        RecordFormat::JsonLines => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| serde_json::from_str(line).map_err(Error::from))
            .collect(),
        RecordFormat::Yaml => match serde_yaml::from_str::<JsonValue>(content)? {
            JsonValue::Array(records) => Ok(records),
            JsonValue::Null => Ok(Vec::new()),
            other => Err(Error::config(format!(
                "expected a YAML sequence of records, found {}",
                json_kind(&other)
            ))),
        },
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
