//! Loader types
//!
//! Declarative build plan types for YAML parsing.

use crate::error::{Error, Result};
use crate::linked::{LinkedConfig, TemplateExtractor};
use crate::pagination::{PaginationConfig, DEFAULT_LIMIT};
use crate::path::PathPolicyConfig;
use crate::types::{Component, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Build Plan
// ============================================================================

/// Top-level build plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildPlan {
    /// Plan format version
    #[serde(default = "default_version")]
    pub version: String,
    /// Variables available to templates as `{{ vars.name }}`
    #[serde(default)]
    pub vars: JsonValue,
    /// Jobs, run in order
    pub jobs: Vec<JobDefinition>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl BuildPlan {
    /// Find a job by name
    pub fn job(&self, name: &str) -> Option<&JobDefinition> {
        self.jobs.iter().find(|j| j.name == name)
    }

    /// Job names in run order
    pub fn job_names(&self) -> Vec<&str> {
        self.jobs.iter().map(|j| j.name.as_str()).collect()
    }
}

// ============================================================================
// Job Definition
// ============================================================================

/// One page generation job
///
/// Deserialized through [`RawJob`] so misspelled or misplaced keys are
/// rejected instead of silently falling back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "RawJob")]
pub struct JobDefinition {
    /// Unique job name
    pub name: String,
    /// Records file, relative to the plan file
    pub records: PathBuf,
    /// Component every page of this job is rendered with
    pub component: String,
    /// Pagination or linked settings
    #[serde(flatten)]
    pub kind: JobKind,
}

impl JobDefinition {
    /// Component identifier for the job's pages
    pub fn component(&self) -> Component {
        Component::new(self.component.clone())
    }

    /// Records path resolved against the plan's directory
    pub fn records_path(&self, base_dir: &Path) -> PathBuf {
        if self.records.is_absolute() {
            self.records.clone()
        } else {
            base_dir.join(&self.records)
        }
    }

    /// Short label for logs
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            JobKind::Pagination { .. } => "pagination",
            JobKind::Linked { .. } => "linked",
        }
    }
}

/// A job as written in YAML, before its keys are checked against its kind
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawJob {
    name: String,
    records: PathBuf,
    component: String,
    kind: RawKind,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    path: Option<serde_yaml::Value>,
    #[serde(default)]
    context: Option<JsonObject>,
    #[serde(default)]
    layout_field: Option<String>,
    #[serde(default)]
    circular: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawKind {
    Pagination,
    Linked,
}

impl TryFrom<RawJob> for JobDefinition {
    type Error = Error;

    fn try_from(raw: RawJob) -> Result<Self> {
        let misplaced = |key: &str, kind: &str| {
            Error::config(format!(
                "Job '{}': `{key}` is not a {kind} setting",
                raw.name
            ))
        };

        let kind = match raw.kind {
            RawKind::Pagination => {
                if raw.context.is_some() {
                    return Err(misplaced("context", "pagination"));
                }
                if raw.layout_field.is_some() {
                    return Err(misplaced("layout_field", "pagination"));
                }
                if raw.circular.is_some() {
                    return Err(misplaced("circular", "pagination"));
                }
                let path = match raw.path {
                    Some(value) => serde_yaml::from_value(value)?,
                    None => PathPolicyConfig::default(),
                };
                JobKind::Pagination {
                    limit: raw.limit.unwrap_or(DEFAULT_LIMIT),
                    path,
                }
            }
            RawKind::Linked => {
                if raw.limit.is_some() {
                    return Err(misplaced("limit", "linked"));
                }
                let path = match raw.path {
                    Some(serde_yaml::Value::String(path)) => path,
                    Some(_) => {
                        return Err(Error::config(format!(
                            "Job '{}': linked `path` must be a template string",
                            raw.name
                        )))
                    }
                    None => {
                        return Err(Error::config(format!(
                            "Job '{}': linked jobs need a `path` template",
                            raw.name
                        )))
                    }
                };
                JobKind::Linked {
                    path,
                    context: raw.context.unwrap_or_default(),
                    layout_field: raw.layout_field,
                    circular: raw.circular.unwrap_or(false),
                }
            }
        };

        Ok(Self {
            name: raw.name,
            records: raw.records,
            component: raw.component,
            kind,
        })
    }
}

/// Job-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobKind {
    /// Fixed-size pages with sequential navigation
    Pagination {
        /// Records per page
        #[serde(default = "default_limit")]
        limit: usize,
        /// Path policy
        #[serde(default)]
        path: PathPolicyConfig,
    },

    /// One page per record, linked to its neighbours
    Linked {
        /// Path template, e.g. `/blog/{{ record.slug }}`
        path: String,
        /// Context templates
        #[serde(default)]
        context: JsonObject,
        /// Dotted record field holding the layout hint
        #[serde(default)]
        layout_field: Option<String>,
        /// Link first and last records
        #[serde(default)]
        circular: bool,
    },
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Builder inputs for one job, ready to run
#[derive(Debug, Clone)]
pub enum JobSetup {
    /// Pagination config
    Pagination(PaginationConfig),
    /// Linked config and the extractor for its records
    Linked(LinkedConfig, TemplateExtractor),
}

impl JobKind {
    /// Build the job's config, checking limits and templates
    pub fn setup(&self, vars: &JsonValue) -> Result<JobSetup> {
        match self {
            Self::Pagination { limit, path } => {
                let config = PaginationConfig::new()
                    .with_limit(*limit)
                    .with_shared_path_policy(path.build()?);
                config.validate()?;
                Ok(JobSetup::Pagination(config))
            }
            Self::Linked {
                path,
                context,
                layout_field,
                circular,
            } => {
                let mut extractor = TemplateExtractor::new(path.clone())?
                    .with_context(context.clone())
                    .with_vars(vars.clone());
                if let Some(field) = layout_field {
                    extractor = extractor.with_layout_field(field.clone());
                }
                Ok(JobSetup::Linked(
                    LinkedConfig::new().with_circular(*circular),
                    extractor,
                ))
            }
        }
    }
}
