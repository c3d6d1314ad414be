//! Execution engine module
//!
//! Runs the jobs of a build plan against a page sink.
//!
//! # Overview
//!
//! The engine module provides:
//! - `BuildEngine` - Loads each job's records and dispatches to the
//!   pagination or linked builder
//! - `JobStats` / `BuildStats` - Counters returned from a run

mod types;

pub use types::{BuildStats, JobStats};

use crate::error::{Error, Result};
use crate::linked::build_linked_pages;
use crate::loader::{load_records, BuildPlan, JobDefinition, JobSetup};
use crate::pagination::build_pagination_pages;
use crate::sink::PageSink;
use crate::types::JsonValue;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Plan runner
#[derive(Debug, Clone, Default)]
pub struct BuildEngine {
    /// Directory record paths are resolved against
    base_dir: PathBuf,
    /// Only run these jobs (empty = all)
    only: Vec<String>,
    /// Statistics of the last run
    stats: BuildStats,
}

impl BuildEngine {
    /// Create an engine resolving record files against `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Create an engine for a plan file, resolving records next to it
    pub fn for_plan_file(plan_path: &Path) -> Self {
        let base_dir = plan_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(base_dir)
    }

    /// Restrict the run to the named jobs
    #[must_use]
    pub fn with_jobs<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.only = names.into_iter().map(Into::into).collect();
        self
    }

    /// Base directory for record paths
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Statistics of the last run
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Run the plan's jobs in order. The first failing job aborts the run.
    pub fn run<S: PageSink + ?Sized>(&mut self, plan: &BuildPlan, sink: &mut S) -> Result<BuildStats> {
        let start = Instant::now();

        if let Some(unknown) = self.only.iter().find(|name| plan.job(name).is_none()) {
            return Err(Error::config(format!(
                "Unknown job '{}'. Available jobs: {}",
                unknown,
                plan.job_names().join(", ")
            )));
        }

        self.stats = BuildStats::new();
        for job in &plan.jobs {
            if !self.only.is_empty() && !self.only.contains(&job.name) {
                continue;
            }
            let job_stats = self.run_job(job, &plan.vars, sink)?;
            self.stats.add_job(job_stats);
        }

        self.stats
            .set_duration(start.elapsed().as_millis().try_into().unwrap_or(u64::MAX));

        info!(
            jobs = self.stats.jobs_run(),
            records = self.stats.records,
            pages = self.stats.pages,
            duration_ms = self.stats.duration_ms,
            "Build complete"
        );

        Ok(self.stats.clone())
    }

    /// Run a single job
    pub fn run_job<S: PageSink + ?Sized>(
        &self,
        job: &JobDefinition,
        vars: &JsonValue,
        sink: &mut S,
    ) -> Result<JobStats> {
        let start = Instant::now();
        let mut stats = JobStats::new(&job.name, job.kind_name());

        let records_path = job.records_path(&self.base_dir);
        let records = load_records(&records_path)?;
        stats.records = records.len();

        info!(
            job = %job.name,
            kind = job.kind_name(),
            records = records.len(),
            path = %records_path.display(),
            "Running job"
        );

        let component = job.component();
        stats.pages = match job.kind.setup(vars)? {
            JobSetup::Pagination(config) => {
                build_pagination_pages(&config, &records, &component, sink)?
            }
            JobSetup::Linked(config, mut extractor) => {
                build_linked_pages(&config, &records, &component, &mut extractor, sink)?
            }
        };

        stats.duration_ms = start.elapsed().as_millis().try_into().unwrap_or(u64::MAX);

        info!(
            job = %job.name,
            pages = stats.pages,
            duration_ms = stats.duration_ms,
            "Job complete"
        );

        Ok(stats)
    }
}
