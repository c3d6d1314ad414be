//! Engine types

use serde::Serialize;

/// Statistics for one job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobStats {
    /// Job name
    pub name: String,
    /// `pagination` or `linked`
    pub kind: String,
    /// Records loaded
    pub records: usize,
    /// Pages emitted
    pub pages: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl JobStats {
    /// Create stats for a named job
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}

/// Statistics from a plan run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Per-job stats, in run order
    pub jobs: Vec<JobStats>,
    /// Total records loaded
    pub records: usize,
    /// Total pages emitted
    pub pages: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl BuildStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished job
    pub fn add_job(&mut self, job: JobStats) {
        self.records += job.records;
        self.pages += job.pages;
        self.jobs.push(job);
    }

    /// Number of jobs run
    pub fn jobs_run(&self) -> usize {
        self.jobs.len()
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
