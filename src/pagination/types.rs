//! Pagination configuration

use crate::error::{Error, Result};
use crate::path::{default_path_policy, with_prefix, PathPolicy, SharedPathPolicy};
use std::fmt;
use std::sync::Arc;

/// Records per page when no limit is configured
pub const DEFAULT_LIMIT: usize = 10;

/// Configuration for a pagination build
///
/// Immutable once handed to a build; clone it to derive variants.
#[derive(Clone)]
pub struct PaginationConfig {
    /// Number of records per page
    pub limit: usize,
    /// Maps page numbers to paths
    pub path_policy: SharedPathPolicy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            path_policy: default_path_policy(),
        }
    }
}

impl fmt::Debug for PaginationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationConfig")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl PaginationConfig {
    /// Create the default configuration (10 per page, `/`, `/2`, ...)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set records per page
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the path policy
    #[must_use]
    pub fn with_path_policy(mut self, policy: impl PathPolicy + 'static) -> Self {
        self.path_policy = Arc::new(policy);
        self
    }

    /// Set an already shared path policy
    #[must_use]
    pub fn with_shared_path_policy(mut self, policy: SharedPathPolicy) -> Self {
        self.path_policy = policy;
        self
    }

    /// Use the default policy behind a prefix
    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        self.with_path_policy(with_prefix(prefix))
    }

    /// Check the configuration before any page is emitted
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::invalid_value(
                "limit",
                "must be a positive number of records per page",
            ));
        }
        Ok(())
    }

    /// Number of pages needed for `total` records
    pub fn page_count(&self, total: usize) -> usize {
        if self.limit == 0 {
            0
        } else {
            total.div_ceil(self.limit)
        }
    }
}
