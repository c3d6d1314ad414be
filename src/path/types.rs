//! Path policy types and traits
//!
//! Defines the core path policy abstraction and its serializable config.

use super::policies::{DefaultPathPolicy, PrefixPathPolicy, TemplatePathPolicy};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Core trait for path policies
///
/// Implementations must be pure and total over page numbers `>= 1`.
pub trait PathPolicy: Send + Sync {
    /// Path for the given 1-based page number
    fn format(&self, page_number: usize) -> String;
}

impl<F> PathPolicy for F
where
    F: Fn(usize) -> String + Send + Sync,
{
    fn format(&self, page_number: usize) -> String {
        self(page_number)
    }
}

/// A path policy that can be shared between configs and threads
pub type SharedPathPolicy = Arc<dyn PathPolicy>;

/// The built-in policy: `/` for page 1, `/N` afterwards
pub fn default_path_policy() -> SharedPathPolicy {
    Arc::new(DefaultPathPolicy)
}

/// Configuration for path policies (as written in build plans)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathPolicyConfig {
    /// `/`, `/2`, `/3`, ...
    #[default]
    Default,

    /// Default policy behind a verbatim prefix
    Prefix {
        /// Prepended as-is, no slash normalization
        prefix: String,
    },

    /// Path rendered from a `{{ page }}` template
    Template {
        /// Template containing a `page` variable
        template: String,
        /// Path used for page 1 instead of the rendered template
        #[serde(default)]
        first_page: Option<String>,
    },
}

impl PathPolicyConfig {
    /// Create prefix policy config
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix {
            prefix: prefix.into(),
        }
    }

    /// Create template policy config
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            first_page: None,
        }
    }

    /// Build the configured policy
    pub fn build(&self) -> Result<SharedPathPolicy> {
        match self {
            Self::Default => Ok(default_path_policy()),
            Self::Prefix { prefix } => Ok(Arc::new(PrefixPathPolicy::new(prefix.clone()))),
            Self::Template {
                template,
                first_page,
            } => {
                let mut policy = TemplatePathPolicy::new(template.clone())?;
                if let Some(first) = first_page {
                    policy = policy.with_first_page(first.clone());
                }
                Ok(Arc::new(policy))
            }
        }
    }
}
