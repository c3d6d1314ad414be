//! Path policy implementations

use super::types::{default_path_policy, PathPolicy, SharedPathPolicy};
use crate::error::{Error, Result};
use crate::template::{extract_variables, render, TemplateContext};
use std::fmt;

// ============================================================================
// Default Policy
// ============================================================================

/// Built-in policy: page 1 is the unnumbered index page.
///
/// - `1` -> `/`
/// - `N` -> `/N`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPathPolicy;

impl PathPolicy for DefaultPathPolicy {
    fn format(&self, page_number: usize) -> String {
        if page_number == 1 {
            "/".to_string()
        } else {
            format!("/{page_number}")
        }
    }
}

// ============================================================================
// Prefix Policy
// ============================================================================

/// Prepends a fixed prefix to another policy's output.
///
/// Prefix and base output are concatenated verbatim, so `/blog` over the
/// default policy yields `/blog/` and `/blog/2`.
#[derive(Clone)]
pub struct PrefixPathPolicy {
    prefix: String,
    base: SharedPathPolicy,
}

impl PrefixPathPolicy {
    /// Prefix the default policy
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_base(prefix, default_path_policy())
    }

    /// Prefix an arbitrary policy
    pub fn with_base(prefix: impl Into<String>, base: SharedPathPolicy) -> Self {
        Self {
            prefix: prefix.into(),
            base,
        }
    }

    /// The configured prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Debug for PrefixPathPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixPathPolicy")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl PathPolicy for PrefixPathPolicy {
    fn format(&self, page_number: usize) -> String {
        format!("{}{}", self.prefix, self.base.format(page_number))
    }
}

/// Prefix the default policy
pub fn with_prefix(prefix: impl Into<String>) -> PrefixPathPolicy {
    PrefixPathPolicy::new(prefix)
}

// ============================================================================
// Template Policy
// ============================================================================

/// Renders paths from a template such as `/archive/page/{{ page }}`.
#[derive(Debug, Clone)]
pub struct TemplatePathPolicy {
    template: String,
    first_page: Option<String>,
}

impl TemplatePathPolicy {
    /// Create a template policy.
    ///
    /// The template must reference `{{ page }}` and nothing else.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let variables = extract_variables(&template);

        if variables.is_empty() {
            return Err(Error::template(format!(
                "path template '{template}' must contain {{{{ page }}}}"
            )));
        }
        if let Some(other) = variables.iter().find(|v| v.as_str() != "page") {
            return Err(Error::template(format!(
                "path template '{template}' may only use {{{{ page }}}}, found '{other}'"
            )));
        }

        Ok(Self {
            template,
            first_page: None,
        })
    }

    /// Publish page 1 at a fixed path instead of the rendered template
    #[must_use]
    pub fn with_first_page(mut self, path: impl Into<String>) -> Self {
        self.first_page = Some(path.into());
        self
    }
}

impl PathPolicy for TemplatePathPolicy {
    fn format(&self, page_number: usize) -> String {
        if page_number == 1 {
            if let Some(first) = &self.first_page {
                return first.clone();
            }
        }
        let ctx = TemplateContext::with_page(page_number);
        // Variables were checked in `new`, so rendering cannot hit an undefined one
        render(&self.template, &ctx).unwrap_or_else(|_| self.template.clone())
    }
}
