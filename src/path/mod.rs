//! Path policy module
//!
//! Supports: Default (`/`, `/2`, `/3`, ...), Prefix, Template
//!
//! # Overview
//!
//! A path policy maps a 1-based page number to the path a page is published
//! at. The default policy leaves the first page unnumbered. Policies compose:
//! the prefix policy decorates any other policy's output.

mod policies;
mod types;

pub use policies::{with_prefix, DefaultPathPolicy, PrefixPathPolicy, TemplatePathPolicy};
pub use types::{default_path_policy, PathPolicy, PathPolicyConfig, SharedPathPolicy};

#[cfg(test)]
mod tests;
