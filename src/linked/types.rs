//! Linked page types and traits

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};

/// Configuration for a linked pages build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkedConfig {
    /// Link the first and last records to each other
    pub circular: bool,
}

impl LinkedConfig {
    /// Create the default (non-circular) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set circular linking
    #[must_use]
    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Index of the record before `index` in a sequence of `total`
    ///
    /// Circular sequences wrap, but only when there are at least two records.
    pub fn prev_index(&self, index: usize, total: usize) -> Option<usize> {
        if self.circular {
            (total > 1).then(|| if index == 0 { total - 1 } else { index - 1 })
        } else {
            index.checked_sub(1)
        }
    }

    /// Index of the record after `index` in a sequence of `total`
    pub fn next_index(&self, index: usize, total: usize) -> Option<usize> {
        if self.circular {
            (total > 1).then(|| (index + 1) % total)
        } else {
            (index + 1 < total).then_some(index + 1)
        }
    }
}

/// What a record extractor produces for one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedPageParams {
    /// Path of the record's page
    pub path: String,
    /// Caller context; navigation keys are written over it
    pub context: Option<JsonObject>,
    /// Layout hint, forwarded only when set
    pub layout: Option<String>,
}

impl LinkedPageParams {
    /// Create params with just a path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            context: None,
            layout: None,
        }
    }

    /// Set the whole caller context
    #[must_use]
    pub fn with_context(mut self, context: JsonObject) -> Self {
        self.context = Some(context);
        self
    }

    /// Add one caller context value
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.context
            .get_or_insert_with(JsonObject::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the layout hint
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }
}

/// Turns a record into the params of its page
///
/// Called exactly once per record, in record order, before any page is
/// emitted. Errors abort the build.
pub trait RecordExtractor<R: ?Sized> {
    /// Extract page params from one record
    fn extract(&mut self, record: &R) -> Result<LinkedPageParams>;
}

impl<R: ?Sized, F> RecordExtractor<R> for F
where
    F: FnMut(&R) -> Result<LinkedPageParams>,
{
    fn extract(&mut self, record: &R) -> Result<LinkedPageParams> {
        self(record)
    }
}
