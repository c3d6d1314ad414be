//! Paginated page generation

use super::types::PaginationConfig;
use crate::error::{Error, Result};
use crate::path::{PathPolicy, SharedPathPolicy};
use crate::sink::PageSink;
use crate::types::{
    Component, JsonObject, PageDescriptor, KEY_LIMIT, KEY_NEXT, KEY_NODES, KEY_PAGE, KEY_PAGES,
    KEY_PREV, KEY_TOTAL,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Emit one page per chunk of `config.limit` records.
///
/// Chunks are contiguous and keep record order; the last one may be short.
/// Pages reach the sink in ascending order. An empty record slice emits
/// nothing. Returns the number of pages emitted.
///
/// A sink error stops the build; pages already emitted stay emitted.
pub fn build_pagination_pages<R, S>(
    config: &PaginationConfig,
    records: &[R],
    component: &Component,
    sink: &mut S,
) -> Result<usize>
where
    R: Serialize,
    S: PageSink + ?Sized,
{
    config.validate()?;

    let total = records.len();
    let limit = config.limit;
    let pages = config.page_count(total);
    let policy = &config.path_policy;

    for (index, chunk) in records.chunks(limit).enumerate() {
        let page_number = index + 1;

        let mut context = JsonObject::new();
        context.insert(KEY_NODES.to_string(), serde_json::to_value(chunk)?);
        context.insert(KEY_PAGE.to_string(), page_number.into());
        context.insert(KEY_PAGES.to_string(), pages.into());
        context.insert(KEY_TOTAL.to_string(), total.into());
        context.insert(KEY_LIMIT.to_string(), limit.into());

        if page_number > 1 {
            context.insert(KEY_PREV.to_string(), policy.format(page_number - 1).into());
        }
        if page_number < pages {
            context.insert(KEY_NEXT.to_string(), policy.format(page_number + 1).into());
        }

        let path = policy.format(page_number);
        debug!(path = %path, page = page_number, pages, "Creating paginated page");

        sink.create_page(PageDescriptor {
            path,
            component: component.clone(),
            context,
            layout: None,
        })?;
    }

    debug!(total, limit, pages, component = %component, "Pagination build complete");
    Ok(pages)
}

// ============================================================================
// Request (entry point with argument checks)
// ============================================================================

/// Arguments for [`create_pagination_pages`].
///
/// `sink`, `records` and `component` are required; `limit` and
/// `path_policy` fall back to [`PaginationConfig`] defaults.
pub struct PaginationRequest<'a, R, S: ?Sized> {
    sink: Option<&'a mut S>,
    records: Option<&'a [R]>,
    component: Option<Component>,
    limit: Option<usize>,
    path_policy: Option<SharedPathPolicy>,
}

impl<R, S: ?Sized> Default for PaginationRequest<'_, R, S> {
    fn default() -> Self {
        Self {
            sink: None,
            records: None,
            component: None,
            limit: None,
            path_policy: None,
        }
    }
}

impl<'a, R, S> PaginationRequest<'a, R, S>
where
    R: Serialize,
    S: PageSink + ?Sized,
{
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page sink
    #[must_use]
    pub fn with_sink(mut self, sink: &'a mut S) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the records to paginate
    #[must_use]
    pub fn with_records(mut self, records: &'a [R]) -> Self {
        self.records = Some(records);
        self
    }

    /// Set the component every page is rendered with
    #[must_use]
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set records per page
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the path policy
    #[must_use]
    pub fn with_path_policy(mut self, policy: impl PathPolicy + 'static) -> Self {
        self.path_policy = Some(Arc::new(policy));
        self
    }

    /// Check arguments, build the configuration and emit all pages
    pub fn create(self) -> Result<usize> {
        let sink = self.sink.ok_or_else(|| Error::missing_argument("sink"))?;
        let records = self
            .records
            .ok_or_else(|| Error::missing_argument("records"))?;
        let component = self
            .component
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::missing_argument("component"))?;

        let mut config = PaginationConfig::new();
        if let Some(limit) = self.limit {
            config = config.with_limit(limit);
        }
        if let Some(policy) = self.path_policy {
            config = config.with_shared_path_policy(policy);
        }

        build_pagination_pages(&config, records, &component, sink)
    }
}

/// Create paginated pages from a request
pub fn create_pagination_pages<R, S>(request: PaginationRequest<'_, R, S>) -> Result<usize>
where
    R: Serialize,
    S: PageSink + ?Sized,
{
    request.create()
}
