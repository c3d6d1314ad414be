//! Linked page generation

use super::types::{LinkedConfig, LinkedPageParams, RecordExtractor};
use crate::error::{Error, Result};
use crate::sink::PageSink;
use crate::types::{Component, PageDescriptor, KEY_NEXT, KEY_PREV, KEY_TOTAL};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Emit one page per record, linked to its neighbours.
///
/// The extractor runs over every record first, in order, so that every
/// page can link to any other record's path. Context precedence: the
/// extractor's context is taken as-is, then `total`, `prev` and `next` are
/// written over it. `prev`/`next` are left out entirely when the neighbour
/// does not exist. Returns the number of pages emitted.
pub fn build_linked_pages<R, E, S>(
    config: &LinkedConfig,
    records: &[R],
    component: &Component,
    extractor: &mut E,
    sink: &mut S,
) -> Result<usize>
where
    E: RecordExtractor<R> + ?Sized,
    S: PageSink + ?Sized,
{
    let params = records
        .iter()
        .map(|record| extractor.extract(record))
        .collect::<Result<Vec<LinkedPageParams>>>()?;

    let total = params.len();
    let paths: Vec<String> = params.iter().map(|p| p.path.clone()).collect();

    let mut seen = HashSet::with_capacity(total);
    for path in &paths {
        if !seen.insert(path.as_str()) {
            warn!(path = %path, "Multiple records share the same linked page path");
        }
    }

    for (index, param) in params.into_iter().enumerate() {
        let LinkedPageParams {
            path,
            context,
            layout,
        } = param;

        let mut context = context.unwrap_or_default();
        context.insert(KEY_TOTAL.to_string(), total.into());

        if let Some(prev) = config.prev_index(index, total) {
            context.insert(KEY_PREV.to_string(), paths[prev].clone().into());
        }
        if let Some(next) = config.next_index(index, total) {
            context.insert(KEY_NEXT.to_string(), paths[next].clone().into());
        }

        debug!(path = %path, index, total, "Creating linked page");

        sink.create_page(PageDescriptor {
            path,
            component: component.clone(),
            context,
            layout,
        })?;
    }

    debug!(total, circular = config.circular, component = %component, "Linked build complete");
    Ok(total)
}

// ============================================================================
// Request (entry point with argument checks)
// ============================================================================

/// Arguments for [`create_linked_pages`].
///
/// `sink`, `records`, `component` and `extractor` are required.
pub struct LinkedRequest<'a, R, E: ?Sized, S: ?Sized> {
    sink: Option<&'a mut S>,
    records: Option<&'a [R]>,
    component: Option<Component>,
    extractor: Option<&'a mut E>,
    circular: bool,
}

impl<R, E: ?Sized, S: ?Sized> Default for LinkedRequest<'_, R, E, S> {
    fn default() -> Self {
        Self {
            sink: None,
            records: None,
            component: None,
            extractor: None,
            circular: false,
        }
    }
}

impl<'a, R, E, S> LinkedRequest<'a, R, E, S>
where
    E: RecordExtractor<R> + ?Sized,
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

    /// Set the records to link
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

    /// Set the record extractor
    #[must_use]
    pub fn with_extractor(mut self, extractor: &'a mut E) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Link the first and last records to each other
    #[must_use]
    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Check arguments and emit all pages
    pub fn create(self) -> Result<usize> {
        let sink = self.sink.ok_or_else(|| Error::missing_argument("sink"))?;
        let records = self
            .records
            .ok_or_else(|| Error::missing_argument("records"))?;
        let component = self
            .component
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::missing_argument("component"))?;
        let extractor = self
            .extractor
            .ok_or_else(|| Error::missing_argument("extractor"))?;

        let config = LinkedConfig::new().with_circular(self.circular);
        build_linked_pages(&config, records, &component, extractor, sink)
    }
}

/// Create linked pages from a request
pub fn create_linked_pages<R, E, S>(request: LinkedRequest<'_, R, E, S>) -> Result<usize>
where
    E: RecordExtractor<R> + ?Sized,
    S: PageSink + ?Sized,
{
    request.create()
}
