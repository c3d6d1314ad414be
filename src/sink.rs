//! Page sinks
//!
//! A sink is the page registry the builders hand every generated page to.
//! Any `FnMut(PageDescriptor) -> Result<()>` is a sink; [`CollectingSink`]
//! keeps pages in memory and [`JsonLinesSink`] streams them to a writer.

use crate::error::{Error, Result};
use crate::types::PageDescriptor;
use std::io::Write;

/// Accepts generated pages, one call per page, in build order.
///
/// Errors returned here abort the build and are passed to its caller.
pub trait PageSink {
    /// Register one page
    fn create_page(&mut self, page: PageDescriptor) -> Result<()>;
}

impl<F> PageSink for F
where
    F: FnMut(PageDescriptor) -> Result<()>,
{
    fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
        self(page)
    }
}

// ============================================================================
// Collecting Sink
// ============================================================================

/// Collects pages in memory
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pages: Vec<PageDescriptor>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages received so far
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// Number of pages received
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page was received
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Take ownership of the collected pages
    pub fn into_pages(self) -> Vec<PageDescriptor> {
        self.pages
    }
}

impl PageSink for CollectingSink {
    fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
        self.pages.push(page);
        Ok(())
    }
}

// ============================================================================
// JSON Lines Sink
// ============================================================================

/// Writes each page as JSON to a writer
///
/// Compact mode writes one object per line; pretty mode writes indented
/// objects separated by newlines.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    pretty: bool,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a compact JSON lines sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            written: 0,
        }
    }

    /// Write indented JSON instead of one object per line
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Number of pages written
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> PageSink for JsonLinesSink<W> {
    fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &page)
        } else {
            serde_json::to_writer(&mut self.writer, &page)
        };
        written
            .map_err(|e| e.to_string())
            .and_then(|()| self.writer.write_all(b"\n").map_err(|e| e.to_string()))
            .map_err(|message| Error::sink(page.path, message))?;
        self.written += 1;
        Ok(())
    }
}
