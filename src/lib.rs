// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]

//! # Site Pager
//!
//! Page generation for static-site build pipelines.
//!
//! ## Features
//!
//! - **Pagination**: Split an ordered record list into numbered listing
//!   pages with `prev`/`next` links and summary counters
//! - **Linked Pages**: One page per record, linked to its neighbours,
//!   optionally wrapping around
//! - **Path Policies**: `/`, `/2`, ... by default, with prefixes, templates
//!   or any closure
//! - **Build Plans**: YAML plans run many jobs over JSON, JSON Lines or YAML
//!   record files
//!
//! ## Quick Start
//!
//! ```rust
//! use site_pager::{build_pagination_pages, CollectingSink, Component, PaginationConfig};
//!
//! let records: Vec<u32> = (1..=25).collect();
//! let config = PaginationConfig::new().with_limit(10).with_prefix("/blog");
//! let mut sink = CollectingSink::new();
//!
//! let pages = build_pagination_pages(&config, &records, &Component::new("list"), &mut sink)?;
//! assert_eq!(pages, 3);
//! assert_eq!(sink.pages()[1].path, "/blog/2");
//! # Ok::<(), site_pager::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │            CLI (paginate / linked / run / validate)        │
//! └────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─┬──────────────┬─────────────┐
//! │    Loader    │     Engine     │  Pagination  │   Linked    │
//! ├──────────────┼────────────────┼──────────────┼─────────────┤
//! │ Build plans  │ Job dispatch   │ Chunking     │ Extractors  │
//! │ Record files │ Stats          │ Path policy  │ Circular    │
//! └──────────────┴────────────────┴──────────────┴─────────────┘
//!                               │
//!                     PageSink (per page)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Template interpolation
pub mod template;

/// Path policies
pub mod path;

/// Page sinks
pub mod sink;

/// Fixed-size listing pages
pub mod pagination;

/// Linked per-record pages
pub mod linked;

/// YAML loader for build plans and record files
pub mod loader;

/// Build plan execution
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use linked::{
    build_linked_pages, create_linked_pages, LinkedConfig, LinkedPageParams, LinkedRequest,
    RecordExtractor, TemplateExtractor,
};
pub use loader::{load_plan, load_plan_from_str, load_records, BuildPlan};
pub use pagination::{
    build_pagination_pages, create_pagination_pages, PaginationConfig, PaginationRequest,
};
pub use path::{with_prefix, DefaultPathPolicy, PathPolicy, PrefixPathPolicy, TemplatePathPolicy};
pub use sink::{CollectingSink, JsonLinesSink, PageSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
