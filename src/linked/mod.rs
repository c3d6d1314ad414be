//! Linked pages module
//!
//! One page per record, each linked to its neighbours in record order.
//!
//! # Overview
//!
//! A record extractor turns every record into a path, an optional context
//! and an optional layout hint. Each page's context then gains the record
//! `total` plus `prev`/`next` paths of the adjacent records. In circular
//! mode the first and last records link to each other.

mod builder;
mod extractor;
mod types;

pub use builder::{build_linked_pages, create_linked_pages, LinkedRequest};
pub use extractor::TemplateExtractor;
pub use types::{LinkedConfig, LinkedPageParams, RecordExtractor};
