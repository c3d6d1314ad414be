//! Pagination module
//!
//! Splits an ordered record set into fixed-size pages with sequential
//! navigation.
//!
//! # Overview
//!
//! Every chunk of `limit` records becomes one page. Each page's context
//! carries the chunk (`nodes`), its 1-based `page` number, the number of
//! `pages`, the record `total`, the `limit`, and `prev`/`next` paths when
//! the neighbouring page exists.

mod builder;
mod types;

pub use builder::{build_pagination_pages, create_pagination_pages, PaginationRequest};
pub use types::{PaginationConfig, DEFAULT_LIMIT};
