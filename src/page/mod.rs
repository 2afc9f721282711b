// src/page/mod.rs
// =============================================================================
// This module ties the pieces together for one or more wiki pages:
//
//   wiki URL -> raw URL -> fetched Markdown -> ToC
//
// A page that fails at any step is still reported, just without a ToC, so a
// bad URL in a batch never stops the others.
// =============================================================================

mod build;

pub use build::{build_page, build_pages, resolve_query, PageReport, DEFAULT_CONCURRENCY};
