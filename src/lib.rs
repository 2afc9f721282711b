// src/lib.rs
// =============================================================================
// wiki-toc: table of contents for GitHub Wiki pages.
//
// The two core operations are pure functions:
// - wiki::resolve_wiki_raw_url: wiki page URL -> raw Markdown URL
// - toc::compile_heading_toc: Markdown text -> rendered ToC lines
//
// fetch and page are the plumbing around them: download the Markdown and run
// the whole pipeline for a batch of URLs.
// =============================================================================

pub mod error;
pub mod fetch;
pub mod page;
pub mod toc;
pub mod wiki;

pub use error::TocError;
pub use toc::compile_heading_toc;
pub use wiki::resolve_wiki_raw_url;
