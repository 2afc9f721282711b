// src/wiki/mod.rs
// =============================================================================
// This module turns GitHub Wiki page URLs into raw Markdown URLs.
//
// A wiki page such as
//   https://github.com/user/repo/wiki/PageName
// is served as unrendered Markdown from
//   https://raw.github.com/wiki/user/repo/PageName.md
//
// The wiki front page (".../wiki" or ".../wiki/") maps to Home.md.
//
// Rust concepts:
// - Modules: resolve.rs holds the logic, this file re-exports it
// - Pure functions: no I/O, safe to call from any thread
// =============================================================================

mod resolve;

pub use resolve::{resolve_wiki_raw_url, WikiLocator, HOME_PAGE, RAW_CONTENT_BASE, RAW_SUFFIX};
