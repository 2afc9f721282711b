// src/fetch/mod.rs
// =============================================================================
// This module downloads the raw Markdown of a wiki page.
//
// The rest of the crate never talks to reqwest directly. It asks a
// `ContentSource` for the text behind a URL, which lets the page pipeline be
// tested with an in-memory source instead of the network.
// =============================================================================

mod http;

pub use http::{ContentSource, RawContentFetcher, DEFAULT_TIMEOUT_SECS};
