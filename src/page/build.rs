// src/page/build.rs
// =============================================================================
// Builds a ToC report for wiki pages.
//
// How it works:
// 1. Reject an empty URL (EmptyQuery)
// 2. Resolve the wiki URL to its raw Markdown URL (may fail: InvalidUrl)
// 3. Fetch the Markdown through a ContentSource (may fail: network, HTTP 404)
// 4. Compile the heading ToC
//
// Failures are recorded in PageReport::error and logged with `warn!`.
//
// Rust concepts:
// - Generics: build_page works with any ContentSource
// - Streams: build_pages runs several pages at once with .buffered(), which
//   keeps results in input order
// =============================================================================

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::error::TocError;
use crate::fetch::ContentSource;
use crate::toc::TocDocument;
use crate::wiki::resolve_wiki_raw_url;

/// How many pages are fetched at the same time by default.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Outcome of processing one wiki page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    /// The URL as given by the user
    pub url: String,
    /// Raw Markdown URL, present once resolution succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
    /// Rendered ToC lines, present once the fetch succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc: Option<TocDocument>,
    /// The fetched Markdown, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Why the page has no ToC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageReport {
    fn failed(url: &str, raw_url: Option<String>, error: String) -> Self {
        tracing::warn!(url, error = %error, "page skipped");
        Self {
            url: url.to_string(),
            raw_url,
            toc: None,
            body: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// Resolves a URL typed by the user, rejecting an empty one first
pub fn resolve_query(url: &str) -> Result<String, TocError> {
    if url.trim().is_empty() {
        return Err(TocError::EmptyQuery);
    }
    resolve_wiki_raw_url(url)
}

// Runs the whole pipeline for a single page
//
// Parameters:
//   source: where the raw Markdown comes from
//   url: wiki page URL or path, e.g. "https://github.com/user/repo/wiki/Page"
//   include_body: also keep the fetched Markdown in the report
pub async fn build_page<S: ContentSource>(source: &S, url: &str, include_body: bool) -> PageReport {
    let raw_url = match resolve_query(url) {
        Ok(raw_url) => raw_url,
        Err(e) => return PageReport::failed(url, None, e.to_string()),
    };
    tracing::debug!(url, raw_url = raw_url.as_str(), "resolved wiki page");

    match source.fetch(&raw_url).await {
        Ok(content) => {
            let toc = TocDocument::compile(&content);
            tracing::info!(url, headings = toc.lines().len(), "compiled ToC");
            PageReport {
                url: url.to_string(),
                raw_url: Some(raw_url),
                toc: Some(toc),
                body: include_body.then_some(content),
                error: None,
            }
        }
        Err(e) => PageReport::failed(url, Some(raw_url), format!("{:#}", e)),
    }
}

// Runs build_page for every URL, at most `concurrency` at a time
//
// Results come back in the same order as `urls`.
pub async fn build_pages<S: ContentSource + Sync>(
    source: &S,
    urls: Vec<String>,
    include_body: bool,
    concurrency: usize,
) -> Vec<PageReport> {
    stream::iter(urls)
        .map(|url| async move { build_page(source, &url, include_body).await })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `S: ContentSource`?
//    - A generic type parameter with a trait bound
//    - build_page accepts any type implementing ContentSource
//    - The real binary passes RawContentFetcher, tests pass an in-memory stub
//
// 2. buffered vs buffer_unordered?
//    - Both run up to N futures at once
//    - buffered() yields results in the original order
//    - buffer_unordered() yields them as they finish
//    - A ToC listing reads better in the order the user typed the URLs
//
// 3. What is bool::then_some?
//    - `cond.then_some(value)` is Some(value) if cond is true, else None
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    // Serves pages from memory; anything else is a 404
    struct StubSource {
        pages: HashMap<String, String>,
    }

    impl StubSource {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            }
        }
    }

    impl ContentSource for StubSource {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow!("Failed to fetch {}: HTTP 404 Not Found", url))
        }
    }

    #[tokio::test]
    async fn test_build_page_compiles_toc() {
        let source = StubSource::new(&[(
            "https://raw.github.com/wiki/user/repo/Home.md",
            "# Welcome\nintro\n## Install\n## Usage",
        )]);

        let report = build_page(&source, "https://github.com/user/repo/wiki/", false).await;

        assert!(report.is_ok());
        assert_eq!(
            report.raw_url.as_deref(),
            Some("https://raw.github.com/wiki/user/repo/Home.md")
        );
        assert_eq!(
            report.toc.unwrap().into_lines(),
            vec!["* Welcome", "  * Install", "  * Usage"]
        );
        assert_eq!(report.body, None);
    }

    #[tokio::test]
    async fn test_build_page_keeps_body_when_asked() {
        let source = StubSource::new(&[("https://raw.github.com/wiki/u/r/Page.md", "# Page")]);

        let report = build_page(&source, "/u/r/wiki/Page", true).await;

        assert_eq!(report.body.as_deref(), Some("# Page"));
    }

    #[tokio::test]
    async fn test_invalid_url_is_reported_without_toc() {
        let source = StubSource::new(&[]);

        let report = build_page(&source, "\u{1}\u{2}", false).await;

        assert!(!report.is_ok());
        assert_eq!(report.raw_url, None);
        assert_eq!(report.toc, None);
        assert!(report.error.unwrap().starts_with("invalid URL"));
    }

    #[tokio::test]
    async fn test_empty_url_is_an_empty_query() {
        let source = StubSource::new(&[]);

        let report = build_page(&source, "  ", false).await;

        assert_eq!(report.error.as_deref(), Some("empty url"));
    }

    #[test]
    fn test_resolve_query_rejects_blank_input() {
        assert_eq!(resolve_query(""), Err(TocError::EmptyQuery));
        assert_eq!(resolve_query(" \t"), Err(TocError::EmptyQuery));
        assert_eq!(
            resolve_query("/u/r/wiki/Page").as_deref(),
            Ok("https://raw.github.com/wiki/u/r/Page.md")
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_raw_url() {
        let source = StubSource::new(&[]);

        let report = build_page(&source, "/u/r/wiki/Missing", false).await;

        assert_eq!(
            report.raw_url.as_deref(),
            Some("https://raw.github.com/wiki/u/r/Missing.md")
        );
        assert_eq!(report.toc, None);
        assert!(report.error.unwrap().contains("HTTP 404"));
    }

    #[tokio::test]
    async fn test_build_pages_preserves_order_and_isolates_failures() {
        let source = StubSource::new(&[
            ("https://raw.github.com/wiki/u/r/A.md", "# A"),
            ("https://raw.github.com/wiki/u/r/B.md", "## B"),
        ]);
        let urls = vec![
            "/u/r/wiki/A".to_string(),
            "\u{7f}".to_string(),
            "/u/r/wiki/B".to_string(),
        ];

        let reports = build_pages(&source, urls, false, 2).await;

        let summary: Vec<_> = reports
            .iter()
            .map(|r| (r.url.as_str(), r.toc.as_ref().map(|t| t.lines().to_vec())))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("/u/r/wiki/A", Some(vec!["* A".to_string()])),
                ("\u{7f}", None),
                ("/u/r/wiki/B", Some(vec!["  * B".to_string()])),
            ]
        );
    }

    #[test]
    fn test_report_json_skips_missing_fields() {
        let report = PageReport {
            url: "/u/r/wiki".to_string(),
            raw_url: Some("https://raw.github.com/wiki/u/r/Home.md".to_string()),
            toc: Some(TocDocument::new(vec!["* Home".to_string()])),
            body: None,
            error: None,
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "url": "/u/r/wiki",
                "raw_url": "https://raw.github.com/wiki/u/r/Home.md",
                "toc": ["* Home"],
            })
        );
    }
}
