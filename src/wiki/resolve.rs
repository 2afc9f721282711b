// src/wiki/resolve.rs
// =============================================================================
// Resolves a wiki page URL to the URL of its raw Markdown source.
//
// Strategy:
// - Bare paths ("/user/repo/wiki/Page") are kept as typed, minus ?query/#fragment
// - Full http(s) URLs are parsed with the `url` crate and only the path is kept
// - Match the path against `(.*)wiki(/[^/]+)?/?$`
//     group 1 = everything before "wiki"        ("/user/repo/")
//     group 2 = the single page segment, if any  ("/PageName")
// - No page segment means the wiki front page, "Home"
// - Glue it onto https://raw.github.com/wiki and append ".md"
//
// Only ONE segment after "wiki" is captured. A nested path like
// "/wiki/folder/page" does not match, so the whole path is kept as the prefix
// and the page name falls back to "Home".
//
// Rust concepts:
// - LazyLock: compile the regex once, on first use
// - Result<T, E>: malformed input is an error value, never a panic
// - Captures: reading regex groups by index
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;
use url::{ParseError, Url};

use crate::error::TocError;

/// Host and path prefix that serves raw wiki sources.
pub const RAW_CONTENT_BASE: &str = "https://raw.github.com/wiki";

/// Page name used when the URL points at the wiki itself.
pub const HOME_PAGE: &str = "Home";

/// Extension of every raw wiki source.
pub const RAW_SUFFIX: &str = ".md";

static WIKI_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)wiki(/[^/]+)?/?$").expect("wiki path pattern is valid"));

/// The path part of a wiki page request.
///
/// Created per request from whatever the user handed us, used once to build
/// the raw URL, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLocator {
    raw_path: String,
}

impl WikiLocator {
    /// Parses a full URL, a scheme-less URL (`github.com/...`) or a bare path.
    ///
    /// Fails with [`TocError::InvalidUrl`] when the input contains control
    /// characters, uses a scheme other than http/https, or the URL parser
    /// rejects it.
    pub fn parse(input: &str) -> Result<Self, TocError> {
        if let Some(c) = input.chars().find(|c| c.is_ascii_control()) {
            return Err(TocError::invalid_url(
                input,
                format!("invalid control character {:?}", c),
            ));
        }

        if input.is_empty() || input.starts_with('/') {
            return Ok(Self::from_path(strip_query(input)));
        }

        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::from_path(url.path())),
            Ok(url) if !url.cannot_be_a_base() => Err(TocError::invalid_url(
                input,
                format!("unsupported scheme '{}'", url.scheme()),
            )),
            // "github.com:443/..." parses with "github.com" as the scheme
            Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => parse_without_scheme(input),
            Err(e) => Err(TocError::invalid_url(input, e)),
        }
    }

    /// Wraps an already extracted path without any validation.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            raw_path: path.into(),
        }
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    /// Builds the raw-content URL for this page.
    ///
    /// The path is `prefix + "/" + page`, where the `/` is only added when the
    /// prefix doesn't already end with one (`/user/repo` -> `/user/repo/Home`).
    /// The path always starts with `/`, so the result always starts with
    /// [`RAW_CONTENT_BASE`]`/` and ends with [`RAW_SUFFIX`].
    pub fn resolve(&self) -> String {
        let (prefix, page) = match WIKI_PATH.captures(&self.raw_path) {
            Some(caps) => {
                let prefix = caps.get(1).map_or("", |m| m.as_str());
                let page = caps
                    .get(2)
                    .map(|m| m.as_str().trim_start_matches('/'))
                    .filter(|name| !name.is_empty());
                (prefix, page)
            }
            // Pattern did not match: keep the whole path, fall back to Home
            None => (self.raw_path.as_str(), None),
        };

        let mut path = String::with_capacity(prefix.len() + 2 + HOME_PAGE.len());
        if !prefix.starts_with('/') {
            path.push('/');
        }
        path.push_str(prefix);
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(page.unwrap_or(HOME_PAGE));

        format!("{}{}{}", RAW_CONTENT_BASE, path, RAW_SUFFIX)
    }
}

// Resolves a wiki URL or path straight to its raw Markdown URL
//
// Example:
//   "https://github.com/user/repo/wiki/testpage"
//     -> "https://raw.github.com/wiki/user/repo/testpage.md"
pub fn resolve_wiki_raw_url(input: &str) -> Result<String, TocError> {
    WikiLocator::parse(input).map(|locator| locator.resolve())
}

// Cuts a bare path at its query or fragment, leaving everything else as typed
fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |end| &path[..end])
}

// "github.com/user/repo/wiki" and "localhost:8080/user/repo/wiki" have a host
// but no scheme. "user/repo/wiki" has neither, so it is read as a path. A dot
// or a port in the first segment tells them apart.
fn parse_without_scheme(input: &str) -> Result<WikiLocator, TocError> {
    let first_segment = input.split('/').next().unwrap_or_default();

    if first_segment.contains(['.', ':']) {
        let url = Url::parse(&format!("https://{}", input))
            .map_err(|e| TocError::invalid_url(input, e))?;
        Ok(WikiLocator::from_path(url.path()))
    } else {
        Ok(WikiLocator::from_path(format!("/{}", strip_query(input))))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A static that is initialised the first time it's used
//    - Regex::new is relatively expensive, so we compile the pattern once
//    - Every later call reuses the same compiled Regex, even across threads
//
// 2. Why return Result instead of panicking?
//    - A bad URL is normal user input, not a bug in our program
//    - The caller can print a warning and carry on with the next page
//
// 3. What does caps.get(2) return?
//    - Option<Match>: None when the optional group didn't take part
//    - "/user/repo/wiki" matches, but group 2 is None -> "Home"
//
// 4. Why String::with_capacity?
//    - Reserves memory up front so push_str doesn't need to reallocate
// -----------------------------------------------------------------------------
