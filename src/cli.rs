// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Commands:
// - resolve: print the raw Markdown URL for wiki page URLs (no network)
// - toc: fetch wiki pages and print their table of contents
// - file: print the table of contents of a local Markdown file
//
// Flags marked `env = ...` can also be set through environment variables,
// which is handy in CI.
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wiki_toc::fetch::DEFAULT_TIMEOUT_SECS;
use wiki_toc::page::DEFAULT_CONCURRENCY;

#[derive(Parser, Debug)]
#[command(
    name = "wiki-toc",
    version,
    about = "Generate a table of contents for GitHub Wiki pages",
    long_about = "wiki-toc converts GitHub Wiki page URLs into their raw Markdown source URLs \
                  and builds a nested table of contents from the page headings."
)]
pub struct Cli {
    /// Log debug output to stderr (otherwise RUST_LOG decides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the raw Markdown URL of each wiki page
    ///
    /// Example: wiki-toc resolve https://github.com/user/repo/wiki/Page
    Resolve {
        /// Wiki page URLs or paths (e.g., /user/repo/wiki/Page)
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Fetch wiki pages and print their table of contents
    ///
    /// Example: wiki-toc toc https://github.com/user/repo/wiki/ --body
    Toc {
        /// Wiki page URLs or paths
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,

        /// Also print the fetched Markdown under each ToC
        #[arg(long)]
        body: bool,

        /// Request timeout in seconds
        #[arg(long, env = "WIKI_TOC_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// How many pages to fetch at the same time
        #[arg(long, env = "WIKI_TOC_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },

    /// Print the table of contents of a local Markdown file
    ///
    /// Example: wiki-toc file testpage.md
    File {
        /// Path to a Markdown file
        path: PathBuf,

        /// Output the ToC lines as a JSON array
        #[arg(long)]
        json: bool,
    },
}
