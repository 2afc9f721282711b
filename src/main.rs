// src/main.rs
// =============================================================================
// This is the entry point of the wiki-toc CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, written to stderr)
// 3. Dispatch to the subcommand handler
// 4. Exit with proper code (0 = success, 1 = some page failed, 2 = error)
//
// A page that fails (bad URL, 404) is printed without a ToC and only affects
// the exit code. The process is never aborted because of one page.
// =============================================================================

mod cli;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use wiki_toc::fetch::RawContentFetcher;
use wiki_toc::page::{build_pages, resolve_query, PageReport};
use wiki_toc::toc::TocDocument;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// --verbose turns on debug output for this crate, otherwise RUST_LOG decides
// and the default is warnings only
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,wiki_toc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Resolve { urls } => Ok(handle_resolve(&urls)),
        Commands::Toc {
            urls,
            json,
            body,
            timeout,
            concurrency,
        } => handle_toc(urls, json, body, timeout, concurrency).await,
        Commands::File { path, json } => handle_file(&path, json).await,
    }
}

// Handles the 'resolve' subcommand: one raw URL per line, no network
fn handle_resolve(urls: &[String]) -> i32 {
    let mut failed = false;

    for url in urls {
        match resolve_query(url) {
            Ok(raw_url) => println!("{}", raw_url),
            Err(e) => {
                eprintln!("⚠️  {}", e);
                failed = true;
            }
        }
    }

    if failed {
        1
    } else {
        0
    }
}

// Handles the 'toc' subcommand
// Parameters:
//   urls: wiki page URLs as typed by the user
//   json: print a JSON array instead of text
//   body: include the fetched Markdown
//   timeout: per-request timeout in seconds
//   concurrency: pages fetched at the same time
async fn handle_toc(
    urls: Vec<String>,
    json: bool,
    body: bool,
    timeout: u64,
    concurrency: usize,
) -> Result<i32> {
    let fetcher = RawContentFetcher::new(Duration::from_secs(timeout))?;

    let reports = build_pages(&fetcher, urls, body, concurrency).await;

    print_reports(&reports, json)?;

    if reports.iter().all(PageReport::is_ok) {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Handles the 'file' subcommand: ToC of a Markdown file on disk
async fn handle_file(path: &Path, json: bool) -> Result<i32> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let toc = TocDocument::compile(&content);

    if json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
    } else {
        print!("{}", toc);
    }

    Ok(0)
}

// Prints the reports either as text or JSON
fn print_reports(reports: &[PageReport], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(reports)?;
        println!("{}", json_output);
    } else {
        for report in reports {
            print_report(report);
        }
    }
    Ok(())
}

fn print_report(report: &PageReport) {
    println!("🔍 {}", report.url);
    if let Some(raw_url) = &report.raw_url {
        println!("📄 {}", raw_url);
    }

    match (&report.toc, &report.error) {
        (Some(toc), _) => {
            println!();
            print!("{}", toc);
            if toc.is_empty() {
                println!("⚠️  No headings found");
            }
        }
        (None, Some(error)) => println!("❌ {}", error),
        (None, None) => {}
    }

    if let Some(body) = &report.body {
        println!();
        println!("{}", body);
    }

    println!();
}
