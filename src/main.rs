//! Crawl-Checker main entry point
//!
//! This is the command-line interface for the Crawl-Checker crawlability assessor.

use anyhow::Context;
use clap::Parser;
use crawl_checker::batch::{parse_url_list, run_batch};
use crawl_checker::config::{load_config_with_hash, validate, Config, ReportFormat};
use crawl_checker::output::{print_statistics, write_report, BatchStatistics};
use crawl_checker::Analyzer;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Crawl-Checker: robots.txt driven crawlability assessment
///
/// Reads website URLs (one per line) from a file or stdin, checks each site's
/// robots.txt and sitemap, and writes a report scoring how each site can be
/// crawled.
#[derive(Parser, Debug)]
#[command(name = "crawl-checker")]
#[command(version)]
#[command(about = "Check how websites may be crawled", long_about = None)]
struct Cli {
    /// File with one URL per line; reads stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Maximum number of sites analyzed at once
    #[arg(long)]
    concurrency: Option<u32>,

    /// Agent tested against robots.txt rules
    #[arg(long, value_name = "AGENT")]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and list the URLs that would be checked
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match load_effective_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let input = read_input(cli.input.as_deref()).context("failed to read URL list")?;
    let urls = parse_url_list(&input);
    if urls.is_empty() {
        tracing::warn!("No URLs to check. Enter at least one website, one per line.");
        return Ok(());
    }

    if cli.dry_run {
        handle_dry_run(&config, &urls);
        return Ok(());
    }

    handle_check(config, urls, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so a report on stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_checker=info,warn"),
            1 => EnvFilter::new("crawl_checker=debug,info"),
            _ => EnvFilter::new("crawl_checker=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (or defaults) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("invalid config file {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.display().to_string());
    }
    if let Some(concurrency) = cli.concurrency {
        config.checker.concurrency = concurrency;
    }
    if let Some(agent) = &cli.user_agent {
        config.checker.robots_user_agent = agent.clone();
    }

    // Overrides can break what the file validated
    validate(&config).context("invalid command-line override")?;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Handles the --dry-run mode: shows the effective config and the URLs
fn handle_dry_run(config: &Config, urls: &[String]) {
    println!("=== Crawl-Checker Dry Run ===\n");

    println!("Checker Configuration:");
    println!("  Concurrency: {}", config.checker.concurrency);
    println!("  robots.txt timeout: {}s", config.checker.robots_timeout_secs);
    println!("  Sitemap timeout: {}s", config.checker.sitemap_timeout_secs);
    println!("  robots.txt agent: {}", config.checker.robots_user_agent);

    println!("\nUser Agent:");
    println!("  Header: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    println!(
        "  Path: {}",
        config.output.path.as_deref().unwrap_or("(stdout)")
    );

    println!("\nURLs ({}):", urls.len());
    for url in urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main check: analyzes every URL and writes the report
async fn handle_check(
    config: Config,
    urls: Vec<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    let analyzer = Analyzer::from_config(&config)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_signal = Arc::clone(&interrupted);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing sites in progress");
            interrupted_signal.store(true, Ordering::SeqCst);
        }
    });

    let concurrency = config.checker.concurrency as usize;
    let report = run_batch(&analyzer, urls, concurrency, interrupted).await;

    let path = config.output.path.as_deref().map(Path::new);
    if let Err(e) = write_report(&report, config.output.format, path) {
        tracing::error!("Failed to write report: {}", e);
        return Err(e.into());
    }

    if !quiet {
        print_statistics(&BatchStatistics::from_report(&report));
    }

    Ok(())
}
