//! Site-Audit main entry point
//!
//! This is the command-line interface for the Site-Audit website checker.

use anyhow::Context;
use clap::{Parser, Subcommand};
use site_audit::config::{load_config_with_hash, Config};
use site_audit::output::{format_json_report, format_markdown_report, write_markdown_report};
use site_audit::Checker;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Audit: a single-page website health checker
///
/// Fetches a page and scores it for SEO, performance and security, either
/// once from the command line or on demand through an HTTP server.
#[derive(Parser, Debug)]
#[command(name = "site-audit")]
#[command(version)]
#[command(about = "A single-page website health checker", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the check form and JSON API
    Serve {
        /// Address to listen on, overriding the config file
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Check one URL and print the report
    Check {
        /// The page to check; "https://" is assumed when no scheme is given
        #[arg(value_name = "URL")]
        url: String,

        /// Print the report as JSON instead of markdown
        #[arg(long)]
        json: bool,

        /// Also write the markdown report to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_ref())?;

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            site_audit::server::serve(&config)
                .await
                .context("Server failed")?;
        }
        Command::Check { url, json, output } => {
            handle_check(&config, &url, json, output).await?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_audit=info,tower_http=info,warn"),
            1 => EnvFilter::new("site_audit=debug,tower_http=debug,info"),
            2 => EnvFilter::new("site_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file if one was given, otherwise the defaults
fn load_configuration(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the `check` command: one check, report to stdout
async fn handle_check(
    config: &Config,
    url: &str,
    json: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let checker = Checker::new(config.fetcher.clone()).context("Failed to build HTTP client")?;
    let report = checker.check(url).await;

    if json {
        println!("{}", format_json_report(&report)?);
    } else {
        print!("{}", format_markdown_report(&report));
    }

    if let Some(path) = output {
        write_markdown_report(&report, &path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Report written to: {}", path.display());
    }

    Ok(())
}
