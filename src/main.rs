//! origin-map command line.
//!
//! ```text
//! origin-map [--config FILE] [--json] resolve <repo-uri>...
//! origin-map [--config FILE] [--json] canonicalize <remote-url>...
//! origin-map [--config FILE] [--json] rules
//! origin-map [--config FILE] [--json] watch      # repo URIs on stdin
//! ```
//!
//! Without `--config` the built-in defaults apply, extended by `ORIGIN_MAP`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use origin_map::config::{self, lint_rules, watcher, ConfigWatcher};
use origin_map::observability::{logging, metrics};
use origin_map::{canonicalize, OriginResolver};

#[derive(Parser)]
#[command(name = "origin-map")]
#[command(
    about = "Resolve repo URIs to origin URLs and canonicalize git remotes",
    long_about = None
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve repo URIs to origin URLs
    Resolve {
        #[arg(required = true)]
        repos: Vec<String>,
    },
    /// Derive repo URIs from git remote URLs
    Canonicalize {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Print the active rules, defaults included
    Rules,
    /// Resolve repo URIs read from stdin, reloading the config file on change
    Watch,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_default()?,
    };

    logging::init_logging(&config.observability);

    if config.observability.metrics_enabled {
        // Validated by the loader.
        let addr = config.observability.metrics_address.parse::<SocketAddr>()?;
        metrics::init_metrics(addr);
    }

    let resolver = Arc::new(OriginResolver::from_config(&config)?);
    for warning in lint_rules(&resolver.rules()) {
        tracing::warn!(%warning, "Suspicious origin map rule");
    }

    tracing::debug!(
        rules = resolver.rules().len(),
        defaults = config.defaults,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Resolve { repos } => {
            let mut missed = false;
            for repo in &repos {
                let origin = resolver.resolve(repo);
                missed |= origin.is_none();
                print_resolution(repo, origin.as_deref(), cli.json);
            }
            if missed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Canonicalize { urls } => {
            for url in &urls {
                let repo = canonicalize(url);
                if cli.json {
                    println!("{}", json!({ "remote": url, "repo": repo }));
                } else {
                    println!("{}", repo);
                }
            }
        }
        Commands::Rules => {
            let rules = resolver.rules();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&*rules)?);
            } else {
                for rule in rules.iter() {
                    println!("{}", rule);
                }
            }
        }
        Commands::Watch => watch(resolver, cli.config, cli.json).await?,
    }

    Ok(ExitCode::SUCCESS)
}

fn print_resolution(repo: &str, origin: Option<&str>, as_json: bool) {
    match (origin, as_json) {
        (_, true) => println!("{}", json!({ "repo": repo, "origin": origin })),
        (Some(origin), false) => println!("{}", origin),
        (None, false) => println!("{}: no mapping", repo),
    }
}

async fn watch(
    resolver: Arc<OriginResolver>,
    path: Option<PathBuf>,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Dropping the notify watcher stops reloads, so hold it for the loop.
    let _watcher = match path {
        Some(path) => {
            let (config_watcher, updates) = ConfigWatcher::new(&path);
            let handle = config_watcher.run()?;
            tokio::spawn(watcher::apply_updates(resolver.clone(), updates));
            Some(handle)
        }
        None => {
            tracing::info!("No config file given; origin map will not reload");
            None
        }
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let repo = line.trim();
                if repo.is_empty() {
                    continue;
                }
                let origin = resolver.resolve(repo);
                print_resolution(repo, origin.as_deref(), as_json);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping");
                break;
            }
        }
    }

    Ok(())
}
