//! Defense Drill admin server.
//!
//! # Usage
//!
//! ```bash
//! # Start the admin UI (default command)
//! defense-drill-admin
//!
//! # Check every backend list endpoint and print a report
//! defense-drill-admin check
//!
//! # Load variables from a specific file instead of `.env`
//! defense-drill-admin --env-file deploy/prod.env serve
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use defense_drill_admin::api::handlers::health::run_checks;
use defense_drill_admin::config::{self, Config, mask_connection_string};
use defense_drill_admin::server;
use defense_drill_admin::state::AppState;

/// Admin UI for the Defense Drill REST API.
#[derive(Parser)]
#[command(name = "defense-drill-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Environment file to load instead of `.env`
    #[arg(long, value_name = "PATH", global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve,

    /// Check that every backend list endpoint answers
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let config = config::load_from_env()?;
    init_tracing(&config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            config.print_summary();
            server::run(config).await
        }
        Commands::Check => handle_check(&config).await,
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Prints one line per backend check and fails if any check failed.
async fn handle_check(config: &Config) -> Result<()> {
    println!("{}", "Checking backend endpoints...".bright_blue());
    println!(
        "  REST API:     {}",
        mask_connection_string(&config.rest_api_url).bright_white()
    );
    println!(
        "  Security API: {}",
        mask_connection_string(&config.security_api_url).bright_white()
    );
    println!();

    let state = AppState::from_config(config)?;
    let checks = run_checks(&state).await;

    for (name, check) in checks.iter() {
        let message = check.message.as_deref().unwrap_or_default();
        if check.is_ok() {
            println!("  {} {:<16} {}", "OK".green().bold(), name, message);
        } else {
            println!("  {} {:<16} {}", "FAIL".red().bold(), name, message.red());
        }
    }
    println!();

    if checks.all_ok() {
        println!("{}", "All backends reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("One or more backend checks failed")
    }
}
