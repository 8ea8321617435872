//! aiwd -- AIWD Skill Installer CLI
//!
//! Entry point: parses subcommands, wires the HTTP source into the
//! installer, and formats results for the terminal.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aiwd::claim::read_claim;
use aiwd::config;
use aiwd::config::AiwdConfig;
use aiwd::install::Installer;
use aiwd::output;
use aiwd::skills::list_skills;
use aiwd::source::HttpSkillSource;

const VERSION: &str = "1.0.0";

/// Install AIWD skills for AI agents.
#[derive(Parser, Debug)]
#[command(name = "aiwd", version = VERSION, about = "Install AIWD skills for AI agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install the AIWD agent skill
    Install {
        /// Install globally for all agents
        #[arg(short = 'g', long)]
        global: bool,
    },
    /// List installed skills
    List,
    /// Show your claim link
    Claim,
}

// ---- Install ----------------------------------------------------------------

async fn run_install(global: bool) -> Result<()> {
    output::print_banner();
    println!("{}", "Fetching skill from the void...".dimmed());

    let origin = config::registry_origin();
    let source = Arc::new(HttpSkillSource::new(origin.clone()));

    let installer = Installer::new(
        source,
        origin,
        config::skills_dir(global)?,
        config::aiwd_dir(),
        config::fallback_skill_path(),
    );

    let outcome = installer.install().await?;

    // Record first-install time. Best effort, never fails the install.
    if config::load_config().is_none() {
        let fresh = AiwdConfig {
            registry_url: None,
            created_at: Utc::now().to_rfc3339(),
        };
        if let Err(e) = config::save_config(&fresh) {
            debug!("could not write config file: {}", e);
        }
    }

    output::print_install_success(&outcome);
    Ok(())
}

// ---- List -------------------------------------------------------------------

fn run_list() {
    let names = list_skills(&config::global_skills_dir());

    if names.is_empty() {
        println!("{}", "No skills installed yet.".yellow());
        return;
    }

    output::print_banner();
    output::print_skills(&names);
}

// ---- Claim ------------------------------------------------------------------

fn run_claim() {
    match read_claim(&config::aiwd_dir()) {
        Some(record) => {
            output::print_banner();
            output::print_claim(&record);
        }
        None => {
            println!(
                "{}",
                "No claim token found. Run `aiwd install` first.".yellow()
            );
        }
    }
}

// ---- Entry Point -----------------------------------------------------------

#[tokio::main]
async fn main() {
    // Keep normal CLI output clean; RUST_LOG opts into diagnostics.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Install { global } => {
            if let Err(e) = run_install(global).await {
                eprintln!("{}", "Installation failed".red());
                eprintln!("{}", format!("Error: {}", e).red());
                std::process::exit(1);
            }
        }
        Commands::List => run_list(),
        Commands::Claim => run_claim(),
    }
}
