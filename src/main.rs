//! hw-doctor - Hardware and OS health diagnostics
//!
//! Runs a fixed sequence of independent checks (board, cooling, memory,
//! storage, GPU, network, drivers, power, OS, CPU, laptop, other devices)
//! and prints one colorized pass/warn/error line per finding. Includes two
//! short synthetic benchmarks (CPU sqrt loop, memory buffer touch loop) used
//! as coarse performance signals.

mod bench;
mod checks;
mod config;
mod inventory;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::checks::{CheckContext, SEQUENCE};
use crate::config::Config;
use crate::inventory::LiveInventory;
use crate::report::Reporter;

/// hw-doctor - check your machine's hardware and OS health
#[derive(Parser)]
#[command(name = "hw-doctor")]
#[command(version)]
#[command(about = "Enumerates hardware/OS health signals and prints pass/warn/error verdicts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full diagnostic sequence (default)
    Check {
        /// Skip the CPU and memory benchmarks
        #[arg(long, default_value_t = false)]
        skip_benchmarks: bool,

        /// Disable colorized output
        #[arg(long, default_value_t = false)]
        no_color: bool,
    },

    /// List the available checks in execution order
    List,

    /// Show the effective configuration and where it is loaded from
    Config {
        /// Write the default configuration file if none exists yet
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HW_DOCTOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check {
            skip_benchmarks,
            no_color,
        }) => run_check(skip_benchmarks, no_color),
        None => run_check(false, false),
        Some(Commands::List) => {
            for check in SEQUENCE {
                println!("{:<12} {}", check.name, check.title);
            }
            Ok(())
        }
        Some(Commands::Config { init }) => {
            let path = Config::config_path()?;
            let config = Config::load()?;
            if init && !path.exists() {
                config.save()?;
                println!("wrote default config to {}", path.display());
            }
            println!("config file: {}", path.display());
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn run_check(skip_benchmarks: bool, no_color: bool) -> Result<()> {
    let config = Config::load()?;
    if no_color || !config.output.color {
        colored::control::set_override(false);
    }

    println!("{}", "Hardware Health Check".bold());
    println!("=====================");

    let inventory = LiveInventory::new();
    let ctx = CheckContext {
        inventory: &inventory,
        skip_benchmarks: skip_benchmarks || config.checks.skip_benchmarks,
    };
    let reporter = Reporter::new();
    checks::run_all(&ctx, &reporter, &config.checks.disabled);

    println!();
    println!("{}", "Check complete.".bright_green());
    Ok(())
}
