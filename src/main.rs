//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `crtsh_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The `--wiki` page and the missing-domain usage error
//! - Mapping pipeline failures to exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use crtsh_lookup::initialization::init_logger_with;
use crtsh_lookup::output::print_wiki;
use crtsh_lookup::{run_lookup, startup_action, Opt, StartupAction};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let opt = Opt::parse();

    // Initialize logger based on options
    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Gate before any network activity: the wiki page short-circuits
    // everything, including the domain check
    match startup_action(&opt) {
        StartupAction::ShowWiki => {
            print_wiki();
            return Ok(());
        }
        StartupAction::UsageError => {
            eprintln!(
                "{} Please provide a domain. Use {} for help.",
                "❌ Error:".red().bold(),
                "--wiki".green()
            );
            process::exit(1);
        }
        StartupAction::Run => {}
    }

    // Run the lookup using the library
    match run_lookup(&opt).await {
        Ok(report) => {
            log::debug!("Lookup finished: {}", report.summary());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {:#}", "❌".red().bold(), e);
            process::exit(1);
        }
    }
}
