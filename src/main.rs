//! droidsweep - main entry point
//!
//! Thin CLI consumer of the core: reads a pasted package listing, runs a
//! detection pass, and prints either the grouped report or the removal
//! command sequence. Nothing here talks to a device.

mod classifier;
mod cli;
mod database;
mod error;
mod normalizer;
mod report;
mod session;
mod synthesizer;
mod types;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::database::ReferenceDatabase;
use crate::session::DetectionSession;

/// Initialize the logger. `RUST_LOG` overrides the default `warn` level.
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    // Boundary for the unexpected-failure fallback: nothing below may
    // crash the process without a user-facing message.
    if let Err(e) = run(&cli) {
        error!("Command failed: {e:#}");
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let db = load_database(cli.database.as_deref())?;

    match &cli.command {
        Commands::Detect { input } => {
            let raw = read_input(input.as_ref())?;
            let session = session::detect(&raw, &db)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                println!("{}", report::render_report(&session));
            }
        }
        Commands::Commands {
            input,
            all,
            only,
            select,
            deselect,
        } => {
            let raw = read_input(input.as_ref())?;
            let session = session::detect(&raw, &db)?;
            let session = apply_selection(session, *all, only, select, deselect);
            info!(
                "Emitting commands for {} of {} packages",
                session.selected_count(),
                session.total()
            );
            if cli.json {
                let commands = synthesizer::synthesize_commands(&session.packages);
                println!("{}", serde_json::to_string_pretty(&commands)?);
            } else {
                let script = synthesizer::to_script(&session.packages);
                if !script.is_empty() {
                    println!("{script}");
                }
            }
        }
    }

    Ok(())
}

fn load_database(path: Option<&Path>) -> Result<ReferenceDatabase> {
    match path {
        Some(path) => ReferenceDatabase::load_from_file(path)
            .with_context(|| format!("failed to load reference database {path:?}")),
        None => Ok(ReferenceDatabase::builtin()),
    }
}

/// Read the raw package listing from a file, or stdin when no path is given.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read input file {path:?}"))
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read package list from stdin")?;
            Ok(raw)
        }
    }
}

/// Apply the CLI selection overrides on top of the classifier defaults.
fn apply_selection(
    session: DetectionSession,
    all: bool,
    only: &[String],
    select: &[String],
    deselect: &[String],
) -> DetectionSession {
    let mut session = if all {
        session.select_all()
    } else if !only.is_empty() {
        let base = session.deselect_all();
        only.iter()
            .fold(base, |s, name| s.set_package_selected(name, true))
    } else {
        session
    };

    for name in select {
        session = session.set_package_selected(name, true);
    }
    for name in deselect {
        session = session.set_package_selected(name, false);
    }
    session
}
