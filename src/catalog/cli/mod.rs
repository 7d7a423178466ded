//! # Interactive Shell
//!
//! One possible client of [`CatalogApi`](crate::api::CatalogApi), and the only
//! part of the crate that talks to a terminal.
//!
//! ## Session Flow
//!
//! The shell prints a numbered menu and reads one choice per line:
//!
//! - **1** lists the data files in the data directory and loads the chosen one
//! - **2-5** list, describe, add and remove courses, once something is loaded
//! - **9** exits; so does running out of input at the menu
//!
//! Every operation error is printed and the menu comes back. The store is never
//! left half-updated, because the commands validate before writing.
//!
//! ## Removal Prompts
//!
//! Removing a course asks up to two questions, in this order:
//!
//! 1. When other courses depend on it: continue with the removal?
//! 2. Always, after removing: strip it from other prerequisite lists?
//!
//! Declining the first aborts with no change. Declining the second keeps the
//! removal and leaves the references dangling.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `shell`: Menu loop and per-option handlers
//! - `prompt`: Questions, required fields and yes/no confirmations
//! - `render`: Output formatting (lists, details, colored messages)

mod prompt;
mod render;
pub mod setup;
mod shell;

pub use shell::Shell;

use crate::api::CatalogApi;
use crate::config::CatalogConfig;
use crate::error::Result;
use clap::Parser;
use setup::Cli;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let mut config = CatalogConfig::load(&data_dir)?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    info!(
        dir = %data_dir.display(),
        backend = %config.backend,
        buckets = config.bucket_count,
        "starting session"
    );

    let store = config.backend.build(config.bucket_count)?;
    let api = CatalogApi::new(store);

    let stdin = std::io::stdin();
    let mut shell = Shell::new(api, stdin.lock(), std::io::stdout(), data_dir, config);
    if let Some(file) = &cli.file {
        shell.preload(file)?;
    }
    shell.run()
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` wins over the verbosity flags.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
