//! Ingest inspector command-line shell.
//!
//! Loads configuration, installs tracing, wires the adapters into the use
//! cases and renders their results.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod render;

use std::process::ExitCode;

use anyhow::Context;
use ii_app::AppPaths;
use ii_core::ports::{AppDirs, AppDirsPort};
use ii_infra::DirsAppDirsAdapter;
use tracing::info;

use cli::{Cli, Command};

/// Runs one CLI invocation to completion.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Step 1: Locate the platform data dir and load config
    let platform_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application data directory")?;
    let default_paths = AppPaths::from_app_dirs(&platform_dirs);
    let config = bootstrap::resolve_config(
        cli.config.as_deref(),
        &default_paths.config_path,
        platform_dirs.app_data_root.clone(),
    )?;

    // Step 2: Tracing, rooted at the configured data dir
    let paths = AppPaths::from_app_dirs(&AppDirs {
        app_data_root: config.data_dir.clone(),
    });
    bootstrap::init_tracing_subscriber(&paths.logs_dir)?;
    info!(data_dir = %config.data_dir.display(), "Ingest inspector starting");

    // Step 3: Wire and dispatch
    let deps = bootstrap::wire_dependencies(&config, &paths, cli.locale.as_deref())?;
    match &cli.command {
        Command::Lookup(args) => commands::lookup::run(&deps.inspect, args).await,
        Command::Recent => commands::recent::run(&deps.recent).await,
    }
}
