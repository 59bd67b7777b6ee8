// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video Player.
//!
//! A command-line front end for the playback and playlist session.
//!
//! Commands are read one per line, either interactively from standard input
//! or from a script file. Report lines go to standard output, diagnostics go
//! to standard error and are controlled with `RUST_LOG`.

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vidplay::{
    actions,
    catalog::{Catalog, load_catalog},
    config::{self, AppConfig},
    session::Session,
};

#[derive(Parser, Debug)]
#[command(name = "vidplay", version, about = "In-memory video playback and playlist manager")]
struct Args {
    /// Catalog file to load instead of the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Read commands from a file instead of standard input
    #[arg(long)]
    script: Option<PathBuf>,
}

/// The entry point of the application.
///
/// Loads configuration and the catalog, builds a session and hands it to the
/// command loop.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = config::load_config();

    let catalog = open_catalog(&args, &config).context("Failed to initialise catalog")?;
    let mut session = Session::new(Arc::new(catalog));

    let stdout = io::stdout().lock();

    let result = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            actions::run_commands(&mut session, BufReader::new(file), stdout, None)
        }
        None => {
            actions::run_commands(&mut session, io::stdin().lock(), stdout, Some(config.prompt.as_str()))
        }
    };

    result.context("Application error occurred")
}

fn open_catalog(args: &Args, config: &AppConfig) -> Result<Catalog> {
    match args.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => Ok(load_catalog(path)?),
        None => {
            tracing::info!("Using built-in catalog");
            Ok(Catalog::seeded())
        }
    }
}
