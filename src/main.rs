//! Operit template welcome program
//!
//! Prints the project-template banner, a calculation example and an array
//! sum to stdout, then exits. Logs go to stderr and are silent unless
//! enabled.
//!
//! ## Configuration
//!
//! An optional `operit.yaml` in the current directory (or the file passed
//! with `--config`) may set the log filter:
//!
//! ```yaml
//! logging:
//!   level: info
//!   modules:
//!     operit_template: debug
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Control logging verbosity (e.g., `info`, `debug`, `trace`)

use anyhow::Result;
use clap::Parser;
use operit_template::config::{Config, CONFIG_FILE};
use operit_template::{init_logging, run};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Operit project template welcome program", long_about = None)]
struct Cli {
    /// Config file to use instead of ./operit.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --config must be valid; a broken ./operit.yaml only costs the log settings
    let (config, ignored) = match &cli.config {
        Some(path) => (Config::load_from(path)?, None),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    init_logging(&config.logging, cli.log_level.as_deref());
    if let Some(e) = ignored {
        warn!("Ignoring {}: {:#}", CONFIG_FILE, e);
    }
    info!("Loaded log filter: {}", config.logging.directives());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut out)?;

    Ok(())
}
