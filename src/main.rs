// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use glyphdeck::cli::{Cli, Commands};
use glyphdeck_config::Config;

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging init for cleaner output)
    let cli = Cli::parse();

    // Initialize unified logging — routes all log::info!() etc. to the
    // session log file. When RUST_LOG is set, also mirrors to stderr.
    // CLI --log-level flag takes highest precedence, then RUST_LOG.
    glyphdeck::debug::init_log_bridge(cli.log_level_filter());

    log::info!("Starting glyphdeck {}", glyphdeck::VERSION);

    // A broken config file should not brick the browser; fall back to
    // defaults and say so.
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {e}");
            eprintln!("glyphdeck: warning: using default config: {e}");
            Config::default()
        }
    };
    cli.apply_to(&mut config);

    let result = match cli.command {
        Some(Commands::Export { ref output }) => {
            glyphdeck::cli::run_export(&config, output.clone())
        }
        Some(Commands::Import { ref file }) => glyphdeck::cli::run_import(&config, file),
        None => glyphdeck::app::run(config),
    };

    if let Err(ref e) = result {
        eprintln!("glyphdeck: error: {e:#}");
    }
    // Return the original error so main exits with code 1 (anyhow default)
    result
}
