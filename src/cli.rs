//! Command-line interface for glyphdeck.
//!
//! Runtime flags override the config file, and the `export`/`import`
//! subcommands run headless against the favorites store without opening a
//! window.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use glyphdeck_catalog::CatalogSource;
use glyphdeck_config::Config;
use glyphdeck_favorites::{FavoritesClient, transfer};
use std::path::PathBuf;

/// glyphdeck - a desktop emoji catalog browser
#[derive(Parser)]
#[command(name = "glyphdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// User identity for the favorites store (overrides config)
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Remote catalog endpoint (overrides config)
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Local catalog JSON file; takes precedence over the remote endpoint
    #[arg(long, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Favorites store base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub favorites_url: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the current user's favorites to a JSON file
    Export {
        /// Destination path (default: <user>_favorites.json in the current directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Import favorites from a JSON file, adding to any existing favorites
    Import {
        /// File to import: a JSON array of objects with at least a "name" field
        file: PathBuf,
    },
}

impl Cli {
    /// Log level from the `--log-level` flag, if given and recognized.
    pub fn log_level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level
            .as_deref()
            .and_then(crate::debug::parse_level)
    }

    /// Fold CLI overrides into the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref user) = self.user {
            config.user = user.clone();
        }
        if let Some(ref url) = self.catalog_url {
            config.catalog_url = url.clone();
        }
        if let Some(ref path) = self.catalog_file {
            config.catalog_file = Some(path.clone());
        }
        if let Some(ref url) = self.favorites_url {
            config.favorites_url = url.clone();
        }
    }
}

/// The catalog source a config selects: the local file when set, the remote
/// endpoint otherwise.
pub fn catalog_source(config: &Config) -> CatalogSource {
    match config.catalog_file {
        Some(ref path) => CatalogSource::File(path.clone()),
        None => CatalogSource::Remote(config.catalog_url.clone()),
    }
}

/// Headless `export` subcommand.
pub fn run_export(config: &Config, output: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = glyphdeck_catalog::load(&catalog_source(config))?;
    let client = FavoritesClient::new(&config.favorites_url, &config.user)?;
    let exported = transfer::export_favorites(&client, &catalog)?;

    let path = output.unwrap_or_else(|| PathBuf::from(&exported.suggested_name));
    std::fs::write(&path, &exported.contents)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "Exported {} favorites for '{}' to {}",
        exported.entry_count,
        config.user,
        path.display()
    );
    Ok(())
}

/// Headless `import` subcommand. Partial failures are printed per name and
/// turn into a non-zero exit.
pub fn run_import(config: &Config, file: &PathBuf) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let client = FavoritesClient::new(&config.favorites_url, &config.user)?;

    let report = transfer::import_favorites(&text, &client)?;
    println!("{}", report.summary());
    for (name, error) in &report.failed {
        eprintln!("  failed: {name}: {error}");
    }

    if !report.is_complete() {
        bail!(
            "{} of {} entries failed to import",
            report.failed.len(),
            report.failed.len() + report.imported.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "glyphdeck",
            "--user",
            "alex",
            "--favorites-url",
            "http://favs.local:8080",
        ]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.user, "alex");
        assert_eq!(config.favorites_url, "http://favs.local:8080");
        // Untouched fields keep their config values
        assert!(config.catalog_url.ends_with("/api/all"));
    }

    #[test]
    fn test_catalog_file_takes_precedence() {
        let mut config = Config::default();
        assert!(matches!(catalog_source(&config), CatalogSource::Remote(_)));

        config.catalog_file = Some(PathBuf::from("/tmp/emojis.json"));
        assert_eq!(
            catalog_source(&config),
            CatalogSource::File(PathBuf::from("/tmp/emojis.json"))
        );
    }

    #[test]
    fn test_subcommand_parsing() {
        let cli = Cli::parse_from(["glyphdeck", "export", "--output", "favs.json"]);
        match cli.command {
            Some(Commands::Export { output }) => {
                assert_eq!(output, Some(PathBuf::from("favs.json")))
            }
            _ => panic!("expected export subcommand"),
        }

        let cli = Cli::parse_from(["glyphdeck", "import", "favs.json"]);
        assert!(matches!(cli.command, Some(Commands::Import { .. })));
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::parse_from(["glyphdeck", "--log-level", "debug"]);
        assert_eq!(cli.log_level_filter(), Some(log::LevelFilter::Debug));

        let cli = Cli::parse_from(["glyphdeck", "--log-level", "nonsense"]);
        assert_eq!(cli.log_level_filter(), None);
    }
}
