//! Configuration system for glyphdeck.
//!
//! Provides configuration loading, saving, and default values: the current
//! user identity, the catalog source, and the favorites server URL. The
//! config file is YAML at `~/.config/glyphdeck/config.yaml` with `${VAR}`
//! environment-variable substitution applied before deserialization.

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, substitute_variables};
pub use error::ConfigError;
