//! Configuration loading, saving, and default values.

use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Substitute `${VAR_NAME}` patterns in a string with environment variable values.
///
/// - `${VAR}` is replaced with the value of the environment variable `VAR`.
/// - If the variable is not set, the `${VAR}` placeholder is left unchanged.
/// - `$${VAR}` (doubled dollar sign) is an escape and produces the literal `${VAR}`.
/// - Supports `${VAR:-default}` syntax for providing a default value when the variable is unset.
///
/// This is applied to the raw YAML config string before deserialization, so all
/// string-typed config values benefit from substitution.
pub fn substitute_variables(input: &str) -> String {
    // First, replace escaped `$${` with a placeholder that won't match the regex
    let escaped_placeholder = "\x00ESC_DOLLAR\x00";
    let working = input.replace("$${", escaped_placeholder);

    // Match ${VAR_NAME} or ${VAR_NAME:-default_value}
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-((?:[^}\\]|\\.)*))?}")
        .expect("invalid regex");

    let result = re.replace_all(&working, |caps: &regex::Captures| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                // Use default value if provided, otherwise leave the placeholder as-is
                caps.get(2)
                    .map(|m| m.as_str().replace("\\}", "}"))
                    .unwrap_or_else(|| caps[0].to_string())
            }
        }
    });

    // Restore escaped dollar signs
    result.replace(escaped_placeholder, "${")
}

/// Configuration for the emoji browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Current user identity for the favorites store. Not validated; the
    /// sentinel `"guest"` applies when absent.
    #[serde(default = "crate::defaults::user")]
    pub user: String,

    /// Remote "all emojis" catalog endpoint.
    #[serde(default = "crate::defaults::catalog_url")]
    pub catalog_url: String,

    /// Optional local catalog file. When set, it takes precedence over
    /// `catalog_url` so the browser works without the remote API.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// Base URL of the favorites store.
    #[serde(default = "crate::defaults::favorites_url")]
    pub favorites_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: crate::defaults::user(),
            catalog_url: crate::defaults::catalog_url(),
            catalog_file: None,
            favorites_url: crate::defaults::favorites_url(),
        }
    }
}

impl Config {
    /// Load configuration from the config file, creating a default file
    /// when none exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let contents = substitute_variables(&contents);
            let config: Config = serde_yaml_ng::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Save configuration to the config file, creating the directory when
    /// needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;
        fs::write(&config_path, yaml)?;

        Ok(())
    }

    /// Semantic checks that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user must not be empty or whitespace".to_string(),
            ));
        }
        if self.favorites_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "favorites_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("glyphdeck")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/glyphdeck
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("glyphdeck")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.user, "guest");
        assert_eq!(config.favorites_url, "http://localhost:5050");
        assert!(config.catalog_url.ends_with("/api/all"));
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.user = "alex".to_string();
        config.catalog_file = Some(PathBuf::from("/tmp/emojis.json"));

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let back: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back.user, "alex");
        assert_eq!(back.catalog_file, Some(PathBuf::from("/tmp/emojis.json")));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_yaml_ng::from_str("user: alex\n").unwrap();
        assert_eq!(config.user, "alex");
        assert_eq!(config.favorites_url, "http://localhost:5050");
    }

    #[test]
    fn test_validate_rejects_blank_user() {
        let mut config = Config::default();
        config.user = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_substitute_set_variable() {
        // SAFETY: test-only env mutation; no other thread reads this name.
        unsafe { std::env::set_var("GLYPHDECK_TEST_USER", "carol") };
        let out = substitute_variables("user: ${GLYPHDECK_TEST_USER}");
        assert_eq!(out, "user: carol");
    }

    #[test]
    fn test_substitute_unset_variable_left_alone() {
        let out = substitute_variables("user: ${GLYPHDECK_UNSET_VAR_XYZ}");
        assert_eq!(out, "user: ${GLYPHDECK_UNSET_VAR_XYZ}");
    }

    #[test]
    fn test_substitute_default_value() {
        let out = substitute_variables("user: ${GLYPHDECK_UNSET_VAR_XYZ:-guest}");
        assert_eq!(out, "user: guest");
    }

    #[test]
    fn test_substitute_escaped_dollar() {
        let out = substitute_variables("literal: $${NOT_A_VAR}");
        assert_eq!(out, "literal: ${NOT_A_VAR}");
    }
}
