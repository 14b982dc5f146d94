//! Game configuration
//!
//! Load settings from a TOML file, then let command-line flags override them.
//!
//! # Examples
//!
//! ```
//! use numberle::config::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     show_target = true
//!     random_target = false
//! "#).unwrap();
//!
//! assert!(config.show_target);
//! assert!(!config.random_target);
//! assert!(config.strict_validation); // default
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct GameConfig {
    /// Reveal the target equation to the player
    pub show_target: bool,

    /// Require both sides of a guess to be equal
    pub strict_validation: bool,

    /// Draw the target at random instead of taking the first catalog entry
    pub random_target: bool,

    /// Explain why a guess was rejected (does not affect what is accepted)
    pub report_errors: bool,

    /// Seed for reproducible random targets
    pub seed: Option<u64>,

    /// Equation file to use instead of the embedded catalog
    pub catalog: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            show_target: false,
            strict_validation: true,
            random_target: true,
            report_errors: true,
            seed: None,
            catalog: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    #[must_use]
    pub const fn with_show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    #[must_use]
    pub const fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    #[must_use]
    pub const fn with_random_target(mut self, random: bool) -> Self {
        self.random_target = random;
        self
    }

    #[must_use]
    pub const fn with_report_errors(mut self, report: bool) -> Self {
        self.report_errors = report;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }
}
