//! TOML-based configuration for permcmp.
//!
//! Configuration is optional. The CLI looks for
//! `<config dir>/permcmp/config.toml` and falls back to built-in defaults
//! when no file is present; an explicitly requested path must exist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ConfigError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level application configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Compare behaviour settings.
    #[serde(default)]
    pub compare: CompareConfig,
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// When to emit ANSI color in output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit color.
    Always,
    /// Never emit color.
    Never,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// When to use color.
    #[serde(default)]
    pub color: ColorMode,

    /// List companies whose displayed permission set is empty. With
    /// unique-only compare output this keeps companies visible even when the
    /// two users match exactly there.
    #[serde(default = "default_true")]
    pub show_empty_companies: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            show_empty_companies: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Compare behaviour
// ---------------------------------------------------------------------------

/// Compare behaviour configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Start `permcmp compare` in unique-only mode unless a flag overrides it.
    #[serde(default)]
    pub unique_only: bool,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl AppConfig {
    /// Load an [`AppConfig`] from a TOML file at the given path.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading configuration");

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        debug!("configuration parsed successfully");
        Ok(config)
    }

    /// Resolve the configuration for a CLI invocation.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is loaded if a file is there and built-in defaults are used
    /// otherwise.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Default config file location: `<config dir>/permcmp/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("permcmp").join("config.toml"))
    }

    /// Generate a default TOML config template string.
    pub fn default_template() -> &'static str {
        r#"# permcmp configuration
# Looked up at <config dir>/permcmp/config.toml unless --config is given.

[display]
color = "auto"                 # auto | always | never
show_empty_companies = true    # list companies with nothing to show

[compare]
unique_only = false            # default mode for `permcmp compare`
"#
    }
}
