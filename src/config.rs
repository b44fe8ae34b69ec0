use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "kalends.toml";

/// Top-level Kalends configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KalendsConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Option defaults for date operations.
    #[serde(default)]
    pub defaults: DefaultsToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_calendar_id")]
    pub id: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            id: default_calendar_id(),
        }
    }
}

fn default_calendar_id() -> String {
    "iso8601".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    #[serde(default = "default_overflow")]
    pub overflow: String,
    #[serde(default = "default_largest_unit")]
    pub largest_unit: String,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            overflow: default_overflow(),
            largest_unit: default_largest_unit(),
        }
    }
}

fn default_overflow() -> String {
    "constrain".to_string()
}
fn default_largest_unit() -> String {
    "day".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

impl KalendsConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `kalends.toml` in the
    /// working directory is read if present and built-in defaults are used
    /// otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::read(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG);
                if p.exists() {
                    Self::read(p)
                } else {
                    debug!("no {DEFAULT_CONFIG} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
