use crate::OutputFormat;
use crate::calculator::BusinessHoursDiff;
use crate::unit::Unit;
use crate::window::BusinessWindow;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_hours: BusinessHoursConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BusinessHoursConfig {
    /// Hour of the day the business opens (0-23)
    pub opens_at: Option<u32>,
    /// Hour of the day the business closes (0-23)
    pub closes_at: Option<u32>,
    #[serde(default)]
    pub unit: Unit,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl BusinessHoursConfig {
    /// Validate business hours configuration
    pub fn validate(&self) -> Result<()> {
        match (self.opens_at, self.closes_at) {
            (None, None) => Ok(()), // Unset is fine, CLI flags may supply them
            (Some(opens_at), Some(closes_at)) => {
                BusinessWindow::new(opens_at, closes_at)
                    .context("Invalid business_hours configuration")?;
                if closes_at - opens_at == 23 {
                    tracing::warn!(
                        opens_at,
                        closes_at,
                        "Business window covers almost the whole day"
                    );
                }
                Ok(())
            }
            (Some(hour), None) | (None, Some(hour)) => {
                if hour >= 24 {
                    anyhow::bail!("Invalid hour {}, expected a value between 0 and 23", hour);
                }
                tracing::warn!("Only one of business_hours.opens_at/closes_at is set");
                Ok(())
            }
        }
    }

    pub fn calculator(&self) -> BusinessHoursDiff {
        BusinessHoursDiff::new(self.opens_at, self.closes_at, self.unit)
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.business_hours.validate()?;
        Ok(())
    }
}

/// Default location: `~/.business-hours-diff/config.toml`.
pub fn default_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".business-hours-diff");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load from an explicit path, or from the default path when it exists.
pub fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_from_path(path);
    }

    let path = default_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    load_from_path(&path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_from_config() {
        let config = BusinessHoursConfig {
            opens_at: Some(9),
            closes_at: Some(17),
            unit: Unit::Minutes,
        };
        assert_eq!(config.calculator(), BusinessHoursDiff::with_hours(9, 17));
    }

    #[test]
    fn test_default_config_has_no_hours() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.business_hours.calculator().window().is_err());
    }
}
