use anyhow::{bail, Context};
use log::LevelFilter;
use serde::Deserialize;

const FILE_CONTENT: &str = include_str!("../startup.toml");

pub const DEFAULT_SELECTOR: &str = "#app";

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(default)]
    startup: StartupConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct StartupConfig {
    /// Selector of the attachment point.
    pub selector: String,
    pub log_level: LevelFilter,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_owned(),
            log_level: LevelFilter::Info,
        }
    }
}

impl StartupConfig {
    /// The configuration compiled into the binary module.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(FILE_CONTENT).context("embedded startup.toml")
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = file.startup;
        if config.selector.trim().is_empty() {
            bail!("startup selector must not be empty");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_targets_app() {
        let config = StartupConfig::embedded().unwrap();
        assert_eq!(config.selector, "#app");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = StartupConfig::from_toml_str("").unwrap();
        assert_eq!(config, StartupConfig::default());

        let config = StartupConfig::from_toml_str("[startup]\nlog-level = \"debug\"\n").unwrap();
        assert_eq!(config.selector, DEFAULT_SELECTOR);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn empty_selector_is_rejected() {
        assert!(StartupConfig::from_toml_str("[startup]\nselector = \"  \"\n").is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(StartupConfig::from_toml_str("[startup\nselector = 1").is_err());
    }
}
