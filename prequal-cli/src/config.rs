//! Application configuration loaded from `prequal.toml`.
//!
//! Every field has a default, so an absent file or a partial file is valid:
//!
//! ```toml
//! [affordability]
//! annual_rate = "0.0625"
//! stress_buffer = "0.03"
//! term_years = 25
//!
//! [clipboard]
//! command = "xclip"
//! args = ["-selection", "clipboard"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use prequal_core::AffordabilityConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "prequal.toml";

/// Program that receives the summary on stdin when copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        let (command, args) = if cfg!(target_os = "macos") {
            ("pbcopy", vec![])
        } else if cfg!(target_os = "windows") {
            ("clip", vec![])
        } else {
            ("xclip", vec!["-selection", "clipboard"])
        };
        Self {
            command: command.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub affordability: AffordabilityConfig,
    pub clipboard: ClipboardConfig,
}

impl AppConfig {
    /// Parses and validates configuration text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text).context("invalid configuration")?;
        config
            .affordability
            .validate()
            .context("invalid [affordability] settings")?;
        Ok(config)
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} found; using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("in config file '{}'", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_text_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [affordability]
            annual_rate = "0.0625"
            term_years = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.affordability.annual_rate, dec!(0.0625));
        assert_eq!(config.affordability.term_years, 25);
        assert_eq!(config.affordability.stress_buffer, dec!(0.03));
        assert_eq!(config.clipboard, ClipboardConfig::default());
    }

    #[test]
    fn clipboard_command_can_be_overridden() {
        let config = AppConfig::from_toml(
            r#"
            [clipboard]
            command = "wl-copy"
            "#,
        )
        .unwrap();

        assert_eq!(config.clipboard.command, "wl-copy");
        assert_eq!(config.clipboard.args, ClipboardConfig::default().args);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [affordability]
            housing_expense_ratio = "1.5"
            "#,
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("housing expense ratio"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();

        assert!(err.to_string().contains("cannot read config file"));
    }
}
