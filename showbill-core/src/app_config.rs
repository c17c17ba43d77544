//! Global showbill configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{ShowbillError, ShowbillResult};
use crate::label::DateLabelFormat;

static DEFAULT_FEED_URL: &str = "https://pdxshows.com/events.json";

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

/// Global configuration at ~/.config/showbill/config.toml
///
/// Every field has a default, so a missing or empty file is fine. CLI
/// flags override whatever is configured here per invocation.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Where the event feed lives.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Include shows that already happened. Also widens the venues
    /// list, so past-only venues reappear in the selector.
    #[serde(default)]
    pub show_past: bool,

    /// Group header format.
    #[serde(default)]
    pub date_label: DateLabelFormat,

    /// Terminal palette.
    #[serde(default)]
    pub theme: ThemeChoice,
}

impl GlobalConfig {
    pub fn config_path() -> ShowbillResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShowbillError::Config("Could not determine config directory".into()))?
            .join("showbill");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> ShowbillResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| ShowbillError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ShowbillError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ShowbillResult<()> {
        let contents = format!(
            "\
# showbill configuration

# Where the event feed lives:
# feed_url = \"{}\"

# Include shows that already happened (also widens the venues list):
# show_past = false

# Group header format: \"long-upper\" (JUNE 1, 2024) or \"short\" (6/1/2024):
# date_label = \"long-upper\"

# Terminal palette: \"dark\" or \"light\":
# theme = \"dark\"
",
            DEFAULT_FEED_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShowbillError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ShowbillError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Terminal palette choice. Presentation only; the pipeline never sees
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemeChoice::Dark => write!(f, "dark"),
            ThemeChoice::Light => write!(f, "light"),
        }
    }
}
