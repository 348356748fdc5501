//! Handles settings for the application.
//!
//! Sources, later ones win: built-in defaults, the TOML file
//! (`config/expenses.toml` unless `--config` points elsewhere), then
//! `EXPENSES_*` environment variables.
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/expenses.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backing file of the store.
    pub data_file: String,
    /// Log level for the `expenses` and `engine` targets.
    pub level: String,
    pub currency_symbol: String,
    /// How many expenses `list` shows without `--last`/`--all`.
    pub recent_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: "expenses.txt".to_string(),
            level: "warn".to_string(),
            currency_symbol: "₹".to_string(),
            recent_limit: 10,
        }
    }
}

impl Settings {
    /// Loads the settings. An explicit `path` must exist, the default one is
    /// optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("EXPENSES").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
