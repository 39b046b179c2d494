//! Page-level configuration.
//!
//! The host page may embed a JSON block
//! `<script id="cal2text-config" type="application/json">` to override the
//! grid shape, notice timeout or log level. Without it the defaults apply.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use shared::{CalendarError, GridConfig};
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "cal2text-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] CalendarError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    /// How long a copy notice stays visible.
    pub notice_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            notice_timeout_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.grid.validate()?;
        Ok(config)
    }

    /// Read the embedded configuration block, if the page has one.
    pub fn load() -> Result<Self, ConfigError> {
        let embedded = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match embedded {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
