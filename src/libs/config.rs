//! Configuration management for the shiftlog application.
//!
//! Settings are stored as JSON in the platform data directory and loaded
//! with [`Config::read`], which falls back to defaults when no file exists.
//! [`Config::init`] runs the interactive setup wizard.
//!
//! Call sites receive the configuration by reference; there is no global
//! settings singleton.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default daily target when nothing is configured.
pub const DEFAULT_TARGET_HOURS: f64 = 8.0;

/// Report-related settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Daily target hours the weekly report measures averages against.
    pub target_hours: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            target_hours: DEFAULT_TARGET_HOURS,
        }
    }
}

/// Main configuration container.
///
/// Modules are optional so a missing configuration file, or one written by
/// an older version, still loads cleanly.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        Ok(())
    }

    /// Runs the interactive configuration wizard, pre-filling current
    /// values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let tracker = config.tracker.clone().unwrap_or_default();

        msg_print!(Message::ConfigWizardHeader);
        config.tracker = Some(TrackerConfig {
            target_hours: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTargetHours.to_string())
                .default(tracker.target_hours)
                .interact_text()?,
        });

        Ok(config)
    }

    /// The configured daily target, or the default when unset.
    pub fn target_hours(&self) -> f64 {
        self.tracker.as_ref().map(|t| t.target_hours).unwrap_or(DEFAULT_TARGET_HOURS)
    }
}
