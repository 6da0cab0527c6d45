//! Configuration management for the taskdock application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and loaded on demand by the commands that need them. Every
//! module is optional: a missing configuration file simply yields defaults,
//! so the application works without any setup.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\taskdock\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/taskdock/config.json`
//! - **Linux**: `~/.local/share/lacodda/taskdock/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used by the interactive setup wizard to present the available modules.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Upload policy for task attachments.
///
/// The policy is enforced by the attachment storage before any bytes are
/// written and before a metadata row is created, so a rejected upload leaves
/// no trace in either place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttachmentsConfig {
    /// Maximum accepted file size in megabytes.
    pub max_file_size_mb: u64,

    /// Optional extension whitelist (lowercase, without the dot).
    ///
    /// When absent, any extension is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_extensions: Option<Vec<String>>,
}

impl Default for AttachmentsConfig {
    fn default() -> Self {
        AttachmentsConfig {
            max_file_size_mb: 25,
            allowed_extensions: None,
        }
    }
}

/// Main configuration container for the entire application.
///
/// All module configurations are optional and unconfigured modules are
/// omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Attachment upload policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<AttachmentsConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet; a file
    /// that exists but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the effective attachment policy, falling back to defaults.
    pub fn attachments_or_default(&self) -> AttachmentsConfig {
        self.attachments.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are pre-filled as defaults so re-running the wizard
    /// only changes what the user touches.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ConfigModule {
            key: "attachments".to_string(),
            name: "Attachments".to_string(),
        }];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "attachments" => {
                    let default = config.attachments.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAttachments);
                    let max_file_size_mb = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptMaxAttachmentSize.to_string())
                        .default(default.max_file_size_mb)
                        .interact_text()?;

                    // Empty input keeps the whitelist open
                    let extensions: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAllowedExtensions.to_string())
                        .default(default.allowed_extensions.clone().unwrap_or_default().join(","))
                        .allow_empty(true)
                        .interact_text()?;

                    let allowed_extensions = if extensions.trim().is_empty() {
                        None
                    } else {
                        Some(
                            extensions
                                .split(',')
                                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                                .filter(|ext| !ext.is_empty())
                                .collect(),
                        )
                    };

                    config.attachments = Some(AttachmentsConfig {
                        max_file_size_mb,
                        allowed_extensions,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
