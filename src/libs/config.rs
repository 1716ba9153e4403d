//! Configuration management for the attrex application.
//!
//! Handles the settings needed to reach the HR portal and to brand the
//! generated reports. Configuration lives as JSON in the platform-specific
//! application data directory and can be created or updated through an
//! interactive setup wizard.
//!
//! ## Configuration Structure
//!
//! - **Portal Config**: API endpoint and access token for the HR portal
//! - **Report Config**: presentation options stamped onto exported reports
//!
//! Both modules are optional; the CLI degrades gracefully when a module is
//! missing (for example, `--input` exports work without any portal
//! configuration).
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use attrex::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(portal) = &config.portal {
//!     println!("Portal URL: {}", portal.api_url);
//! }
//! # Ok(())
//! # }
//! ```

use crate::api::portal::PortalConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Company name stamped on reports when none has been configured.
pub const DEFAULT_COMPANY_NAME: &str = "Company Name";

/// Represents a configurable module in the application.
///
/// Used by the interactive setup wizard to present the available modules.
/// Each module has a unique key for routing and a display name.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Report presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Company name rendered in the report header.
    pub company_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report".to_string(),
        }
    }
}

/// Main configuration container for the entire application.
///
/// Unconfigured modules are omitted from the JSON output to keep the file
/// clean and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// HR portal connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal: Option<PortalConfig>,

    /// Report presentation settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields the default configuration
    /// so commands that do not need the portal still work.
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

    /// Runs the interactive configuration setup wizard.
    ///
    /// Loads the existing configuration as defaults, lets the user pick the
    /// modules to (re)configure, and collects the settings for each selected
    /// module. The caller is responsible for saving the returned value.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_descriptions = vec![PortalConfig::module(), ReportConfig::module()];

        let selected_modules = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_modules {
            match module_descriptions[selection].key.as_str() {
                "portal" => config.portal = Some(PortalConfig::init(&config.portal)?),
                "report" => {
                    let default = config.report.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(ReportConfig {
                        company_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCompanyName.to_string())
                            .default(default.company_name)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Company name for report headers, falling back to the placeholder.
    pub fn company_name(&self) -> String {
        self.report
            .as_ref()
            .map(|r| r.company_name.clone())
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string())
    }
}
