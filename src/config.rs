//! The `tour-pdf.toml` configuration file.

use crate::layout::config::LayoutConfig;
use crate::sinks::default_command;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "tour-pdf.toml";

/// How the print sink opens its viewing surface
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Program and leading arguments; the PDF's path is appended
    pub command: Vec<String>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            command: default_command(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Endpoint the email payload is POSTed to
    pub relay_url: String,
}

/// Complete configuration for tour-pdf
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub layout: LayoutConfig,
    pub print: PrintConfig,
    pub email: Option<EmailConfig>,
}

impl Configuration {
    pub fn from_toml(contents: &str) -> Result<Configuration> {
        toml::from_str(contents).with_context(|| "Failed to parse TOML")
    }

    /// Load the configuration file, falling back to the defaults when it
    /// doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("{} not found, using default configuration", path.display());
            return Ok(Configuration::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        Configuration::from_toml(&contents)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to convert configuration to TOML")
    }
}
