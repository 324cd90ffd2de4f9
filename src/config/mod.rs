//! Site configuration management for `maagar.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url, locale)   |
//! | `[content]` | Posts tree location and file extension       |
//!
//! The config file is optional; a missing file means all defaults. CLI
//! flags override whatever was loaded.

mod base;
mod content;
pub mod defaults;
mod error;

use base::BaseConfig;
use content::ContentConfig;
use error::ConfigError;

use crate::{cli::Cli, locale::Locale};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};

/// Root configuration structure representing maagar.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content tree settings
    #[serde(default)]
    pub content: ContentConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(raw: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(raw).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&raw)
    }

    /// Apply CLI overrides on top of the loaded file.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.content.dir = content.clone();
        }
    }

    /// The default locale, as a typed value.
    pub fn default_locale(&self) -> Result<Locale> {
        Locale::from_str(&self.base.locale)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.content.extension.is_empty() || self.content.extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "content extension must be non-empty without a leading dot, got `{}`",
                self.content.extension
            ))
            .into());
        }

        if Locale::from_str(&self.base.locale).is_err() {
            return Err(ConfigError::Validation(format!(
                "unsupported default locale `{}`",
                self.base.locale
            ))
            .into());
        }

        Ok(())
    }
}
