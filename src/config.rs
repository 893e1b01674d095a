use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::language::{LanguageOption, DEFAULT_LANGUAGE};
use crate::render::{RenderOptions, SaveFormat, DEFAULT_INDENT};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Indent unit repeated once per depth level
    pub indent: String,
    /// Descend into symlinked directories
    pub follow_links: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Active language code (en, ja, ko, zh-CN, zh-TW)
    pub language: String,
    /// Default format for saved listings: txt, md
    pub save_format: SaveFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            follow_links: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            save_format: SaveFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location if it exists.
    ///
    /// An explicitly given path must exist. Without one, a missing default
    /// file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError { path, source: e })?;

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/treescribe/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("treescribe").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_indent(&self.render.indent)?;
        if LanguageOption::find(&self.ui.language).is_none() {
            return Err(ConfigError::Invalid(format!(
                "ui.language '{}' is not a known language",
                self.ui.language
            )));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_indent(self.render.indent.clone())
            .with_follow_links(self.render.follow_links)
    }
}

/// An indent unit must be visible and keep each entry on one line.
pub fn validate_indent(indent: &str) -> Result<(), ConfigError> {
    if indent.is_empty() {
        return Err(ConfigError::Invalid("indent must not be empty".into()));
    }
    if indent.contains(['\n', '\r']) {
        return Err(ConfigError::Invalid("indent must not contain line breaks".into()));
    }
    Ok(())
}
