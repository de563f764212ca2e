//! Settings document sources
//!
//! Override documents are plain serde documents in JSON, YAML or TOML; the
//! format is selected by file extension. The same formats render the active
//! record for external tooling.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use common::error::{Error, Result};

use crate::overrides::SettingsOverrides;
use crate::schema::UiSettings;

/// Supported settings document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Determines the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => Err(Error::Config(format!(
                "Unsupported settings document extension: {}",
                path.display()
            ))),
        }
    }

    /// Parses an override document
    pub fn parse_overrides(&self, content: &str) -> Result<SettingsOverrides> {
        match self {
            Format::Json => serde_json::from_str(content).map_err(Error::from),
            Format::Yaml => serde_yaml::from_str(content)
                .map_err(|err| Error::Config(format!("Invalid YAML settings document: {}", err))),
            Format::Toml => toml::from_str(content)
                .map_err(|err| Error::Config(format!("Invalid TOML settings document: {}", err))),
        }
    }

    /// Renders the active record for external tooling
    pub fn render(&self, settings: &UiSettings) -> Result<String> {
        match self {
            Format::Json => serde_json::to_string_pretty(settings).map_err(Error::from),
            Format::Yaml => serde_yaml::to_string(settings)
                .map_err(|err| Error::Config(format!("Cannot render settings as YAML: {}", err))),
            Format::Toml => toml::to_string_pretty(settings)
                .map_err(|err| Error::Config(format!("Cannot render settings as TOML: {}", err))),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown settings format: {}",
                s
            ))),
        }
    }
}

/// A settings document on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Gets the document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the document
    pub fn load(&self) -> Result<SettingsOverrides> {
        if !self.path.exists() {
            return Err(Error::NotFound(format!(
                "Settings document {} does not exist",
                self.path.display()
            )));
        }

        let format = Format::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)?;
        debug!("Read settings document {}", self.path.display());

        format.parse_overrides(&content)
    }
}

/// Conventional location of the user override document
pub fn default_document_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("file-station").join("ui.json"))
}
