//! Settings construction and ownership
//!
//! The manager builds the record once (defaults, then the optional override
//! document, then the environment), validates it, and freezes it behind an
//! `Arc`. There is no reload operation; changing settings means restarting
//! the process.

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Result;
use tracing::{debug, info};

use crate::environment::{self, EnvSource, ProcessEnv};
use crate::overrides::SettingsOverrides;
use crate::schema::UiSettings;
use crate::sources::FileSource;
use crate::validation;

/// Options controlling settings construction
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Optional override document applied on top of the defaults
    pub override_file: Option<PathBuf>,
}

impl LoadOptions {
    /// Creates options with no override document
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override document path
    pub fn with_override_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_file = Some(path.into());
        self
    }
}

/// Owner of the process-wide UI settings record
pub struct SettingsManager {
    /// The frozen settings record
    settings: Arc<UiSettings>,
}

impl SettingsManager {
    /// Creates a manager from the process environment with no override document
    pub fn new() -> Result<Self> {
        Self::load(LoadOptions::new(), &ProcessEnv)
    }

    /// Creates a manager from explicit sources
    pub fn load(options: LoadOptions, env: &dyn EnvSource) -> Result<Self> {
        let overrides = match &options.override_file {
            Some(path) => {
                let overrides = FileSource::new(path).load()?;
                info!("Loaded settings overrides from {}", path.display());
                overrides
            }
            None => SettingsOverrides::default(),
        };

        Self::from_overrides(&overrides, env)
    }

    /// Creates a manager from in-memory overrides, bypassing the filesystem
    pub fn from_overrides(overrides: &SettingsOverrides, env: &dyn EnvSource) -> Result<Self> {
        let mut settings = UiSettings::default();
        overrides.apply(&mut settings);
        environment::apply_environment(&mut settings, env);
        validation::validate(&settings)?;

        info!(
            "UI settings loaded: {} files per page, {} MB upload limit, forward controls {}",
            settings.file_per_page, settings.max_file_size, settings.forward_location
        );
        if !settings.password_change_enabled() {
            debug!("Keycloak account console link disabled");
        }
        if !settings.account_management_enabled() {
            debug!("Keycloak management console link disabled");
        }

        Ok(Self {
            settings: Arc::new(settings),
        })
    }

    /// Gets the settings record
    pub fn settings(&self) -> Arc<UiSettings> {
        self.settings.clone()
    }
}
