//! Main integration module for File Station
//!
//! This module wires the settings subsystem together and provides the
//! entry point used by the binary and by embedders.

use std::sync::Arc;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use settings::{LoadOptions, ProcessEnv, SettingsManager, UiSettings};

pub use common::error::Error;

/// Main File Station application context
pub struct FileStation {
    /// Settings manager
    settings_manager: Arc<SettingsManager>,
}

impl FileStation {
    /// Creates a new application context
    ///
    /// Settings are resolved once, here; the record never changes afterwards.
    pub fn new(options: LoadOptions) -> Result<Self> {
        info!("Initializing File Station");

        let settings_manager = Arc::new(SettingsManager::load(options, &ProcessEnv)?);

        Ok(Self { settings_manager })
    }

    /// Initializes logging
    pub fn init_logging() -> Result<()> {
        // Initialize tracing subscriber
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();

        Ok(())
    }

    /// Gets the settings manager
    pub fn settings_manager(&self) -> Arc<SettingsManager> {
        self.settings_manager.clone()
    }

    /// Gets the active settings record
    pub fn settings(&self) -> Arc<UiSettings> {
        self.settings_manager.settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_are_shared() {
        // Construction reads the real process environment, so only fields
        // the environment cannot feed are asserted
        let station = FileStation::new(LoadOptions::new()).unwrap();

        assert_eq!(station.settings().file_per_page, 15);
        assert!(Arc::ptr_eq(&station.settings(), &station.settings()));
    }
}
