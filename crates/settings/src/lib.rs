//! UI settings management for File Station
//!
//! This crate provides the process-wide UI settings record for File Station,
//! with support for different configuration sources.

pub mod defaults;
pub mod environment;
pub mod manager;
pub mod overrides;
pub mod schema;
pub mod sources;
pub mod validation;

// Re-export commonly used types
pub use environment::{EnvSource, MapEnv, ProcessEnv};
pub use manager::{LoadOptions, SettingsManager};
pub use overrides::SettingsOverrides;
pub use schema::{RightMenuSettings, UiSettings};
pub use sources::{FileSource, Format};
