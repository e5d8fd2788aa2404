//! Shared debug configuration for the agent debug surface.
//!
//! This crate owns the state that several debug panels read from:
//!
//! - The `VisionConfig` data model and its defaults
//! - The `DebugConfiguration` document with YAML load/save
//! - `ConfigStore`, the thread-safe store panels read through `VisionConfigSource`
//! - `Localizer`, the locale provider for user-facing strings
//! - Configuration file watching

pub mod config;
pub mod defaults;
pub mod error;
pub mod i18n;
pub mod store;
pub mod vision;
#[cfg(feature = "watcher")]
pub mod watcher;

pub use config::DebugConfiguration;
pub use error::ConfigError;
pub use i18n::{Locale, Localizer};
pub use store::{ConfigStore, VisionConfigSource};
pub use vision::{Resolution, TransferMethod, VisionConfig};
#[cfg(feature = "watcher")]
pub use watcher::{ConfigReloadEvent, ConfigWatcher};
