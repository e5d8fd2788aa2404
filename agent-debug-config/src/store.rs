//! Thread-safe store holding the shared debug configuration.
//!
//! Panels never hold the document itself. They read through the
//! [`VisionConfigSource`] accessor so sibling components, the config watcher
//! or tests can mutate the store while panels pick up the latest value on
//! their next frame.

use parking_lot::RwLock;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::DebugConfiguration;
use crate::error::ConfigError;
use crate::vision::VisionConfig;

/// Read-only access to the vision section of the shared configuration.
pub trait VisionConfigSource: Send + Sync {
    /// Snapshot of the current vision settings.
    fn vision_config(&self) -> VisionConfig;

    /// Whether vision is currently enabled.
    fn is_vision_enabled(&self) -> bool {
        self.vision_config().enable
    }
}

/// Shared configuration store.
#[derive(Debug, Default)]
pub struct ConfigStore {
    config: RwLock<DebugConfiguration>,
    /// Incremented on every write, including writes that change nothing.
    revision: AtomicU64,
}

impl ConfigStore {
    pub fn new(config: DebugConfiguration) -> Self {
        Self {
            config: RwLock::new(config),
            revision: AtomicU64::new(0),
        }
    }

    /// Load the document at `path` into a new store.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(DebugConfiguration::load_from(path)?))
    }

    /// Clone of the whole document.
    pub fn snapshot(&self) -> DebugConfiguration {
        self.config.read().clone()
    }

    /// Number of writes applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Apply a mutation to the document.
    pub fn update<R>(&self, f: impl FnOnce(&mut DebugConfiguration) -> R) -> R {
        let result = {
            let mut config = self.config.write();
            f(&mut config)
        };
        self.revision.fetch_add(1, Ordering::AcqRel);
        result
    }

    /// Replace the whole document.
    pub fn replace(&self, config: DebugConfiguration) {
        self.update(|current| *current = config);
    }

    pub fn set_vision_enabled(&self, enable: bool) {
        log::debug!("Vision enabled set to {}", enable);
        self.update(|config| config.vision_config.enable = enable);
    }

    /// Re-read the document from disk after a watcher event.
    ///
    /// The store keeps its previous contents if the file fails to load.
    pub fn reload_from(&self, path: &Path) -> Result<(), ConfigError> {
        match DebugConfiguration::load_from(path) {
            Ok(config) => {
                self.replace(config);
                log::info!("Reloaded debug config from {:?}", path);
                Ok(())
            }
            Err(e) => {
                log::warn!("Keeping previous debug config, reload failed: {}", e);
                Err(e)
            }
        }
    }
}

impl VisionConfigSource for ConfigStore {
    fn vision_config(&self) -> VisionConfig {
        self.config.read().vision_config.clone()
    }

    fn is_vision_enabled(&self) -> bool {
        self.config.read().vision_config.enable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_new_store_starts_at_revision_zero() {
        let store = ConfigStore::default();
        assert_eq!(store.revision(), 0);
        assert!(!store.is_vision_enabled());
    }

    #[test]
    fn test_set_vision_enabled_bumps_revision() {
        let store = ConfigStore::default();
        store.set_vision_enabled(true);
        assert!(store.is_vision_enabled());
        assert!(store.vision_config().enable);
        assert_eq!(store.revision(), 1);

        store.set_vision_enabled(false);
        assert!(!store.is_vision_enabled());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let store = ConfigStore::default();
        let previous = store.update(|config| {
            let previous = config.vision_config.number_limits;
            config.vision_config.number_limits = 4;
            previous
        });
        assert_eq!(previous, 2);
        assert_eq!(store.snapshot().vision_config.number_limits, 4);
    }

    #[test]
    fn test_writes_from_another_thread_are_visible() {
        let store = Arc::new(ConfigStore::default());
        let writer = Arc::clone(&store);
        std::thread::spawn(move || writer.set_vision_enabled(true))
            .join()
            .expect("Writer thread panicked");
        assert!(store.is_vision_enabled());
    }

    #[test]
    fn test_reload_keeps_previous_contents_on_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("debug-config.yaml");
        fs::write(&path, "vision_config:\n  enable: true\n").expect("Failed to write config");

        let store = ConfigStore::open(&path).expect("Failed to open store");
        assert!(store.is_vision_enabled());

        fs::write(&path, "vision_config: nope\n").expect("Failed to write config");
        assert!(store.reload_from(&path).is_err());
        assert!(store.is_vision_enabled());
        assert_eq!(store.revision(), 0);

        fs::write(&path, "vision_config:\n  enable: false\n").expect("Failed to write config");
        store.reload_from(&path).expect("Failed to reload config");
        assert!(!store.is_vision_enabled());
        assert_eq!(store.revision(), 1);
    }
}
