//! Debug config file watcher for automatic reload.
//!
//! Watches `debug-config.yaml` so edits made outside the debug view (another
//! window, a text editor) reach the shared [`ConfigStore`]. Events are
//! debounced because editors often write a file several times per save.

use crate::store::ConfigStore;
use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// Poll interval of the fallback backend.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Event indicating the config file has changed and needs reloading.
#[derive(Debug, Clone)]
pub struct ConfigReloadEvent {
    /// Path to the config file that changed.
    pub path: PathBuf,
}

/// Decides which raw notify events become reload events.
///
/// Cloned into every backend handler; clones share the debounce clock.
#[derive(Clone)]
struct ReloadFilter {
    filename: OsString,
    path: PathBuf,
    debounce: Duration,
    last_sent: Arc<Mutex<Option<Instant>>>,
    tx: Sender<ConfigReloadEvent>,
}

impl ReloadFilter {
    fn is_relevant(&self, event: &Event) -> bool {
        // Create covers editors that save via rename
        matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
            && event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(self.filename.as_os_str()))
    }

    fn passes_debounce(&self, now: Instant) -> bool {
        let mut last = self.last_sent.lock();
        match *last {
            Some(previous) if now.duration_since(previous) < self.debounce => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }

    fn handle(&self, result: notify::Result<Event>) {
        let Ok(event) = result else {
            return;
        };
        if !self.is_relevant(&event) {
            return;
        }
        if !self.passes_debounce(Instant::now()) {
            log::trace!("Debouncing debug config reload event");
            return;
        }

        log::info!("Debug config file changed: {}", self.path.display());
        let reload = ConfigReloadEvent {
            path: self.path.clone(),
        };
        if let Err(e) = self.tx.send(reload) {
            log::error!("Failed to send debug config reload event: {}", e);
        }
    }
}

/// Watches the debug config file for changes and queues reload events.
pub struct ConfigWatcher {
    /// The file system watcher (kept alive to maintain watching).
    _watcher: Box<dyn Watcher + Send>,
    event_receiver: Receiver<ConfigReloadEvent>,
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").finish_non_exhaustive()
    }
}

impl ConfigWatcher {
    /// Start watching `config_path`.
    ///
    /// Uses the platform's native backend and falls back to polling when the
    /// native backend cannot start (containers, network filesystems).
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist or neither backend can watch
    /// its directory.
    pub fn new(config_path: &Path, debounce_delay_ms: u64) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!("Debug config file not found: {}", config_path.display());
        }

        let canonical = config_path
            .canonicalize()
            .unwrap_or_else(|_| config_path.to_path_buf());
        let filename = canonical
            .file_name()
            .context("Debug config path has no filename")?
            .to_os_string();
        let parent_dir = canonical
            .parent()
            .context("Debug config path has no parent directory")?
            .to_path_buf();

        let (tx, rx) = channel();
        let filter = ReloadFilter {
            filename,
            path: canonical.clone(),
            debounce: Duration::from_millis(debounce_delay_ms),
            last_sent: Arc::new(Mutex::new(None)),
            tx,
        };

        let mut watcher = Self::create_backend(filter)?;
        watcher
            .watch(&parent_dir, RecursiveMode::NonRecursive)
            .with_context(|| {
                format!(
                    "Failed to watch debug config directory: {}",
                    parent_dir.display()
                )
            })?;

        log::info!("Debug config hot reload: watching {}", canonical.display());

        Ok(Self {
            _watcher: watcher,
            event_receiver: rx,
        })
    }

    fn create_backend(filter: ReloadFilter) -> Result<Box<dyn Watcher + Send>> {
        let native_filter = filter.clone();
        let native = notify::recommended_watcher(move |res: notify::Result<Event>| {
            native_filter.handle(res)
        });
        match native {
            Ok(w) => {
                log::debug!("Debug config watcher: using native backend");
                Ok(Box::new(w))
            }
            Err(e) => {
                log::warn!(
                    "Debug config watcher: native backend unavailable ({}); polling instead",
                    e
                );
                let poll_watcher = PollWatcher::new(
                    move |res: notify::Result<Event>| filter.handle(res),
                    NotifyConfig::default().with_poll_interval(POLL_INTERVAL),
                )
                .context("Failed to create fallback PollWatcher")?;
                Ok(Box::new(poll_watcher))
            }
        }
    }

    /// Next pending reload event, without blocking.
    pub fn try_recv(&self) -> Option<ConfigReloadEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Drain pending events and reload `store` once if any arrived.
    ///
    /// Returns `true` when the store was replaced. A file that fails to load
    /// leaves the store untouched.
    pub fn apply_pending(&self, store: &ConfigStore) -> bool {
        let Some(event) = std::iter::from_fn(|| self.try_recv()).last() else {
            return false;
        };

        match store.reload_from(&event.path) {
            Ok(()) => true,
            Err(e) => {
                log::error!(
                    "Failed to reload debug config {}: {}",
                    event.path.display(),
                    e
                );
                false
            }
        }
    }
}
