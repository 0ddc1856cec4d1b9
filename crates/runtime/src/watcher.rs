//! # Settings Hot-Reloading
//!
//! Watches the settings file and sends every successfully re-parsed document
//! to the frame loop over a channel. Parsing happens on the watcher thread so
//! the loop only ever sees complete documents.
//!
//! The parent directory is watched rather than the file itself: editors tend
//! to save by writing a new file and renaming it over the old one, which a
//! watch on the file would lose.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use settings::Settings;
use tracing::{error, info, warn};

/// Re-parses the settings file when it changes.
pub struct SettingsReloader {
    path: PathBuf,
    tx: Sender<Settings>,
}

impl SettingsReloader {
    #[must_use]
    pub fn new(path: PathBuf, tx: Sender<Settings>) -> Self {
        Self { path, tx }
    }

    /// Whether `event` is a write to the watched settings file.
    #[must_use]
    pub fn is_settings_event(&self, event: &Event) -> bool {
        if !event.kind.is_modify() && !event.kind.is_create() {
            return false;
        }
        let Some(name) = self.path.file_name() else {
            return false;
        };
        event.paths.iter().any(|p| p.file_name() == Some(name))
    }

    /// Handle one watcher event. Returns true if a document was sent.
    ///
    /// A file that fails to parse is logged and skipped; the loop keeps
    /// running with the last good settings.
    pub fn process_file_event(&self, event: &Event) -> bool {
        if !self.is_settings_event(event) {
            return false;
        }
        match Settings::load(&self.path) {
            Ok(settings) => {
                info!(path = %self.path.display(), "settings file changed");
                if self.tx.send(settings).is_err() {
                    warn!("frame loop gone, dropping reloaded settings");
                    return false;
                }
                true
            }
            Err(e) => {
                error!("ignoring settings change: {e}");
                false
            }
        }
    }
}

/// Start watching `path`. The watcher stops when the returned value is
/// dropped.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the directory holding
/// `path` cannot be watched.
pub fn start(path: &Path, tx: Sender<Settings>) -> Result<RecommendedWatcher> {
    let reloader = SettingsReloader::new(path.to_path_buf(), tx);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            reloader.process_file_event(&event);
        }
        Err(e) => error!("error watching settings file: {e:?}"),
    })
    .context("failed to create settings watcher")?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;
    info!(path = %path.display(), "settings watcher started");
    Ok(watcher)
}
