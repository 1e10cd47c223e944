//! Shared settings snapshot
//!
//! Readers take an `Arc` snapshot per gesture event; writers swap in a whole
//! new document. Nobody ever mutates a snapshot in place.

use crate::settings::schema::GestureSettings;
use crate::settings::{SettingsError, SettingsResult};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: Arc<RwLock<Arc<GestureSettings>>>,
}

impl SettingsStore {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(settings))),
        }
    }

    /// Load a settings document, sanitizing whatever it contains.
    ///
    /// A missing file yields defaults; unreadable or malformed JSON is an error.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: GestureSettings =
            serde_json::from_str(&content).map_err(|e| SettingsError::Json(path.to_path_buf(), e))?;
        tracing::info!(
            "Loaded settings from {} (minSegmentPx={}, inaccuracyDegrees={})",
            path.display(),
            settings.tolerance().min_segment_px,
            settings.tolerance().inaccuracy_degrees
        );
        Ok(Self::new(settings))
    }

    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        let data = serde_json::to_vec_pretty(&*self.snapshot())
            .map_err(|e| SettingsError::Json(path.to_path_buf(), e))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn snapshot(&self) -> Arc<GestureSettings> {
        self.current.read().clone()
    }

    pub fn replace(&self, settings: GestureSettings) {
        *self.current.write() = Arc::new(settings);
        tracing::debug!("Settings replaced");
    }

    pub fn reset(&self) {
        self.replace(GestureSettings::default());
    }

    /// Copy-on-write edit of the current document
    pub fn update(&self, edit: impl FnOnce(&mut GestureSettings)) {
        let mut guard = self.current.write();
        let mut next = GestureSettings::clone(&guard);
        edit(&mut next);
        *guard = Arc::new(next);
    }
}
