use crate::settings::schema::GestureSettings;
use crate::settings::store::SettingsStore;
use anyhow::Context;
use std::path::Path;

/// The factory settings document, optionally written to `path`
pub fn default_settings(path: Option<&Path>) -> anyhow::Result<GestureSettings> {
    let store = SettingsStore::default();
    if let Some(path) = path {
        store
            .save(path)
            .with_context(|| format!("Failed to write default settings to {}", path.display()))?;
        tracing::info!("Wrote default settings to {}", path.display());
    }
    Ok((*store.snapshot()).clone())
}
