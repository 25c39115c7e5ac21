//! Appearance preference persistence
//!
//! A small JSON key-value file. Only the theme lives here; opportunity data and view
//! settings are never written to disk.

use anyhow::Context;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::{
    errors::{DashboardError, DashboardResult},
    types::Theme,
};

const THEME_KEY: &str = "theme";

pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, or the default when the file is missing or unreadable.
    pub fn load_theme(&self) -> Theme {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable preferences at {}: {:#}", self.path.display(), e);
                return Theme::default();
            }
        };

        entries
            .get(THEME_KEY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) -> DashboardResult<()> {
        self.write_entry(THEME_KEY, serde_json::to_value(theme).unwrap_or(Value::Null))
            .map_err(|e| DashboardError::Storage {
                path: self.path.display().to_string(),
                message: format!("{:#}", e),
                source: e,
            })?;

        info!(theme = %theme, path = %self.path.display(), "Saved appearance preference");
        Ok(())
    }

    fn read_entries(&self) -> anyhow::Result<Map<String, Value>> {
        if !self.path.exists() {
            debug!("No preferences file at {}", self.path.display());
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path).context("Failed to read preferences file")?;
        match serde_json::from_str::<Value>(&contents).context("Preferences file is not JSON")? {
            Value::Object(entries) => Ok(entries),
            _ => Err(anyhow::anyhow!("Preferences file is not a JSON object")),
        }
    }

    fn write_entry(&self, key: &str, value: Value) -> anyhow::Result<()> {
        // Unrelated keys survive; a corrupt file is replaced
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create preferences directory")?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(&Value::Object(entries))?)
            .context("Failed to write preferences")?;
        fs::rename(&tmp_path, &self.path).context("Failed to replace preferences file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("arb-spread-monitor-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let store = PreferenceStore::new(temp_path("prefs.json"));
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn test_save_then_load() {
        let store = PreferenceStore::new(temp_path("prefs.json"));
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme(), Theme::Light);

        let reopened = PreferenceStore::new(store.path().to_path_buf());
        assert_eq!(reopened.load_theme(), Theme::Light);
    }

    #[test]
    fn test_corrupt_file_is_ignored_then_replaced() {
        let path = temp_path("prefs.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let store = PreferenceStore::new(path.clone());
        assert_eq!(store.load_theme(), Theme::Dark);

        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme(), Theme::Light);
    }

    #[test]
    fn test_unknown_theme_value_defaults() {
        let path = temp_path("prefs.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"theme": "sepia", "locale": "en"}"#).unwrap();

        let store = PreferenceStore::new(path.clone());
        assert_eq!(store.load_theme(), Theme::Dark);

        store.save_theme(Theme::Light).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"locale\""));
    }
}
