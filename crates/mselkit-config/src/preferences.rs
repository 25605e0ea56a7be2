// ── Persisted UI preferences ──
//
// One serialized blob: read once at construction, rewritten wholesale
// on every change. Consumers mutate through PreferenceStore so the
// file on disk never drifts from memory.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The whole preferences blob.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiPreferences {
    /// Selected theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Last selected tab per tool surface.
    #[serde(default)]
    pub selected_tab: Option<String>,

    /// Ids of list items left expanded.
    #[serde(default)]
    pub expanded_ids: Vec<String>,

    /// Whether the navigation pane is collapsed.
    #[serde(default)]
    pub nav_collapsed: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            selected_tab: None,
            expanded_ids: Vec::new(),
            nav_collapsed: false,
        }
    }
}

fn default_theme() -> String {
    "light".into()
}

/// Resolve the preferences file path via XDG / platform conventions.
pub fn preferences_path() -> PathBuf {
    ProjectDirs::from("org", "mselkit", "mselkit").map_or_else(
        || PathBuf::from(".mselkit-preferences.toml"),
        |dirs| dirs.config_dir().join("preferences.toml"),
    )
}

/// Owns the preferences blob and its file.
///
/// Construction reads the file (missing or unreadable falls back to
/// defaults); every mutating call rewrites the whole file.
pub struct PreferenceStore {
    path: PathBuf,
    current: UiPreferences,
}

impl PreferenceStore {
    /// Load from the canonical path.
    pub fn load() -> Self {
        Self::load_from(preferences_path())
    }

    /// Load from an explicit path (used by tests and portable setups).
    pub fn load_from(path: PathBuf) -> Self {
        let current = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, current }
    }

    pub fn get(&self) -> &UiPreferences {
        &self.current
    }

    /// Replace the blob and rewrite the file.
    pub fn set(&mut self, prefs: UiPreferences) -> Result<(), ConfigError> {
        self.current = prefs;
        self.persist()
    }

    /// Mutate in place and rewrite the file.
    pub fn update(
        &mut self,
        f: impl FnOnce(&mut UiPreferences),
    ) -> Result<(), ConfigError> {
        f(&mut self.current);
        self.persist()
    }

    fn persist(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(&self.current)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::load_from(dir.path().join("preferences.toml"));
        assert_eq!(store.get(), &UiPreferences::default());
    }

    #[test]
    fn every_change_rewrites_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut store = PreferenceStore::load_from(path.clone());
        store
            .update(|p| {
                p.theme = "dark".into();
                p.expanded_ids.push("msel-1".into());
            })
            .unwrap();
        store.update(|p| p.nav_collapsed = true).unwrap();

        // A fresh load sees the cumulative state.
        let reloaded = PreferenceStore::load_from(path);
        assert_eq!(reloaded.get().theme, "dark");
        assert_eq!(reloaded.get().expanded_ids, vec!["msel-1"]);
        assert!(reloaded.get().nav_collapsed);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "not = [valid toml").unwrap();

        let store = PreferenceStore::load_from(path);
        assert_eq!(store.get(), &UiPreferences::default());
    }
}
