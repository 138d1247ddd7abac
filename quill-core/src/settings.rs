use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::fonts;

/// Application settings, persisted to `~/.config/quill/settings.json`.
///
/// The `#[serde(default)]` on the struct ensures that fields missing from an
/// existing settings file are filled in with their `Default` values, so new
/// fields can be added without breaking old config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: i32,
    pub window_height: i32,
    pub font_family: String,
    pub font_size: i32,
    /// Directory the file dialogs start in; updated after every open/save.
    pub last_directory: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_width: 800,
            window_height: 600,
            font_family: String::from(fonts::DEFAULT_FAMILY),
            font_size: fonts::DEFAULT_SIZE,
            last_directory: String::new(),
        }
    }
}

fn settings_path() -> PathBuf {
    let config_root = dirs::config_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    let quill_dir = config_root.join("quill");
    let _ = std::fs::create_dir_all(&quill_dir);
    quill_dir.join("settings.json")
}

pub fn load() -> Settings {
    load_from(&settings_path())
}

pub fn save(settings: &Settings) {
    save_to(&settings_path(), settings);
}

pub fn load_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

pub fn save_to(path: &Path, settings: &Settings) {
    if let Ok(json) = serde_json::to_string_pretty(settings) {
        if let Err(e) = std::fs::write(path, json) {
            log::warn!("Failed to write settings to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.font_family = String::from("Serif");
        settings.font_size = 18;
        settings.last_directory = String::from("/home/someone/documents");
        save_to(&path, &settings);

        let loaded = load_from(&path);
        assert_eq!(loaded.font_family, "Serif");
        assert_eq!(loaded.font_size, 18);
        assert_eq!(loaded.last_directory, "/home/someone/documents");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_from(&dir.path().join("nope.json"));
        assert_eq!(settings.font_size, fonts::DEFAULT_SIZE);
        assert_eq!(settings.font_family, fonts::DEFAULT_FAMILY);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"font_size": 24}"#).unwrap();

        let settings = load_from(&path);
        assert_eq!(settings.font_size, 24);
        assert_eq!(settings.window_width, 800);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let settings = load_from(&path);
        assert_eq!(settings.font_size, fonts::DEFAULT_SIZE);
    }
}
