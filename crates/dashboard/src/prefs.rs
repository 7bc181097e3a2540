//! Theme preference persistence.
//!
//! The theme mode is the only durable state in the system: a single JSON
//! file read once at startup and rewritten on every toggle. A missing or
//! corrupt file falls back to the default mode without error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use taskflow_core::theme::ThemeMode;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ThemePreference {
    mode: ThemeMode,
}

/// Read the persisted theme mode, defaulting to [`ThemeMode::Light`].
///
/// A missing file is the normal first-run case and is silently defaulted;
/// an unreadable or unparseable file is logged at warn and defaulted.
pub fn load_theme(path: &Path) -> ThemeMode {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ThemeMode::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read theme preference");
            return ThemeMode::default();
        }
    };

    match serde_json::from_str::<ThemePreference>(&raw) {
        Ok(pref) => pref.mode,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Corrupt theme preference, using default");
            ThemeMode::default()
        }
    }
}

/// Persist the theme mode. Called on every toggle.
pub fn save_theme(path: &Path, mode: ThemeMode) -> std::io::Result<()> {
    let pref = ThemePreference { mode };
    let raw = serde_json::to_string(&pref).expect("theme preference serializes");
    std::fs::write(path, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_theme(&dir.path().join("absent.json")), ThemeMode::Light);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");

        save_theme(&path, ThemeMode::Dark).unwrap();
        assert_eq!(load_theme(&path), ThemeMode::Dark);

        save_theme(&path, ThemeMode::Light).unwrap();
        assert_eq!(load_theme(&path), ThemeMode::Light);
    }

    #[test]
    fn corrupt_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(load_theme(&path), ThemeMode::Light);
    }

    #[test]
    fn wire_format_is_a_single_mode_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        save_theme(&path, ThemeMode::Dark).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"mode":"dark"}"#);
    }
}
