use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::{ColorPalette, Role, ThemeMode};
use crate::storage::ensure_parent_dir;

pub const DEFAULT_CONFIG_PATH: &str = "config/messenger.json";
pub const DEFAULT_DRAFTS_DB: &str = "data/drafts.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub color_palette: ColorPalette,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_drafts_db")]
    pub drafts_db_path: String,
    /// Admins get pin/delete actions on messages.
    #[serde(default)]
    pub current_user_role: Role,
}

fn default_drafts_db() -> String {
    DEFAULT_DRAFTS_DB.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color_palette: ColorPalette::default(),
            theme_mode: ThemeMode::default(),
            drafts_db_path: default_drafts_db(),
            current_user_role: Role::default(),
        }
    }
}

/// Reads the config at `path`. A missing or unreadable file falls back to
/// defaults; so does malformed JSON, with a warning.
pub fn load_config(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::info!("no config at {} ({err}), using defaults", path.display());
            return AppConfig::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("ignoring malformed config {}: {err}", path.display());
        AppConfig::default()
    })
}

pub fn save_config(path: impl AsRef<Path>, config: &AppConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

/// Rewrites only the theme fields of the config at `path`.
pub fn persist_theme(path: impl AsRef<Path>, palette: ColorPalette, mode: ThemeMode) {
    let path = path.as_ref();
    let config = AppConfig {
        color_palette: palette,
        theme_mode: mode,
        ..load_config(path)
    };

    match save_config(path, &config) {
        Ok(()) => log::debug!("theme {palette:?}/{mode:?} saved to {}", path.display()),
        Err(err) => log::error!("could not save theme to {}: {err}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let config = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.drafts_db_path, DEFAULT_DRAFTS_DB);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "theme_mode": "dark", "current_user_role": "admin" }"#).unwrap();

        let config = load_config(&path);
        assert_eq!(config.theme_mode, ThemeMode::Dark);
        assert_eq!(config.current_user_role, Role::Admin);
        assert_eq!(config.color_palette, ColorPalette::Blue);
        assert_eq!(config.drafts_db_path, DEFAULT_DRAFTS_DB);
    }

    #[test]
    fn persist_theme_keeps_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("messenger.json");

        let config = AppConfig {
            drafts_db_path: "elsewhere.db".to_string(),
            ..AppConfig::default()
        };
        save_config(&path, &config).unwrap();

        persist_theme(&path, ColorPalette::Orange, ThemeMode::Dark);

        let reloaded = load_config(&path);
        assert_eq!(reloaded.color_palette, ColorPalette::Orange);
        assert_eq!(reloaded.theme_mode, ThemeMode::Dark);
        assert_eq!(reloaded.drafts_db_path, "elsewhere.db");
    }

    #[test]
    fn persist_theme_replaces_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messenger.json");
        fs::write(&path, "[1, 2").unwrap();

        persist_theme(path.as_path(), ColorPalette::Purple, ThemeMode::Light);

        let reloaded = load_config(&path);
        assert_eq!(reloaded.color_palette, ColorPalette::Purple);
        assert_eq!(reloaded.drafts_db_path, DEFAULT_DRAFTS_DB);
        assert_eq!(reloaded.current_user_role, Role::User);
    }
}
