//! Persistence of the display preference.
//!
//! The theme is the only state that survives a restart. It is stored as a
//! small versioned JSON document; anything unreadable is ignored and the
//! caller falls back to its default.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Preference file format version. Increment when format changes.
const PREFERENCES_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(AppError::ValidationError(format!(
                "Unknown theme '{}' (expected light or dark)",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferencesDocument {
    version: u32,
    theme: Theme,
}

/// File-backed store for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored theme.
    ///
    /// Returns None if the file doesn't exist or is not a valid preference document.
    pub fn load(&self) -> Result<Option<Theme>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Preference file does not exist");
            return Ok(None);
        }

        let content = fs::read(&self.path).map_err(|e| {
            AppError::PersistenceError(format!("Failed to read preference file: {}", e))
        })?;

        let document: PreferencesDocument = match serde_json::from_slice(&content) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Invalid preference file, ignoring");
                return Ok(None);
            }
        };

        if document.version != PREFERENCES_VERSION {
            tracing::warn!(
                path = %self.path.display(),
                file_version = document.version,
                expected_version = PREFERENCES_VERSION,
                "Preference version mismatch, ignoring"
            );
            return Ok(None);
        }

        tracing::debug!(path = %self.path.display(), theme = %document.theme, "Theme preference loaded");
        Ok(Some(document.theme))
    }

    /// Write the theme, creating parent directories as needed.
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::PersistenceError(format!(
                        "Failed to create preference directory: {}",
                        e
                    ))
                })?;
            }
        }

        let document = PreferencesDocument {
            version: PREFERENCES_VERSION,
            theme,
        };
        let json = serde_json::to_string(&document).map_err(|e| {
            AppError::PersistenceError(format!("Failed to encode preference: {}", e))
        })?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::PersistenceError(format!("Failed to write preference file: {}", e))
        })?;

        tracing::debug!(path = %self.path.display(), theme = %theme, "Theme preference saved");
        Ok(())
    }

    /// Stored theme if present, otherwise `fallback`.
    pub fn load_or(&self, fallback: Theme) -> Result<Theme> {
        Ok(self.load()?.unwrap_or(fallback))
    }
}
