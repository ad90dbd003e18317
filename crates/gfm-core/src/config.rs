//! Settings management for gfm.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::launch::{OpenRequest, OpenTarget};

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV: &str = "GFM_CONFIG";

/// Keys accepted by [`Settings::set`].
pub const KEYS: [&str; 5] = [
    "projects_directory",
    "terminal.app",
    "terminal.open_after_create",
    "editor.app",
    "editor.open_after_create",
];

/// User settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory whose children are scanned for repositories.
    #[serde(default = "default_projects_directory")]
    pub projects_directory: PathBuf,

    /// Terminal to open after a branch is created.
    #[serde(default = "default_terminal")]
    pub terminal: AppSettings,

    /// Editor to open after a branch is created.
    #[serde(default = "default_editor")]
    pub editor: AppSettings,
}

impl Settings {
    /// Location of the settings file: `$GFM_CONFIG`, or `gfm/config.toml`
    /// under the platform config directory.
    ///
    /// # Errors
    /// Returns `ConfigDirUnavailable` if neither is available.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("gfm").join("config.toml"))
            .ok_or(Error::ConfigDirUnavailable)
    }

    /// Load settings from a TOML file, defaulting when the file is missing.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a TOML file, creating parent directories.
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the settings as the TOML that [`Settings::save`] writes.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Update one setting from its string form.
    ///
    /// An empty value clears an application path.
    ///
    /// # Errors
    /// Returns `InvalidSetting` for an unknown key or a malformed value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "projects_directory" => {
                if value.trim().is_empty() {
                    return Err(invalid(key, "projects directory cannot be empty"));
                }
                self.projects_directory = PathBuf::from(value);
            }
            "terminal.app" => self.terminal.app = app_path(value),
            "editor.app" => self.editor.app = app_path(value),
            "terminal.open_after_create" => {
                self.terminal.open_after_create = parse_bool(key, value)?;
            }
            "editor.open_after_create" => {
                self.editor.open_after_create = parse_bool(key, value)?;
            }
            _ => {
                return Err(invalid(
                    key,
                    &format!("unknown key, expected one of: {}", KEYS.join(", ")),
                ));
            }
        }
        Ok(())
    }

    /// Applications to open `path` in after a branch is created.
    ///
    /// A request is produced only when its flag is on and an application is
    /// set. Terminal comes before editor.
    #[must_use]
    pub fn open_requests(&self, path: &Path) -> Vec<OpenRequest> {
        [
            (OpenTarget::Terminal, &self.terminal),
            (OpenTarget::Editor, &self.editor),
        ]
        .into_iter()
        .filter(|(_, app)| app.open_after_create)
        .filter_map(|(target, app)| {
            app.app.as_ref().map(|app| OpenRequest {
                target,
                app: app.clone(),
                path: path.to_path_buf(),
            })
        })
        .collect()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            projects_directory: default_projects_directory(),
            terminal: default_terminal(),
            editor: default_editor(),
        }
    }
}

/// An external application and whether to open it after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Path to the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<PathBuf>,

    /// Open the repository in this application after creating a branch.
    #[serde(default)]
    pub open_after_create: bool,
}

fn default_projects_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Developer")
}

fn default_terminal() -> AppSettings {
    AppSettings {
        app: cfg!(target_os = "macos")
            .then(|| PathBuf::from("/System/Applications/Utilities/Terminal.app")),
        open_after_create: false,
    }
}

fn default_editor() -> AppSettings {
    AppSettings {
        app: cfg!(target_os = "macos").then(|| PathBuf::from("/System/Applications/TextEdit.app")),
        open_after_create: false,
    }
}

fn app_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, &format!("expected true or false, got '{value}'"))),
    }
}

fn invalid(key: &str, reason: &str) -> Error {
    Error::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
