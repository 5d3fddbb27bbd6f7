//! Configuration loading for termfolio
//!
//! Settings live in `~/.config/termfolio/config.toml` (overridable with
//! `--config`). Every field has a default, so a missing or partial file
//! always yields a working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use folio_core::prelude::*;
use folio_mail::MailConfig;

const CONFIG_DIR: &str = "termfolio";
const CONFIG_FILENAME: &str = "config.toml";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub typewriter: TypewriterSettings,
    pub mail: MailConfig,
    pub resume: ResumeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Event poll timeout in milliseconds (frame tick rate).
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    /// Base delay between typing ticks.
    pub type_delay_ms: u64,
    /// Hold on a fully-typed phrase before deletion starts.
    pub hold_ms: u64,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            type_delay_ms: crate::typewriter::DEFAULT_TYPE_DELAY_MS,
            hold_ms: crate::typewriter::DEFAULT_HOLD_MS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeSettings {
    /// Source file for the resume export. `None` disables the export key.
    pub path: Option<PathBuf>,
}

/// Default config file location (`~/.config/termfolio/config.toml`).
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the given path, or the default location.
///
/// A missing file yields defaults silently; an unreadable or malformed file
/// is logged and also yields defaults. Startup never fails on config.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    match std::fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Invalid config at {}: {e}", path.display());
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            Settings::default()
        }
        Err(e) => {
            warn!("Could not read config at {}: {e}", path.display());
            Settings::default()
        }
    }
}
