//! Runtime settings
//!
//! Read once at startup: from an inline JSON `<script id="spider-config">`
//! in the browser, or from a JSON file passed on the command line natively.
//! Never written back.

use serde::{Deserialize, Serialize};

use crate::platform::PlatformError;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Fixed session seed; random per session when absent
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// Element id of the inline config block
    pub const CONFIG_ELEMENT_ID: &'static str = "spider-config";

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, PlatformError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Volume actually applied to cues
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json.map(|j| Self::from_json(&j)) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings from page");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring bad settings: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load settings from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, PlatformError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
