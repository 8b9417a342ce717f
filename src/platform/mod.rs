//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Audio cue playback
//! - Score/lives readouts
//! - Setup errors at the platform edge

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod headless;

use crate::sim::AudioCue;

/// Fire-and-forget cue playback. Failures stay inside the implementation.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Where the two numeric readouts end up
pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32);
    fn set_lives(&mut self, lives: i32);
}

/// Errors that can happen while wiring the game to its host
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Missing browser object: {0}")]
    Missing(&'static str),
    #[error("Canvas has no 2d context")]
    NoContext,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}
