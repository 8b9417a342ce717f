//! Collaborators for running without a browser (native binary, soak runs)

use glam::Vec2;

use super::{AudioSink, ScoreDisplay};
use crate::renderer::{Renderer, StrokeStyle};
use crate::sim::AudioCue;

/// Logs cues and keeps a tally per cue
#[derive(Debug, Default)]
pub struct LogAudio {
    pub small_wins: u32,
    pub big_wins: u32,
    pub losses: u32,
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("cue: {}", cue.as_str());
        match cue {
            AudioCue::SmallWin => self.small_wins += 1,
            AudioCue::BigWin => self.big_wins += 1,
            AudioCue::Loss => self.losses += 1,
        }
    }
}

/// Keeps the latest readouts and logs lives changes
#[derive(Debug, Default)]
pub struct LogScoreboard {
    pub score: u32,
    pub lives: i32,
}

impl ScoreDisplay for LogScoreboard {
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_lives(&mut self, lives: i32) {
        if lives != self.lives {
            log::info!("Lives: {}", lives);
        }
        self.lives = lives;
    }
}

/// Discards drawing but counts frames and the terminal message
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
    pub last_text: Option<String>,
}

impl Renderer for NullRenderer {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.frames += 1;
    }

    fn draw_blob(&mut self, _center: Vec2, _radius: f32, _stroke: StrokeStyle) {}

    fn draw_glyph(&mut self, _text: &str, _center: Vec2, _size_px: f32, _stroke: &str, _fill: &str) {}

    fn draw_filled_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {}

    fn draw_centered_text(&mut self, text: &str, _center: Vec2, _size_px: f32, _color: &str) {
        self.last_text = Some(text.to_string());
    }
}
