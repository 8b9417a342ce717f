//! Session driver
//!
//! Owns one `GameState` plus pending input, and runs a whole frame:
//! tick, forward events to the collaborators, draw.

use glam::Vec2;

use crate::platform::{AudioSink, ScoreDisplay};
use crate::renderer::{Renderer, draw_frame, draw_game_over};
use crate::sim::{GameEvent, GameState, TickInput, spawn_insect, tick};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Halt,
}

/// Game instance holding all session state
pub struct Game {
    pub state: GameState,
    pub input: TickInput,
}

impl Game {
    pub fn new(seed: u64, field: Vec2) -> Self {
        log::info!("New session (seed {}, field {}x{})", seed, field.x, field.y);
        Self {
            state: GameState::new(seed, field),
            input: TickInput::default(),
        }
    }

    /// Throw the session away and start over on the same field
    pub fn restart(&mut self, seed: u64) {
        let field = self.input.viewport.unwrap_or(self.state.field);
        *self = Self::new(seed, field);
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.input.pointer = Some(pos);
    }

    pub fn resize(&mut self, size: Vec2) {
        self.input.viewport = Some(size);
    }

    /// Timed spawner entry point
    pub fn spawn_insect(&mut self) {
        spawn_insect(&mut self.state);
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Push the current readouts (session start / restart)
    pub fn announce<D: ScoreDisplay + ?Sized>(&self, display: &mut D) {
        display.set_score(self.state.score);
        display.set_lives(self.state.lives);
    }

    /// Run one frame
    pub fn frame<R, A, D>(&mut self, renderer: &mut R, audio: &mut A, display: &mut D) -> FrameOutcome
    where
        R: Renderer + ?Sized,
        A: AudioSink + ?Sized,
        D: ScoreDisplay + ?Sized,
    {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);

        for event in self.state.drain_events() {
            match event {
                GameEvent::Cue(cue) => audio.play(cue),
                GameEvent::ScoreChanged(score) => display.set_score(score),
                GameEvent::LivesChanged(lives) => display.set_lives(lives),
                GameEvent::GameOver { score } => log::info!("Final score: {}", score),
            }
        }

        if self.state.is_over() {
            draw_game_over(&self.state, renderer);
            FrameOutcome::Halt
        } else {
            draw_frame(&self.state, renderer);
            FrameOutcome::Continue
        }
    }
}
