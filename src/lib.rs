//! Spider Catch - catch falling insects, dodge the red scribbles
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (spawning, collisions, scoring, effects)
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `platform`: Audio/display collaborators and platform errors
//! - `game`: Session driver tying input, simulation and output together
//! - `settings`: Runtime configuration

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of a session
    pub const STARTING_LIVES: i32 = 5;

    /// Spider size (blob radius; half of it counts for collisions)
    pub const AVATAR_SIZE: f32 = 50.0;

    /// Normal/enemy insect size (glyph px / blob radius)
    pub const INSECT_SIZE: f32 = 30.0;
    /// Fall speed range for timed insects (pixels per frame)
    pub const INSECT_SPEED_MIN: f32 = 2.0;
    pub const INSECT_SPEED_MAX: f32 = 5.0;
    /// Chance that a timed spawn is an enemy
    pub const ENEMY_CHANCE: f64 = 0.2;
    /// Wall-clock period of the timed spawner
    pub const SPAWN_PERIOD_MS: f64 = 1000.0;

    /// Life pickup size and fall speed range
    pub const LIFE_INSECT_SIZE: f32 = 40.0;
    pub const LIFE_INSECT_SPEED_MIN: f32 = 2.0;
    pub const LIFE_INSECT_SPEED_MAX: f32 = 4.0;

    /// Normal insects allowed to escape before a life is lost
    pub const ESCAPE_THRESHOLD: u8 = 3;

    /// Particles per burst
    pub const BURST_COUNT: usize = 20;
    pub const PARTICLE_SIZE: f32 = 2.0;
    /// Particle lifetime in frames
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_SPEED_MIN: f32 = 1.0;
    pub const PARTICLE_SPEED_MAX: f32 = 4.0;

    /// Celebration / de-celebration duration in frames
    pub const EFFECT_FRAMES: u32 = 30;
    /// Score milestone that triggers a celebration
    pub const CELEBRATION_EVERY: u32 = 10;

    /// Game over text size (px)
    pub const GAME_OVER_TEXT_SIZE: f32 = 48.0;
}
