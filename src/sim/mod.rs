//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - One call to `tick` per displayed frame
//! - Seeded RNG only
//! - Output goes through `GameEvent`s, never direct I/O

pub mod collision;
pub mod effects;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{avatar_overlaps, has_escaped};
pub use effects::{AvatarStyle, EffectTimers};
pub use particles::{spawn_burst, update_particles};
pub use spawn::{SpawnClock, spawn_insect, spawn_life_insect};
pub use state::{
    AudioCue, Avatar, GameEvent, GamePhase, GameState, INSECT_GLYPHS, Insect, InsectKind,
    LIFE_GLYPH, Particle,
};
pub use tick::{TickInput, tick};
