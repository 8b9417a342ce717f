//! Game state and core simulation types
//!
//! One `GameState` is one play session. Starting over means building a new one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::effects::{AvatarStyle, EffectTimers};
use crate::consts::*;

/// Glyphs for normal insects (the cricket appears twice on purpose)
pub const INSECT_GLYPHS: [&str; 8] = ["🦋", "🐝", "🐞", "🦗", "🐛", "🦂", "🦗", "🦟"];

/// Glyph for the life pickup
pub const LIFE_GLYPH: &str = "❤️";

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frames are simulated and drawn
    Running,
    /// Lives ran out; absorbing
    GameOver,
}

/// Named audio cues the simulation asks the host to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    SmallWin,
    BigWin,
    Loss,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::SmallWin => "small-win",
            AudioCue::BigWin => "big-win",
            AudioCue::Loss => "loss",
        }
    }
}

/// Things the host has to react to, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Cue(AudioCue),
    ScoreChanged(u32),
    LivesChanged(i32),
    GameOver { score: u32 },
}

/// What catching an insect does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payoff {
    pub score: u32,
    pub lives: i32,
    pub cue: AudioCue,
    /// Start the gray de-celebration effect
    pub de_celebrate: bool,
}

/// Insect kinds. The kind decides payoff, escape penalty, colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsectKind {
    Normal,
    Enemy,
    LifePickup,
}

impl InsectKind {
    /// Effect of the spider catching this insect
    pub fn payoff(&self) -> Payoff {
        match self {
            InsectKind::Normal => Payoff {
                score: 1,
                lives: 0,
                cue: AudioCue::SmallWin,
                de_celebrate: false,
            },
            InsectKind::Enemy => Payoff {
                score: 0,
                lives: -1,
                cue: AudioCue::Loss,
                de_celebrate: true,
            },
            InsectKind::LifePickup => Payoff {
                score: 0,
                lives: 1,
                cue: AudioCue::SmallWin,
                de_celebrate: false,
            },
        }
    }

    /// Whether falling off the bottom counts toward the escape penalty
    pub fn penalized_on_escape(&self) -> bool {
        matches!(self, InsectKind::Normal)
    }

    /// Burst colour when caught
    pub fn particle_color(&self) -> &'static str {
        match self {
            InsectKind::Normal => "yellow",
            InsectKind::Enemy => "red",
            InsectKind::LifePickup => "green",
        }
    }

    /// Glyph outline colour (enemies are drawn as blobs instead)
    pub fn glyph_stroke(&self) -> &'static str {
        match self {
            InsectKind::LifePickup => "green",
            _ => "black",
        }
    }
}

/// The player's spider
#[derive(Debug, Clone)]
pub struct Avatar {
    pub pos: Vec2,
    pub size: f32,
}

impl Avatar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: AVATAR_SIZE,
        }
    }
}

/// A falling insect
#[derive(Debug, Clone)]
pub struct Insect {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per frame, always downward
    pub speed: f32,
    pub kind: InsectKind,
    /// None for enemies
    pub glyph: Option<&'static str>,
}

impl Insect {
    /// Move down by one frame's worth
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }
}

/// A burst particle (visual only)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: &'static str,
    /// Frames left
    pub life: u32,
    pub size: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Can go to zero or below; that ends the session
    pub lives: i32,
    /// Normal insects escaped since the last escape penalty
    pub escaped_normals: u8,
    pub effects: EffectTimers,
    /// Spider look for this frame, latched before insects move
    pub avatar_style: AvatarStyle,
    pub avatar: Avatar,
    pub insects: Vec<Insect>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Play field size (equals the viewport)
    pub field: Vec2,
    /// Frames simulated so far
    pub frame: u64,
    /// Pending events for the host, drained once per frame
    pub events: Vec<GameEvent>,
    /// Next insect ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session on a field of the given size
    pub fn new(seed: u64, field: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            lives: STARTING_LIVES,
            escaped_normals: 0,
            effects: EffectTimers::default(),
            avatar_style: AvatarStyle::Default,
            avatar: Avatar::new(field / 2.0),
            insects: Vec::new(),
            particles: Vec::new(),
            field,
            frame: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new insect ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// True while a life pickup is still falling
    pub fn has_life_insect(&self) -> bool {
        self.insects
            .iter()
            .any(|i| i.kind == InsectKind::LifePickup)
    }

    /// Apply a catch payoff and queue the matching events
    pub fn apply_payoff(&mut self, payoff: Payoff) {
        if payoff.score > 0 {
            self.score += payoff.score;
            self.events.push(GameEvent::ScoreChanged(self.score));
        }
        if payoff.lives != 0 {
            self.lives += payoff.lives;
            self.events.push(GameEvent::LivesChanged(self.lives));
        }
        if payoff.de_celebrate {
            self.effects.start_de_celebration();
        }
        self.events.push(GameEvent::Cue(payoff.cue));
    }

    /// Count a normal insect that got away; every third one costs a life
    pub fn record_escape(&mut self) {
        self.escaped_normals += 1;
        if self.escaped_normals >= ESCAPE_THRESHOLD {
            self.escaped_normals = 0;
            self.lives -= 1;
            self.events.push(GameEvent::LivesChanged(self.lives));
            self.events.push(GameEvent::Cue(AudioCue::Loss));
        }
    }

    /// Take the pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
