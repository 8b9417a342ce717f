//! Insect spawning
//!
//! Normal/enemy insects come from a wall-clock timer the host owns. Life
//! pickups are spawned by `tick` when the player is down to one life.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, INSECT_GLYPHS, Insect, InsectKind, LIFE_GLYPH};
use crate::consts::*;

/// Drop one timed insect (20% enemies) at a random x along the top edge.
/// Ignored once the session is over.
pub fn spawn_insect(state: &mut GameState) {
    if state.is_over() {
        return;
    }

    let x = state.rng.random::<f32>() * state.field.x;
    let speed = state.rng.random_range(INSECT_SPEED_MIN..INSECT_SPEED_MAX);
    let (kind, glyph) = if state.rng.random_bool(ENEMY_CHANCE) {
        (InsectKind::Enemy, None)
    } else {
        let idx = state.rng.random_range(0..INSECT_GLYPHS.len());
        (InsectKind::Normal, Some(INSECT_GLYPHS[idx]))
    };

    let id = state.next_entity_id();
    log::debug!("spawn #{id} {kind:?} at x={x:.0} speed={speed:.2}");
    state.insects.push(Insect {
        id,
        pos: Vec2::new(x, 0.0),
        size: INSECT_SIZE,
        speed,
        kind,
        glyph,
    });
}

/// Drop a heart that gives back a life
pub fn spawn_life_insect(state: &mut GameState) {
    let x = state.rng.random::<f32>() * state.field.x;
    let speed = state
        .rng
        .random_range(LIFE_INSECT_SPEED_MIN..LIFE_INSECT_SPEED_MAX);

    let id = state.next_entity_id();
    log::debug!("spawn #{id} life pickup at x={x:.0}");
    state.insects.push(Insect {
        id,
        pos: Vec2::new(x, 0.0),
        size: LIFE_INSECT_SIZE,
        speed,
        kind: InsectKind::LifePickup,
        glyph: Some(LIFE_GLYPH),
    });
}

/// Fixed-period clock for hosts that only know frame deltas.
/// The browser build uses `setInterval` instead.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    period_ms: f64,
    elapsed_ms: f64,
}

impl Default for SpawnClock {
    fn default() -> Self {
        Self::new(SPAWN_PERIOD_MS)
    }
}

impl SpawnClock {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Add elapsed time, returning how many spawns came due
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        let mut due = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            due += 1;
        }
        due
    }
}
