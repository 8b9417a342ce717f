//! Per-frame simulation tick
//!
//! Core game loop step. Called once per displayed frame by the host.

use glam::Vec2;

use super::collision::{avatar_overlaps, has_escaped};
use super::particles::{spawn_burst, update_particles};
use super::spawn::spawn_life_insect;
use super::state::{AudioCue, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input gathered since the previous frame (last write wins)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position (mouse or first touch)
    pub pointer: Option<Vec2>,
    /// New viewport size after a resize
    pub viewport: Option<Vec2>,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.is_over() {
        return;
    }

    if state.lives <= 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over after {} frames, score {}",
            state.frame,
            state.score
        );
        return;
    }

    state.frame += 1;

    if let Some(size) = input.viewport {
        state.field = size;
    }
    if let Some(pos) = input.pointer {
        state.avatar.pos = pos;
    }

    if state.effects.check_celebration(state.score) {
        log::debug!("Celebrating score {}", state.score);
        state.events.push(GameEvent::Cue(AudioCue::BigWin));
    }
    state.avatar_style = state.effects.avatar_style();

    resolve_insects(state);
    update_particles(&mut state.particles);

    // Keep one heart falling while the player is on their last life
    if state.lives == 1 && !state.has_life_insect() {
        spawn_life_insect(state);
    }

    state.effects.decay();
}

/// Move every insect, then resolve catches and escapes.
/// A caught insect is never also checked for escaping.
fn resolve_insects(state: &mut GameState) {
    let mut insects = std::mem::take(&mut state.insects);

    insects.retain_mut(|insect| {
        insect.fall();

        if avatar_overlaps(&state.avatar, insect) {
            log::debug!("caught #{} {:?}", insect.id, insect.kind);
            state.apply_payoff(insect.kind.payoff());
            spawn_burst(
                &mut state.particles,
                &mut state.rng,
                insect.pos,
                BURST_COUNT,
                insect.kind.particle_color(),
            );
            return false;
        }

        if has_escaped(insect, state.field.y) {
            log::debug!("escaped #{} {:?}", insect.id, insect.kind);
            if insect.kind.penalized_on_escape() {
                state.record_escape();
            }
            return false;
        }

        true
    });

    state.insects = insects;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::spawn_insect;
    use crate::sim::state::{Insect, InsectKind, LIFE_GLYPH};
    use proptest::prelude::*;

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);

    fn push_insect(state: &mut GameState, kind: InsectKind, pos: Vec2, speed: f32) {
        let id = state.next_entity_id();
        let glyph = match kind {
            InsectKind::Normal => Some("🐞"),
            InsectKind::Enemy => None,
            InsectKind::LifePickup => Some(LIFE_GLYPH),
        };
        state.insects.push(Insect {
            id,
            pos,
            size: INSECT_SIZE,
            speed,
            kind,
            glyph,
        });
    }

    /// Insect sitting on the spider
    fn push_on_avatar(state: &mut GameState, kind: InsectKind) {
        let pos = state.avatar.pos;
        push_insect(state, kind, pos, 1.0);
    }

    /// Insect about to fall off the bottom, far from the spider
    fn push_escaping(state: &mut GameState, kind: InsectKind) {
        push_insect(state, kind, Vec2::new(10.0, FIELD.y - 1.0), 2.0);
    }

    fn cues(events: &[GameEvent]) -> Vec<AudioCue> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Cue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_catch_normal_insect() {
        let mut state = GameState::new(1, FIELD);
        push_on_avatar(&mut state, InsectKind::Normal);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.insects.is_empty());
        let events = state.drain_events();
        assert_eq!(cues(&events), vec![AudioCue::SmallWin]);
        assert!(events.contains(&GameEvent::ScoreChanged(1)));
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert!(state.particles.iter().all(|p| p.color == "yellow"));
    }

    #[test]
    fn test_catch_enemy() {
        let mut state = GameState::new(1, FIELD);
        push_on_avatar(&mut state, InsectKind::Enemy);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.score, 0);
        // Set to 30 during the pass, then one frame of decay
        assert_eq!(state.effects.de_celebration, EFFECT_FRAMES - 1);
        let events = state.drain_events();
        assert_eq!(cues(&events), vec![AudioCue::Loss]);
        assert!(events.contains(&GameEvent::LivesChanged(STARTING_LIVES - 1)));
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert!(state.particles.iter().all(|p| p.color == "red"));
    }

    #[test]
    fn test_catch_life_pickup() {
        let mut state = GameState::new(1, FIELD);
        push_on_avatar(&mut state, InsectKind::LifePickup);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, STARTING_LIVES + 1);
        assert_eq!(cues(&state.drain_events()), vec![AudioCue::SmallWin]);
        assert!(state.particles.iter().all(|p| p.color == "green"));
    }

    #[test]
    fn test_three_escapes_cost_a_life() {
        let mut state = GameState::new(1, FIELD);

        push_escaping(&mut state, InsectKind::Normal);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.escaped_normals, 1);

        push_escaping(&mut state, InsectKind::Normal);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.escaped_normals, 2);
        assert_eq!(state.lives, STARTING_LIVES);
        state.drain_events();

        push_escaping(&mut state, InsectKind::Normal);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.escaped_normals, 0);
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(cues(&state.drain_events()), vec![AudioCue::Loss]);
        assert!(state.insects.is_empty());
    }

    #[test]
    fn test_enemy_and_pickup_escapes_are_free() {
        let mut state = GameState::new(1, FIELD);
        for _ in 0..4 {
            push_escaping(&mut state, InsectKind::Enemy);
            push_escaping(&mut state, InsectKind::LifePickup);
        }
        tick(&mut state, &TickInput::default());

        assert!(state.insects.is_empty());
        assert_eq!(state.escaped_normals, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_catch_below_field_is_not_an_escape() {
        let mut state = GameState::new(1, FIELD);
        // Spider parked at the bottom edge
        let input = TickInput {
            pointer: Some(Vec2::new(100.0, FIELD.y)),
            ..Default::default()
        };
        push_insect(&mut state, InsectKind::Normal, Vec2::new(100.0, FIELD.y - 1.0), 3.0);

        tick(&mut state, &input);

        assert_eq!(state.score, 1);
        assert_eq!(state.escaped_normals, 0);
    }

    #[test]
    fn test_pointer_and_viewport_applied() {
        let mut state = GameState::new(1, FIELD);
        let input = TickInput {
            pointer: Some(Vec2::new(12.0, 34.0)),
            viewport: Some(Vec2::new(1024.0, 768.0)),
        };
        tick(&mut state, &input);
        assert_eq!(state.avatar.pos, Vec2::new(12.0, 34.0));
        assert_eq!(state.field, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_celebration_on_tenth_catch() {
        let mut state = GameState::new(1, FIELD);
        state.score = 9;
        push_on_avatar(&mut state, InsectKind::Normal);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        state.drain_events();

        // Milestone is noticed at the start of the next frame
        tick(&mut state, &TickInput::default());
        assert_eq!(cues(&state.drain_events()), vec![AudioCue::BigWin]);
        assert_eq!(state.effects.celebration, EFFECT_FRAMES - 1);

        for _ in 0..(EFFECT_FRAMES * 2) {
            tick(&mut state, &TickInput::default());
        }
        assert!(!cues(&state.drain_events()).contains(&AudioCue::BigWin));
    }

    #[test]
    fn test_life_pickup_when_on_last_life() {
        let mut state = GameState::new(1, FIELD);
        state.lives = 1;
        // Spider out of the way of the falling heart
        let input = TickInput {
            pointer: Some(Vec2::new(-500.0, -500.0)),
            ..Default::default()
        };

        tick(&mut state, &input);
        let hearts = |s: &GameState| {
            s.insects
                .iter()
                .filter(|i| i.kind == InsectKind::LifePickup)
                .count()
        };
        assert_eq!(hearts(&state), 1);

        tick(&mut state, &input);
        tick(&mut state, &input);
        assert_eq!(hearts(&state), 1);
    }

    #[test]
    fn test_no_life_pickup_with_spare_lives() {
        let mut state = GameState::new(1, FIELD);
        state.lives = 2;
        tick(&mut state, &TickInput::default());
        assert!(!state.has_life_insect());
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut state = GameState::new(1, FIELD);
        state.lives = 1;
        push_on_avatar(&mut state, InsectKind::Enemy);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Running);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        let over: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .collect();
        assert_eq!(over, vec![GameEvent::GameOver { score: 0 }]);

        // Nothing moves any more
        push_on_avatar(&mut state, InsectKind::Enemy);
        let frame = state.frame;
        let particles = state.particles.len();
        let y = state.insects[0].pos.y;
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.lives, 0);
        assert_eq!(state.frame, frame);
        assert_eq!(state.particles.len(), particles);
        assert_eq!(state.insects[0].pos.y, y);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, FIELD);
        let mut state2 = GameState::new(99999, FIELD);

        for frame in 0..600u32 {
            let input = TickInput {
                pointer: Some(Vec2::new((frame * 7 % 800) as f32, 500.0)),
                ..Default::default()
            };
            if frame % 60 == 0 {
                spawn_insect(&mut state1);
                spawn_insect(&mut state2);
            }
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.insects.len(), state2.insects.len());
        assert_eq!(state1.particles.len(), state2.particles.len());
    }

    proptest! {
        #[test]
        fn session_invariants_hold(seed in any::<u64>(), xs in prop::collection::vec(0f32..800.0, 1..400)) {
            let mut state = GameState::new(seed, FIELD);
            let mut last_score = 0;
            for (frame, x) in xs.into_iter().enumerate() {
                if frame % 20 == 0 {
                    spawn_insect(&mut state);
                }
                let input = TickInput { pointer: Some(Vec2::new(x, 550.0)), ..Default::default() };
                tick(&mut state, &input);

                prop_assert!(state.score >= last_score);
                last_score = state.score;
                prop_assert!(state.escaped_normals < ESCAPE_THRESHOLD);
                prop_assert!(state.particles.iter().all(|p| p.life > 0));
                if state.lives == 1 {
                    let hearts = state.insects.iter().filter(|i| i.kind == InsectKind::LifePickup).count();
                    prop_assert!(hearts <= 1);
                }
                if state.is_over() {
                    prop_assert!(state.lives <= 0);
                }
            }
        }
    }
}
