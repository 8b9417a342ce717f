//! Rendering module
//!
//! The simulation never draws. After each tick the host hands the state to
//! `draw_frame` together with something that implements `Renderer`.

pub mod blob;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use blob::blob_outline;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;

use crate::consts::GAME_OVER_TEXT_SIZE;
use crate::sim::{AvatarStyle, GameState, InsectKind};

/// Rainbow gradient stops used while celebrating (offset, colour)
pub const RAINBOW_STOPS: [(f32, &str); 6] = [
    (0.0, "red"),
    (0.2, "orange"),
    (0.4, "yellow"),
    (0.6, "green"),
    (0.8, "blue"),
    (1.0, "purple"),
];

/// Inner radius of the rainbow radial gradient
pub const RAINBOW_INNER_RADIUS: f32 = 5.0;

/// Outline style for blob shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    Solid(&'static str),
    /// Radial rainbow centred on the blob, spanning its radius
    Rainbow,
}

impl From<AvatarStyle> for StrokeStyle {
    fn from(style: AvatarStyle) -> Self {
        match style {
            AvatarStyle::Rainbow => StrokeStyle::Rainbow,
            AvatarStyle::Gray => StrokeStyle::Solid("gray"),
            AvatarStyle::Default => StrokeStyle::Solid("white"),
        }
    }
}

/// Drawing surface the game needs
pub trait Renderer {
    fn clear(&mut self, width: f32, height: f32);
    /// Irregular scribbly circle
    fn draw_blob(&mut self, center: Vec2, radius: f32, stroke: StrokeStyle);
    fn draw_glyph(&mut self, text: &str, center: Vec2, size_px: f32, stroke: &str, fill: &str);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn draw_centered_text(&mut self, text: &str, center: Vec2, size_px: f32, color: &str);
}

/// Draw one running frame: spider, insects, then particles
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.clear(state.field.x, state.field.y);

    let avatar = &state.avatar;
    renderer.draw_blob(
        avatar.pos,
        avatar.size,
        state.avatar_style.into(),
    );

    for insect in &state.insects {
        match (insect.kind, insect.glyph) {
            (InsectKind::Enemy, _) | (_, None) => {
                renderer.draw_blob(insect.pos, insect.size, StrokeStyle::Solid("red"))
            }
            (kind, Some(glyph)) => renderer.draw_glyph(
                glyph,
                insect.pos,
                insect.size,
                kind.glyph_stroke(),
                "white",
            ),
        }
    }

    for particle in &state.particles {
        renderer.draw_filled_circle(particle.pos, particle.size, particle.color);
    }
}

/// Terminal screen
pub fn draw_game_over<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.clear(state.field.x, state.field.y);
    renderer.draw_centered_text(
        "Game Over",
        state.field / 2.0,
        GAME_OVER_TEXT_SIZE,
        "white",
    );
}
