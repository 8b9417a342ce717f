//! Canvas 2D backend

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{RAINBOW_INNER_RADIUS, RAINBOW_STOPS, Renderer, StrokeStyle, blob_outline};
use crate::platform::PlatformError;

const LINE_WIDTH: f64 = 2.0;
const FONT_FAMILY: &str = "Arial";

/// Draws onto an `HtmlCanvasElement` via its 2D context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Blob wobble only; independent from the session RNG
    rng: Pcg32,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, PlatformError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(PlatformError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::NoContext)?;

        Ok(Self {
            canvas,
            ctx,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Match the backing store to the viewport
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_stroke(&self, center: Vec2, radius: f32, stroke: StrokeStyle) {
        match stroke {
            StrokeStyle::Solid(color) => self.ctx.set_stroke_style_str(color),
            StrokeStyle::Rainbow => {
                let (x, y) = (center.x as f64, center.y as f64);
                match self.ctx.create_radial_gradient(
                    x,
                    y,
                    RAINBOW_INNER_RADIUS as f64,
                    x,
                    y,
                    radius as f64,
                ) {
                    Ok(gradient) => {
                        for (offset, color) in RAINBOW_STOPS {
                            gradient.add_color_stop(offset, color).ok();
                        }
                        self.ctx.set_stroke_style_canvas_gradient(&gradient);
                    }
                    Err(e) => {
                        log::warn!("Gradient failed: {:?}", e);
                        self.ctx.set_stroke_style_str("white");
                    }
                }
            }
        }
    }

    fn set_text_layout(&self, size_px: f32, bold: bool) {
        let weight = if bold { "bold " } else { "" };
        self.ctx
            .set_font(&format!("{weight}{size_px}px {FONT_FAMILY}"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_blob(&mut self, center: Vec2, radius: f32, stroke: StrokeStyle) {
        let outline = blob_outline(&mut self.rng, center, radius);
        self.ctx.begin_path();
        for p in outline {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.set_stroke(center, radius, stroke);
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.stroke();
    }

    fn draw_glyph(&mut self, text: &str, center: Vec2, size_px: f32, stroke: &str, fill: &str) {
        let (x, y) = (center.x as f64, center.y as f64);
        self.set_text_layout(size_px, true);
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.stroke_text(text, x, y).ok();
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill_text(text, x, y).ok();
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.fill();
    }

    fn draw_centered_text(&mut self, text: &str, center: Vec2, size_px: f32, color: &str) {
        self.set_text_layout(size_px, false);
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_text(text, center.x as f64, center.y as f64)
            .ok();
    }
}
