//! Scribbly blob outlines for the spider and enemies

use glam::Vec2;
use rand::Rng;

/// Points around the outline
pub const BLOB_POINTS: usize = 333;
/// Smallest spoke length
pub const BLOB_INNER_RADIUS: f32 = 5.0;

/// Closed polyline around `center` with a random spoke length per point.
/// Spokes fall in [5, radius); tiny radii collapse to a plain circle.
pub fn blob_outline<R: Rng>(rng: &mut R, center: Vec2, radius: f32) -> Vec<Vec2> {
    let inner = BLOB_INNER_RADIUS.min(radius);
    (0..BLOB_POINTS)
        .map(|i| {
            let angle = (i as f32 / BLOB_POINTS as f32) * std::f32::consts::TAU;
            let r = if inner < radius {
                rng.random_range(inner..radius)
            } else {
                radius
            };
            center + Vec2::new(angle.cos(), angle.sin()) * r
        })
        .collect()
}
