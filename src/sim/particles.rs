//! Burst particles
//!
//! Purely cosmetic. A burst sprays particles in random directions; each lives
//! a fixed number of frames.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::consts::*;

/// Push `count` particles at `origin`, each with a random heading and speed
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    count: usize,
    color: &'static str,
) {
    particles.reserve(count);
    for _ in 0..count {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            life: PARTICLE_LIFE,
            size: PARTICLE_SIZE,
        });
    }
}

/// Advance every particle one frame, then drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
