//! Pooled particle effects
//!
//! A fixed array of slots is allocated once. Emitting scans for the first
//! inactive slot; when every slot is busy the request is dropped without
//! error. Particles are purely cosmetic and never feed back into gameplay.

use glam::Vec2;

use super::rng::RandomSource;
use crate::color::{Rgba, channel};
use crate::heading_vector;

pub const DEFAULT_PARTICLE_CAPACITY: usize = 2000;
pub const BASE_SIZE: f32 = 4.0;
pub const DRIFT_PARTICLE_LIFETIME: f32 = 0.6;
pub const COLLISION_PARTICLE_LIFETIME: f32 = 0.4;
pub const SPEED_LINE_LIFETIME: f32 = 0.15;

/// Speed needed before speed lines appear
pub const SPEED_LINE_MIN_SPEED: f32 = 200.0;
/// Excess speed over which speed-line frequency ramps from 0 to 1
const SPEED_LINE_RAMP: f32 = 400.0;
/// Spawn distance behind the vehicle
const SPEED_LINE_OFFSET: f32 = 30.0;
/// Speed lines move at this fraction of vehicle speed
const SPEED_LINE_VELOCITY: f32 = 0.3;
/// Total trail spread (±half of this), degrees
const TRAIL_SPREAD_DEG: f32 = 30.0;
/// Velocity drag per tick
const DRAG: f32 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgba,
    /// Seconds remaining
    pub lifetime: f32,
    /// Lifetime at spawn, for fade-out
    pub max_lifetime: f32,
    pub size: f32,
    pub active: bool,
}

/// Fixed-capacity particle pool
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLE_CAPACITY)
    }
}

impl ParticleField {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.active)
    }

    /// Deactivate every particle (new run)
    pub fn clear(&mut self) {
        for p in &mut self.particles {
            p.active = false;
        }
    }

    /// First free slot in scan order, or `None` when the pool is exhausted
    fn available(&mut self) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| !p.active)
    }

    /// Age, move and fade every live particle
    pub fn update(&mut self, dt: f32) {
        for p in self.particles.iter_mut().filter(|p| p.active) {
            p.lifetime -= dt;
            if p.lifetime <= 0.0 {
                p.active = false;
                continue;
            }

            p.position += p.velocity * dt;
            p.velocity *= DRAG;

            let life_ratio = p.lifetime / p.max_lifetime;
            p.color.a = channel(255.0 * life_ratio);
            // Shrinks faster as it ages
            p.size *= DRAG + (1.0 - DRAG) * life_ratio;
        }
    }

    /// Neon sparks thrown out behind a drifting vehicle (2-4 per call).
    /// `velocity` is the direction of travel; particles fly the opposite way.
    pub fn emit_drift_trail(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        drift_amount: f32,
        rng: &mut dyn RandomSource,
    ) {
        let count = 2 + (drift_amount * 2.0) as usize;
        let reverse = velocity.y.atan2(velocity.x) + std::f32::consts::PI;

        for _ in 0..count {
            let Some(p) = self.available() else {
                return;
            };

            let spread = (rng.next_unit() - 0.5) * TRAIL_SPREAD_DEG;
            let speed = rng.range(20.0, 60.0);
            let angle = reverse + spread.to_radians();

            // Cyan toward magenta as the drift deepens
            let blend = drift_amount * 0.8 + rng.next_unit() * 0.2;
            let color = Rgba::new(
                channel(255.0 * blend),
                channel(255.0 * (1.0 - blend * 0.3)),
                255,
                200,
            );
            let lifetime = DRIFT_PARTICLE_LIFETIME * rng.range(0.7, 1.3);

            *p = Particle {
                position,
                velocity: Vec2::from_angle(angle) * speed,
                color,
                lifetime,
                max_lifetime: lifetime,
                size: BASE_SIZE * (1.0 + drift_amount * 0.5),
                active: true,
            };
        }
    }

    /// Orange-red burst in every direction (15-24 particles)
    pub fn emit_collision_burst(&mut self, position: Vec2, rng: &mut dyn RandomSource) {
        let count = 15 + (rng.next_unit() * 10.0) as usize;

        for _ in 0..count {
            let Some(p) = self.available() else {
                return;
            };

            let angle = rng.range(0.0, 360.0).to_radians();
            let speed = rng.range(150.0, 350.0);
            let color = Rgba::new(
                255,
                channel(100.0 + rng.next_unit() * 100.0),
                channel(rng.next_unit() * 50.0),
                255,
            );
            let lifetime = COLLISION_PARTICLE_LIFETIME * rng.range(0.5, 1.0);

            *p = Particle {
                position,
                velocity: Vec2::from_angle(angle) * speed,
                color,
                lifetime,
                max_lifetime: lifetime,
                size: BASE_SIZE * rng.range(0.8, 1.4),
                active: true,
            };
        }
    }

    /// At most one streak behind a fast vehicle; more likely the faster it goes
    pub fn emit_speed_lines(
        &mut self,
        position: Vec2,
        speed: f32,
        heading: f32,
        rng: &mut dyn RandomSource,
    ) {
        if speed < SPEED_LINE_MIN_SPEED {
            return;
        }

        let intensity = (speed - SPEED_LINE_MIN_SPEED) / SPEED_LINE_RAMP;
        if rng.next_unit() > intensity {
            return;
        }

        let Some(p) = self.available() else {
            return;
        };

        let forward = heading_vector(heading);
        *p = Particle {
            position: position - forward * SPEED_LINE_OFFSET,
            velocity: -forward * speed * SPEED_LINE_VELOCITY,
            color: Rgba::new(200, 255, 255, 150),
            lifetime: SPEED_LINE_LIFETIME,
            max_lifetime: SPEED_LINE_LIFETIME,
            size: BASE_SIZE * 0.5,
            active: true,
        };
    }
}
