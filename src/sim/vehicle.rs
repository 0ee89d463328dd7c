//! Player vehicle: arcade physics with drift
//!
//! Each fixed tick runs `apply_input` then `apply_physics`. Velocity is split
//! into a forward component (along the heading) and a lateral component
//! (perpendicular to it) that decay at different rates. Drifting loses more
//! forward grip *and* retains less lateral velocity per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::{Rgba, channel};
use crate::platform::InputState;
use crate::{heading_vector, wrap_degrees};

pub const MAX_SPEED: f32 = 600.0;
pub const ACCELERATION: f32 = 800.0;
pub const BRAKE_FORCE: f32 = 600.0;
/// Forward velocity retained per tick
pub const FRICTION: f32 = 0.98;
pub const DRIFT_FRICTION: f32 = 0.92;
/// Lateral velocity retained per tick
pub const LATERAL_FRICTION: f32 = 0.9;
pub const DRIFT_SLIDE_FACTOR: f32 = 0.85;
/// Degrees per second
pub const TURN_SPEED: f32 = 180.0;
pub const DRIFT_TURN_MULTIPLIER: f32 = 1.5;
pub const MIN_SPEED_TO_TURN: f32 = 50.0;

/// Forward speed above which braking slows down instead of reversing
const BRAKE_REVERSE_THRESHOLD: f32 = 10.0;
/// Reverse acceleration as a fraction of forward acceleration
const REVERSE_FACTOR: f32 = 0.4;
/// Drift amount gained per second while drifting
const DRIFT_BUILD_RATE: f32 = 2.0;
/// Below this speed (and not drifting) the vehicle snaps to rest
const REST_SPEED: f32 = 5.0;

pub const SPAWN_POSITION: Vec2 = Vec2::new(640.0, 400.0);
/// Facing up the screen (-90° wrapped into [0, 360))
pub const SPAWN_HEADING: f32 = 270.0;

const BASE_COLOR: Rgba = Rgba::NEON_CYAN;
const GLOW_COLOR: Rgba = Rgba::NEON_MAGENTA;

/// Arrow-shaped hull in local space (+x is forward)
const HULL: [Vec2; 5] = [
    Vec2::new(30.0, 0.0),
    Vec2::new(-15.0, -18.0),
    Vec2::new(-8.0, 0.0),
    Vec2::new(-15.0, 18.0),
    Vec2::new(30.0, 0.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees in [0, 360); 0 points along +x, 90 along +y (screen down)
    pub heading: f32,
    /// Carried for completeness; steering changes heading directly
    pub angular_velocity: f32,
    pub is_drifting: bool,
    /// 0-1, builds while drifting
    pub drift_amount: f32,
    /// -1 left, 1 right, 0 none yet
    pub drift_direction: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            velocity: Vec2::ZERO,
            heading: SPAWN_HEADING,
            angular_velocity: 0.0,
            is_drifting: false,
            drift_amount: 0.0,
            drift_direction: 0.0,
        }
    }
}

impl Vehicle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to spawn, at rest, not drifting
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Unit vector along the current heading
    pub fn forward(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    /// Advance one fixed tick
    pub fn update(&mut self, dt: f32, input: &InputState) {
        self.apply_input(input, dt);
        self.apply_physics(dt);
    }

    pub fn apply_input(&mut self, input: &InputState, dt: f32) {
        // Steering and drift gating use the speed from the start of the tick
        let speed = self.speed();
        let forward = self.forward();

        if input.accelerating() {
            self.velocity += forward * ACCELERATION * dt;
        }

        if input.braking() {
            let forward_speed = self.velocity.dot(forward);
            if forward_speed > BRAKE_REVERSE_THRESHOLD {
                self.velocity -= forward * BRAKE_FORCE * dt;
            } else {
                self.velocity -= forward * ACCELERATION * REVERSE_FACTOR * dt;
            }
        }

        if speed > MIN_SPEED_TO_TURN {
            let turn = if self.is_drifting {
                TURN_SPEED * DRIFT_TURN_MULTIPLIER * dt
            } else {
                TURN_SPEED * dt
            };

            if input.turning_left() {
                self.heading -= turn;
            }
            if input.turning_right() {
                self.heading += turn;
            }

            if input.turning_left() {
                self.drift_direction = -1.0;
            } else if input.turning_right() {
                self.drift_direction = 1.0;
            }
        }

        self.heading = wrap_degrees(self.heading);

        let wants_drift = input.drifting() && speed > MIN_SPEED_TO_TURN * 2.0;
        if wants_drift != self.is_drifting {
            self.is_drifting = wants_drift;
            self.drift_amount = 0.0;
        }

        if self.is_drifting {
            self.drift_amount = (self.drift_amount + dt * DRIFT_BUILD_RATE).min(1.0);
        }
    }

    pub fn apply_physics(&mut self, dt: f32) {
        let speed = self.speed();
        if speed > MAX_SPEED {
            self.velocity *= MAX_SPEED / speed;
        }

        let forward = self.forward();
        let right = forward.perp();

        let forward_speed = self.velocity.dot(forward);
        let lateral_speed = self.velocity.dot(right);

        let (grip, slide) = if self.is_drifting {
            (DRIFT_FRICTION, DRIFT_SLIDE_FACTOR)
        } else {
            (FRICTION, LATERAL_FRICTION)
        };

        self.velocity = forward * (forward_speed * grip) + right * (lateral_speed * slide);
        self.position += self.velocity * dt;

        if self.speed() < REST_SPEED && !self.is_drifting {
            self.velocity = Vec2::ZERO;
        }
    }

    /// Display color: glows toward magenta while drifting, brightens with speed otherwise
    pub fn color(&self) -> Rgba {
        if self.is_drifting {
            BASE_COLOR.lerp(GLOW_COLOR, self.drift_amount)
        } else {
            let ratio = self.speed() / MAX_SPEED;
            let intensity = channel(180.0 + 75.0 * ratio);
            Rgba::rgb(0, intensity, intensity)
        }
    }

    /// Hull polygon in world space
    pub fn outline(&self) -> [Vec2; 5] {
        let rotation = self.forward();
        HULL.map(|p| self.position + rotation.rotate(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIXED_TIMESTEP;
    use crate::platform::Key;
    use proptest::prelude::*;

    const DT: f32 = FIXED_TIMESTEP;

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.key_pressed(key);
        }
        input
    }

    /// Vehicle already moving along its heading at `speed`
    fn moving(speed: f32) -> Vehicle {
        let mut v = Vehicle::new();
        v.velocity = v.forward() * speed;
        v
    }

    #[test]
    fn test_spawn_state() {
        let v = Vehicle::new();
        assert_eq!(v.position, SPAWN_POSITION);
        assert_eq!(v.velocity, Vec2::ZERO);
        assert_eq!(v.heading, SPAWN_HEADING);
        assert!(!v.is_drifting);
        // Facing up the screen
        assert!((v.forward() - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut v = moving(400.0);
        let input = held(&[Key::W, Key::D, Key::Space]);
        for _ in 0..30 {
            v.update(DT, &input);
        }
        assert!(v.is_drifting);
        v.reset();
        assert_eq!(v, Vehicle::new());
    }

    #[test]
    fn test_accelerate_one_tick_from_rest() {
        let mut v = Vehicle::new();
        v.update(DT, &held(&[Key::W]));
        let expected = ACCELERATION * DT;
        let forward_speed = v.velocity.dot(v.forward());
        // Only forward friction has been applied
        assert!((forward_speed - expected * FRICTION).abs() < 1e-3);
        assert!(forward_speed <= expected);
        assert!(forward_speed > expected * 0.97);
    }

    #[test]
    fn test_brake_slows_then_reverses() {
        let mut v = moving(200.0);
        let brake = held(&[Key::S]);
        v.apply_input(&brake, DT);
        let slowed = v.velocity.dot(v.forward());
        assert!((slowed - (200.0 - BRAKE_FORCE * DT)).abs() < 1e-3);

        let mut v = Vehicle::new();
        v.apply_input(&brake, DT);
        let reversed = v.velocity.dot(v.forward());
        assert!((reversed + ACCELERATION * REVERSE_FACTOR * DT).abs() < 1e-3);
    }

    #[test]
    fn test_no_steering_below_min_speed() {
        let mut v = moving(MIN_SPEED_TO_TURN - 1.0);
        v.apply_input(&held(&[Key::A]), DT);
        assert_eq!(v.heading, SPAWN_HEADING);
        assert_eq!(v.drift_direction, 0.0);
    }

    #[test]
    fn test_steering_left_and_right() {
        let mut v = moving(200.0);
        v.apply_input(&held(&[Key::A]), DT);
        assert!((v.heading - (SPAWN_HEADING - TURN_SPEED * DT)).abs() < 1e-3);
        assert_eq!(v.drift_direction, -1.0);

        let mut v = moving(200.0);
        v.apply_input(&held(&[Key::Right]), DT);
        assert!((v.heading - (SPAWN_HEADING + TURN_SPEED * DT)).abs() < 1e-3);
        assert_eq!(v.drift_direction, 1.0);

        // Both held: turns cancel, left wins the direction
        let mut v = moving(200.0);
        v.apply_input(&held(&[Key::A, Key::D]), DT);
        assert!((v.heading - SPAWN_HEADING).abs() < 1e-3);
        assert_eq!(v.drift_direction, -1.0);
    }

    #[test]
    fn test_drift_turns_faster() {
        let mut v = moving(300.0);
        v.is_drifting = true;
        v.apply_input(&held(&[Key::Space, Key::D]), DT);
        let expected = SPAWN_HEADING + TURN_SPEED * DRIFT_TURN_MULTIPLIER * DT;
        assert!((v.heading - expected).abs() < 1e-3);
    }

    #[test]
    fn test_drift_start_ramp_and_end() {
        let mut v = moving(300.0);
        let drift = held(&[Key::Space]);

        v.apply_input(&drift, DT);
        assert!(v.is_drifting);
        assert!((v.drift_amount - DRIFT_BUILD_RATE * DT).abs() < 1e-6);

        for _ in 0..60 {
            v.velocity = v.forward() * 300.0;
            v.apply_input(&drift, DT);
        }
        assert_eq!(v.drift_amount, 1.0);

        v.apply_input(&InputState::new(), DT);
        assert!(!v.is_drifting);
        assert_eq!(v.drift_amount, 0.0);
    }

    #[test]
    fn test_drift_requires_speed() {
        let mut v = moving(MIN_SPEED_TO_TURN * 2.0 - 1.0);
        v.apply_input(&held(&[Key::Space]), DT);
        assert!(!v.is_drifting);
        assert_eq!(v.drift_amount, 0.0);
    }

    #[test]
    fn test_drift_slides_more_laterally() {
        let mut grip = moving(0.0);
        grip.velocity = Vec2::new(100.0, -300.0);
        let mut slide = grip.clone();
        slide.is_drifting = true;

        grip.apply_physics(DT);
        slide.apply_physics(DT);

        let right = grip.forward().perp();
        assert!((grip.velocity.dot(right).abs() - 100.0 * LATERAL_FRICTION).abs() < 1e-3);
        assert!((slide.velocity.dot(right).abs() - 100.0 * DRIFT_SLIDE_FACTOR).abs() < 1e-3);
        assert!(slide.speed() < grip.speed());
    }

    #[test]
    fn test_snaps_to_rest() {
        let mut v = moving(4.0);
        v.apply_physics(DT);
        assert_eq!(v.velocity, Vec2::ZERO);

        let mut v = moving(4.0);
        v.is_drifting = true;
        v.apply_physics(DT);
        assert_ne!(v.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_color() {
        let v = Vehicle::new();
        assert_eq!(v.color(), Rgba::rgb(0, 180, 180));

        let mut v = Vehicle::new();
        v.velocity = Vec2::new(0.0, -MAX_SPEED);
        assert_eq!(v.color(), Rgba::rgb(0, 255, 255));

        v.is_drifting = true;
        v.drift_amount = 1.0;
        assert_eq!(v.color(), GLOW_COLOR);
        v.drift_amount = 0.0;
        assert_eq!(v.color(), BASE_COLOR);
    }

    #[test]
    fn test_outline_points_forward() {
        let v = Vehicle::new();
        let hull = v.outline();
        // Tip is 30 units ahead (up the screen)
        assert!((hull[0] - Vec2::new(640.0, 370.0)).length() < 1e-3);
        assert_eq!(hull[0], hull[4]);
    }

    fn arb_input() -> impl Strategy<Value = InputState> {
        prop::collection::vec(
            prop::sample::select(vec![Key::W, Key::S, Key::A, Key::D, Key::Space]),
            0..5,
        )
        .prop_map(|keys| held(&keys))
    }

    proptest! {
        #[test]
        fn prop_speed_heading_and_drift_bounds(
            inputs in prop::collection::vec(arb_input(), 1..400),
            vx in -2000.0f32..2000.0,
            vy in -2000.0f32..2000.0,
        ) {
            let mut v = Vehicle::new();
            v.velocity = Vec2::new(vx, vy);
            for input in &inputs {
                let was_drifting = v.is_drifting;
                v.apply_input(input, DT);
                prop_assert!(v.heading >= 0.0 && v.heading < 360.0);
                prop_assert!((0.0..=1.0).contains(&v.drift_amount));
                if v.is_drifting && !was_drifting {
                    prop_assert!((v.drift_amount - DRIFT_BUILD_RATE * DT).abs() < 1e-6);
                }
                if !v.is_drifting {
                    prop_assert_eq!(v.drift_amount, 0.0);
                }
                v.apply_physics(DT);
                prop_assert!(v.speed() <= MAX_SPEED + 1e-2);
            }
        }
    }
}
