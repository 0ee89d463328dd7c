//! Neon Drift - A neon arcade drifting game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicle physics, scoring, particles)
//! - `game`: Game state machine and fixed-timestep frame loop
//! - `platform`: Input events and held-key state
//! - `renderer`: Draw target abstraction and vertex building
//! - `ui`: HUD and menu screen layout
//! - `settings`: Player-facing configuration

pub mod color;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use color::Rgba;
pub use game::{FixedTimestep, FrameReport, Game, GameState};
pub use settings::{QualityPreset, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
    /// Longest frame we will try to catch up on (prevents spiral of death)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Window dimensions and title
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;
    pub const WINDOW_TITLE: &str = "Neon Drift";
    /// Frame rate cap requested from the window
    pub const FRAME_RATE_LIMIT: u32 = 60;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a heading in degrees (0 = +x, 90 = +y, screen coordinates)
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
