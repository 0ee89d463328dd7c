//! RGBA color value type
//!
//! Independent of any rendering backend; the renderer converts as needed.

use serde::{Deserialize, Serialize};

/// 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const NEON_CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const NEON_MAGENTA: Rgba = Rgba::rgb(255, 0, 255);
    pub const NEON_WHITE: Rgba = Rgba::rgb(240, 240, 255);
    /// Deep purple clear color
    pub const BACKGROUND: Rgba = Rgba::rgb(15, 5, 25);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear blend toward `other` by `t` (clamped to 0-1), truncating each channel
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Normalized float channels for GPU vertex data
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Saturating float-to-channel conversion (`as` clamps out-of-range floats)
#[inline]
pub fn channel(value: f32) -> u8 {
    value as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::NEON_CYAN;
        let b = Rgba::NEON_MAGENTA;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 255);
    }

    #[test]
    fn test_to_f32_array() {
        let c = Rgba::new(255, 0, 51, 255).to_f32_array();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_channel_saturates() {
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(-4.0), 0);
        assert_eq!(channel(12.9), 12);
    }
}
