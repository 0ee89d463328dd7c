//! Decaying screen shake

use glam::Vec2;

use super::rng::RandomSource;

/// Intensity kept per tick
const DECAY: f32 = 0.9;
/// Below this the shake stops entirely
const CUTOFF: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenShake {
    intensity: f32,
    offset: Vec2,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kick the shake (impacts); takes the stronger of current and new
    pub fn add_trauma(&mut self, amount: f32) {
        self.intensity = self.intensity.max(amount.max(0.0));
    }

    /// Decay intensity and resample the jitter. Runs every tick in every state.
    pub fn update(&mut self, rng: &mut dyn RandomSource) {
        self.intensity *= DECAY;
        if self.intensity < CUTOFF {
            self.intensity = 0.0;
            self.offset = Vec2::ZERO;
            return;
        }

        let jitter_x = (rng.next_unit() - 0.5) * 2.0 * self.intensity;
        let jitter_y = (rng.next_unit() - 0.5) * 2.0 * self.intensity;
        self.offset = Vec2::new(jitter_x, jitter_y);
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// View offset to apply when drawing the world
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{PcgSource, SequenceSource};

    #[test]
    fn test_idle_shake_stays_zero() {
        let mut shake = ScreenShake::new();
        shake.update(&mut SequenceSource::constant(1.0));
        assert_eq!(shake.offset(), Vec2::ZERO);
        assert_eq!(shake.intensity(), 0.0);
    }

    #[test]
    fn test_offset_bounded_by_intensity() {
        let mut shake = ScreenShake::new();
        let mut rng = PcgSource::new(5);
        shake.add_trauma(10.0);
        shake.update(&mut rng);
        assert!((shake.intensity() - 9.0).abs() < 1e-5);
        assert!(shake.offset().x.abs() <= 9.0);
        assert!(shake.offset().y.abs() <= 9.0);
    }

    #[test]
    fn test_decays_to_exact_zero() {
        let mut shake = ScreenShake::new();
        let mut rng = SequenceSource::new(vec![0.9, 0.1]);
        shake.add_trauma(8.0);
        let mut ticks = 0;
        while shake.intensity() > 0.0 {
            shake.update(&mut rng);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(shake.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_trauma_keeps_stronger() {
        let mut shake = ScreenShake::new();
        shake.add_trauma(5.0);
        shake.add_trauma(2.0);
        assert_eq!(shake.intensity(), 5.0);
        shake.add_trauma(-3.0);
        assert_eq!(shake.intensity(), 5.0);
    }
}
