//! HUD and screen overlays
//!
//! Turns score/vehicle state into draw requests. Without a font the HUD is
//! skipped entirely and screens draw only their overlays.

use glam::Vec2;

use crate::color::{Rgba, channel};
use crate::renderer::vertex::colors;
use crate::renderer::{DrawTarget, Rect, Text, TextAlign};
use crate::sim::ScoreEngine;
use crate::sim::vehicle::MAX_SPEED;

const TAU: f32 = std::f32::consts::TAU;

/// Pulse phase advance per second
const PULSE_RATE: f32 = 2.0;

const COMBO_BAR_POS: Vec2 = Vec2::new(20.0, 100.0);
const COMBO_BAR_SIZE: Vec2 = Vec2::new(200.0, 8.0);

/// Zero-padded 8-digit score
pub fn format_score(score: u64) -> String {
    format!("{score:08}")
}

/// 0-1 pulse from a phase
fn pulse(phase: f32) -> f32 {
    (phase.sin() + 1.0) * 0.5
}

#[derive(Debug, Clone)]
pub struct UiOverlay {
    width: f32,
    height: f32,
    pulse_phase: f32,
}

impl UiOverlay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            pulse_phase: 0.0,
        }
    }

    /// Advance menu/HUD animations (once per rendered frame)
    pub fn update(&mut self, dt: f32) {
        self.pulse_phase += dt * PULSE_RATE;
        if self.pulse_phase > TAU {
            self.pulse_phase -= TAU;
        }
    }

    pub fn pulse_phase(&self) -> f32 {
        self.pulse_phase
    }

    fn centered(&self, content: impl Into<String>, y_fraction: f32, size: u32, fill: Rgba) -> Text {
        Text::new(content, Vec2::new(self.width / 2.0, self.height * y_fraction), size, fill)
            .aligned(TextAlign::Center)
    }

    pub fn render_hud(&self, target: &mut dyn DrawTarget, score: &ScoreEngine, speed: f32) {
        if !target.has_font() {
            return;
        }

        let score_text = Text::new(
            format!("SCORE: {}", format_score(score.score())),
            Vec2::new(20.0, 20.0),
            28,
            Rgba::NEON_CYAN,
        )
        .outlined(Rgba::rgb(0, 100, 100), 2.0);
        target.draw_text(&score_text);

        if score.is_combo_active() {
            let multiplier = score.combo_multiplier();
            let pulse = pulse(self.pulse_phase * 3.0);
            let r = channel(255.0 * (multiplier / 4.0).min(1.0));
            let combo_text = Text::new(
                format!("x{multiplier:.1}"),
                Vec2::new(20.0, 55.0),
                36,
                Rgba::new(r, 255 - r, 255, channel(200.0 + 55.0 * pulse)),
            )
            .outlined(Rgba::rgb(0, 0, 0), 1.0);
            target.draw_text(&combo_text);
        }

        self.draw_combo_meter(target, score);
        self.draw_speedometer(target, speed);
    }

    fn draw_combo_meter(&self, target: &mut dyn DrawTarget, score: &ScoreEngine) {
        let background = Rect::new(COMBO_BAR_POS, COMBO_BAR_SIZE, Rgba::new(40, 40, 60, 150))
            .outlined(Rgba::rgb(80, 80, 120), 1.0);
        target.draw_rect(&background);

        if score.is_combo_active() {
            let fill = score.combo_fill();
            let bar = Rect::new(
                COMBO_BAR_POS,
                Vec2::new(COMBO_BAR_SIZE.x * fill, COMBO_BAR_SIZE.y),
                Rgba::rgb(channel(255.0 * (1.0 - fill)), channel(255.0 * fill), 200),
            );
            target.draw_rect(&bar);
        }
    }

    fn draw_speedometer(&self, target: &mut dyn DrawTarget, speed: f32) {
        let ratio = (speed / MAX_SPEED).min(1.0);
        let r = channel(100.0 + 155.0 * ratio);
        let g = channel(255.0 * (1.0 - ratio * 0.5));
        let text = Text::new(
            format!("{} km/h", speed as i32),
            Vec2::new(self.width - 30.0, self.height - 50.0),
            32,
            Rgba::rgb(r, g, 255),
        )
        .outlined(Rgba::rgb(r / 4, g / 4, 100), 2.0)
        .aligned(TextAlign::Right);
        target.draw_text(&text);
    }

    pub fn render_menu(&self, target: &mut dyn DrawTarget) {
        if !target.has_font() {
            return;
        }

        let pulse = pulse(self.pulse_phase);
        let title = self
            .centered("NEON DRIFT", 0.25, 72, Rgba::rgb(channel(200.0 + 55.0 * pulse), 255, 255))
            .outlined(Rgba::NEON_MAGENTA, 3.0);
        target.draw_text(&title);

        let start = self.centered(
            "Press ENTER to Start",
            0.55,
            28,
            Rgba::WHITE.with_alpha(channel(150.0 + 105.0 * pulse)),
        );
        target.draw_text(&start);

        let controls = self.centered(
            "WASD/Arrows to move | SPACE to drift | ESC to pause",
            0.85,
            18,
            Rgba::rgb(150, 150, 180),
        );
        target.draw_text(&controls);
    }

    pub fn render_pause(&self, target: &mut dyn DrawTarget) {
        self.draw_overlay(target, colors::PAUSE_OVERLAY);

        if !target.has_font() {
            return;
        }

        let paused = self
            .centered("PAUSED", 0.4, 64, Rgba::NEON_CYAN)
            .outlined(Rgba::NEON_MAGENTA, 2.0);
        target.draw_text(&paused);

        let resume = self.centered("Press ESC to Resume", 0.55, 24, Rgba::rgb(200, 200, 220));
        target.draw_text(&resume);
    }

    pub fn render_game_over(&self, target: &mut dyn DrawTarget, score: &ScoreEngine) {
        self.draw_overlay(target, colors::GAME_OVER_OVERLAY);

        if !target.has_font() {
            return;
        }

        let heading = self
            .centered("GAME OVER", 0.25, 72, Rgba::rgb(255, 50, 100))
            .outlined(Rgba::rgb(150, 0, 50), 3.0);
        target.draw_text(&heading);

        let final_score = self.centered(
            format!("FINAL SCORE: {}", format_score(score.score())),
            0.45,
            36,
            Rgba::NEON_CYAN,
        );
        target.draw_text(&final_score);

        let pulse = pulse(self.pulse_phase * 2.0);
        let restart = self.centered(
            "Press ENTER to Play Again",
            0.65,
            28,
            Rgba::WHITE.with_alpha(channel(150.0 + 105.0 * pulse)),
        );
        target.draw_text(&restart);
    }

    pub fn render_fps(&self, target: &mut dyn DrawTarget, fps: f32) {
        if !target.has_font() {
            return;
        }

        let text = Text::new(
            format!("{fps:.0} FPS"),
            Vec2::new(self.width - 20.0, 20.0),
            16,
            Rgba::rgb(150, 150, 180),
        )
        .aligned(TextAlign::Right);
        target.draw_text(&text);
    }

    fn draw_overlay(&self, target: &mut dyn DrawTarget, color: Rgba) {
        target.draw_rect(&Rect::new(Vec2::ZERO, Vec2::new(self.width, self.height), color));
    }
}
