//! Scoring, combo multiplier and difficulty progression

use serde::{Deserialize, Serialize};

pub const MAX_COMBO_TIME: f32 = 3.0;
pub const BASE_DRIFT_SCORE: f32 = 10.0;
pub const SPEED_BONUS_DIVISOR: f32 = 100.0;
pub const DIFFICULTY_INCREASE_RATE: f32 = 0.01;
pub const MAX_DIFFICULTY: f32 = 2.0;
pub const MAX_COMBO_MULTIPLIER: f32 = 8.0;

/// Drifts shorter than this earn no end-of-drift bonus
pub const MIN_BONUS_DRIFT: f32 = 0.5;
/// Drift duration counted toward the bonus is capped here
pub const MAX_BONUS_DRIFT: f32 = 5.0;
const DRIFT_BONUS_BASE: f32 = 100.0;
const COMBO_STEP: f32 = 0.5;
/// Minimum speed for a drift to score
const SCORING_DRIFT_SPEED: f32 = 100.0;
const DRIFT_METER_FILL_RATE: f32 = 0.5;
const DRIFT_METER_DECAY_RATE: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEngine {
    score: u64,
    combo_multiplier: f32,
    combo_timer: f32,
    /// Fills while drifting, drains otherwise (0-1)
    drift_meter: f32,
    /// 0-2, climbs slowly over a run
    difficulty: f32,
    game_time: f32,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self {
            score: 0,
            combo_multiplier: 1.0,
            combo_timer: 0.0,
            drift_meter: 0.0,
            difficulty: 0.0,
            game_time: 0.0,
        }
    }
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to a fresh run
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one tick of a run
    pub fn update(&mut self, dt: f32, speed: f32, is_drifting: bool, drift_amount: f32) {
        self.game_time += dt;
        self.update_difficulty(dt);

        if self.combo_timer > 0.0 {
            self.combo_timer -= dt;
            if self.combo_timer <= 0.0 {
                self.combo_timer = 0.0;
                self.combo_multiplier = 1.0;
            }
        }

        if is_drifting && speed > SCORING_DRIFT_SPEED {
            self.drift_meter = (self.drift_meter + dt * DRIFT_METER_FILL_RATE).min(1.0);

            let speed_bonus = speed / SPEED_BONUS_DIVISOR;
            let points =
                BASE_DRIFT_SCORE * drift_amount * speed_bonus * self.combo_multiplier * dt;
            self.add_score(points);

            // Drifting keeps the combo alive
            self.combo_timer = MAX_COMBO_TIME;
        } else {
            self.drift_meter = (self.drift_meter - dt * DRIFT_METER_DECAY_RATE).max(0.0);
        }
    }

    /// Bonus for a completed drift; also grows the combo
    pub fn on_drift_end(&mut self, duration: f32, average_speed: f32) {
        if duration < MIN_BONUS_DRIFT {
            return;
        }

        let duration_bonus = duration.min(MAX_BONUS_DRIFT);
        let speed_bonus = average_speed / SPEED_BONUS_DIVISOR;
        let bonus = DRIFT_BONUS_BASE * duration_bonus * speed_bonus * self.combo_multiplier;
        self.add_score(bonus);
        log::debug!(
            "Drift bonus {} (x{:.1}), score {}",
            bonus as u64,
            self.combo_multiplier,
            self.score
        );

        self.combo_multiplier = (self.combo_multiplier + COMBO_STEP).min(MAX_COMBO_MULTIPLIER);
        self.combo_timer = MAX_COMBO_TIME;
    }

    /// Hit something: the combo and drift meter are lost
    pub fn on_collision(&mut self) {
        self.combo_multiplier = 1.0;
        self.combo_timer = 0.0;
        self.drift_meter = 0.0;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo_multiplier(&self) -> f32 {
        self.combo_multiplier
    }

    pub fn combo_timer(&self) -> f32 {
        self.combo_timer
    }

    /// Remaining combo time as a fraction (for the HUD bar)
    pub fn combo_fill(&self) -> f32 {
        (self.combo_timer / MAX_COMBO_TIME).clamp(0.0, 1.0)
    }

    pub fn is_combo_active(&self) -> bool {
        self.combo_timer > 0.0
    }

    pub fn drift_meter(&self) -> f32 {
        self.drift_meter
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    /// Points are truncated toward zero; negative inputs cannot occur but saturate to 0
    fn add_score(&mut self, points: f32) {
        self.score = self.score.saturating_add(points as u64);
    }

    fn update_difficulty(&mut self, dt: f32) {
        if self.difficulty < MAX_DIFFICULTY {
            self.difficulty = (self.difficulty + DIFFICULTY_INCREASE_RATE * dt).min(MAX_DIFFICULTY);
        }
    }
}
