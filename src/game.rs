//! Game state machine and fixed-timestep frame loop
//!
//! A frame is: drain events, apply the latched state transition, run zero or
//! more fixed ticks, render once.

use glam::Vec2;

use crate::color::Rgba;
use crate::consts::{FIXED_TIMESTEP, MAX_FRAME_TIME, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::platform::{EventSource, InputEvent, InputState, Key};
use crate::renderer::shapes::{particle_quads, translated};
use crate::renderer::vertex::colors;
use crate::renderer::{BlendMode, DrawTarget};
use crate::settings::Settings;
use crate::sim::{RandomSource, World, tick};
use crate::ui::UiOverlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Accumulates real frame time and hands out whole fixed steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    accumulator: f32,
    step: f32,
    max_frame: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_TIMESTEP, MAX_FRAME_TIME)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_frame: f32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_frame,
        }
    }

    /// Add one frame's elapsed time and return how many ticks to run.
    /// The remainder carries into the next frame.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += clamp_frame_time(elapsed, self.max_frame);

        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried toward the next tick
    pub fn remainder(&self) -> f32 {
        self.accumulator
    }
}

/// Frame time in [0, max]; non-finite readings count as no time
fn clamp_frame_time(elapsed: f32, max: f32) -> f32 {
    if elapsed.is_finite() {
        elapsed.clamp(0.0, max)
    } else {
        0.0
    }
}

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub ticks: u32,
    pub state: GameState,
    pub quit: bool,
}

pub struct Game {
    state: GameState,
    pending: Option<GameState>,
    input: InputState,
    world: World,
    rng: Box<dyn RandomSource>,
    ui: UiOverlay,
    timestep: FixedTimestep,
    quit: bool,
    shake_enabled: bool,
    show_fps: bool,
    fps: f32,
}

impl Game {
    pub fn new(settings: &Settings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::Menu,
            pending: None,
            input: InputState::new(),
            world: World::new(settings.max_particles()),
            rng,
            ui: UiOverlay::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            timestep: FixedTimestep::default(),
            quit: false,
            shake_enabled: settings.effective_screen_shake(),
            show_fps: settings.show_fps,
            fps: 0.0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn pending(&self) -> Option<GameState> {
        self.pending
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Feed one event: key state plus any transition it requests
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Closed => self.quit = true,
            InputEvent::KeyPressed(key) => {
                self.input.key_pressed(key);
                self.handle_key(key);
            }
            InputEvent::KeyReleased(key) => self.input.key_released(key),
        }
    }

    fn handle_key(&mut self, key: Key) {
        match (self.state, key) {
            (GameState::Menu, Key::Enter) => self.pending = Some(GameState::Playing),
            (GameState::Menu, Key::Escape) => self.quit = true,
            (GameState::Playing, Key::Escape) => self.pending = Some(GameState::Paused),
            (GameState::Paused, Key::Escape) => self.pending = Some(GameState::Playing),
            (GameState::GameOver, Key::Escape) => self.pending = Some(GameState::Menu),
            (GameState::GameOver, Key::Enter) => self.pending = Some(GameState::Playing),
            _ => {}
        }
    }

    /// Finish the current run; takes effect at the next frame's transition step
    pub fn end_run(&mut self) {
        if self.state == GameState::Playing {
            self.pending = Some(GameState::GameOver);
        }
    }

    /// Apply the latched transition, if any
    pub fn apply_pending_transition(&mut self) {
        let Some(next) = self.pending.take() else {
            return;
        };

        let fresh_run = next == GameState::Playing
            && matches!(self.state, GameState::Menu | GameState::GameOver);
        if fresh_run {
            self.world.reset();
        }

        if next == GameState::GameOver {
            log::info!(
                "Run over: score {} after {:.1}s",
                self.world.score.score(),
                self.world.score.game_time()
            );
        }

        log::info!("State: {:?} -> {:?}", self.state, next);
        self.state = next;
        self.input.clear();
    }

    /// Run one whole frame against `target`
    pub fn frame(
        &mut self,
        elapsed: f32,
        events: Vec<InputEvent>,
        target: &mut dyn DrawTarget,
    ) -> FrameReport {
        for event in events {
            self.handle_event(event);
            if event == InputEvent::Closed {
                break;
            }
        }

        if self.quit {
            return FrameReport {
                ticks: 0,
                state: self.state,
                quit: true,
            };
        }

        self.apply_pending_transition();

        let ticks = self.timestep.advance(elapsed);
        let dt = self.timestep.step();
        for _ in 0..ticks {
            self.world.shake.update(self.rng.as_mut());
            if self.state == GameState::Playing {
                tick(&mut self.world, &self.input, dt, self.rng.as_mut());
            }
        }

        let frame_time = clamp_frame_time(elapsed, MAX_FRAME_TIME);
        self.ui.update(frame_time);
        if frame_time > 0.0 {
            self.fps = 1.0 / frame_time;
        }
        self.render(target);

        FrameReport {
            ticks,
            state: self.state,
            quit: false,
        }
    }

    /// Frame until quit. `clock` returns seconds since its previous call.
    /// Returns the number of frames run.
    pub fn run(
        &mut self,
        source: &mut dyn EventSource,
        clock: &mut dyn FnMut() -> f32,
        target: &mut dyn DrawTarget,
    ) -> u64 {
        let mut frames = 0;
        loop {
            let elapsed = clock();
            let events = source.poll();
            let report = self.frame(elapsed, events, target);
            frames += 1;
            if report.quit {
                return frames;
            }
        }
    }

    fn render(&self, target: &mut dyn DrawTarget) {
        target.clear(Rgba::BACKGROUND);

        match self.state {
            GameState::Menu => self.ui.render_menu(target),
            GameState::Playing => {
                self.render_world(target);
                self.ui.render_hud(target, &self.world.score, self.world.vehicle.speed());
            }
            GameState::Paused => {
                self.render_world(target);
                self.ui.render_hud(target, &self.world.score, self.world.vehicle.speed());
                self.ui.render_pause(target);
            }
            GameState::GameOver => self.ui.render_game_over(target, &self.world.score),
        }

        if self.show_fps {
            self.ui.render_fps(target, self.fps);
        }

        target.present();
    }

    fn render_world(&self, target: &mut dyn DrawTarget) {
        let offset = if self.shake_enabled {
            self.world.shake.offset()
        } else {
            Vec2::ZERO
        };

        let vehicle = &self.world.vehicle;
        target.draw_polygon(
            &translated(vehicle.outline(), offset),
            vehicle.color(),
            colors::VEHICLE_OUTLINE,
            colors::VEHICLE_OUTLINE_THICKNESS,
        );

        let vertices = particle_quads(&self.world.particles, offset);
        if !vertices.is_empty() {
            target.draw_quads(&vertices, BlendMode::Additive);
        }
    }
}
