//! Input events and held-key tracking

use std::collections::{HashSet, VecDeque};

/// Logical keys the game cares about. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Enter,
    /// Any other key code from the window backend
    Other(u32),
}

/// Discrete event produced by the window each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request
    Closed,
    KeyPressed(Key),
    KeyReleased(Key),
}

/// Source of per-frame input events (the window collaborator)
pub trait EventSource {
    /// Drain every event that arrived since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Pre-recorded event source: one batch of events per frame.
/// Used for headless sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch of events to be returned by one `poll`
    pub fn push_frame(&mut self, events: Vec<InputEvent>) -> &mut Self {
        self.frames.push_back(events);
        self
    }

    /// Queue `count` frames with no events
    pub fn idle(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.frames.push_back(Vec::new());
        }
        self
    }

    /// Frames still queued
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_pressed(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_released(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Feed a key event; `Closed` is ignored here
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(key) => self.key_pressed(key),
            InputEvent::KeyReleased(key) => self.key_released(key),
            InputEvent::Closed => {}
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Forget every held key (on state transitions, so nothing sticks)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn accelerating(&self) -> bool {
        self.is_held(Key::W) || self.is_held(Key::Up)
    }

    pub fn braking(&self) -> bool {
        self.is_held(Key::S) || self.is_held(Key::Down)
    }

    pub fn turning_left(&self) -> bool {
        self.is_held(Key::A) || self.is_held(Key::Left)
    }

    pub fn turning_right(&self) -> bool {
        self.is_held(Key::D) || self.is_held(Key::Right)
    }

    pub fn drifting(&self) -> bool {
        self.is_held(Key::Space)
    }
}
