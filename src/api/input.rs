use serde::{Deserialize, Serialize};

use crate::core::WindowSize;
use crate::interaction::MouseButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Character(char),
}

/// Input delivered by the windowing driver, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Resized(WindowSize),
    MouseMoved { x: f64, y: f64 },
    MouseLeft,
    ButtonPressed(MouseButton),
    ButtonReleased(MouseButton),
    /// Signed wheel delta in scroll steps; positive scrolls away from the user.
    Wheel { delta: f64 },
    KeyPressed(Key),
    FocusChanged(bool),
    CloseRequested,
}

/// Source of per-frame input, implemented by the windowing driver.
pub trait EventSource {
    /// Appends every event that arrived since the previous call.
    ///
    /// Must not block; an empty poll is a normal idle frame.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);
}

/// Replays a scripted list of frames. Useful for tests and headless runs.
///
/// After the script is exhausted every poll yields `CloseRequested`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: std::collections::VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        match self.frames.pop_front() {
            Some(frame) => events.extend(frame),
            None => events.push(InputEvent::CloseRequested),
        }
    }
}
