//! Press-edge detection over polled input.

use cubefront_core::types::InputState;

/// Buttons that went down this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pressed {
    pub fire: bool,
    pub alt_fire: bool,
    pub fov_up: bool,
    pub fov_down: bool,
}

/// Remembers last tick's held buttons.
#[derive(Debug, Clone, Default)]
pub struct InputEdges {
    previous: InputState,
}

impl InputEdges {
    /// Compare `current` with the previous tick and remember it.
    pub fn advance(&mut self, current: &InputState) -> Pressed {
        let prev = self.previous;
        self.previous = *current;
        Pressed {
            fire: current.fire && !prev.fire,
            alt_fire: current.alt_fire && !prev.alt_fire,
            fov_up: current.fov_up && !prev.fov_up,
            fov_down: current.fov_down && !prev.fov_down,
        }
    }

    pub fn reset(&mut self) {
        self.previous = InputState::default();
    }
}
