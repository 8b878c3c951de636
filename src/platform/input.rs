//! Controller input
//!
//! The game reads one controller with four digital signals. On desktop the
//! keyboard stands in for it: arrows or A/D steer, Enter or Space is start,
//! Escape is the exit button.

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Controller buttons the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Start,
    Quit,
}

impl Button {
    /// Map a physical key to a button
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Button::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Button::Right),
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Some(Button::Start),
            KeyCode::Escape => Some(Button::Quit),
            _ => None,
        }
    }
}

/// Held state of every button
#[derive(Debug, Clone, Default)]
pub struct Controller {
    left: bool,
    right: bool,
    start: bool,
    quit: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Left => self.left = pressed,
            Button::Right => self.right = pressed,
            Button::Start => self.start = pressed,
            Button::Quit => self.quit = pressed,
        }
    }

    /// Apply a key event; returns false for unmapped keys
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match Button::from_key(key) {
            Some(button) => {
                self.set(button, pressed);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Start => self.start,
            Button::Quit => self.quit,
        }
    }

    /// Snapshot for the simulation step
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            start: self.start,
        }
    }

    /// Release everything (focus lost, keys may never report key-up)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Button::from_key(KeyCode::ArrowLeft), Some(Button::Left));
        assert_eq!(Button::from_key(KeyCode::KeyD), Some(Button::Right));
        assert_eq!(Button::from_key(KeyCode::Space), Some(Button::Start));
        assert_eq!(Button::from_key(KeyCode::Escape), Some(Button::Quit));
        assert_eq!(Button::from_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_sample() {
        let mut controller = Controller::new();
        assert!(controller.handle_key(KeyCode::ArrowLeft, true));
        assert!(controller.handle_key(KeyCode::Enter, true));
        assert!(!controller.handle_key(KeyCode::KeyZ, true));

        let input = controller.sample();
        assert!(input.left && input.start && !input.right);

        controller.handle_key(KeyCode::ArrowLeft, false);
        assert!(!controller.sample().left);
    }

    #[test]
    fn test_release_all() {
        let mut controller = Controller::new();
        controller.set(Button::Right, true);
        controller.set(Button::Quit, true);
        controller.release_all();
        assert!(!controller.is_held(Button::Right));
        assert!(!controller.is_held(Button::Quit));
        assert_eq!(controller.sample(), TickInput::default());
    }
}
