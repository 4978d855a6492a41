//! Platform input events

use std::collections::VecDeque;

use crate::keyboard::{KeyCode, KeyboardState};

/// Event delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the platform asked the process to quit
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

/// Source of pending platform events and of the current key state
pub trait EventSource {
    /// Next pending event, `None` once the queue is drained.
    ///
    /// `KeyDown` is reported once per physical press; auto-repeat is not
    /// forwarded.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Whether `key` is physically held, as of the events drained so far
    fn is_key_down(&self, key: KeyCode) -> bool;
}

/// Event source fed from a queue, used headless and in tests
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
    held: KeyboardState,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn press(&mut self, key: KeyCode) {
        self.push(InputEvent::KeyDown(key));
    }

    pub fn release(&mut self, key: KeyCode) {
        self.push(InputEvent::KeyUp(key));
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        let event = self.queue.pop_front()?;
        match event {
            InputEvent::KeyDown(key) => self.held.press_key(key),
            InputEvent::KeyUp(key) => self.held.release_key(key),
            InputEvent::Quit => {}
        }
        Some(event)
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.is_key_pressed(key)
    }
}

impl<E: EventSource + ?Sized> EventSource for Box<E> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        (**self).poll_event()
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        (**self).is_key_down(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_order() {
        let mut input = ScriptedInput::new();
        input.press(KeyCode::Z);
        input.release(KeyCode::Z);
        input.push(InputEvent::Quit);
        assert_eq!(input.pending(), 3);

        assert_eq!(input.poll_event(), Some(InputEvent::KeyDown(KeyCode::Z)));
        assert_eq!(input.poll_event(), Some(InputEvent::KeyUp(KeyCode::Z)));
        assert_eq!(input.poll_event(), Some(InputEvent::Quit));
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn test_key_state_follows_drained_events() {
        let mut input = ScriptedInput::new();
        input.press(KeyCode::Z);
        input.release(KeyCode::Z);
        assert!(!input.is_key_down(KeyCode::Z));

        input.poll_event();
        assert!(input.is_key_down(KeyCode::Z));
        input.poll_event();
        assert!(!input.is_key_down(KeyCode::Z));
    }
}
