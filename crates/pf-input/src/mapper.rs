//! Input polling
//!
//! One call to [`InputMapper::poll`] drains every pending platform event,
//! then rebuilds the pad masks from the keys the source reports as held.

use crate::events::{EventSource, InputEvent};
use crate::mapping::KeyTable;
use crate::pad::{PadButtons, PadState, PAD_COUNT};

/// Result of one polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    pub pads: [PadState; PAD_COUNT],
    /// A quit event or the quit key was seen
    pub quit: bool,
    /// The menu chord is held (only evaluated when the menu is allowed)
    pub menu_requested: bool,
    /// The overlay toggle was pressed an odd number of times
    pub toggle_overlay: bool,
}

/// Turns platform events into pad masks and hotkey requests
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    table: KeyTable,
    /// The chord opened the menu and has not been let go since
    chord_latched: bool,
}

impl InputMapper {
    pub fn new(table: KeyTable) -> Self {
        Self {
            table,
            chord_latched: false,
        }
    }

    pub fn table(&self) -> &KeyTable {
        &self.table
    }

    /// Buttons to force released after the menu returns
    pub fn menu_release_mask(&self) -> PadButtons {
        self.table.menu.release_on_return
    }

    /// Drain pending events and rebuild the pads.
    ///
    /// `menu_allowed` is false while the menu itself is active, so the
    /// chord cannot re-enter it. A chord that is still held after the menu
    /// returns does not request it again until it is let go.
    pub fn poll(&mut self, source: &mut dyn EventSource, menu_allowed: bool) -> PollReport {
        let mut quit = false;
        let mut toggle_overlay = false;

        while let Some(event) = source.poll_event() {
            match event {
                InputEvent::Quit => quit = true,
                InputEvent::KeyDown(key) => {
                    if Some(key) == self.table.quit_key {
                        quit = true;
                    }
                    if key == self.table.overlay_toggle {
                        toggle_overlay = !toggle_overlay;
                    }
                }
                InputEvent::KeyUp(_) => {}
            }
        }

        if quit {
            tracing::debug!("Quit requested");
        }

        let source: &dyn EventSource = source;
        let chord_held = self.menu_chord_held(source);
        if !chord_held {
            self.chord_latched = false;
        }
        let menu_requested = menu_allowed && chord_held && !self.chord_latched;
        if menu_requested {
            self.chord_latched = true;
        }

        PollReport {
            pads: [self.build_pad(source), PadState::released()],
            quit,
            menu_requested,
            toggle_overlay,
        }
    }

    fn menu_chord_held(&self, source: &dyn EventSource) -> bool {
        let menu = &self.table.menu;
        source.is_key_down(menu.modifier)
            && source.is_key_down(menu.key)
            && !menu.unless.is_some_and(|key| source.is_key_down(key))
    }

    fn build_pad(&self, source: &dyn EventSource) -> PadState {
        let mut pad = PadState::released();

        for &(key, button) in &self.table.bindings {
            if source.is_key_down(key) {
                pad.set_pressed(button, true);
            }
        }

        for combo in &self.table.combos {
            if source.is_key_down(combo.modifier) && source.is_key_down(combo.key) {
                pad.release(combo.base);
                pad.set_pressed(combo.target, true);
            }
        }

        pad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ScriptedInput;
    use crate::keyboard::KeyCode;

    #[test]
    fn test_bound_key_clears_bit() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::Z);
        let report = mapper.poll(&mut input, true);
        assert!(report.pads[0].is_pressed(PadButtons::CROSS));
        assert_eq!(report.pads[0].raw(), 0xBFFF);

        input.release(KeyCode::Z);
        let report = mapper.poll(&mut input, true);
        assert_eq!(report.pads[0].raw(), 0xFFFF);
    }

    #[test]
    fn test_unmapped_key_changes_nothing() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::F1);
        input.press(KeyCode::M);
        let report = mapper.poll(&mut input, true);
        assert_eq!(report.pads[0], PadState::released());
        assert!(!report.quit);
    }

    #[test]
    fn test_second_pad_always_released() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();
        for &(key, _) in KeyTable::desktop().bindings.iter() {
            input.press(key);
        }
        let report = mapper.poll(&mut input, false);
        assert_eq!(report.pads[1].raw(), 0xFFFF);
    }

    #[test]
    fn test_quit_event_and_key() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.push(InputEvent::Quit);
        assert!(mapper.poll(&mut input, true).quit);
        assert!(!mapper.poll(&mut input, true).quit);

        input.press(KeyCode::Escape);
        assert!(mapper.poll(&mut input, true).quit);
    }

    #[test]
    fn test_overlay_toggle_edges() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::V);
        assert!(mapper.poll(&mut input, true).toggle_overlay);
        // Held, no new press
        assert!(!mapper.poll(&mut input, true).toggle_overlay);

        input.release(KeyCode::V);
        input.press(KeyCode::V);
        input.release(KeyCode::V);
        input.press(KeyCode::V);
        assert!(!mapper.poll(&mut input, true).toggle_overlay);
    }

    #[test]
    fn test_handheld_combo_remaps_base_button() {
        let mut mapper = InputMapper::new(KeyTable::handheld());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::LeftAlt);
        let report = mapper.poll(&mut input, true);
        assert!(report.pads[0].is_pressed(PadButtons::CROSS));
        assert!(!report.pads[0].is_pressed(PadButtons::SELECT));

        input.press(KeyCode::Escape);
        let report = mapper.poll(&mut input, true);
        assert!(!report.pads[0].is_pressed(PadButtons::CROSS));
        assert!(report.pads[0].is_pressed(PadButtons::SELECT));
        assert!(!report.quit);
    }

    #[test]
    fn test_menu_chord() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::Backspace);
        assert!(!mapper.poll(&mut input, true).menu_requested);

        input.press(KeyCode::Return);
        assert!(!mapper.poll(&mut input, false).menu_requested);
        assert!(mapper.poll(&mut input, true).menu_requested);
        assert_eq!(
            mapper.menu_release_mask(),
            PadButtons::START | PadButtons::SELECT
        );
    }

    #[test]
    fn test_handheld_menu_chord_blocked_by_cross() {
        let mut mapper = InputMapper::new(KeyTable::handheld());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::Escape);
        input.press(KeyCode::Return);
        input.press(KeyCode::LeftAlt);
        assert!(!mapper.poll(&mut input, true).menu_requested);

        input.release(KeyCode::LeftAlt);
        assert!(mapper.poll(&mut input, true).menu_requested);
    }

    #[test]
    fn test_held_menu_chord_requests_once() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::Backspace);
        input.press(KeyCode::Return);
        assert!(mapper.poll(&mut input, true).menu_requested);
        assert!(!mapper.poll(&mut input, true).menu_requested);

        input.release(KeyCode::Return);
        assert!(!mapper.poll(&mut input, true).menu_requested);
        input.press(KeyCode::Return);
        assert!(mapper.poll(&mut input, true).menu_requested);
    }

    #[test]
    fn test_pad_follows_held_keys_not_event_history() {
        let mut mapper = InputMapper::new(KeyTable::desktop());
        let mut input = ScriptedInput::new();

        input.press(KeyCode::Right);
        mapper.poll(&mut input, true);

        // No new events: the key is still down
        let report = mapper.poll(&mut input, true);
        assert!(report.pads[0].is_pressed(PadButtons::DPAD_RIGHT));

        input.release(KeyCode::Right);
        input.press(KeyCode::Right);
        input.release(KeyCode::Right);
        let report = mapper.poll(&mut input, true);
        assert_eq!(report.pads[0], PadState::released());
    }
}
