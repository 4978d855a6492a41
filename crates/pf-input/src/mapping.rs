//! Key tables
//!
//! Maps host keys to pad buttons and hotkeys. A table is plain data picked
//! once at startup, so several layouts can live side by side and be tested
//! against the same mapper.

use crate::keyboard::KeyCode;
use crate::pad::PadButtons;

/// A modifier+key chord that stands in for a button the device lacks.
///
/// While the chord is held the `base` button (normally bound to `key`) is
/// forced released and `target` is pressed instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboRemap {
    pub modifier: KeyCode,
    pub key: KeyCode,
    pub target: PadButtons,
    pub base: PadButtons,
}

/// Chord that opens the menu while running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCombo {
    pub modifier: KeyCode,
    pub key: KeyCode,
    /// Chord is ignored while this key is held
    pub unless: Option<KeyCode>,
    /// Buttons forced released when the menu returns
    pub release_on_return: PadButtons,
}

/// Named key table layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyProfile {
    #[default]
    Desktop,
    /// Small keyboard with no dedicated L2/R2/Select keys
    Handheld,
}

impl KeyProfile {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "handheld" => Self::Handheld,
            _ => Self::Desktop,
        }
    }

    pub fn table(self) -> KeyTable {
        match self {
            Self::Desktop => KeyTable::desktop(),
            Self::Handheld => KeyTable::handheld(),
        }
    }
}

/// Key to button bindings plus hotkeys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    pub bindings: Vec<(KeyCode, PadButtons)>,
    pub combos: Vec<ComboRemap>,
    pub menu: MenuCombo,
    pub quit_key: Option<KeyCode>,
    pub overlay_toggle: KeyCode,
}

impl KeyTable {
    /// Full keyboard layout
    pub fn desktop() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Up, PadButtons::DPAD_UP),
                (KeyCode::Down, PadButtons::DPAD_DOWN),
                (KeyCode::Left, PadButtons::DPAD_LEFT),
                (KeyCode::Right, PadButtons::DPAD_RIGHT),
                (KeyCode::A, PadButtons::SQUARE),
                (KeyCode::X, PadButtons::CIRCLE),
                (KeyCode::S, PadButtons::TRIANGLE),
                (KeyCode::Z, PadButtons::CROSS),
                (KeyCode::Q, PadButtons::L1),
                (KeyCode::W, PadButtons::R1),
                (KeyCode::E, PadButtons::L2),
                (KeyCode::R, PadButtons::R2),
                (KeyCode::Backspace, PadButtons::SELECT),
                (KeyCode::Return, PadButtons::START),
            ],
            combos: Vec::new(),
            menu: MenuCombo {
                modifier: KeyCode::Backspace,
                key: KeyCode::Return,
                unless: None,
                release_on_return: PadButtons::START | PadButtons::SELECT,
            },
            quit_key: Some(KeyCode::Escape),
            overlay_toggle: KeyCode::V,
        }
    }

    /// Handheld layout; Escape acts as a shift key for the missing buttons
    pub fn handheld() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Up, PadButtons::DPAD_UP),
                (KeyCode::Down, PadButtons::DPAD_DOWN),
                (KeyCode::Left, PadButtons::DPAD_LEFT),
                (KeyCode::Right, PadButtons::DPAD_RIGHT),
                (KeyCode::LeftShift, PadButtons::SQUARE),
                (KeyCode::LeftCtrl, PadButtons::CIRCLE),
                (KeyCode::Space, PadButtons::TRIANGLE),
                (KeyCode::LeftAlt, PadButtons::CROSS),
                (KeyCode::Tab, PadButtons::L1),
                (KeyCode::Backspace, PadButtons::R1),
                (KeyCode::Return, PadButtons::START),
            ],
            combos: vec![
                ComboRemap {
                    modifier: KeyCode::Escape,
                    key: KeyCode::LeftAlt,
                    target: PadButtons::SELECT,
                    base: PadButtons::CROSS,
                },
                ComboRemap {
                    modifier: KeyCode::Escape,
                    key: KeyCode::Tab,
                    target: PadButtons::L2,
                    base: PadButtons::L1,
                },
                ComboRemap {
                    modifier: KeyCode::Escape,
                    key: KeyCode::Backspace,
                    target: PadButtons::R2,
                    base: PadButtons::R1,
                },
            ],
            menu: MenuCombo {
                modifier: KeyCode::Escape,
                key: KeyCode::Return,
                unless: Some(KeyCode::LeftAlt),
                release_on_return: PadButtons::START | PadButtons::CROSS,
            },
            quit_key: None,
            overlay_toggle: KeyCode::V,
        }
    }

    /// Button bound to a key, if any
    pub fn button_for(&self, key: KeyCode) -> Option<PadButtons> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, button)| button)
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_name() {
        assert_eq!(KeyProfile::from_name("handheld"), KeyProfile::Handheld);
        assert_eq!(KeyProfile::from_name(" HANDHELD "), KeyProfile::Handheld);
        assert_eq!(KeyProfile::from_name("desktop"), KeyProfile::Desktop);
        assert_eq!(KeyProfile::from_name("anything"), KeyProfile::Desktop);
    }

    #[test]
    fn test_desktop_bindings() {
        let table = KeyTable::desktop();
        assert_eq!(table.button_for(KeyCode::Z), Some(PadButtons::CROSS));
        assert_eq!(table.button_for(KeyCode::Up), Some(PadButtons::DPAD_UP));
        assert_eq!(table.button_for(KeyCode::F1), None);
        assert_eq!(table.quit_key, Some(KeyCode::Escape));
    }

    #[test]
    fn test_handheld_combos_cover_missing_buttons() {
        let table = KeyTable::handheld();
        for button in [PadButtons::SELECT, PadButtons::L2, PadButtons::R2] {
            assert!(table.bindings.iter().all(|&(_, b)| b != button));
            assert!(table.combos.iter().any(|c| c.target == button));
        }
        for combo in &table.combos {
            assert_eq!(table.button_for(combo.key), Some(combo.base));
        }
    }

    #[test]
    fn test_every_button_reachable() {
        for table in [KeyTable::desktop(), KeyTable::handheld()] {
            let mut reachable = PadButtons::empty();
            for &(_, button) in &table.bindings {
                reachable |= button;
            }
            for combo in &table.combos {
                reachable |= combo.target;
            }
            let expected = PadButtons::all() - PadButtons::L3 - PadButtons::R3;
            assert_eq!(reachable, expected);
        }
    }
}
