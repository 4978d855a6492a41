//! Host keyboard state
//!
//! Keys are identified by their USB HID usage codes so that tables stay
//! independent of the platform layer producing the events.

/// Keyboard key codes (USB HID usage codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum KeyCode {
    // Letters
    A = 0x04, B = 0x05, C = 0x06, D = 0x07,
    E = 0x08, F = 0x09, G = 0x0A, H = 0x0B,
    I = 0x0C, J = 0x0D, K = 0x0E, L = 0x0F,
    M = 0x10, N = 0x11, O = 0x12, P = 0x13,
    Q = 0x14, R = 0x15, S = 0x16, T = 0x17,
    U = 0x18, V = 0x19, W = 0x1A, X = 0x1B,
    Y = 0x1C, Z = 0x1D,

    // Special keys
    Return = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,

    // Function keys
    F1 = 0x3A, F2 = 0x3B, F3 = 0x3C, F4 = 0x3D,

    // Arrow keys
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,

    // Modifiers
    LeftCtrl = 0xE0,
    LeftShift = 0xE1,
    LeftAlt = 0xE2,
}

impl KeyCode {
    #[rustfmt::skip]
    pub const ALL: [KeyCode; 42] = [
        Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G, Self::H,
        Self::I, Self::J, Self::K, Self::L, Self::M, Self::N, Self::O, Self::P,
        Self::Q, Self::R, Self::S, Self::T, Self::U, Self::V, Self::W, Self::X,
        Self::Y, Self::Z,
        Self::Return, Self::Escape, Self::Backspace, Self::Tab, Self::Space,
        Self::F1, Self::F2, Self::F3, Self::F4,
        Self::Right, Self::Left, Self::Down, Self::Up,
        Self::LeftCtrl, Self::LeftShift, Self::LeftAlt,
    ];

    pub fn usage(self) -> u16 {
        self as u16
    }

    /// Key for a HID usage code, if it is one the frontend knows
    pub fn from_usage(usage: u16) -> Option<KeyCode> {
        Self::ALL.into_iter().find(|key| key.usage() == usage)
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed_keys: Vec<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn press_key(&mut self, key: KeyCode) {
        if !self.is_key_pressed(key) {
            self.pressed_keys.push(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.pressed_keys.retain(|&k| k != key);
    }

    pub fn pressed_keys(&self) -> &[KeyCode] {
        &self.pressed_keys
    }

    pub fn clear(&mut self) {
        self.pressed_keys.clear();
    }
}
