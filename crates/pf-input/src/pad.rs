//! Controller pad state
//!
//! The emulated pad reports a 16-bit mask where a cleared bit means the
//! button is held. Callers go through [`PadState::is_pressed`] and
//! [`PadState::set_pressed`] instead of touching the polarity themselves.

use bitflags::bitflags;

bitflags! {
    /// PSX digital pad buttons, in hardware bit order
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PadButtons: u16 {
        const SELECT     = 0x0001;
        const L3         = 0x0002;
        const R3         = 0x0004;
        const START      = 0x0008;
        const DPAD_UP    = 0x0010;
        const DPAD_RIGHT = 0x0020;
        const DPAD_DOWN  = 0x0040;
        const DPAD_LEFT  = 0x0080;
        const L2         = 0x0100;
        const R2         = 0x0200;
        const L1         = 0x0400;
        const R1         = 0x0800;
        const TRIANGLE   = 0x1000;
        const CIRCLE     = 0x2000;
        const CROSS      = 0x4000;
        const SQUARE     = 0x8000;
    }
}

/// Number of emulated controller ports
pub const PAD_COUNT: usize = 2;

/// Active-low button mask for one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadState(u16);

impl PadState {
    /// Every button released
    pub const RELEASED: PadState = PadState(0xFFFF);

    pub fn released() -> Self {
        Self::RELEASED
    }

    /// Wrap a raw mask as read by the core
    pub fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw mask (bit cleared = pressed)
    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn is_pressed(self, button: PadButtons) -> bool {
        self.0 & button.bits() == 0
    }

    pub fn set_pressed(&mut self, button: PadButtons, pressed: bool) {
        if pressed {
            self.0 &= !button.bits();
        } else {
            self.0 |= button.bits();
        }
    }

    /// Force buttons to the released state
    pub fn release(&mut self, buttons: PadButtons) {
        self.set_pressed(buttons, false);
    }

    /// Buttons currently held
    pub fn pressed(self) -> PadButtons {
        PadButtons::from_bits_truncate(!self.0)
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::RELEASED
    }
}
