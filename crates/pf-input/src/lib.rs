//! Input handling for psxfront
//!
//! This crate turns host keyboard events into the two emulated digital
//! pads, and detects the hotkeys that quit, open the menu or toggle the
//! overlay.

pub mod events;
pub mod keyboard;
pub mod mapper;
pub mod mapping;
pub mod pad;

pub use events::{EventSource, InputEvent, ScriptedInput};
pub use keyboard::{KeyCode, KeyboardState};
pub use mapper::{InputMapper, PollReport};
pub use mapping::{ComboRemap, KeyProfile, KeyTable, MenuCombo};
pub use pad::{PadButtons, PadState, PAD_COUNT};
