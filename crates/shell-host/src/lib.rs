//! Host adapter for the input subsystem.
//!
//! Translates winit window/device events and gilrs gamepad events into the
//! subsystem's [`InputEvent`](shell_input::InputEvent) records, and applies
//! queued cursor actions back to the winit window. This is the only crate
//! that sees the windowing or gamepad libraries.

mod keymap;
mod pump;
mod translate;

pub use keymap::map_keycode;
pub use pump::{GamepadPump, HostError};
pub use translate::{WinitTranslator, apply_cursor_action, translate_device_event};
