//! Input device routing and capture management for the desktop shell.
//!
//! Raw host input events (keyboard, mouse, hot-pluggable game controllers)
//! are classified, translated, and routed onto the emulated machine's two
//! control ports. The subsystem also owns exclusive mouse capture with its
//! acquire/release heuristics, emulates two joysticks from keyboard keys
//! ("keysets"), and coordinates window-focus transitions with emulation
//! pause/resume.
//!
//! Everything runs synchronously inside the host application's main loop:
//! [`InputManager::handle_event`] once per polled event and
//! [`InputManager::update`] once per frame. Host cursor changes are emitted
//! as [`CursorAction`] records for the application to apply, never performed
//! directly.

mod capture;
mod device;
mod event;
mod gamepad;
mod keymap;
mod keyset;
mod manager;
mod prefs;

pub use capture::{
    CaptureState, CursorAction, SHAKE_MIN_AMPLITUDE, SHAKE_REVERSALS, SHAKE_WINDOW,
};
pub use device::{DEVICE_COUNT, DeviceId, DeviceKind, device_kind, device_name};
pub use event::{ControllerInfo, InputEvent, MouseButton, PadAxis, PadButton};
pub use gamepad::{AXIS_DEADZONE, MAX_GAMEPADS};
pub use keymap::amiga_keycode;
pub use manager::{DeviceInfo, InputManager, PORT_COUNT};
pub use prefs::InputPrefs;
