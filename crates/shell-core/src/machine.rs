//! Emulator facade for the desktop shell.
//!
//! This module defines the `MachineControl` trait through which the input
//! subsystem pushes control-port signals, translated keystrokes, and
//! run/pause requests into the emulator core.

/// Joystick state for one control port.
///
/// The machine maps this to its native port format internally (on the Amiga,
/// the JOYxDAT/CIA encoding). Directions and fire combine freely, so a
/// diagonal is simply two directions set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoystickState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub fire2: bool,
}

impl JoystickState {
    /// The neutral (nothing held) state.
    pub const NEUTRAL: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        fire: false,
        fire2: false,
    };
}

/// Mouse button state for one control port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

/// Host key codes understood by the shell.
///
/// This is a subset of winit's `KeyCode` so that neither this crate nor the
/// input subsystem depends on a windowing library. The host adapter converts
/// at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Numbers
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,
    CapsLock,

    // Special
    Enter,
    Space,
    Backspace,
    Tab,
    Escape,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Numpad (also used for joystick emulation)
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Punctuation
    Comma,
    Period,
    Slash,
    Semicolon,
    Quote,
    BracketLeft,
    BracketRight,
    Backslash,
    Minus,
    Equal,
    Backquote,
}

/// Facade over the emulator core.
///
/// The input subsystem drives the machine exclusively through this trait;
/// the application implements it against the real emulator API, and tests
/// implement it with a recording fake.
pub trait MachineControl {
    /// Set the joystick state for a control port (0 or 1).
    fn set_joystick(&mut self, port: u8, state: JoystickState);

    /// Feed a relative mouse movement to a control port (0 or 1).
    fn mouse_motion(&mut self, port: u8, dx: i32, dy: i32);

    /// Set the mouse button state for a control port (0 or 1).
    fn mouse_button(&mut self, port: u8, buttons: MouseButtons);

    /// Press a key, given as an Amiga raw keycode.
    fn key_down(&mut self, code: u8);

    /// Release a key, given as an Amiga raw keycode.
    fn key_up(&mut self, code: u8);

    /// Whether the emulation is currently running (not paused).
    fn is_running(&self) -> bool;

    /// Pause the emulation.
    fn pause(&mut self);

    /// Resume the emulation.
    fn resume(&mut self);
}
