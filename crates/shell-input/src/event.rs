//! Host-agnostic input event records.
//!
//! The host adapter converts windowing-library events into these records at
//! the boundary, so the routing logic never sees winit (or SDL, or anything
//! else) directly.

use shell_core::KeyCode;

/// A single host input event, already stripped down to what the subsystem
/// needs.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press. `ctrl` carries the host modifier state at press time,
    /// needed for the capture grab/release combo.
    KeyDown { key: KeyCode, ctrl: bool },
    /// Key release.
    KeyUp { key: KeyCode },
    /// Relative mouse movement (host relative-mode deltas).
    MouseMotion { dx: i32, dy: i32 },
    /// Mouse button press or release.
    MouseButton { button: MouseButton, pressed: bool },
    /// A controller appeared, with its descriptive properties.
    ControllerAdded { instance: u32, info: ControllerInfo },
    /// A tracked controller went away.
    ControllerRemoved { instance: u32 },
    /// Controller button press or release.
    ControllerButton {
        instance: u32,
        button: PadButton,
        pressed: bool,
    },
    /// Controller stick movement, value in -1.0..=1.0.
    ControllerAxis {
        instance: u32,
        axis: PadAxis,
        value: f32,
    },
    /// Window focus gained or lost.
    FocusChanged { focused: bool },
}

/// Host mouse buttons the subsystem cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Controller buttons, in the standard dual-stick layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    South,
    East,
    West,
    North,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    LeftTrigger,
    RightTrigger,
    LeftTrigger2,
    RightTrigger2,
    Start,
    Select,
}

/// Controller axes routed to the control ports (left stick only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAxis {
    StickX,
    StickY,
}

/// Descriptive properties of an attached controller, for the settings UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerInfo {
    pub name: String,
    pub uuid: [u8; 16],
    pub vendor_id: u16,
    pub product_id: u16,
}
