//! User preferences read by the input subsystem.
//!
//! Owned by the application's configuration layer and mutated from the
//! settings UI; the subsystem only ever reads them.

/// Capture and pause behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputPrefs {
    /// Pause the emulation while the window is unfocused.
    pub pause_in_background: bool,
    /// Clicking inside the viewport captures the mouse.
    pub retain_mouse_by_click: bool,
    /// Moving the pointer into the viewport captures the mouse.
    pub retain_mouse_by_entering: bool,
    /// Rapid back-and-forth motion releases a captured mouse.
    pub release_mouse_by_shaking: bool,
}

impl Default for InputPrefs {
    fn default() -> Self {
        Self {
            pause_in_background: true,
            retain_mouse_by_click: true,
            retain_mouse_by_entering: false,
            release_mouse_by_shaking: true,
        }
    }
}
