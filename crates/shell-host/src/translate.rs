//! winit event → input event translation and cursor action application.

use log::warn;
use shell_input::{CursorAction, InputEvent, MouseButton};
use winit::event::{DeviceEvent, ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window};

use crate::keymap::map_keycode;

/// Stateful window-event translator.
///
/// winit reports modifier state separately from key events, so the
/// translator tracks Ctrl across `ModifiersChanged` and stamps it into key
/// presses for the capture combo.
#[derive(Debug, Default)]
pub struct WinitTranslator {
    ctrl: bool,
}

impl WinitTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event, if the subsystem cares about it.
    pub fn translate_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.ctrl = modifiers.state().control_key();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = map_keycode(code)?;
                match event.state {
                    ElementState::Pressed if event.repeat => None,
                    ElementState::Pressed => Some(InputEvent::KeyDown {
                        key,
                        ctrl: self.ctrl,
                    }),
                    ElementState::Released => Some(InputEvent::KeyUp { key }),
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    WinitMouseButton::Left => MouseButton::Left,
                    WinitMouseButton::Middle => MouseButton::Middle,
                    WinitMouseButton::Right => MouseButton::Right,
                    _ => return None,
                };
                Some(InputEvent::MouseButton {
                    button,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::Focused(focused) => Some(InputEvent::FocusChanged { focused: *focused }),
            _ => None,
        }
    }
}

/// Translate a device event. Relative mouse deltas arrive here rather than
/// through window events.
#[must_use]
pub fn translate_device_event(event: &DeviceEvent) -> Option<InputEvent> {
    match event {
        DeviceEvent::MouseMotion { delta: (dx, dy) } => Some(InputEvent::MouseMotion {
            dx: *dx as i32,
            dy: *dy as i32,
        }),
        _ => None,
    }
}

/// Apply a queued cursor action to the host window.
pub fn apply_cursor_action(window: &Window, action: CursorAction) {
    match action {
        CursorAction::Grab => {
            window.set_cursor_visible(false);
            // Wayland/macOS support locking; X11 only confines.
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
                    warn!("failed to grab cursor: {e}");
                }
            }
        }
        CursorAction::Release => {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                warn!("failed to release cursor: {e}");
            }
            window.set_cursor_visible(true);
        }
    }
}
