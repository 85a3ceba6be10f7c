//! gilrs gamepad event pump.

use gilrs::{Axis, Button, Event, EventType, Gilrs};
use shell_input::{ControllerInfo, InputEvent, PadAxis, PadButton};
use thiserror::Error;

/// Host adapter failures.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to initialize gamepad support: {0}")]
    Gamepad(String),
}

/// Owns the gilrs context and drains its events into input records.
pub struct GamepadPump {
    gilrs: Gilrs,
}

impl GamepadPump {
    pub fn new() -> Result<Self, HostError> {
        let gilrs = Gilrs::new().map_err(|e| HostError::Gamepad(e.to_string()))?;
        Ok(Self { gilrs })
    }

    /// Drain pending gamepad events, once per frame.
    ///
    /// gilrs reports controllers that were already plugged in at startup as
    /// ordinary `Connected` events, so no separate enumeration pass is
    /// needed.
    pub fn poll(&mut self, out: &mut Vec<InputEvent>) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            let instance = usize::from(id) as u32;
            match event {
                EventType::Connected => {
                    let pad = self.gilrs.gamepad(id);
                    out.push(InputEvent::ControllerAdded {
                        instance,
                        info: ControllerInfo {
                            name: pad.name().to_string(),
                            uuid: pad.uuid(),
                            vendor_id: pad.vendor_id().unwrap_or(0),
                            product_id: pad.product_id().unwrap_or(0),
                        },
                    });
                }
                EventType::Disconnected => {
                    out.push(InputEvent::ControllerRemoved { instance });
                }
                EventType::ButtonPressed(button, _) => {
                    if let Some(button) = map_button(button) {
                        out.push(InputEvent::ControllerButton {
                            instance,
                            button,
                            pressed: true,
                        });
                    }
                }
                EventType::ButtonReleased(button, _) => {
                    if let Some(button) = map_button(button) {
                        out.push(InputEvent::ControllerButton {
                            instance,
                            button,
                            pressed: false,
                        });
                    }
                }
                EventType::AxisChanged(axis, value, _) => {
                    if let Some(axis) = map_axis(axis) {
                        out.push(InputEvent::ControllerAxis {
                            instance,
                            axis,
                            value,
                        });
                    }
                }
                _ => {}
            }
        }
    }
}

/// Map a gilrs button to the shell's pad button.
#[must_use]
pub fn map_button(button: Button) -> Option<PadButton> {
    match button {
        Button::South => Some(PadButton::South),
        Button::East => Some(PadButton::East),
        Button::West => Some(PadButton::West),
        Button::North => Some(PadButton::North),
        Button::DPadUp => Some(PadButton::DPadUp),
        Button::DPadDown => Some(PadButton::DPadDown),
        Button::DPadLeft => Some(PadButton::DPadLeft),
        Button::DPadRight => Some(PadButton::DPadRight),
        Button::LeftTrigger => Some(PadButton::LeftTrigger),
        Button::RightTrigger => Some(PadButton::RightTrigger),
        Button::LeftTrigger2 => Some(PadButton::LeftTrigger2),
        Button::RightTrigger2 => Some(PadButton::RightTrigger2),
        Button::Start => Some(PadButton::Start),
        Button::Select => Some(PadButton::Select),
        _ => None,
    }
}

/// Map a gilrs axis to the shell's pad axis. Only the left stick routes to
/// the control ports.
#[must_use]
pub fn map_axis(axis: Axis) -> Option<PadAxis> {
    match axis {
        Axis::LeftStickX => Some(PadAxis::StickX),
        Axis::LeftStickY => Some(PadAxis::StickY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_buttons_convert() {
        assert_eq!(map_button(Button::South), Some(PadButton::South));
        assert_eq!(map_button(Button::DPadLeft), Some(PadButton::DPadLeft));
        assert_eq!(map_button(Button::RightTrigger2), Some(PadButton::RightTrigger2));
    }

    #[test]
    fn mode_and_thumb_buttons_do_not_convert() {
        assert_eq!(map_button(Button::Mode), None);
        assert_eq!(map_button(Button::LeftThumb), None);
        assert_eq!(map_button(Button::RightThumb), None);
    }

    #[test]
    fn only_the_left_stick_converts() {
        assert_eq!(map_axis(Axis::LeftStickX), Some(PadAxis::StickX));
        assert_eq!(map_axis(Axis::LeftStickY), Some(PadAxis::StickY));
        assert_eq!(map_axis(Axis::RightStickX), None);
        assert_eq!(map_axis(Axis::RightStickY), None);
    }
}
