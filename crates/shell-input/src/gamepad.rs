//! Hot-plugged game controller tracking and signal translation.
//!
//! Each attached controller claims the lowest free gamepad slot (1..4).
//! Button and stick input is folded into the same [`JoystickState`] format
//! the keysets produce; sticks are thresholded into four binary directions.

use log::{debug, info};
use shell_core::JoystickState;

use crate::event::{ControllerInfo, PadAxis, PadButton};

/// Maximum number of concurrently tracked controllers.
pub const MAX_GAMEPADS: usize = 4;

/// Stick deflection (fraction of full range) at which an axis counts as a
/// held direction.
pub const AXIS_DEADZONE: f32 = 0.5;

#[derive(Debug)]
struct Slot {
    instance: u32,
    info: ControllerInfo,
    held: JoystickState,
    axis_x: f32,
    axis_y: f32,
}

/// Tracks controller attachments and their current port signals.
#[derive(Debug, Default)]
pub struct GamepadManager {
    slots: [Option<Slot>; MAX_GAMEPADS],
}

impl GamepadManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly attached controller. Returns the slot it was assigned,
    /// or `None` when all slots are taken (the attachment is ignored, not
    /// queued).
    pub fn attach(&mut self, instance: u32, info: ControllerInfo) -> Option<usize> {
        if let Some(slot) = self.slot_of(instance) {
            return Some(slot);
        }
        let slot = self.slots.iter().position(Option::is_none)?;
        info!("controller '{}' attached as gamepad {}", info.name, slot + 1);
        self.slots[slot] = Some(Slot {
            instance,
            info,
            held: JoystickState::NEUTRAL,
            axis_x: 0.0,
            axis_y: 0.0,
        });
        Some(slot)
    }

    /// Stop tracking a detached controller. Returns the freed slot.
    pub fn detach(&mut self, instance: u32) -> Option<usize> {
        let slot = self.slot_of(instance)?;
        info!("gamepad {} detached", slot + 1);
        self.slots[slot] = None;
        Some(slot)
    }

    /// The slot a host instance id is tracked under, if any.
    #[must_use]
    pub fn slot_of(&self, instance: u32) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| s.instance == instance))
    }

    /// Apply a button event. Returns the affected slot when the controller
    /// is tracked and the button carries a port signal.
    pub fn button(&mut self, instance: u32, button: PadButton, pressed: bool) -> Option<usize> {
        let slot = self.slot_of(instance)?;
        let held = &mut self.slots[slot].as_mut()?.held;
        match button {
            PadButton::DPadUp => held.up = pressed,
            PadButton::DPadDown => held.down = pressed,
            PadButton::DPadLeft => held.left = pressed,
            PadButton::DPadRight => held.right = pressed,
            PadButton::South
            | PadButton::West
            | PadButton::LeftTrigger
            | PadButton::RightTrigger
            | PadButton::LeftTrigger2
            | PadButton::RightTrigger2 => held.fire = pressed,
            PadButton::East | PadButton::North => held.fire2 = pressed,
            PadButton::Start | PadButton::Select => {
                debug!("ignoring unrouted controller button {button:?}");
                return None;
            }
        }
        Some(slot)
    }

    /// Apply a stick movement. Returns the affected slot when the
    /// controller is tracked.
    pub fn axis(&mut self, instance: u32, axis: PadAxis, value: f32) -> Option<usize> {
        let slot = self.slot_of(instance)?;
        let state = self.slots[slot].as_mut()?;
        match axis {
            PadAxis::StickX => state.axis_x = value,
            PadAxis::StickY => state.axis_y = value,
        }
        Some(slot)
    }

    /// Current port signal of a slot: held buttons OR-ed with the
    /// thresholded stick. Empty slots read neutral.
    #[must_use]
    pub fn state(&self, slot: usize) -> JoystickState {
        let Some(Some(s)) = self.slots.get(slot) else {
            return JoystickState::NEUTRAL;
        };
        let mut state = s.held;
        if s.axis_x > AXIS_DEADZONE {
            state.right = true;
        } else if s.axis_x < -AXIS_DEADZONE {
            state.left = true;
        }
        if s.axis_y > AXIS_DEADZONE {
            state.up = true;
        } else if s.axis_y < -AXIS_DEADZONE {
            state.down = true;
        }
        state
    }

    /// Whether a slot currently has a controller.
    #[must_use]
    pub fn connected(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(Option::is_some)
    }

    /// Descriptive properties of the controller in a slot.
    #[must_use]
    pub fn info(&self, slot: usize) -> Option<&ControllerInfo> {
        self.slots.get(slot)?.as_ref().map(|s| &s.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> ControllerInfo {
        ControllerInfo {
            name: name.to_string(),
            ..ControllerInfo::default()
        }
    }

    #[test]
    fn attachments_fill_the_lowest_free_slot() {
        let mut pads = GamepadManager::new();
        assert_eq!(pads.attach(10, info("a")), Some(0));
        assert_eq!(pads.attach(11, info("b")), Some(1));

        pads.detach(10);
        assert_eq!(pads.attach(12, info("c")), Some(0));
    }

    #[test]
    fn fifth_attachment_is_ignored() {
        let mut pads = GamepadManager::new();
        for instance in 0..4 {
            assert!(pads.attach(instance, info("pad")).is_some());
        }
        assert_eq!(pads.attach(4, info("extra")), None);
        assert_eq!(pads.slot_of(4), None);
    }

    #[test]
    fn duplicate_attach_keeps_the_existing_slot() {
        let mut pads = GamepadManager::new();
        assert_eq!(pads.attach(7, info("pad")), Some(0));
        assert_eq!(pads.attach(7, info("pad")), Some(0));
        assert!(!pads.connected(1));
    }

    #[test]
    fn detached_slot_reads_neutral() {
        let mut pads = GamepadManager::new();
        pads.attach(7, info("pad"));
        pads.button(7, PadButton::DPadRight, true);
        assert!(pads.state(0).right);

        pads.detach(7);
        assert_eq!(pads.state(0), JoystickState::NEUTRAL);
    }

    #[test]
    fn axis_crosses_the_deadzone_into_directions() {
        let mut pads = GamepadManager::new();
        pads.attach(7, info("pad"));

        pads.axis(7, PadAxis::StickX, 0.4);
        assert_eq!(pads.state(0), JoystickState::NEUTRAL);

        pads.axis(7, PadAxis::StickX, 0.6);
        assert!(pads.state(0).right);

        pads.axis(7, PadAxis::StickX, -0.9);
        assert!(pads.state(0).left);
        assert!(!pads.state(0).right);
    }

    #[test]
    fn recentered_stick_does_not_clear_a_held_dpad_direction() {
        let mut pads = GamepadManager::new();
        pads.attach(7, info("pad"));
        pads.button(7, PadButton::DPadRight, true);
        pads.axis(7, PadAxis::StickX, 0.9);
        assert!(pads.state(0).right);

        pads.axis(7, PadAxis::StickX, 0.0);
        assert!(pads.state(0).right);
    }

    #[test]
    fn face_buttons_split_across_both_fire_signals() {
        let mut pads = GamepadManager::new();
        pads.attach(7, info("pad"));

        pads.button(7, PadButton::South, true);
        assert!(pads.state(0).fire);
        assert!(!pads.state(0).fire2);

        pads.button(7, PadButton::East, true);
        assert!(pads.state(0).fire2);

        assert_eq!(pads.button(7, PadButton::Start, true), None);
    }

    #[test]
    fn untracked_instances_are_ignored() {
        let mut pads = GamepadManager::new();
        assert_eq!(pads.button(99, PadButton::South, true), None);
        assert_eq!(pads.axis(99, PadAxis::StickX, 1.0), None);
        assert_eq!(pads.detach(99), None);
    }
}
