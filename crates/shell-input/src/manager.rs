//! Port assignment, event routing, and focus/pause coordination.
//!
//! `InputManager` is the subsystem's public face: the application feeds it
//! one [`InputEvent`] per polled host event and calls [`InputManager::update`]
//! once per frame. Signals reach the emulator through the
//! [`MachineControl`] facade; host cursor changes are queued as
//! [`CursorAction`] records.

use log::debug;
use shell_core::{JoystickState, KeyCode, MachineControl, MouseButtons};

use crate::capture::{CaptureState, CursorAction, MouseCapture};
use crate::device::DeviceId;
use crate::event::{ControllerInfo, InputEvent, MouseButton};
use crate::gamepad::GamepadManager;
use crate::keymap::amiga_keycode;
use crate::keyset::KeysetEmulator;
use crate::prefs::InputPrefs;

/// Number of control ports on the machine.
pub const PORT_COUNT: usize = 2;

/// Read-only device metadata for the settings UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub uuid: [u8; 16],
    pub vendor_id: u16,
    pub product_id: u16,
    pub connected: bool,
}

/// Routes host input onto the machine's two control ports.
pub struct InputManager {
    /// Behavior switches, owned by configuration and mutated from the
    /// settings UI.
    pub prefs: InputPrefs,
    ports: [DeviceId; PORT_COUNT],
    keysets: KeysetEmulator,
    gamepads: GamepadManager,
    capture: MouseCapture,
    window_focused: bool,
    viewport_hovered: bool,
    mouse_buttons: MouseButtons,
    auto_paused: bool,
    last_sent: [JoystickState; PORT_COUNT],
}

impl InputManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefs: InputPrefs::default(),
            // Mouse in port 1, keyset 1 in port 2, like the real machine's
            // usual wiring.
            ports: [DeviceId::Mouse, DeviceId::Keyset1],
            keysets: KeysetEmulator::new(),
            gamepads: GamepadManager::new(),
            capture: MouseCapture::new(),
            window_focused: true,
            viewport_hovered: false,
            mouse_buttons: MouseButtons::default(),
            auto_paused: false,
            last_sent: [JoystickState::NEUTRAL; PORT_COUNT],
        }
    }

    /// Assign logical devices to the two control ports. Raw values are
    /// clamped; both ports may name the same device.
    pub fn set_port_devices(&mut self, port1: i32, port2: i32) {
        self.ports = [DeviceId::from_raw(port1), DeviceId::from_raw(port2)];
    }

    /// Current port assignment.
    #[must_use]
    pub fn port_devices(&self) -> [DeviceId; PORT_COUNT] {
        self.ports
    }

    /// Record whether the pointer is over the rendered video area (and not
    /// over a UI widget). Evaluated on the next [`update`](Self::update).
    pub fn set_viewport_hovered(&mut self, hovered: bool) {
        self.viewport_hovered = hovered;
    }

    /// Current capture state.
    #[must_use]
    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// Drain pending host cursor changes, oldest first.
    pub fn take_cursor_actions(&mut self) -> Vec<CursorAction> {
        self.capture.take_actions()
    }

    /// Per-frame pass: evaluates the hover capture trigger and reconciles
    /// every port with its bound device's current signal, which covers
    /// rebinding and detached controllers falling back to neutral.
    pub fn update<M: MachineControl>(&mut self, machine: &mut M) {
        if self.window_focused && self.viewport_hovered {
            self.capture.on_viewport_enter(&self.prefs);
        }
        for port in 0..PORT_COUNT {
            let desired = self.port_signal(self.ports[port]);
            if desired != self.last_sent[port] {
                self.last_sent[port] = desired;
                machine.set_joystick(port as u8, desired);
            }
        }
    }

    /// Route one host event.
    pub fn handle_event<M: MachineControl>(&mut self, event: &InputEvent, machine: &mut M) {
        match *event {
            InputEvent::KeyDown { key, ctrl } => self.handle_key_down(key, ctrl, machine),
            InputEvent::KeyUp { key } => self.handle_key_up(key, machine),
            InputEvent::MouseMotion { dx, dy } => self.handle_mouse_motion(dx, dy, machine),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, machine);
            }
            InputEvent::ControllerAdded { instance, ref info } => {
                self.handle_controller_added(instance, info);
            }
            InputEvent::ControllerRemoved { instance } => {
                self.handle_controller_removed(instance, machine);
            }
            InputEvent::ControllerButton {
                instance,
                button,
                pressed,
            } => {
                if let Some(slot) = self.gamepads.button(instance, button, pressed) {
                    self.sync_gamepad(slot, machine);
                }
            }
            InputEvent::ControllerAxis {
                instance,
                axis,
                value,
            } => {
                if let Some(slot) = self.gamepads.axis(instance, axis, value) {
                    self.sync_gamepad(slot, machine);
                }
            }
            InputEvent::FocusChanged { focused } => self.handle_window_focus(focused, machine),
        }
    }

    /// Window focus transition. Focus loss always releases capture; the
    /// pause side only engages when the machine was actually running, so a
    /// user-initiated pause is never silently undone on refocus.
    pub fn handle_window_focus<M: MachineControl>(&mut self, focused: bool, machine: &mut M) {
        self.window_focused = focused;
        if focused {
            if self.auto_paused {
                debug!("focus regained, resuming emulation");
                machine.resume();
                self.auto_paused = false;
            }
            return;
        }
        self.release_capture(machine);
        if self.prefs.pause_in_background && machine.is_running() {
            debug!("focus lost, pausing emulation");
            machine.pause();
            self.auto_paused = true;
        }
    }

    /// Force-release capture at teardown so the host cursor is never left
    /// grabbed. The application must drain and apply the queued action.
    pub fn shutdown(&mut self) {
        self.capture.force_release();
    }

    /// Connection metadata for any raw device id. Gamepad entries carry the
    /// attached controller's properties while one is present.
    #[must_use]
    pub fn device_info(&self, raw: i32) -> DeviceInfo {
        let Some(device) = usize::try_from(raw)
            .ok()
            .and_then(|i| DeviceId::ALL.get(i).copied())
        else {
            return DeviceInfo {
                name: "Unknown".to_string(),
                ..DeviceInfo::default()
            };
        };
        if let Some(slot) = device.gamepad_slot() {
            return match self.gamepads.info(slot) {
                Some(ControllerInfo {
                    name,
                    uuid,
                    vendor_id,
                    product_id,
                }) => DeviceInfo {
                    name: name.clone(),
                    uuid: *uuid,
                    vendor_id: *vendor_id,
                    product_id: *product_id,
                    connected: true,
                },
                None => DeviceInfo {
                    name: device.name().to_string(),
                    ..DeviceInfo::default()
                },
            };
        }
        DeviceInfo {
            name: device.name().to_string(),
            connected: device != DeviceId::None,
            ..DeviceInfo::default()
        }
    }

    /// Names of the signals a device is currently asserting, for the
    /// settings UI's live input display.
    #[must_use]
    pub fn active_actions(&self, raw: i32) -> Vec<&'static str> {
        let device = DeviceId::from_raw(raw);
        if device == DeviceId::Mouse {
            let mut actions = Vec::new();
            if self.mouse_buttons.left {
                actions.push("Left Button");
            }
            if self.mouse_buttons.middle {
                actions.push("Middle Button");
            }
            if self.mouse_buttons.right {
                actions.push("Right Button");
            }
            return actions;
        }
        let state = self.port_signal(device);
        let mut actions = Vec::new();
        if state.up {
            actions.push("Up");
        }
        if state.down {
            actions.push("Down");
        }
        if state.left {
            actions.push("Left");
        }
        if state.right {
            actions.push("Right");
        }
        if state.fire {
            actions.push("Fire");
        }
        if state.fire2 {
            actions.push("Fire 2");
        }
        actions
    }

    fn handle_key_down<M: MachineControl>(&mut self, key: KeyCode, ctrl: bool, machine: &mut M) {
        if ctrl && key == KeyCode::KeyG {
            if self.capture.is_captured() {
                self.release_capture(machine);
            } else {
                self.capture.on_toggle_combo();
            }
            return;
        }
        if let Some(keyset) = self.keysets.key_down(key) {
            let device = keyset_device(keyset);
            if self.is_bound(device) {
                self.push_joystick(device, self.keysets.state(keyset), machine);
                return;
            }
            // Unbound keyset: state stays live, the key still types.
        }
        if let Some(code) = amiga_keycode(key) {
            machine.key_down(code);
        }
    }

    fn handle_key_up<M: MachineControl>(&mut self, key: KeyCode, machine: &mut M) {
        if let Some(keyset) = self.keysets.key_up(key) {
            let device = keyset_device(keyset);
            if self.is_bound(device) {
                self.push_joystick(device, self.keysets.state(keyset), machine);
                return;
            }
        }
        if let Some(code) = amiga_keycode(key) {
            machine.key_up(code);
        }
    }

    fn handle_mouse_motion<M: MachineControl>(&mut self, dx: i32, dy: i32, machine: &mut M) {
        if !self.capture.is_captured() {
            // Released: motion only ever feeds the entry triggers, which
            // run off the hover flag. Nothing reaches the machine.
            return;
        }
        if self.capture.on_motion(dx, &self.prefs) {
            self.lift_mouse_buttons(machine);
            return;
        }
        for port in 0..PORT_COUNT {
            if self.ports[port] == DeviceId::Mouse {
                machine.mouse_motion(port as u8, dx, dy);
            }
        }
    }

    fn handle_mouse_button<M: MachineControl>(
        &mut self,
        button: MouseButton,
        pressed: bool,
        machine: &mut M,
    ) {
        if !self.capture.is_captured() {
            if pressed
                && button == MouseButton::Left
                && self.window_focused
                && self.viewport_hovered
            {
                // The acquiring click is swallowed, not forwarded.
                self.capture.on_viewport_click(&self.prefs);
            }
            return;
        }
        match button {
            MouseButton::Left => self.mouse_buttons.left = pressed,
            MouseButton::Middle => self.mouse_buttons.middle = pressed,
            MouseButton::Right => self.mouse_buttons.right = pressed,
        }
        self.send_mouse_buttons(machine);
    }

    fn handle_controller_added(&mut self, instance: u32, info: &ControllerInfo) {
        self.gamepads.attach(instance, info.clone());
    }

    fn handle_controller_removed<M: MachineControl>(&mut self, instance: u32, machine: &mut M) {
        if let Some(slot) = self.gamepads.detach(instance) {
            if let Some(device) = DeviceId::for_gamepad_slot(slot) {
                // A port still pointing at this slot reads neutral from now
                // on, not the last-known state.
                self.push_joystick(device, JoystickState::NEUTRAL, machine);
            }
        }
    }

    fn sync_gamepad<M: MachineControl>(&mut self, slot: usize, machine: &mut M) {
        if let Some(device) = DeviceId::for_gamepad_slot(slot) {
            self.push_joystick(device, self.gamepads.state(slot), machine);
        }
    }

    fn is_bound(&self, device: DeviceId) -> bool {
        self.ports.contains(&device)
    }

    /// Push a joystick signal to every port the device is bound to,
    /// skipping ports already at that state.
    fn push_joystick<M: MachineControl>(
        &mut self,
        device: DeviceId,
        state: JoystickState,
        machine: &mut M,
    ) {
        for port in 0..PORT_COUNT {
            if self.ports[port] == device && self.last_sent[port] != state {
                self.last_sent[port] = state;
                machine.set_joystick(port as u8, state);
            }
        }
    }

    fn send_mouse_buttons<M: MachineControl>(&mut self, machine: &mut M) {
        for port in 0..PORT_COUNT {
            if self.ports[port] == DeviceId::Mouse {
                machine.mouse_button(port as u8, self.mouse_buttons);
            }
        }
    }

    /// Release capture and lift any buttons still held, so the emulated
    /// mouse is never stuck pressed after the host cursor comes back.
    fn release_capture<M: MachineControl>(&mut self, machine: &mut M) {
        if self.capture.force_release() {
            self.lift_mouse_buttons(machine);
        }
    }

    fn lift_mouse_buttons<M: MachineControl>(&mut self, machine: &mut M) {
        if self.mouse_buttons != MouseButtons::default() {
            self.mouse_buttons = MouseButtons::default();
            self.send_mouse_buttons(machine);
        }
    }

    fn port_signal(&self, device: DeviceId) -> JoystickState {
        match device {
            DeviceId::Keyset1 => self.keysets.state(0),
            DeviceId::Keyset2 => self.keysets.state(1),
            DeviceId::Gamepad1 | DeviceId::Gamepad2 | DeviceId::Gamepad3 | DeviceId::Gamepad4 => {
                self.gamepads.state(device.gamepad_slot().unwrap_or(0))
            }
            DeviceId::None | DeviceId::Mouse => JoystickState::NEUTRAL,
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn keyset_device(keyset: usize) -> DeviceId {
    if keyset == 0 {
        DeviceId::Keyset1
    } else {
        DeviceId::Keyset2
    }
}
