//! Core types shared between the input subsystem and its hosts.
//!
//! This crate defines the control-port signal types and the `MachineControl`
//! facade through which the shell drives the emulator core. It deliberately
//! has no windowing or gamepad dependencies so the subsystem can be tested
//! against a fake machine.

mod machine;

pub use machine::{JoystickState, KeyCode, MachineControl, MouseButtons};
