//! Keyboard-emulated joysticks ("keysets").
//!
//! Two independent virtual joysticks are derived from fixed key clusters:
//! keyset 1 uses the arrow keys with Right Ctrl as fire, keyset 2 uses the
//! numpad 8/4/2/6 cluster with Numpad 0 as fire. The tables are static; they
//! are not user-editable here.

use shell_core::{JoystickState, KeyCode};

/// Number of keyboard-emulated joysticks.
pub const KEYSET_COUNT: usize = 2;

#[derive(Debug, Clone, Copy)]
enum Signal {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

fn binding(key: KeyCode) -> Option<(usize, Signal)> {
    match key {
        KeyCode::ArrowUp => Some((0, Signal::Up)),
        KeyCode::ArrowDown => Some((0, Signal::Down)),
        KeyCode::ArrowLeft => Some((0, Signal::Left)),
        KeyCode::ArrowRight => Some((0, Signal::Right)),
        KeyCode::ControlRight => Some((0, Signal::Fire)),

        KeyCode::Numpad8 => Some((1, Signal::Up)),
        KeyCode::Numpad2 => Some((1, Signal::Down)),
        KeyCode::Numpad4 => Some((1, Signal::Left)),
        KeyCode::Numpad6 => Some((1, Signal::Right)),
        KeyCode::Numpad0 => Some((1, Signal::Fire)),

        _ => None,
    }
}

/// Tracks the held-key state of both keysets.
///
/// State is updated for every bound key regardless of whether the keyset is
/// currently assigned to a port, so a later assignment starts from live
/// state instead of a stale snapshot.
#[derive(Debug, Default)]
pub struct KeysetEmulator {
    state: [JoystickState; KEYSET_COUNT],
}

impl KeysetEmulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns the keyset the key belongs to, if any.
    pub fn key_down(&mut self, key: KeyCode) -> Option<usize> {
        self.apply(key, true)
    }

    /// Record a key release. Returns the keyset the key belongs to, if any.
    pub fn key_up(&mut self, key: KeyCode) -> Option<usize> {
        self.apply(key, false)
    }

    /// Current joystick state of a keyset. Held keys combine by OR, so
    /// releasing one of two held directions preserves the other.
    #[must_use]
    pub fn state(&self, keyset: usize) -> JoystickState {
        self.state.get(keyset).copied().unwrap_or_default()
    }

    fn apply(&mut self, key: KeyCode, pressed: bool) -> Option<usize> {
        let (keyset, signal) = binding(key)?;
        let state = &mut self.state[keyset];
        match signal {
            Signal::Up => state.up = pressed,
            Signal::Down => state.down = pressed,
            Signal::Left => state.left = pressed,
            Signal::Right => state.right = pressed,
            Signal::Fire => state.fire = pressed,
        }
        Some(keyset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_keys_are_not_handled() {
        let mut keysets = KeysetEmulator::new();
        assert_eq!(keysets.key_down(KeyCode::KeyA), None);
        assert_eq!(keysets.key_up(KeyCode::Space), None);
    }

    #[test]
    fn held_directions_combine_into_diagonals() {
        let mut keysets = KeysetEmulator::new();
        assert_eq!(keysets.key_down(KeyCode::ArrowUp), Some(0));
        assert_eq!(keysets.key_down(KeyCode::ArrowRight), Some(0));

        let state = keysets.state(0);
        assert!(state.up && state.right);
        assert!(!state.down && !state.left && !state.fire);
    }

    #[test]
    fn releasing_one_key_preserves_the_other() {
        let mut keysets = KeysetEmulator::new();
        keysets.key_down(KeyCode::ArrowUp);
        keysets.key_down(KeyCode::ArrowRight);
        keysets.key_up(KeyCode::ArrowUp);

        let state = keysets.state(0);
        assert!(state.right);
        assert!(!state.up);
    }

    #[test]
    fn keysets_are_independent() {
        let mut keysets = KeysetEmulator::new();
        keysets.key_down(KeyCode::ArrowLeft);
        assert_eq!(keysets.key_down(KeyCode::Numpad8), Some(1));

        assert!(keysets.state(0).left);
        assert!(!keysets.state(0).up);
        assert!(keysets.state(1).up);
        assert!(!keysets.state(1).left);
    }

    #[test]
    fn fire_keys_set_the_fire_signal() {
        let mut keysets = KeysetEmulator::new();
        keysets.key_down(KeyCode::ControlRight);
        keysets.key_down(KeyCode::Numpad0);
        assert!(keysets.state(0).fire);
        assert!(keysets.state(1).fire);

        keysets.key_up(KeyCode::ControlRight);
        assert!(!keysets.state(0).fire);
        assert!(keysets.state(1).fire);
    }
}
