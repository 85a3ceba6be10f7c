//! winit key code → shell key code conversion.

use shell_core::KeyCode;
use winit::keyboard::KeyCode as WinitKeyCode;

/// Convert a winit key code to the shell's key code.
///
/// Returns `None` for host keys the shell has no use for (lock keys, media
/// keys, and so on).
#[must_use]
pub fn map_keycode(keycode: WinitKeyCode) -> Option<KeyCode> {
    match keycode {
        // Letters
        WinitKeyCode::KeyA => Some(KeyCode::KeyA),
        WinitKeyCode::KeyB => Some(KeyCode::KeyB),
        WinitKeyCode::KeyC => Some(KeyCode::KeyC),
        WinitKeyCode::KeyD => Some(KeyCode::KeyD),
        WinitKeyCode::KeyE => Some(KeyCode::KeyE),
        WinitKeyCode::KeyF => Some(KeyCode::KeyF),
        WinitKeyCode::KeyG => Some(KeyCode::KeyG),
        WinitKeyCode::KeyH => Some(KeyCode::KeyH),
        WinitKeyCode::KeyI => Some(KeyCode::KeyI),
        WinitKeyCode::KeyJ => Some(KeyCode::KeyJ),
        WinitKeyCode::KeyK => Some(KeyCode::KeyK),
        WinitKeyCode::KeyL => Some(KeyCode::KeyL),
        WinitKeyCode::KeyM => Some(KeyCode::KeyM),
        WinitKeyCode::KeyN => Some(KeyCode::KeyN),
        WinitKeyCode::KeyO => Some(KeyCode::KeyO),
        WinitKeyCode::KeyP => Some(KeyCode::KeyP),
        WinitKeyCode::KeyQ => Some(KeyCode::KeyQ),
        WinitKeyCode::KeyR => Some(KeyCode::KeyR),
        WinitKeyCode::KeyS => Some(KeyCode::KeyS),
        WinitKeyCode::KeyT => Some(KeyCode::KeyT),
        WinitKeyCode::KeyU => Some(KeyCode::KeyU),
        WinitKeyCode::KeyV => Some(KeyCode::KeyV),
        WinitKeyCode::KeyW => Some(KeyCode::KeyW),
        WinitKeyCode::KeyX => Some(KeyCode::KeyX),
        WinitKeyCode::KeyY => Some(KeyCode::KeyY),
        WinitKeyCode::KeyZ => Some(KeyCode::KeyZ),

        // Numbers
        WinitKeyCode::Digit0 => Some(KeyCode::Digit0),
        WinitKeyCode::Digit1 => Some(KeyCode::Digit1),
        WinitKeyCode::Digit2 => Some(KeyCode::Digit2),
        WinitKeyCode::Digit3 => Some(KeyCode::Digit3),
        WinitKeyCode::Digit4 => Some(KeyCode::Digit4),
        WinitKeyCode::Digit5 => Some(KeyCode::Digit5),
        WinitKeyCode::Digit6 => Some(KeyCode::Digit6),
        WinitKeyCode::Digit7 => Some(KeyCode::Digit7),
        WinitKeyCode::Digit8 => Some(KeyCode::Digit8),
        WinitKeyCode::Digit9 => Some(KeyCode::Digit9),

        // Modifiers
        WinitKeyCode::ShiftLeft => Some(KeyCode::ShiftLeft),
        WinitKeyCode::ShiftRight => Some(KeyCode::ShiftRight),
        WinitKeyCode::ControlLeft => Some(KeyCode::ControlLeft),
        WinitKeyCode::ControlRight => Some(KeyCode::ControlRight),
        WinitKeyCode::AltLeft => Some(KeyCode::AltLeft),
        WinitKeyCode::AltRight => Some(KeyCode::AltRight),
        WinitKeyCode::SuperLeft => Some(KeyCode::SuperLeft),
        WinitKeyCode::SuperRight => Some(KeyCode::SuperRight),
        WinitKeyCode::CapsLock => Some(KeyCode::CapsLock),

        // Special
        WinitKeyCode::Enter => Some(KeyCode::Enter),
        WinitKeyCode::Space => Some(KeyCode::Space),
        WinitKeyCode::Backspace => Some(KeyCode::Backspace),
        WinitKeyCode::Tab => Some(KeyCode::Tab),
        WinitKeyCode::Escape => Some(KeyCode::Escape),
        WinitKeyCode::Delete => Some(KeyCode::Delete),
        WinitKeyCode::Insert => Some(KeyCode::Insert),
        WinitKeyCode::Home => Some(KeyCode::Home),
        WinitKeyCode::End => Some(KeyCode::End),
        WinitKeyCode::PageUp => Some(KeyCode::PageUp),
        WinitKeyCode::PageDown => Some(KeyCode::PageDown),

        // Arrow keys
        WinitKeyCode::ArrowUp => Some(KeyCode::ArrowUp),
        WinitKeyCode::ArrowDown => Some(KeyCode::ArrowDown),
        WinitKeyCode::ArrowLeft => Some(KeyCode::ArrowLeft),
        WinitKeyCode::ArrowRight => Some(KeyCode::ArrowRight),

        // Numpad
        WinitKeyCode::Numpad0 => Some(KeyCode::Numpad0),
        WinitKeyCode::Numpad1 => Some(KeyCode::Numpad1),
        WinitKeyCode::Numpad2 => Some(KeyCode::Numpad2),
        WinitKeyCode::Numpad3 => Some(KeyCode::Numpad3),
        WinitKeyCode::Numpad4 => Some(KeyCode::Numpad4),
        WinitKeyCode::Numpad5 => Some(KeyCode::Numpad5),
        WinitKeyCode::Numpad6 => Some(KeyCode::Numpad6),
        WinitKeyCode::Numpad7 => Some(KeyCode::Numpad7),
        WinitKeyCode::Numpad8 => Some(KeyCode::Numpad8),
        WinitKeyCode::Numpad9 => Some(KeyCode::Numpad9),
        WinitKeyCode::NumpadAdd => Some(KeyCode::NumpadAdd),
        WinitKeyCode::NumpadSubtract => Some(KeyCode::NumpadSubtract),
        WinitKeyCode::NumpadMultiply => Some(KeyCode::NumpadMultiply),
        WinitKeyCode::NumpadDivide => Some(KeyCode::NumpadDivide),
        WinitKeyCode::NumpadDecimal => Some(KeyCode::NumpadDecimal),
        WinitKeyCode::NumpadEnter => Some(KeyCode::NumpadEnter),

        // Function keys
        WinitKeyCode::F1 => Some(KeyCode::F1),
        WinitKeyCode::F2 => Some(KeyCode::F2),
        WinitKeyCode::F3 => Some(KeyCode::F3),
        WinitKeyCode::F4 => Some(KeyCode::F4),
        WinitKeyCode::F5 => Some(KeyCode::F5),
        WinitKeyCode::F6 => Some(KeyCode::F6),
        WinitKeyCode::F7 => Some(KeyCode::F7),
        WinitKeyCode::F8 => Some(KeyCode::F8),
        WinitKeyCode::F9 => Some(KeyCode::F9),
        WinitKeyCode::F10 => Some(KeyCode::F10),
        WinitKeyCode::F11 => Some(KeyCode::F11),
        WinitKeyCode::F12 => Some(KeyCode::F12),

        // Punctuation
        WinitKeyCode::Comma => Some(KeyCode::Comma),
        WinitKeyCode::Period => Some(KeyCode::Period),
        WinitKeyCode::Slash => Some(KeyCode::Slash),
        WinitKeyCode::Semicolon => Some(KeyCode::Semicolon),
        WinitKeyCode::Quote => Some(KeyCode::Quote),
        WinitKeyCode::BracketLeft => Some(KeyCode::BracketLeft),
        WinitKeyCode::BracketRight => Some(KeyCode::BracketRight),
        WinitKeyCode::Backslash => Some(KeyCode::Backslash),
        WinitKeyCode::Minus => Some(KeyCode::Minus),
        WinitKeyCode::Equal => Some(KeyCode::Equal),
        WinitKeyCode::Backquote => Some(KeyCode::Backquote),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_keys_convert() {
        assert_eq!(map_keycode(WinitKeyCode::KeyG), Some(KeyCode::KeyG));
        assert_eq!(map_keycode(WinitKeyCode::Numpad0), Some(KeyCode::Numpad0));
        assert_eq!(
            map_keycode(WinitKeyCode::ControlRight),
            Some(KeyCode::ControlRight)
        );
    }

    #[test]
    fn host_only_keys_do_not_convert() {
        assert_eq!(map_keycode(WinitKeyCode::NumLock), None);
        assert_eq!(map_keycode(WinitKeyCode::ScrollLock), None);
        assert_eq!(map_keycode(WinitKeyCode::PrintScreen), None);
    }
}
