//! Host key → Amiga raw keycode translation (US positional layout).
//!
//! Unmapped host keys return `None` and are silently dropped by the caller;
//! the emulated keyboard has a small fixed key set and host-only keys
//! (menu shortcuts and so on) are expected and frequent.

use shell_core::KeyCode;

/// Translate a host key to an Amiga raw keycode.
#[must_use]
pub fn amiga_keycode(key: KeyCode) -> Option<u8> {
    match key {
        // Top row
        KeyCode::Backquote => Some(0x00),
        KeyCode::Digit1 => Some(0x01),
        KeyCode::Digit2 => Some(0x02),
        KeyCode::Digit3 => Some(0x03),
        KeyCode::Digit4 => Some(0x04),
        KeyCode::Digit5 => Some(0x05),
        KeyCode::Digit6 => Some(0x06),
        KeyCode::Digit7 => Some(0x07),
        KeyCode::Digit8 => Some(0x08),
        KeyCode::Digit9 => Some(0x09),
        KeyCode::Digit0 => Some(0x0A),
        KeyCode::Minus => Some(0x0B),
        KeyCode::Equal => Some(0x0C),
        KeyCode::Backslash => Some(0x0D),

        // Letters
        KeyCode::KeyQ => Some(0x10),
        KeyCode::KeyW => Some(0x11),
        KeyCode::KeyE => Some(0x12),
        KeyCode::KeyR => Some(0x13),
        KeyCode::KeyT => Some(0x14),
        KeyCode::KeyY => Some(0x15),
        KeyCode::KeyU => Some(0x16),
        KeyCode::KeyI => Some(0x17),
        KeyCode::KeyO => Some(0x18),
        KeyCode::KeyP => Some(0x19),
        KeyCode::BracketLeft => Some(0x1A),
        KeyCode::BracketRight => Some(0x1B),

        KeyCode::KeyA => Some(0x20),
        KeyCode::KeyS => Some(0x21),
        KeyCode::KeyD => Some(0x22),
        KeyCode::KeyF => Some(0x23),
        KeyCode::KeyG => Some(0x24),
        KeyCode::KeyH => Some(0x25),
        KeyCode::KeyJ => Some(0x26),
        KeyCode::KeyK => Some(0x27),
        KeyCode::KeyL => Some(0x28),
        KeyCode::Semicolon => Some(0x29),
        KeyCode::Quote => Some(0x2A),

        KeyCode::KeyZ => Some(0x31),
        KeyCode::KeyX => Some(0x32),
        KeyCode::KeyC => Some(0x33),
        KeyCode::KeyV => Some(0x34),
        KeyCode::KeyB => Some(0x35),
        KeyCode::KeyN => Some(0x36),
        KeyCode::KeyM => Some(0x37),
        KeyCode::Comma => Some(0x38),
        KeyCode::Period => Some(0x39),
        KeyCode::Slash => Some(0x3A),

        // Space / editing
        KeyCode::Space => Some(0x40),
        KeyCode::Backspace => Some(0x41),
        KeyCode::Tab => Some(0x42),
        KeyCode::Enter => Some(0x44),
        KeyCode::Escape => Some(0x45),
        KeyCode::Delete => Some(0x46),
        KeyCode::Insert => Some(0x47),
        KeyCode::PageUp => Some(0x48),
        KeyCode::PageDown => Some(0x49),

        // Cursor keys
        KeyCode::ArrowUp => Some(0x4C),
        KeyCode::ArrowDown => Some(0x4D),
        KeyCode::ArrowRight => Some(0x4E),
        KeyCode::ArrowLeft => Some(0x4F),

        // Function keys
        KeyCode::F1 => Some(0x50),
        KeyCode::F2 => Some(0x51),
        KeyCode::F3 => Some(0x52),
        KeyCode::F4 => Some(0x53),
        KeyCode::F5 => Some(0x54),
        KeyCode::F6 => Some(0x55),
        KeyCode::F7 => Some(0x56),
        KeyCode::F8 => Some(0x57),
        KeyCode::F9 => Some(0x58),
        KeyCode::F10 => Some(0x59),
        KeyCode::F11 => Some(0x4B),

        // Numpad
        KeyCode::Numpad0 => Some(0x0F),
        KeyCode::Numpad1 => Some(0x1D),
        KeyCode::Numpad2 => Some(0x1E),
        KeyCode::Numpad3 => Some(0x1F),
        KeyCode::Numpad4 => Some(0x2D),
        KeyCode::Numpad5 => Some(0x2E),
        KeyCode::Numpad6 => Some(0x2F),
        KeyCode::Numpad7 => Some(0x3D),
        KeyCode::Numpad8 => Some(0x3E),
        KeyCode::Numpad9 => Some(0x3F),
        KeyCode::NumpadDecimal => Some(0x3C),
        KeyCode::NumpadEnter => Some(0x43),
        KeyCode::NumpadSubtract => Some(0x4A),
        KeyCode::NumpadDivide => Some(0x5C),
        KeyCode::NumpadMultiply => Some(0x5D),
        KeyCode::NumpadAdd => Some(0x5E),

        // Modifiers
        KeyCode::ShiftLeft => Some(0x60),
        KeyCode::ShiftRight => Some(0x61),
        KeyCode::CapsLock => Some(0x62),
        KeyCode::ControlLeft | KeyCode::ControlRight => Some(0x63),
        KeyCode::AltLeft => Some(0x64),
        KeyCode::AltRight => Some(0x65),
        KeyCode::SuperLeft => Some(0x66),
        KeyCode::SuperRight => Some(0x67),

        // No counterpart in the Amiga's 0x00..=0x67 raw code space
        KeyCode::F12 | KeyCode::Home | KeyCode::End => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_amiga_rows() {
        assert_eq!(amiga_keycode(KeyCode::KeyQ), Some(0x10));
        assert_eq!(amiga_keycode(KeyCode::KeyA), Some(0x20));
        assert_eq!(amiga_keycode(KeyCode::KeyZ), Some(0x31));
    }

    #[test]
    fn both_controls_share_the_single_ctrl_key() {
        assert_eq!(amiga_keycode(KeyCode::ControlLeft), Some(0x63));
        assert_eq!(amiga_keycode(KeyCode::ControlRight), Some(0x63));
    }

    #[test]
    fn keys_without_amiga_counterpart_stay_unmapped() {
        assert_eq!(amiga_keycode(KeyCode::F12), None);
        assert_eq!(amiga_keycode(KeyCode::Home), None);
        assert_eq!(amiga_keycode(KeyCode::End), None);
    }
}
