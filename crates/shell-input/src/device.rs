//! Logical input devices selectable on the two control ports.
//!
//! Device ids double as configuration values, so lookups take raw integers
//! and clamp rather than fail: a corrupted setting degrades to "no device",
//! never to an error.

/// Number of logical device ids, including `None`.
pub const DEVICE_COUNT: usize = 8;

/// A logical input device that can be assigned to a control port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceId {
    None,
    Mouse,
    Keyset1,
    Keyset2,
    Gamepad1,
    Gamepad2,
    Gamepad3,
    Gamepad4,
}

impl DeviceId {
    /// All device ids in configuration order.
    pub const ALL: [Self; DEVICE_COUNT] = [
        Self::None,
        Self::Mouse,
        Self::Keyset1,
        Self::Keyset2,
        Self::Gamepad1,
        Self::Gamepad2,
        Self::Gamepad3,
        Self::Gamepad4,
    ];

    /// Resolve a raw configuration value, clamping anything out of range
    /// to `None`.
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Self::None)
    }

    /// The device's position in configuration order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&d| d == self).unwrap_or(0)
    }

    /// Display name, as shown in the port selection menus.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mouse => "Mouse",
            Self::Keyset1 => "Keyset 1",
            Self::Keyset2 => "Keyset 2",
            Self::Gamepad1 => "Gamepad 1",
            Self::Gamepad2 => "Gamepad 2",
            Self::Gamepad3 => "Gamepad 3",
            Self::Gamepad4 => "Gamepad 4",
        }
    }

    /// Icon/category tag for the UI.
    #[must_use]
    pub fn kind(self) -> DeviceKind {
        match self {
            Self::None => DeviceKind::None,
            Self::Mouse => DeviceKind::Mouse,
            Self::Keyset1 | Self::Keyset2 => DeviceKind::Keyset,
            Self::Gamepad1 | Self::Gamepad2 | Self::Gamepad3 | Self::Gamepad4 => {
                DeviceKind::Gamepad
            }
        }
    }

    /// Keyset number (0 or 1) for the keyset devices.
    #[must_use]
    pub fn keyset_index(self) -> Option<usize> {
        match self {
            Self::Keyset1 => Some(0),
            Self::Keyset2 => Some(1),
            _ => None,
        }
    }

    /// Gamepad slot (0..4) for the gamepad devices.
    #[must_use]
    pub fn gamepad_slot(self) -> Option<usize> {
        match self {
            Self::Gamepad1 => Some(0),
            Self::Gamepad2 => Some(1),
            Self::Gamepad3 => Some(2),
            Self::Gamepad4 => Some(3),
            _ => None,
        }
    }

    /// The device id for a gamepad slot (0..4).
    #[must_use]
    pub fn for_gamepad_slot(slot: usize) -> Option<Self> {
        match slot {
            0 => Some(Self::Gamepad1),
            1 => Some(Self::Gamepad2),
            2 => Some(Self::Gamepad3),
            3 => Some(Self::Gamepad4),
            _ => None,
        }
    }
}

/// Icon/category tag of a device id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    None,
    Mouse,
    Keyset,
    Gamepad,
    Unknown,
}

/// Display name for any raw device id. Out-of-range values name themselves
/// "Unknown" rather than failing.
#[must_use]
pub fn device_name(raw: i32) -> &'static str {
    usize::try_from(raw)
        .ok()
        .and_then(|i| DeviceId::ALL.get(i).copied())
        .map_or("Unknown", DeviceId::name)
}

/// Icon/category tag for any raw device id.
#[must_use]
pub fn device_kind(raw: i32) -> DeviceKind {
    usize::try_from(raw)
        .ok()
        .and_then(|i| DeviceId::ALL.get(i).copied())
        .map_or(DeviceKind::Unknown, DeviceId::kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ids_round_trip() {
        for (i, &device) in DeviceId::ALL.iter().enumerate() {
            assert_eq!(DeviceId::from_raw(i as i32), device);
            assert_eq!(device.index(), i);
        }
    }

    #[test]
    fn out_of_range_clamps_to_none() {
        assert_eq!(DeviceId::from_raw(-1), DeviceId::None);
        assert_eq!(DeviceId::from_raw(8), DeviceId::None);
        assert_eq!(DeviceId::from_raw(i32::MAX), DeviceId::None);
    }

    #[test]
    fn out_of_range_names_unknown() {
        assert_eq!(device_name(-3), "Unknown");
        assert_eq!(device_name(8), "Unknown");
        assert_eq!(device_kind(99), DeviceKind::Unknown);
        assert_eq!(device_name(1), "Mouse");
        assert_eq!(device_kind(4), DeviceKind::Gamepad);
    }

    #[test]
    fn gamepad_slots_map_both_ways() {
        for slot in 0..4 {
            let device = DeviceId::for_gamepad_slot(slot).expect("slot in range");
            assert_eq!(device.gamepad_slot(), Some(slot));
        }
        assert_eq!(DeviceId::for_gamepad_slot(4), None);
        assert_eq!(DeviceId::Mouse.gamepad_slot(), None);
    }
}
