//! Mouse capture state machine and shake-to-release detection.
//!
//! Capture owns the host cursor exclusively: no other component may toggle
//! it. Transitions queue [`CursorAction`] records for the application to
//! apply instead of touching the window directly, which keeps every
//! transition observable in tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

use crate::prefs::InputPrefs;

/// Sliding window over which shake motion is accumulated.
pub const SHAKE_WINDOW: Duration = Duration::from_millis(300);

/// Minimum horizontal delta (pixels) for a motion sample to count towards a
/// shake.
pub const SHAKE_MIN_AMPLITUDE: i32 = 10;

/// Direction reversals within the window that fire the shake release.
pub const SHAKE_REVERSALS: u32 = 4;

/// Whether the host mouse is currently captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Released,
    Captured,
}

/// Host cursor change requested by a capture transition.
///
/// `Grab` hides the cursor and enables relative-mouse mode; `Release`
/// restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    Grab,
    Release,
}

/// The capture state machine.
#[derive(Debug)]
pub struct MouseCapture {
    state: CaptureState,
    actions: VecDeque<CursorAction>,
    shake: ShakeDetector,
}

impl MouseCapture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CaptureState::Released,
            actions: VecDeque::new(),
            shake: ShakeDetector::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.state == CaptureState::Captured
    }

    /// A click landed inside the viewport while released. Returns true when
    /// the click acquired capture (and must be swallowed by the caller).
    pub fn on_viewport_click(&mut self, prefs: &InputPrefs) -> bool {
        if self.is_captured() || !prefs.retain_mouse_by_click {
            return false;
        }
        self.capture();
        true
    }

    /// The pointer is hovering the viewport while released.
    pub fn on_viewport_enter(&mut self, prefs: &InputPrefs) {
        if !self.is_captured() && prefs.retain_mouse_by_entering {
            self.capture();
        }
    }

    /// The grab/release key combo was pressed; toggles unconditionally.
    pub fn on_toggle_combo(&mut self) {
        if self.is_captured() {
            self.release();
        } else {
            self.capture();
        }
    }

    /// A captured-mode motion delta. Returns true when the sample completed
    /// a shake gesture and capture was released.
    pub fn on_motion(&mut self, dx: i32, prefs: &InputPrefs) -> bool {
        if !self.is_captured() || !prefs.release_mouse_by_shaking {
            return false;
        }
        if self.shake.feed(dx) {
            self.release();
            return true;
        }
        false
    }

    /// Unconditional release (focus loss, teardown). Returns true when a
    /// transition actually happened.
    pub fn force_release(&mut self) -> bool {
        if !self.is_captured() {
            return false;
        }
        self.release();
        true
    }

    /// Drain the pending host cursor changes, oldest first.
    pub fn take_actions(&mut self) -> Vec<CursorAction> {
        self.actions.drain(..).collect()
    }

    fn capture(&mut self) {
        debug!("mouse captured");
        self.state = CaptureState::Captured;
        self.shake.reset();
        self.actions.push_back(CursorAction::Grab);
    }

    fn release(&mut self) {
        debug!("mouse released");
        self.state = CaptureState::Released;
        self.actions.push_back(CursorAction::Release);
    }
}

impl Default for MouseCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts direction reversals of large horizontal deltas inside a sliding
/// time window. Ordinary gameplay motion rarely reverses hard several times
/// within a fraction of a second; a deliberate shake does.
#[derive(Debug, Default)]
struct ShakeDetector {
    samples: VecDeque<(Instant, bool)>,
}

impl ShakeDetector {
    /// Feed one motion delta; true when the shake threshold was crossed.
    fn feed(&mut self, dx: i32) -> bool {
        if dx.abs() < SHAKE_MIN_AMPLITUDE {
            return false;
        }
        let now = Instant::now();
        while let Some(&(t, _)) = self.samples.front() {
            if now.duration_since(t) > SHAKE_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        self.samples.push_back((now, dx > 0));

        let mut reversals = 0u32;
        let mut previous: Option<bool> = None;
        for &(_, positive) in &self.samples {
            if previous.is_some_and(|p| p != positive) {
                reversals += 1;
            }
            previous = Some(positive);
        }
        if reversals >= SHAKE_REVERSALS {
            self.reset();
            return true;
        }
        false
    }

    fn reset(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_released() {
        let capture = MouseCapture::new();
        assert_eq!(capture.state(), CaptureState::Released);
    }

    #[test]
    fn click_captures_when_enabled() {
        let mut capture = MouseCapture::new();
        let prefs = InputPrefs::default();

        assert!(capture.on_viewport_click(&prefs));
        assert!(capture.is_captured());
        assert_eq!(capture.take_actions(), vec![CursorAction::Grab]);
    }

    #[test]
    fn click_is_inert_when_disabled() {
        let mut capture = MouseCapture::new();
        let prefs = InputPrefs {
            retain_mouse_by_click: false,
            ..InputPrefs::default()
        };

        assert!(!capture.on_viewport_click(&prefs));
        assert!(!capture.is_captured());
        assert!(capture.take_actions().is_empty());
    }

    #[test]
    fn hover_captures_only_when_enabled() {
        let mut capture = MouseCapture::new();
        capture.on_viewport_enter(&InputPrefs::default());
        assert!(!capture.is_captured());

        let prefs = InputPrefs {
            retain_mouse_by_entering: true,
            ..InputPrefs::default()
        };
        capture.on_viewport_enter(&prefs);
        assert!(capture.is_captured());
    }

    #[test]
    fn combo_toggles_both_ways() {
        let mut capture = MouseCapture::new();
        capture.on_toggle_combo();
        assert!(capture.is_captured());
        capture.on_toggle_combo();
        assert!(!capture.is_captured());
        assert_eq!(
            capture.take_actions(),
            vec![CursorAction::Grab, CursorAction::Release]
        );
    }

    #[test]
    fn shake_releases_after_enough_reversals() {
        let mut capture = MouseCapture::new();
        let prefs = InputPrefs::default();
        capture.on_toggle_combo();

        let mut released = false;
        let mut dx = SHAKE_MIN_AMPLITUDE + 5;
        for _ in 0..=SHAKE_REVERSALS {
            released = capture.on_motion(dx, &prefs);
            dx = -dx;
        }
        assert!(released);
        assert!(!capture.is_captured());
    }

    #[test]
    fn small_deltas_never_shake() {
        let mut capture = MouseCapture::new();
        let prefs = InputPrefs::default();
        capture.on_toggle_combo();

        for dx in [5, -5, 5, -5, 5, -5, 5, -5] {
            assert!(!capture.on_motion(dx, &prefs));
        }
        assert!(capture.is_captured());
    }

    #[test]
    fn shake_respects_the_preference() {
        let mut capture = MouseCapture::new();
        let prefs = InputPrefs {
            release_mouse_by_shaking: false,
            ..InputPrefs::default()
        };
        capture.on_toggle_combo();

        for dx in [15, -15, 15, -15, 15, -15] {
            assert!(!capture.on_motion(dx, &prefs));
        }
        assert!(capture.is_captured());
    }

    #[test]
    fn one_directional_motion_never_shakes() {
        let mut capture = MouseCapture::new();
        let prefs = InputPrefs::default();
        capture.on_toggle_combo();

        for _ in 0..20 {
            assert!(!capture.on_motion(40, &prefs));
        }
        assert!(capture.is_captured());
    }

    #[test]
    fn force_release_reports_transitions_only() {
        let mut capture = MouseCapture::new();
        assert!(!capture.force_release());

        capture.on_toggle_combo();
        assert!(capture.force_release());
        assert!(!capture.force_release());
    }
}
