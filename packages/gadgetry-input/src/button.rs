//! Debounced button gestures.
//!
//! Polled at whatever rate the host loop runs, the classifier watches a
//! single button's raw level and reports one gesture per event: a tap, a
//! double-tap, the start of a hold, or the release ending a hold.
//!
//! Single taps are necessarily reported late: a tap only becomes a tap
//! once the double-tap window has expired without a second press, so a
//! longer window means laggier taps. The 0.3 s default is the compromise
//! the demos shipped with.

/// Timing defaults, in seconds.
pub mod defaults {
    /// Releases within this time of the press are treated as switch bounce.
    pub const DEBOUNCE: f64 = 0.05;
    /// Presses held at least this long become a hold.
    pub const HOLD: f64 = 0.75;
    /// Two taps within this window become a double-tap.
    pub const DOUBLE_TAP: f64 = 0.30;
}

/// A classified button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// A single short press, confirmed after the double-tap window passed.
    Tap,
    /// Two short presses inside the double-tap window.
    DoubleTap,
    /// The button has been held past the hold threshold. A [`Release`]
    /// always follows, eventually.
    ///
    /// [`Release`]: Gesture::Release
    Hold,
    /// The button came back up after a [`Hold`].
    ///
    /// [`Hold`]: Gesture::Hold
    Release,
}

/// Debouncing tap/double-tap/hold classifier for one button.
///
/// The host reads the pin, maps it to `pressed` (for the usual pull-up
/// wiring, pressed is active-low) and polls:
///
/// ```
/// use gadgetry_input::{Gesture, GestureButton};
///
/// let mut button = GestureButton::new(false, 0.0);
/// assert_eq!(button.poll(true, 1.00), None); // press
/// assert_eq!(button.poll(false, 1.10), None); // release: maybe a tap
/// assert_eq!(button.poll(false, 1.45), Some(Gesture::Tap)); // confirmed
/// ```
#[derive(Debug, Clone)]
pub struct GestureButton {
    debounce: f64,
    hold: f64,
    double_tap: f64,

    holding: bool,
    tap_time: f64,
    press_time: f64,
    prior_pressed: bool,
}

impl GestureButton {
    /// Creates a classifier with the default timing.
    ///
    /// `pressed` is the button's raw state right now and `now` the current
    /// monotonic time, so that a button already held at startup does not
    /// fabricate an edge.
    #[must_use]
    pub fn new(pressed: bool, now: f64) -> Self {
        Self::with_timing(
            pressed,
            now,
            defaults::DEBOUNCE,
            defaults::HOLD,
            defaults::DOUBLE_TAP,
        )
    }

    /// Creates a classifier with explicit debounce, hold and double-tap
    /// periods (seconds).
    #[must_use]
    pub fn with_timing(
        pressed: bool,
        now: f64,
        debounce: f64,
        hold: f64,
        double_tap: f64,
    ) -> Self {
        Self {
            debounce,
            hold,
            double_tap,
            holding: false,
            // Start outside the window so the first release can't read as
            // the second half of a double-tap.
            tap_time: -double_tap,
            press_time: now,
            prior_pressed: pressed,
        }
    }

    /// Feeds the classifier the current raw state at time `now` and
    /// returns at most one gesture.
    ///
    /// `now` comes from the host's monotonic clock and must not go
    /// backwards between polls.
    pub fn poll(&mut self, pressed: bool, now: f64) -> Option<Gesture> {
        let prior = self.prior_pressed;
        self.prior_pressed = pressed;

        if pressed && !prior {
            // Press edge: just note when. Everything is decided on
            // release or by elapsed time.
            self.press_time = now;
            return None;
        }

        if !pressed && prior {
            // Release edge.
            if self.holding {
                self.holding = false;
                return Some(Gesture::Release);
            }
            if now - self.press_time >= self.debounce {
                if now - self.tap_time < self.double_tap {
                    self.tap_time = 0.0;
                    return Some(Gesture::DoubleTap);
                }
                // A candidate first tap; confirmed later if nothing
                // follows it.
                self.tap_time = now;
            }
            return None;
        }

        if pressed {
            if !self.holding && now - self.press_time >= self.hold {
                self.holding = true;
                return Some(Gesture::Hold);
            }
            return None;
        }

        // Idle: a pending tap whose window expired is now a real tap.
        if self.tap_time > 0.0 && now - self.tap_time > self.double_tap {
            self.tap_time = 0.0;
            return Some(Gesture::Tap);
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn double_tap_within_window() {
        let mut button = GestureButton::new(false, 0.0);

        assert_eq!(button.poll(true, 0.0), None);
        assert_eq!(button.poll(false, 0.1), None);
        assert_eq!(button.poll(true, 0.2), None);
        assert_eq!(button.poll(false, 0.3), Some(Gesture::DoubleTap));
    }

    #[test]
    fn single_tap_confirmed_after_window() {
        let mut button = GestureButton::new(false, 0.0);

        assert_eq!(button.poll(true, 0.0), None);
        assert_eq!(button.poll(false, 0.1), None);
        // Window still open: nothing yet.
        assert_eq!(button.poll(false, 0.35), None);
        // Window expired: the tap is real.
        assert_eq!(button.poll(false, 0.45), Some(Gesture::Tap));
        // And reported only once.
        assert_eq!(button.poll(false, 0.55), None);
    }

    #[test]
    fn tap_and_double_tap_are_mutually_exclusive() {
        let mut button = GestureButton::new(false, 0.0);

        button.poll(true, 0.0);
        button.poll(false, 0.1);
        button.poll(true, 0.2);
        assert_eq!(button.poll(false, 0.3), Some(Gesture::DoubleTap));

        // The double-tap consumed the pending tap.
        assert_eq!(button.poll(false, 1.0), None);
    }

    #[test]
    fn hold_then_release_with_no_taps_in_between() {
        let mut button = GestureButton::new(false, 0.0);

        assert_eq!(button.poll(true, 0.0), None);
        assert_eq!(button.poll(true, 0.5), None);
        assert_eq!(button.poll(true, 0.8), Some(Gesture::Hold));
        // Continued holding reports nothing further.
        assert_eq!(button.poll(true, 2.0), None);
        assert_eq!(button.poll(false, 2.5), Some(Gesture::Release));
        // The hold's release is not a tap.
        assert_eq!(button.poll(false, 3.5), None);
    }

    #[test]
    fn bounce_is_ignored() {
        let mut button = GestureButton::new(false, 0.0);

        assert_eq!(button.poll(true, 0.0), None);
        // Released 10 ms later: under the debounce period, not a tap.
        assert_eq!(button.poll(false, 0.01), None);
        assert_eq!(button.poll(false, 1.0), None);
    }

    #[test]
    fn slow_second_press_is_two_events_not_a_double_tap() {
        let mut button = GestureButton::new(false, 0.0);

        button.poll(true, 0.0);
        button.poll(false, 0.1);
        // First tap confirms once its window lapses.
        assert_eq!(button.poll(false, 0.5), Some(Gesture::Tap));

        button.poll(true, 1.0);
        assert_eq!(button.poll(false, 1.1), None);
        assert_eq!(button.poll(false, 1.5), Some(Gesture::Tap));
    }

    #[test]
    fn startup_state_does_not_fabricate_edges() {
        // Button already down at construction: no press edge, and the
        // hold timer runs from construction time.
        let mut button = GestureButton::new(true, 10.0);
        assert_eq!(button.poll(true, 10.1), None);
        assert_eq!(button.poll(true, 10.8), Some(Gesture::Hold));
    }

    #[test]
    fn first_release_is_never_a_double_tap() {
        let mut button = GestureButton::new(false, 0.0);

        // Even an immediate first press/release pair right after
        // construction must not pair with the initial tap_time.
        button.poll(true, 0.0);
        assert_eq!(button.poll(false, 0.06), None);
    }

    #[test]
    fn custom_timing_is_respected() {
        let mut button = GestureButton::with_timing(false, 0.0, 0.05, 0.2, 0.3);

        button.poll(true, 0.0);
        assert_eq!(button.poll(true, 0.25), Some(Gesture::Hold));
    }
}
