//! Sip/puff pressure gestures.
//!
//! A differential pressure sensor in a mouthpiece reads positive when the
//! user puffs and negative when they sip. The detector watches the sample
//! stream for an excursion past the soft threshold, tracks the strongest
//! level reached, and reports one gesture when the pressure returns to
//! rest: polarity (sip or puff), peak strength (soft or hard) and how long
//! it lasted.
//!
//! Polarity is locked at gesture start; a sip that wobbles into a puff
//! before returning to rest still counts as a sip.

use libm::fabs;

/// Default soft threshold: quieter samples are rest noise.
pub const MIN_PRESSURE: f64 = 8.0;

/// Default hard threshold: louder samples grade the gesture as hard.
pub const HIGH_PRESSURE: f64 = 40.0;

/// Default seconds a host should keep a result on screen. Informational
/// only; the detector itself never waits.
pub const DISPLAY_TIMEOUT: f64 = 1.0;

/// Detector phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuffState {
    /// At rest, waiting for pressure to leave the deadband.
    Waiting,
    /// A gesture is in progress.
    Started,
    /// A gesture just completed; reset on the next update.
    Detected,
}

/// The shape of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuffKind {
    /// Negative pressure, peak below the hard threshold.
    SoftSip,
    /// Negative pressure, peak past the hard threshold.
    HardSip,
    /// Positive pressure, peak below the hard threshold.
    SoftPuff,
    /// Positive pressure, peak past the hard threshold.
    HardPuff,
}

/// A completed sip or puff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuffGesture {
    /// −1 for a sip, +1 for a puff; the sign the gesture started with.
    pub polarity: i8,
    /// Strongest level reached: 1 (soft) or 2 (hard).
    pub peak_level: u8,
    /// Seconds from the first loud sample to the return to rest.
    pub duration: f64,
}

impl PuffGesture {
    /// The gesture's classification.
    #[must_use]
    pub const fn kind(&self) -> PuffKind {
        match (self.polarity, self.peak_level) {
            (i8::MIN..=-1, 2..) => PuffKind::HardSip,
            (i8::MIN..=-1, _) => PuffKind::SoftSip,
            (_, 2..) => PuffKind::HardPuff,
            _ => PuffKind::SoftPuff,
        }
    }
}

/// Classifies a signed pressure stream into sip/puff gestures.
///
/// ```
/// use gadgetry_input::{PuffDetector, PuffKind};
///
/// let mut detector = PuffDetector::new();
/// assert!(detector.update(0.0, 0.0).is_none());
/// assert!(detector.update(50.0, 0.1).is_none()); // hard puff starts
/// let gesture = detector.update(0.0, 0.4).unwrap(); // back to rest
/// assert_eq!(gesture.kind(), PuffKind::HardPuff);
/// assert!(gesture.duration > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PuffDetector {
    min_pressure: f64,
    high_pressure: f64,
    display_timeout: f64,

    state: PuffState,
    start_polarity: i8,
    peak_level: u8,
    start_time: f64,
}

impl PuffDetector {
    /// Creates a detector with the default thresholds.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_thresholds(MIN_PRESSURE, HIGH_PRESSURE)
    }

    /// Creates a detector with explicit soft and hard thresholds.
    ///
    /// Units are whatever the host's sensor reports; only consistency
    /// matters.
    #[must_use]
    pub const fn with_thresholds(min_pressure: f64, high_pressure: f64) -> Self {
        Self {
            min_pressure,
            high_pressure,
            display_timeout: DISPLAY_TIMEOUT,
            state: PuffState::Waiting,
            start_polarity: 0,
            peak_level: 0,
            start_time: 0.0,
        }
    }

    /// Grades one sample: `(polarity, level)`.
    ///
    /// Level is 2 past the hard threshold, 1 past the soft threshold, else
    /// 0; polarity is the sample's sign, or 0 inside the deadband.
    #[must_use]
    pub fn categorize(&self, pressure: f64) -> (i8, u8) {
        let magnitude = fabs(pressure);
        let level = if magnitude > self.high_pressure {
            2
        } else if magnitude > self.min_pressure {
            1
        } else {
            0
        };

        let polarity = if level == 0 {
            0
        } else if pressure > 0.0 {
            1
        } else {
            -1
        };

        (polarity, level)
    }

    /// Feeds one pressure sample at time `now`.
    ///
    /// Returns `Some` exactly once per gesture, on the sample that brings
    /// the pressure back inside the deadband. `now` comes from the host's
    /// monotonic clock.
    pub fn update(&mut self, pressure: f64, now: f64) -> Option<PuffGesture> {
        let (polarity, level) = self.categorize(pressure);

        if self.state == PuffState::Detected {
            self.state = PuffState::Waiting;
            self.start_polarity = 0;
            self.peak_level = 0;
        }

        if self.state == PuffState::Waiting && level != 0 && self.start_polarity == 0 {
            self.state = PuffState::Started;
            self.start_polarity = polarity;
            self.start_time = now;
        }

        if self.state == PuffState::Started {
            self.peak_level = self.peak_level.max(level);

            if level == 0 {
                self.state = PuffState::Detected;
                return Some(PuffGesture {
                    polarity: self.start_polarity,
                    peak_level: self.peak_level,
                    duration: now - self.start_time,
                });
            }
        }

        None
    }

    /// Current detector phase, for status displays.
    #[must_use]
    pub const fn state(&self) -> PuffState {
        self.state
    }

    /// Polarity of the in-progress gesture, 0 when idle.
    #[must_use]
    pub const fn polarity(&self) -> i8 {
        self.start_polarity
    }

    /// The soft threshold in effect.
    #[must_use]
    pub const fn min_pressure(&self) -> f64 {
        self.min_pressure
    }

    /// The hard threshold in effect.
    #[must_use]
    pub const fn high_pressure(&self) -> f64 {
        self.high_pressure
    }

    /// Seconds a host should keep a result on screen.
    #[must_use]
    pub const fn display_timeout(&self) -> f64 {
        self.display_timeout
    }

    pub(crate) const fn set_min_pressure(&mut self, value: f64) {
        self.min_pressure = value;
    }

    pub(crate) const fn set_high_pressure(&mut self, value: f64) {
        self.high_pressure = value;
    }

    pub(crate) const fn set_display_timeout(&mut self, value: f64) {
        self.display_timeout = value;
    }
}

impl Default for PuffDetector {
    fn default() -> Self {
        Self::new()
    }
}
