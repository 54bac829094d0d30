//! Optional threshold overrides from `settings.json`.
//!
//! Deployed boards live in different mouthpieces and tubing, so the
//! sip/puff demos let users drop a `settings.json` next to the program to
//! retune thresholds without re-flashing:
//!
//! ```json
//! { "min_pressure": 10, "high_pressure": 60, "display_timeout": 2 }
//! ```
//!
//! Every key is optional and every failure mode — missing file, malformed
//! JSON, missing keys — quietly keeps the defaults. A board must come up
//! usable no matter what is on the card.

use serde::Deserialize;
use std::path::Path;

use crate::puff::PuffDetector;

/// The conventional settings file name.
pub const SETTINGS_FILE: &str = "settings.json";

/// Threshold overrides parsed from a settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Override for the soft threshold.
    pub min_pressure: Option<f64>,
    /// Override for the hard threshold.
    pub high_pressure: Option<f64>,
    /// Override for how long hosts keep a result on screen, in seconds.
    pub display_timeout: Option<f64>,
}

impl Settings {
    /// Reads overrides from `path`, treating any failure as "no
    /// overrides".
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Applies the present overrides to a detector.
    pub fn apply(&self, detector: &mut PuffDetector) {
        if let Some(value) = self.min_pressure {
            detector.set_min_pressure(value);
        }
        if let Some(value) = self.high_pressure {
            detector.set_high_pressure(value);
        }
        if let Some(value) = self.display_timeout {
            detector.set_display_timeout(value);
        }
    }
}

impl PuffDetector {
    /// Creates a detector with defaults, then applies any overrides found
    /// at `path`.
    ///
    /// This never fails: an unreadable or malformed file simply yields the
    /// default detector.
    #[must_use]
    pub fn from_settings_file(path: impl AsRef<Path>) -> Self {
        let mut detector = Self::new();
        Settings::load(path).apply(&mut detector);
        detector
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::puff::{HIGH_PRESSURE, MIN_PRESSURE};
    use std::format;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("gadgetry-settings-{name}-{}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn full_settings_override_everything() {
        let path = temp_file(
            "full",
            r#"{ "min_pressure": 10, "high_pressure": 60, "display_timeout": 2.5 }"#,
        );
        let detector = PuffDetector::from_settings_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(detector.min_pressure(), 10.0);
        assert_eq!(detector.high_pressure(), 60.0);
        assert_eq!(detector.display_timeout(), 2.5);
    }

    #[test]
    fn partial_settings_keep_remaining_defaults() {
        let path = temp_file("partial", r#"{ "high_pressure": 55 }"#);
        let detector = PuffDetector::from_settings_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(detector.min_pressure(), MIN_PRESSURE);
        assert_eq!(detector.high_pressure(), 55.0);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let detector = PuffDetector::from_settings_file("/nonexistent/settings.json");
        assert_eq!(detector.min_pressure(), MIN_PRESSURE);
        assert_eq!(detector.high_pressure(), HIGH_PRESSURE);
    }

    #[test]
    fn malformed_json_keeps_defaults() {
        let path = temp_file("malformed", "{ not json");
        let detector = PuffDetector::from_settings_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(detector.min_pressure(), MIN_PRESSURE);
        assert_eq!(detector.high_pressure(), HIGH_PRESSURE);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let path = temp_file("extra", r#"{ "min_pressure": 9, "volume": 11 }"#);
        let detector = PuffDetector::from_settings_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(detector.min_pressure(), 9.0);
    }
}
