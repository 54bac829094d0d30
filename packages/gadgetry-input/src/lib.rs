//! Time-parameterised input classifiers.
//!
//! # Overview
//!
//! Two small state machines that turn raw input samples into the events
//! demos actually bind actions to:
//!
//! - [`button`] — a debounced button poller that distinguishes taps,
//!   double-taps, holds and hold-releases.
//! - [`puff`] — a sip/puff classifier over a signed pressure stream,
//!   grading each gesture by polarity, peak strength and duration.
//!
//! Neither classifier owns a clock or a pin. Hosts poll them with the
//! current raw sample and a monotonic timestamp in seconds; classifiers
//! never block and never read hardware.
//!
//! With the `std` feature enabled, [`puff::PuffDetector`] can pick up its
//! thresholds from an optional `settings.json` next to the program, the
//! way the sip-and-puff demos let users tune sensitivity without
//! re-flashing.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod button;
pub mod puff;

#[cfg(feature = "std")]
pub mod settings;

pub use button::{Gesture, GestureButton};
pub use puff::{PuffDetector, PuffGesture, PuffKind};
