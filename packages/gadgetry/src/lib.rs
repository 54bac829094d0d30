//! # gadgetry
//!
//! The algorithmic core shared by a pile of small maker-board demos:
//! tilt-driven sand and pendulum toys, button and sip/puff gesture
//! classifiers, a keypad calculator engine, and the codec/OTP plumbing
//! behind the authenticator and encrypted-game demos.
//!
//! Everything is `no_std` + `alloc` and hardware-free. Boards supply the
//! collaborators: a monotonic clock (seconds, `f64`), raw input samples,
//! a [`rand_core::RngCore`] where randomness is wanted, and pixels to
//! draw the results on.
//!
//! ```
//! use gadgetry::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["1", "+", "2", "×", "3", "="] {
//!     calc.press_key(key).unwrap();
//! }
//! // Pocket-calculator order: strictly left to right.
//! assert_eq!(calc.display(), "9");
//! ```
//!
//! Each component lives in its own crate and can be depended on alone;
//! this crate just bundles them behind feature flags (all on by default,
//! `std` additionally enables the sip/puff settings-file loader).

#![no_std]

#[doc(inline)]
#[cfg(feature = "calc")]
pub use gadgetry_calc as calc;
#[doc(inline)]
#[cfg(feature = "codec")]
pub use gadgetry_codec as codec;
#[doc(inline)]
#[cfg(feature = "input")]
pub use gadgetry_input as input;
#[doc(inline)]
#[cfg(feature = "otp")]
pub use gadgetry_otp as otp;
#[doc(inline)]
#[cfg(feature = "sim")]
pub use gadgetry_sim as sim;

/// Commonly used types, re-exported in one place.
pub mod prelude {
    #[cfg(feature = "calc")]
    pub use crate::calc::{Calculator, Input as CalcInput, Op};
    #[cfg(feature = "codec")]
    pub use crate::codec::{
        chacha20::ChaCha20,
        cipher::{Algorithm, Key},
    };
    #[cfg(feature = "input")]
    pub use crate::input::{Gesture, GestureButton, PuffDetector, PuffGesture, PuffKind};
    #[cfg(feature = "otp")]
    pub use crate::otp::{hotp, totp};
    #[cfg(feature = "sim")]
    pub use crate::sim::{Grid, Pendulum, Rgb, SandSim, Vector3};
}
