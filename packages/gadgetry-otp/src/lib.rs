//! One-time-password generation.
//!
//! Authenticator demos show rolling 2FA codes for a handful of accounts:
//! each account is a base32 secret, and a code is the HMAC-SHA1 of a
//! monotonically increasing counter under that secret, dynamically
//! truncated to a few decimal digits (RFC 4226). Time-based codes derive
//! the counter from a unix timestamp in 30-second steps (RFC 6238).
//!
//! The crate never reads a clock itself; hosts hand in the counter or the
//! timestamp, typically from an RTC synchronised over NTP.
//!
//! ```
//! // The RFC 4226 test secret, base32-encoded.
//! let secret = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
//! assert_eq!(gadgetry_otp::hotp(secret, 0, 6).unwrap(), "755224");
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec;

use gadgetry_codec::{EncodeError, base32, hmac::hmac_sha1};
use rand_core::RngCore;
use snafu::{ResultExt, Snafu, ensure};

/// Counter step for time-based codes, in seconds.
pub const TOTP_PERIOD: u64 = 30;

/// Errors produced while generating a one-time password.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// The base32 secret did not decode.
    #[snafu(display("secret is not valid base32"))]
    Secret {
        /// The underlying decode error.
        source: EncodeError,
    },

    /// The digit count is outside the supported 1..=9 range.
    #[snafu(display("{digits} digits requested, supported range is 1..=9"))]
    Digits {
        /// The requested digit count.
        digits: u32,
    },
}

/// Generates an HOTP code for `counter` under the base32 `secret`.
///
/// The counter is serialised as 8 big-endian bytes, HMAC-SHA1'd with the
/// decoded secret, and dynamically truncated: the digest's last nibble
/// selects a 4-byte window whose top bit is masked off, and the resulting
/// 31-bit integer is reduced modulo 10^`digits` and left-zero-padded.
///
/// # Errors
///
/// - [`OtpError::Secret`] if the secret is not valid base32.
/// - [`OtpError::Digits`] if `digits` is 0 or greater than 9.
pub fn hotp(secret: &str, counter: u64, digits: u32) -> Result<String, OtpError> {
    ensure!((1..=9).contains(&digits), DigitsSnafu { digits });

    let key = base32::decode(secret).context(SecretSnafu)?;
    let digest = hmac_sha1(&key, &counter.to_be_bytes());

    let offset = (digest[19] & 0x0f) as usize;
    let window = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let code = u64::from(window) % 10_u64.pow(digits);
    Ok(alloc::format!("{code:0width$}", width = digits as usize))
}

/// Generates a TOTP code for `unix_time` under the base32 `secret`.
///
/// The counter is `unix_time / 30`; codes therefore change every
/// [`TOTP_PERIOD`] seconds.
///
/// # Errors
///
/// Same conditions as [`hotp`].
pub fn totp(secret: &str, unix_time: u64, digits: u32) -> Result<String, OtpError> {
    hotp(secret, totp_counter(unix_time), digits)
}

/// Returns the TOTP counter for `unix_time`.
///
/// Exposed separately so hosts can detect window rollover and redraw their
/// countdown bars without regenerating the code.
#[must_use]
pub const fn totp_counter(unix_time: u64) -> u64 {
    unix_time / TOTP_PERIOD
}

/// Generates a fresh base32 secret of `length` random bytes.
///
/// The randomness source is injected: hosts with a hardware TRNG pass it
/// directly, others fall back to a seeded PRNG. Uniformity is all that is
/// required here; whether the source is cryptographically strong is the
/// host's call.
pub fn generate_secret(rng: &mut impl RngCore, length: usize) -> String {
    let mut bytes = vec![0_u8; length];
    rng.fill_bytes(&mut bytes);
    base32::encode(&bytes)
}
