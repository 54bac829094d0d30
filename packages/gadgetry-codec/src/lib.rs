//! Byte codecs, hashing and stream ciphers used by the gadgetry demos.
//!
//! # Overview
//!
//! This crate collects the self-contained wire and credential plumbing that
//! the demo programs share:
//!
//! - [`bytes`] — fixed-size padding of UTF-8 text for fixed-width radio
//!   payloads, plus big-endian integer serialisation.
//! - [`base32`] — RFC 4648 base32, the encoding used for authenticator
//!   secrets.
//! - [`sha1`] — a freestanding SHA-1, for targets whose runtime does not
//!   ship a hash library.
//! - [`hmac`] — HMAC-SHA1 built directly on [`sha1`].
//! - [`chacha20`] — the ChaCha20 stream cipher (unauthenticated).
//! - [`cipher`] — a small dispatch layer over XOR pads and ChaCha20, keyed
//!   by the algorithm tags that appear in game wire messages.
//!
//! Everything here is `no_std` + `alloc` and performs no I/O.

#![no_std]

extern crate alloc;

pub mod base32;
pub mod bytes;
pub mod chacha20;
pub mod cipher;
pub mod hmac;
pub mod sha1;

use snafu::Snafu;

/// Errors produced while encoding or decoding byte payloads.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The input contained a character outside the RFC 4648 base32 alphabet.
    #[snafu(display("character {character:?} is not in the base32 alphabet"))]
    NotBase32 {
        /// The offending character.
        character: char,
    },

    /// The integer needs more bytes than the requested width.
    #[snafu(display("integer does not fit in {width} bytes"))]
    IntWidth {
        /// The requested output width in bytes.
        width: usize,
    },

    /// The unpadded payload is not valid UTF-8.
    #[snafu(display("unpadded payload is not valid UTF-8"))]
    Utf8 {
        /// The underlying UTF-8 decode error.
        source: core::str::Utf8Error,
    },
}
