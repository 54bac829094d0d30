//! Cipher dispatch.
//!
//! Wire messages name their cipher with a short tag (`"xor"`,
//! `"chacha20"`); this module turns a tag plus key material into ciphertext
//! without the caller matching on algorithms itself.
//!
//! XOR-pad keys come in two shapes: literal bytes (replaying a received
//! pad) or a generator invoked with the plaintext length (minting a fresh
//! one-time pad on the sending side).

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use snafu::{Snafu, ensure};

use crate::chacha20::{ChaCha20, KEY_SIZE, NONCE_SIZE};

/// Errors produced by cipher dispatch.
#[derive(Debug, Snafu)]
pub enum CipherError {
    /// The algorithm tag names no cipher this crate knows.
    #[snafu(display("unsupported cipher algorithm {tag:?}"))]
    UnsupportedAlgorithm {
        /// The unrecognised tag.
        tag: String,
    },

    /// The key material has the wrong length for the chosen cipher.
    #[snafu(display("cipher needs a {expected}-byte key, got {actual} bytes"))]
    KeyLength {
        /// Required key length.
        expected: usize,
        /// Provided key length.
        actual: usize,
    },

    /// ChaCha20 was selected without a 12-byte nonce.
    #[snafu(display("chacha20 needs a {NONCE_SIZE}-byte nonce"))]
    NonceLength,

    /// An XOR pad shorter than the input cannot cover it.
    #[snafu(display("xor pad covers {key} of {input} input bytes"))]
    PadTooShort {
        /// Pad length.
        key: usize,
        /// Input length.
        input: usize,
    },
}

/// Cipher selected by a wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// One-time-pad XOR.
    Xor,
    /// ChaCha20 (RFC 8439, unauthenticated).
    ChaCha20,
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "xor" => Ok(Self::Xor),
            "chacha20" => Ok(Self::ChaCha20),
            _ => UnsupportedAlgorithmSnafu { tag }.fail(),
        }
    }
}

/// Key material for [`encrypt`] and [`decrypt`].
pub enum Key<'a> {
    /// Literal key bytes.
    Bytes(&'a [u8]),
    /// A pad generator, invoked with the number of bytes required.
    Generate(&'a mut dyn FnMut(usize) -> Vec<u8>),
}

impl<'a> From<&'a [u8]> for Key<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl Key<'_> {
    fn materialize(self, length: usize) -> Vec<u8> {
        match self {
            Key::Bytes(bytes) => bytes.to_vec(),
            Key::Generate(generate) => generate(length),
        }
    }
}

/// Encrypts `plaintext` with the given algorithm and key material.
///
/// For [`Algorithm::ChaCha20`] a 12-byte `nonce` is required and `counter`
/// defaults to 0. For [`Algorithm::Xor`] both are ignored.
///
/// # Errors
///
/// - [`CipherError::KeyLength`] if a ChaCha20 key is not 32 bytes.
/// - [`CipherError::NonceLength`] if ChaCha20 is selected without a
///   12-byte nonce.
/// - [`CipherError::PadTooShort`] if an XOR pad cannot cover the input.
pub fn encrypt(
    plaintext: &[u8],
    key: Key<'_>,
    algorithm: Algorithm,
    nonce: Option<&[u8]>,
    counter: Option<u32>,
) -> Result<Vec<u8>, CipherError> {
    match algorithm {
        Algorithm::Xor => {
            let pad = key.materialize(plaintext.len());
            ensure!(
                pad.len() >= plaintext.len(),
                PadTooShortSnafu {
                    key: pad.len(),
                    input: plaintext.len(),
                }
            );
            Ok(plaintext.iter().zip(pad).map(|(byte, pad)| byte ^ pad).collect())
        }
        Algorithm::ChaCha20 => {
            let material = key.materialize(KEY_SIZE);
            let key: &[u8; KEY_SIZE] =
                material.as_slice().try_into().map_err(|_| CipherError::KeyLength {
                    expected: KEY_SIZE,
                    actual: material.len(),
                })?;
            let nonce: &[u8; NONCE_SIZE] = nonce
                .and_then(|nonce| nonce.try_into().ok())
                .ok_or(CipherError::NonceLength)?;

            Ok(ChaCha20::new(key, nonce, counter.unwrap_or(0)).encrypt(plaintext))
        }
    }
}

/// Decrypts `ciphertext`; the exact inverse of [`encrypt`] under the same
/// algorithm, key material, nonce and counter.
///
/// # Errors
///
/// Same conditions as [`encrypt`].
pub fn decrypt(
    ciphertext: &[u8],
    key: Key<'_>,
    algorithm: Algorithm,
    nonce: Option<&[u8]>,
    counter: Option<u32>,
) -> Result<Vec<u8>, CipherError> {
    // Both supported ciphers are XOR streams, so the directions coincide.
    encrypt(ciphertext, key, algorithm, nonce, counter)
}
