//! Fixed-size byte payloads.
//!
//! Radio advertisements carry fixed-width fields, so short text must be
//! padded out to the field size before transmission and stripped again on
//! receipt. Integers travel big-endian, left-padded with zero bytes.

use alloc::string::String;
use alloc::vec::Vec;

use snafu::{ResultExt, ensure};

use crate::{EncodeError, IntWidthSnafu, Utf8Snafu};

/// Encodes `text` as UTF-8 and pads it with `pad_byte` up to `size` bytes.
///
/// Text that already encodes to `size` bytes or more is returned unchanged.
///
/// ```
/// assert_eq!(gadgetry_codec::bytes::pad("hi", 4, 0), b"hi\0\0");
/// assert_eq!(gadgetry_codec::bytes::pad("hello", 4, 0), b"hello");
/// ```
#[must_use]
pub fn pad(text: &str, size: usize, pad_byte: u8) -> Vec<u8> {
    let mut out = text.as_bytes().to_vec();
    if out.len() < size {
        out.resize(size, pad_byte);
    }
    out
}

/// Strips trailing `pad_byte` bytes from `buf` and decodes the rest as UTF-8.
///
/// Passing `None` for `pad_byte` skips the stripping entirely. Only trailing
/// pad bytes are removed; pad bytes embedded in the text are preserved.
///
/// # Errors
///
/// Returns [`EncodeError::Utf8`] if the remaining bytes are not valid UTF-8.
pub fn unpad(buf: &[u8], pad_byte: Option<u8>) -> Result<String, EncodeError> {
    let trimmed = match pad_byte {
        Some(pad) => {
            let end = buf.iter().rposition(|&b| b != pad).map_or(0, |i| i + 1);
            &buf[..end]
        }
        None => buf,
    };

    let text = core::str::from_utf8(trimmed).context(Utf8Snafu)?;
    Ok(String::from(text))
}

/// Serialises `n` big-endian into exactly `width` bytes, left-padded with
/// zeros.
///
/// # Errors
///
/// Returns [`EncodeError::IntWidth`] if `n` has more significant bytes than
/// `width` allows.
pub fn int_to_bytes(n: u64, width: usize) -> Result<Vec<u8>, EncodeError> {
    let significant = 8 - n.leading_zeros() as usize / 8;
    ensure!(significant <= width, IntWidthSnafu { width });

    let mut out = alloc::vec![0_u8; width];
    out[width - significant..].copy_from_slice(&n.to_be_bytes()[8 - significant..]);
    Ok(out)
}
