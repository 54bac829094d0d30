//! HMAC-SHA1.
//!
//! Built directly on [`Sha1`](crate::sha1::Sha1) rather than a generic MAC
//! trait; the OTP generator is the only consumer and SHA-1 is the only hash
//! this crate carries.

use crate::sha1::{BLOCK_SIZE, DIGEST_SIZE, Sha1};

/// Computes HMAC-SHA1 over `message` with `key`.
///
/// Keys longer than the 64-byte SHA-1 block are first reduced to their
/// SHA-1 digest; shorter keys are zero-extended, per RFC 2104.
///
/// ```
/// let mac = gadgetry_codec::hmac::hmac_sha1(b"key", b"message");
/// assert_eq!(mac.len(), 20);
/// ```
#[must_use]
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut key_block = [0_u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        key_block[..DIGEST_SIZE].copy_from_slice(&Sha1::digest(key));
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let mut inner = Sha1::new();
    inner.update(&key_block.map(|byte| byte ^ 0x36));
    inner.update(message);

    let mut outer = Sha1::new();
    outer.update(&key_block.map(|byte| byte ^ 0x5c));
    outer.update(&inner.finalize());
    outer.finalize()
}

#[cfg(test)]
mod test {
    use super::*;

    fn hex(digest: [u8; DIGEST_SIZE]) -> alloc::string::String {
        use core::fmt::Write;

        let mut out = alloc::string::String::new();
        for byte in digest {
            write!(out, "{byte:02x}").unwrap();
        }
        out
    }

    #[test]
    fn short_key_vector() {
        assert_eq!(
            hex(hmac_sha1(b"abcd", b"efgh")),
            "e5dbcf9263188f9fce90df572afeb39b66b27198"
        );
    }

    #[test]
    fn rfc2202_case_2() {
        assert_eq!(
            hex(hmac_sha1(b"Jefe", b"what do ya want for nothing?")),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn long_key_is_hashed_first() {
        // RFC 2202 case 6: an 80-byte key exceeds the SHA-1 block size.
        let key = [0xaa_u8; 80];
        assert_eq!(
            hex(hmac_sha1(&key, b"Test Using Larger Than Block-Size Key - Hash Key First")),
            "aa4ae5e15272d00e95705637ce8a3b55ed402112"
        );
    }

    #[test]
    fn empty_inputs_still_produce_a_mac() {
        assert_eq!(hmac_sha1(b"", b"").len(), DIGEST_SIZE);
    }
}
