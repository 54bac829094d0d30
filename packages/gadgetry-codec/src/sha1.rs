//! Freestanding SHA-1.
//!
//! Small boards frequently ship without a usable hash library, so the OTP
//! path carries its own SHA-1. The implementation is the straightforward
//! 80-round compression over 64-byte blocks; no effort is made to be
//! constant-time.
//!
//! SHA-1 is used here for HMAC-based one-time passwords (RFC 4226), where
//! it remains the deployed standard. It is not suitable as a general
//! collision-resistant hash.

/// Number of bytes in a SHA-1 digest.
pub const DIGEST_SIZE: usize = 20;

/// Number of bytes in a SHA-1 message block.
pub const BLOCK_SIZE: usize = 64;

const INITIAL_STATE: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// Incremental SHA-1 hasher.
///
/// ```
/// use gadgetry_codec::sha1::Sha1;
///
/// let mut hasher = Sha1::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), Sha1::digest(b"hello world"));
/// ```
#[derive(Debug, Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    length: u64,
}

impl Sha1 {
    /// Creates a hasher in its initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            length: 0,
        }
    }

    /// Convenience for hashing a complete message in one call.
    #[must_use]
    pub fn digest(message: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Self::new();
        hasher.update(message);
        hasher.finalize()
    }

    /// Absorbs more message bytes.
    pub fn update(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = data.len().min(BLOCK_SIZE - self.buffered);
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.compress(&block);
            self.buffered = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut chunks {
            let mut full = [0_u8; BLOCK_SIZE];
            full.copy_from_slice(block);
            self.compress(&full);
        }

        let rest = chunks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pads the message and returns the digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        let bit_length = self.length.wrapping_mul(8);

        self.update(&[0x80]);
        while self.buffered != BLOCK_SIZE - 8 {
            self.update(&[0x00]);
        }

        // Length goes in directly; update() would count it as message.
        self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&bit_length.to_be_bytes());
        let block = self.buffer;
        self.compress(&block);

        let mut digest = [0_u8; DIGEST_SIZE];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }

    fn compress(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut schedule = [0_u32; 80];
        for (i, chunk) in block.chunks_exact(4).enumerate() {
            schedule[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in 16..80 {
            schedule[i] = (schedule[i - 3] ^ schedule[i - 8] ^ schedule[i - 14]
                ^ schedule[i - 16])
                .rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (i, word) in schedule.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), 0x5a82_7999),
                1 => (b ^ c ^ d, 0x6ed9_eba1),
                2 => ((b & c) | (b & d) | (c & d), 0x8f1b_bcdc),
                _ => (b ^ c ^ d, 0xca62_c1d6),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
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
    fn hello_world_vector() {
        assert_eq!(
            hex(Sha1::digest(b"hello world")),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
    }

    #[test]
    fn empty_message() {
        assert_eq!(
            hex(Sha1::digest(b"")),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn abc_vector() {
        assert_eq!(
            hex(Sha1::digest(b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn long_message_spans_blocks() {
        // FIPS 180-1 vector: one million 'a' characters.
        let mut hasher = Sha1::new();
        let chunk = [b'a'; 1000];
        for _ in 0..1000 {
            hasher.update(&chunk);
        }
        assert_eq!(
            hex(hasher.finalize()),
            "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
        );
    }

    #[test]
    fn split_updates_match_single_update() {
        let message = b"the quick brown fox jumps over the lazy dog, repeatedly";
        let whole = Sha1::digest(message);

        for split in [1, 7, 63, 64] {
            let mut hasher = Sha1::new();
            for part in message.chunks(split) {
                hasher.update(part);
            }
            assert_eq!(hasher.finalize(), whole);
        }
    }
}
