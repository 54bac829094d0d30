//! ChaCha20 stream cipher.
//!
//! RFC 8439 ChaCha20 without Poly1305: the demos trade short game moves
//! where tampering is uninteresting but eavesdropping spoils the round, so
//! the stream is confidentiality-only. Callers that need integrity must
//! layer a MAC themselves.
//!
//! A cipher instance is a keystream position: encrypting and then
//! decrypting with two instances built from the same key, nonce and
//! initial counter round-trips the plaintext.

use alloc::vec::Vec;

/// Bytes in a ChaCha20 key.
pub const KEY_SIZE: usize = 32;

/// Bytes in a ChaCha20 nonce.
pub const NONCE_SIZE: usize = 12;

/// Bytes produced per keystream block.
pub const BLOCK_SIZE: usize = 64;

// "expand 32-byte k", little-endian.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// ChaCha20 keystream generator.
///
/// ```
/// use gadgetry_codec::chacha20::ChaCha20;
///
/// let key = [7_u8; 32];
/// let nonce = [1_u8; 12];
///
/// let ciphertext = ChaCha20::new(&key, &nonce, 0).apply(b"attack at dawn");
/// let plaintext = ChaCha20::new(&key, &nonce, 0).apply(&ciphertext);
/// assert_eq!(plaintext, b"attack at dawn");
/// ```
#[derive(Debug, Clone)]
pub struct ChaCha20 {
    state: [u32; 16],
    keystream: [u8; BLOCK_SIZE],
    used: usize,
}

impl ChaCha20 {
    /// Creates a cipher from a 256-bit key, a 96-bit nonce and an initial
    /// block counter.
    #[must_use]
    pub fn new(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], counter: u32) -> Self {
        let mut state = [0_u32; 16];
        state[..4].copy_from_slice(&SIGMA);
        for (word, chunk) in state[4..12].iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        state[12] = counter;
        for (word, chunk) in state[13..].iter_mut().zip(nonce.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Self {
            state,
            keystream: [0; BLOCK_SIZE],
            used: BLOCK_SIZE,
        }
    }

    /// XORs `input` against the keystream, advancing the stream position.
    #[must_use]
    pub fn apply(&mut self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        for &byte in input {
            if self.used == BLOCK_SIZE {
                self.refill();
            }
            out.push(byte ^ self.keystream[self.used]);
            self.used += 1;
        }
        out
    }

    /// Encrypts `plaintext`. Identical to [`apply`](Self::apply); named for
    /// call-site clarity.
    #[must_use]
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        self.apply(plaintext)
    }

    /// Decrypts `ciphertext`. Identical to [`apply`](Self::apply); named for
    /// call-site clarity.
    #[must_use]
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        self.apply(ciphertext)
    }

    /// Generates the next 64-byte keystream block and bumps the counter.
    fn refill(&mut self) {
        let mut working = self.state;
        for _ in 0..10 {
            // Column round.
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 1, 5, 9, 13);
            Self::quarter_round(&mut working, 2, 6, 10, 14);
            Self::quarter_round(&mut working, 3, 7, 11, 15);
            // Diagonal round.
            Self::quarter_round(&mut working, 0, 5, 10, 15);
            Self::quarter_round(&mut working, 1, 6, 11, 12);
            Self::quarter_round(&mut working, 2, 7, 8, 13);
            Self::quarter_round(&mut working, 3, 4, 9, 14);
        }

        for (i, word) in working.iter().enumerate() {
            let mixed = word.wrapping_add(self.state[i]);
            self.keystream[4 * i..4 * i + 4].copy_from_slice(&mixed.to_le_bytes());
        }

        // The counter advances only once the block has been produced.
        self.state[12] = self.state[12].wrapping_add(1);
        self.used = 0;
    }

    fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] = (state[d] ^ state[a]).rotate_left(16);
        state[c] = state[c].wrapping_add(state[d]);
        state[b] = (state[b] ^ state[c]).rotate_left(12);
        state[a] = state[a].wrapping_add(state[b]);
        state[d] = (state[d] ^ state[a]).rotate_left(8);
        state[c] = state[c].wrapping_add(state[d]);
        state[b] = (state[b] ^ state[c]).rotate_left(7);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SUNSCREEN: &[u8] = b"Ladies and Gentlemen of the class of '99: \
If I could offer you only one tip for the future, sunscreen would be it.";

    fn rfc_key() -> [u8; KEY_SIZE] {
        let mut key = [0_u8; KEY_SIZE];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
        key
    }

    const RFC_NONCE: [u8; NONCE_SIZE] = [0, 0, 0, 0, 0, 0, 0, 0x4a, 0, 0, 0, 0];

    #[test]
    fn rfc8439_sunscreen_vector() {
        let mut cipher = ChaCha20::new(&rfc_key(), &RFC_NONCE, 1);
        let ciphertext = cipher.encrypt(SUNSCREEN);

        assert_eq!(ciphertext.len(), 114);
        assert_eq!(
            &ciphertext[..16],
            &[
                0x6e, 0x2e, 0x35, 0x9a, 0x25, 0x68, 0xf9, 0x80, 0x41, 0xba, 0x07, 0x28, 0xdd,
                0x0d, 0x69, 0x81
            ]
        );
        assert_eq!(ciphertext[112..], [0x87, 0x4d]);
    }

    #[test]
    fn round_trips() {
        let key = [0xc0_u8; KEY_SIZE];
        let nonce = [3_u8; NONCE_SIZE];

        for plaintext in [&b""[..], b"a", b"rock", &[0xff; 200]] {
            let ciphertext = ChaCha20::new(&key, &nonce, 0).encrypt(plaintext);
            let recovered = ChaCha20::new(&key, &nonce, 0).decrypt(&ciphertext);
            assert_eq!(recovered, plaintext);
        }
    }

    #[test]
    fn keystream_is_reproducible_across_split_inputs() {
        let key = rfc_key();
        let nonce = RFC_NONCE;

        let whole = ChaCha20::new(&key, &nonce, 1).apply(SUNSCREEN);

        let mut split = ChaCha20::new(&key, &nonce, 1);
        let mut parts = split.apply(&SUNSCREEN[..50]);
        parts.extend(split.apply(&SUNSCREEN[50..]));

        assert_eq!(parts, whole);
    }

    #[test]
    fn counter_selects_keystream_offset() {
        // Block n from counter 0 equals block n-1 from counter 1.
        let key = rfc_key();
        let nonce = RFC_NONCE;

        let two_blocks = ChaCha20::new(&key, &nonce, 0).apply(&[0; 2 * BLOCK_SIZE]);
        let second = ChaCha20::new(&key, &nonce, 1).apply(&[0; BLOCK_SIZE]);
        assert_eq!(two_blocks[BLOCK_SIZE..], second[..]);
    }

    #[test]
    fn counter_wraps_after_final_block() {
        let key = rfc_key();
        let nonce = RFC_NONCE;

        let mut cipher = ChaCha20::new(&key, &nonce, u32::MAX);
        let _ = cipher.apply(&[0; BLOCK_SIZE]);
        assert_eq!(cipher.state[12], 0);
    }
}
