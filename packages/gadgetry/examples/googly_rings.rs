//! Swing a pair of pendulum rings in the terminal.
//!
//! Stands in for the goggle demos: two 24-pixel rings driven by the same
//! tilt reading, desynchronised by their random phase and friction.

use gadgetry::prelude::*;
use rand_core::RngCore;
use rgb::Rgb;

/// Xorshift32, seeded differently per run in spirit; fixed here.
struct Xorshift(u32);

impl RngCore for Xorshift {
    fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32()) << 32 | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_u32() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn brightness_glyph(pixel: Rgb<u8>) -> char {
    match pixel.r.max(pixel.g).max(pixel.b) {
        0 => '.',
        1..=96 => '+',
        97..=192 => 'o',
        _ => '@',
    }
}

fn main() {
    let mut rng = Xorshift(0xfeed_f00d);
    let mut left: Pendulum = Pendulum::new(Rgb::new(255, 64, 0), &mut rng);
    let mut right: Pendulum = Pendulum::new(Rgb::new(0, 64, 255), &mut rng);

    // Upright and still: gravity alone swings the bobs.
    let gravity = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    for _ in 0..100 {
        let a = left.step(gravity);
        let b = right.step(gravity);

        let a: String = a.iter().map(|&pixel| brightness_glyph(pixel)).collect();
        let b: String = b.iter().map(|&pixel| brightness_glyph(pixel)).collect();
        println!("{a}   {b}");

        std::thread::sleep(std::time::Duration::from_millis(40));
    }
}
