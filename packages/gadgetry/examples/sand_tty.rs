//! Tumble sand around a terminal "matrix".
//!
//! Stands in for the LED-matrix demos: seeds a small grid with grains and
//! sweeps the gravity vector in a slow circle, as if the board were being
//! rolled in your hands.

use std::f64::consts::TAU;
use std::io::Write;

use gadgetry::prelude::*;
use rand_core::RngCore;

const WIDTH: usize = 16;
const HEIGHT: usize = 8;
const GRAINS: usize = 24;
const FRAMES: usize = 200;

/// Xorshift32; the demos only need something uniform-ish to scatter with.
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

fn main() {
    let mut rng = Xorshift(0x1234_5678);
    let mut sim = SandSim::new(WIDTH, HEIGHT);
    sim.grid_mut().scatter(&mut rng, GRAINS);

    for frame in 0..FRAMES {
        // Roll the gravity vector around the rim of the board.
        let angle = frame as f64 / 50.0 * TAU;
        let tilt = Vector3 {
            x: angle.cos(),
            y: angle.sin(),
            z: 0.2,
        };
        sim.step(tilt);

        let mut screen = String::new();
        screen.push_str("\x1b[2J\x1b[H");
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                screen.push(if sim.grid()[(x, y)] { '#' } else { '.' });
            }
            screen.push('\n');
        }
        print!("{screen}");
        std::io::stdout().flush().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}
