//! Damped pendulum on a pixel ring.
//!
//! One pendulum per ring: tilt accelerates the bob, friction bleeds the
//! momentum off, and the bob's angle maps to a short lit arc on the ring.
//! Rings seeded from the same `RngCore` start at different phases with
//! slightly different friction, so two goggles lenses driven by one
//! accelerometer drift apart instead of mirroring each other.

use core::f64::consts::TAU;

use libm::{cos, fabs, sin};
use mint::Vector3;
use rand_core::RngCore;
use rgb::Rgb;

/// Ring size on the goggle boards this was written for.
pub const RING_PIXELS: usize = 24;

// Acceleration-to-momentum coupling per step.
const SWING_SCALE: f64 = 0.05;

// Arc shape: full brightness inside FULL_ARC, dark beyond DARK_ARC,
// linear falloff in between.
const FULL_ARC: f64 = 2.0;
const DARK_ARC: f64 = 5.0;
const FALLOFF: f64 = 3.0;

/// A pendulum bob rendered as a lit arc on an `N`-pixel ring.
///
/// ```
/// use gadgetry_sim::{Pendulum, Rgb, Vector3};
///
/// let mut ring: Pendulum = Pendulum::with_state(Rgb::new(255, 64, 0), 0.0, 0.87);
/// let pixels = ring.step(Vector3 { x: 0.0, y: 0.0, z: 1.0 });
/// assert_eq!(pixels.len(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct Pendulum<const N: usize = RING_PIXELS> {
    color: Rgb<u8>,
    theta: f64,
    momentum: f64,
    friction: f64,
}

impl<const N: usize> Pendulum<N> {
    /// Creates a pendulum with a random phase and friction.
    ///
    /// The phase is uniform over the full circle and the friction uniform
    /// in `[0.85, 0.90)`.
    pub fn new(color: Rgb<u8>, rng: &mut impl RngCore) -> Self {
        let theta = uniform(rng) * TAU;
        let friction = 0.85 + uniform(rng) * 0.05;
        Self::with_state(color, theta, friction)
    }

    /// Creates a pendulum with an explicit phase and friction, for tests
    /// and hosts that want lock-step rings.
    #[must_use]
    pub const fn with_state(color: Rgb<u8>, theta: f64, friction: f64) -> Self {
        Self {
            color,
            theta,
            momentum: 0.0,
            friction,
        }
    }

    /// Advances the pendulum one step under `accel` and renders the ring.
    ///
    /// The x and z components drive the swing; y is the axis the ring
    /// hangs around and contributes nothing.
    pub fn step(&mut self, accel: Vector3<f64>) -> [Rgb<u8>; N] {
        self.momentum = self.momentum * self.friction
            - (cos(self.theta) * accel.z + sin(self.theta) * accel.x) * SWING_SCALE;
        self.theta += self.momentum;
        self.pixels()
    }

    /// Renders the ring for the current bob position without advancing it.
    #[must_use]
    pub fn pixels(&self) -> [Rgb<u8>; N] {
        let ring = N as f64;
        let midpoint = wrap(self.theta * ring / TAU, ring);

        let mut out = [Rgb::new(0, 0, 0); N];
        for (i, pixel) in out.iter_mut().enumerate() {
            let mut distance = fabs(midpoint - i as f64);
            if distance > ring / 2.0 {
                distance = ring - distance;
            }

            if distance < FULL_ARC {
                *pixel = self.color;
            } else if distance <= DARK_ARC {
                *pixel = scale(self.color, (DARK_ARC - distance) / FALLOFF);
            }
        }
        out
    }

    /// The bob's angle in radians. Grows without bound; the ring mapping
    /// wraps it.
    #[must_use]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// The bob's current angular momentum.
    #[must_use]
    pub const fn momentum(&self) -> f64 {
        self.momentum
    }

    /// The per-step friction multiplier.
    #[must_use]
    pub const fn friction(&self) -> f64 {
        self.friction
    }

    /// The arc's color at full brightness.
    #[must_use]
    pub const fn color(&self) -> Rgb<u8> {
        self.color
    }
}

/// Folds `value` into `[0, modulus)`.
fn wrap(value: f64, modulus: f64) -> f64 {
    let rem = value % modulus;
    if rem < 0.0 { rem + modulus } else { rem }
}

fn scale(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    Rgb::new(
        (f64::from(color.r) * factor) as u8,
        (f64::from(color.g) * factor) as u8,
        (f64::from(color.b) * factor) as u8,
    )
}

fn uniform(rng: &mut impl RngCore) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

#[cfg(test)]
mod test {
    use super::*;

    const ORANGE: Rgb<u8> = Rgb::new(255, 80, 0);

    fn accel(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3 { x, y, z }
    }

    struct TestRng(u32);

    impl RngCore for TestRng {
        fn next_u32(&mut self) -> u32 {
            // Xorshift32.
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

    #[test]
    fn friction_damps_momentum_without_drive() {
        // With ax = az = 0 the update is pure decay.
        let mut ring: Pendulum = Pendulum::with_state(ORANGE, 1.0, 0.88);
        ring.momentum = 0.5;

        let mut last = fabs(ring.momentum());
        for _ in 0..100 {
            ring.step(accel(0.0, 1.0, 0.0));
            let now = fabs(ring.momentum());
            assert!(now <= last);
            last = now;
        }
        assert!(last < 1e-5);
    }

    #[test]
    fn y_axis_is_ignored() {
        let mut a: Pendulum = Pendulum::with_state(ORANGE, 0.3, 0.87);
        let mut b = a.clone();

        for _ in 0..10 {
            a.step(accel(0.2, 0.0, 0.9));
            b.step(accel(0.2, 123.0, 0.9));
        }
        assert_eq!(a.theta(), b.theta());
    }

    #[test]
    fn arc_is_full_near_bob_and_dark_opposite() {
        // theta = 0 puts the midpoint on pixel 0.
        let ring: Pendulum = Pendulum::with_state(ORANGE, 0.0, 0.87);
        let pixels = ring.pixels();

        assert_eq!(pixels[0], ORANGE);
        assert_eq!(pixels[1], ORANGE);
        assert_eq!(pixels[23], ORANGE);
        // Pixel 12 is the far side of the ring.
        assert_eq!(pixels[12], Rgb::new(0, 0, 0));
        // Pixels in the falloff band are dimmed, not full and not dark.
        let edge = pixels[3];
        assert!(edge.r > 0 && edge.r < ORANGE.r);
    }

    #[test]
    fn arc_wraps_around_the_ring_seam() {
        // Midpoint between pixels 23 and 0 lights both ends.
        let theta = TAU * 23.5 / 24.0;
        let ring: Pendulum = Pendulum::with_state(ORANGE, theta, 0.87);
        let pixels = ring.pixels();

        assert_eq!(pixels[0], ORANGE);
        assert_eq!(pixels[23], ORANGE);
        assert_eq!(pixels[11], Rgb::new(0, 0, 0));
        assert_eq!(pixels[12], Rgb::new(0, 0, 0));
    }

    #[test]
    fn gravity_pulls_the_bob_off_the_top() {
        // Bob at the top, board upright: cos(0)·az couples gravity in and
        // the midpoint starts moving.
        let mut ring: Pendulum = Pendulum::with_state(ORANGE, 0.0, 0.87);
        let before = ring.theta();
        ring.step(accel(0.0, 0.0, 1.0));
        assert!(ring.theta() < before);
    }

    #[test]
    fn seeded_rings_desynchronise() {
        let mut rng = TestRng(0xdead_beef);
        let mut a: Pendulum = Pendulum::new(ORANGE, &mut rng);
        let mut b: Pendulum = Pendulum::new(ORANGE, &mut rng);

        assert_ne!(a.theta(), b.theta());
        assert!((0.85..0.90).contains(&a.friction()));
        assert!((0.85..0.90).contains(&b.friction()));

        for _ in 0..20 {
            a.step(accel(0.1, 0.0, 0.9));
            b.step(accel(0.1, 0.0, 0.9));
        }
        assert_ne!(a.theta(), b.theta());
    }

    #[test]
    fn smaller_rings_work() {
        let ring: Pendulum<8> = Pendulum::with_state(ORANGE, 0.0, 0.87);
        let pixels = ring.pixels();
        assert_eq!(pixels.len(), 8);
        assert_eq!(pixels[0], ORANGE);
    }
}
