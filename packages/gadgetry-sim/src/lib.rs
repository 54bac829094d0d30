//! Accelerometer-driven toy physics for LED boards.
//!
//! # Overview
//!
//! Two self-contained simulations that demos drive from a tilt sensor and
//! render onto whatever pixels the board has:
//!
//! - [`sand`] — grains tumbling around a small rectangular grid, for LED
//!   matrices and button pads.
//! - [`pendulum`] — a damped pendulum swinging around a ring of pixels,
//!   for goggle-style circular displays.
//!
//! Both consume a raw acceleration reading as a [`Vector3<f64>`] in the
//! board's axis convention and are deterministic given their state and the
//! reading; all randomness (initial grain placement, pendulum phase) comes
//! from an injected [`rand_core::RngCore`].
//!
//! Neither simulation touches hardware: the sand grid exposes its
//! occupancy for the host to draw, and the pendulum hands back a color per
//! ring pixel.

#![no_std]

extern crate alloc;

pub mod grid;
pub mod pendulum;
pub mod sand;

pub use grid::Grid;
pub use mint::Vector3;
pub use pendulum::Pendulum;
pub use rgb::Rgb;
pub use sand::SandSim;
