//! Sand grain simulation.
//!
//! Each step reduces the acceleration reading to a unit move direction and
//! lets every grain fall one cell that way, colliding against a write
//! buffer so a grain never sees this step's own moves. Diagonal conflicts
//! skid along a single axis, breaking ties by which side of the grid's
//! main diagonal currently holds more sand.

use libm::fabs;
use mint::Vector3;

use crate::grid::Grid;

// tan(67.5°): a steeper tilt than this zeroes the x component.
const STEEP: f64 = 2.414;
// tan(22.5°): a shallower tilt than this zeroes the y component.
const SHALLOW: f64 = 0.414;

// Below this the x axis reads as noise and motion is taken as pure-y.
const X_DEADBAND: f64 = 0.01;

/// Grains on a [`Grid`], stepped by an acceleration vector.
///
/// ```
/// use gadgetry_sim::{SandSim, Vector3};
///
/// let mut sim = SandSim::new(4, 4);
/// sim.grid_mut().set(0, 0, true);
///
/// // Tilt right: the grain slides along the top row.
/// let tilt = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
/// assert!(sim.step(tilt));
/// assert!(sim.grid()[(1, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct SandSim {
    grid: Grid,
}

impl SandSim {
    /// Creates a simulation over an empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    /// Creates a simulation over a pre-seeded grid.
    #[must_use]
    pub const fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// The current occupancy, for rendering.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable occupancy, for seeding and interactive edits.
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Advances every grain one cell under `accel`.
    ///
    /// Returns whether any grain moved. When the z component dominates
    /// both in-plane components the board is lying flat and the step is a
    /// no-op.
    ///
    /// The update is deterministic: the same occupancy and the same
    /// reading always produce the same next occupancy. Grain count is
    /// preserved and no two grains ever share a cell.
    pub fn step(&mut self, accel: Vector3<f64>) -> bool {
        if fabs(accel.z) > fabs(accel.x) && fabs(accel.z) > fabs(accel.y) {
            return false;
        }

        let (ix, iy) = move_direction(accel.x, accel.y);
        let upside_down = accel.x < 0.0 && accel.y < 0.0;

        let width = self.grid.width();
        let height = self.grid.height();
        let mut next = self.grid.clone();
        let mut moved = false;

        for x in 0..width {
            for y in 0..height {
                if !self.grid[(x, y)] {
                    continue;
                }

                let tx = clamp_to(x, ix, width);
                let ty = clamp_to(y, iy, height);
                if tx == x && ty == y {
                    continue;
                }

                if !next[(tx, ty)] {
                    next.set(x, y, false);
                    next.set(tx, ty, true);
                    moved = true;
                    continue;
                }

                // Target taken: try skidding along one axis. The grain's
                // own cell is still occupied in the write buffer, so a
                // degenerate axis (tx == x or ty == y) can never be free.
                let y_free = !next[(x, ty)];
                let x_free = !next[(tx, y)];

                if y_free && x_free {
                    let (left, right) = self.side_count(upside_down);
                    if left >= right {
                        next.set(x, y, false);
                        next.set(x, ty, true);
                    } else {
                        next.set(x, y, false);
                        next.set(tx, y, true);
                    }
                    moved = true;
                } else if y_free {
                    next.set(x, y, false);
                    next.set(x, ty, true);
                    moved = true;
                } else if x_free {
                    next.set(x, y, false);
                    next.set(tx, y, true);
                    moved = true;
                }
                // Both taken: the grain is boxed in and stays.
            }
        }

        self.grid = next;
        moved
    }

    /// Tallies grains on either side of the main diagonal.
    ///
    /// The sides swap when the board hangs upside down, and only when both
    /// in-plane components are negative; the asymmetry is inherited from
    /// the original demo and kept as-is.
    fn side_count(&self, upside_down: bool) -> (usize, usize) {
        let mut below = 0;
        let mut above = 0;

        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                if !self.grid[(x, y)] {
                    continue;
                }
                if y > x {
                    below += 1;
                } else if y < x {
                    above += 1;
                }
            }
        }

        if upside_down { (above, below) } else { (below, above) }
    }
}

/// Reduces in-plane acceleration to a unit move `(ix, iy)`.
fn move_direction(ax: f64, ay: f64) -> (isize, isize) {
    if fabs(ax) > X_DEADBAND {
        let ratio = fabs(ay / ax);
        let ix = if ratio > STEEP { 0 } else { sign(ax) };
        let iy = if ratio < SHALLOW { 0 } else { sign(ay) };
        (ix, iy)
    } else {
        (0, sign(ay))
    }
}

fn sign(value: f64) -> isize {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Moves `position` by `delta`, clamped to `0..extent`.
fn clamp_to(position: usize, delta: isize, extent: usize) -> usize {
    let moved = position as isize + delta;
    moved.clamp(0, extent as isize - 1) as usize
}
