// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::SurfaceError;
use std::{f32::consts::TAU, fmt, ops::Range};

/// One of the two parametric directions of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Around the tube.
    U,
    /// Along the spiral.
    V,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::U => write!(f, "u"),
            Axis::V => write!(f, "v"),
        }
    }
}

/// Shape and sampling parameters of the seashell surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellParams {
    /// Radial scale of the spiral.
    pub alpha: f32,
    /// Exponential growth rate of the spiral per radian of `v`.
    pub beta: f32,
    /// Parameter range around the tube.
    pub u_range: Range<f32>,
    /// Parameter range along the spiral.
    pub v_range: Range<f32>,
    /// Number of samples along `u`, endpoints included.
    pub u_steps: usize,
    /// Number of samples along `v`, endpoints included.
    pub v_steps: usize,
}

impl Default for ShellParams {
    /// Three full turns of a slowly widening shell.
    fn default() -> Self {
        Self {
            alpha: 0.2,
            beta: 0.15,
            u_range: 0.0..TAU,
            v_range: 0.0..3.0 * TAU,
            u_steps: 50,
            v_steps: 150,
        }
    }
}

impl ShellParams {
    /// Checks the preconditions of sampling: finite shape parameters, non-empty finite ranges and
    /// at least two samples per axis.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(SurfaceError::InvalidParameter { name, value });
            }
        }
        for (axis, range, steps) in [
            (Axis::U, &self.u_range, self.u_steps),
            (Axis::V, &self.v_range, self.v_steps),
        ] {
            if steps < 2 {
                return Err(SurfaceError::TooFewSteps { axis, steps });
            }
            if !(range.start.is_finite() && range.end.is_finite() && range.start < range.end) {
                return Err(SurfaceError::EmptyRange {
                    axis,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }

    /// The `u` value of row `i`.
    pub fn u_at(&self, i: usize) -> f32 {
        lerp_step(&self.u_range, i, self.u_steps)
    }

    /// The `v` value of column `j`.
    pub fn v_at(&self, j: usize) -> f32 {
        lerp_step(&self.v_range, j, self.v_steps)
    }
}

/// Sample `index` of `steps` evenly spaced samples over `range`.  Written as a weighted sum so the
/// first and last samples are exactly `range.start` and `range.end`.
fn lerp_step(range: &Range<f32>, index: usize, steps: usize) -> f32 {
    let t = index as f32 / (steps - 1) as f32;
    range.start * (1.0 - t) + range.end * t
}


// End of File
