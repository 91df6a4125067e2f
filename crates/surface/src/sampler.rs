// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{ShellParams, SurfaceError};
use glam::Vec3;

/// Evaluates the seashell surface at parameter `(u, v)`.
///
/// The spiral radius `alpha * exp(beta * v)` scales all three coordinates; `v` winds the tube
/// around the z axis while `u` walks around the tube's cross-section.
pub fn shell_point(params: &ShellParams, u: f32, v: f32) -> Vec3 {
    let r = params.alpha * (params.beta * v).exp();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_v, cos_v) = v.sin_cos();
    Vec3::new(
        r * cos_v * (1.0 + cos_u),
        r * sin_v * (1.0 + cos_u),
        r * sin_u,
    )
}

/// Indices of the four corners of one grid cell, in winding order:
/// `(i, j)`, `(i + 1, j)`, `(i + 1, j + 1)`, `(i, j + 1)`.
pub type Cell = [(usize, usize); 4];

/// Immutable rows-by-columns grid of surface points.
///
/// Row `i` runs along `u`, column `j` along `v`.  The dimensions are fixed at construction and
/// are always at least 2×2, so every grid has at least one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    rows: usize,
    columns: usize,
    points: Vec<Vec3>,
}

impl SampleGrid {
    /// Samples the surface described by `params` into a `u_steps` × `v_steps` grid.
    pub fn sample(params: &ShellParams) -> Result<Self, SurfaceError> {
        params.validate()?;

        let mut points = Vec::with_capacity(params.u_steps * params.v_steps);
        for i in 0..params.u_steps {
            let u = params.u_at(i);
            points.extend((0..params.v_steps).map(|j| shell_point(params, u, params.v_at(j))));
        }
        log::debug!(
            "Sampled {}x{} seashell grid (alpha={}, beta={})",
            params.u_steps,
            params.v_steps,
            params.alpha,
            params.beta
        );

        Ok(Self {
            rows: params.u_steps,
            columns: params.v_steps,
            points,
        })
    }

    /// Builds a grid from explicit rows of points.  All rows must have the same length, and there
    /// must be at least two rows of at least two points.
    pub fn from_rows(rows: Vec<Vec<Vec3>>) -> Result<Self, SurfaceError> {
        let row_count = rows.len();
        if row_count < 2 {
            return Err(SurfaceError::TooFewSteps {
                axis: crate::Axis::U,
                steps: row_count,
            });
        }
        let columns = rows[0].len();
        if columns < 2 {
            return Err(SurfaceError::TooFewSteps {
                axis: crate::Axis::V,
                steps: columns,
            });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(SurfaceError::RaggedGrid {
                row,
                expected: columns,
                found,
            });
        }

        Ok(Self {
            rows: row_count,
            columns,
            points: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of samples along `u`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of samples along `v`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The point at row `i`, column `j`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<Vec3> {
        if i < self.rows && j < self.columns {
            Some(self.points[i * self.columns + j])
        } else {
            None
        }
    }

    /// All points of row `i`, or `None` if out of bounds.
    pub fn row(&self, i: usize) -> Option<&[Vec3]> {
        (i < self.rows).then(|| &self.points[i * self.columns..(i + 1) * self.columns])
    }

    /// Number of cells, `(rows - 1) * (columns - 1)`.
    pub fn cell_count(&self) -> usize {
        (self.rows - 1) * (self.columns - 1)
    }

    /// Iterates over every cell of the grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows - 1).flat_map(move |i| {
            (0..self.columns - 1).map(move |j| [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)])
        })
    }

    /// The four corner points of `cell`.
    pub fn corners(&self, cell: &Cell) -> [Vec3; 4] {
        cell.map(|(i, j)| self.points[i * self.columns + j])
    }
}


// End of File
