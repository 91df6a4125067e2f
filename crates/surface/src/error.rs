// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::params::Axis;
use thiserror::Error;

/// Errors raised while building a sample grid.
///
/// These only arise from bad configuration.  Once a grid exists, the per-frame pipeline cannot
/// fail: points that end up behind the camera are silently skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    /// Fewer than two samples along an axis leaves no interval to subdivide.
    #[error("{axis} needs at least 2 samples, got {steps}")]
    TooFewSteps { axis: Axis, steps: usize },

    /// The parameter range along an axis is empty, inverted, or not finite.
    #[error("{axis} range [{start}, {end}] is empty or not finite")]
    EmptyRange { axis: Axis, start: f32, end: f32 },

    /// A shape parameter is NaN or infinite.
    #[error("shape parameter `{name}` must be finite, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// Rows handed to [`SampleGrid::from_rows`](crate::SampleGrid::from_rows) differ in length.
    #[error("row {row} has {found} points, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// End of File
