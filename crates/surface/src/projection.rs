// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::{Vec2, Vec3};

/// A point mapped to screen space, with the depth it had before projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    /// Screen position in canvas pixels, origin at the top-left corner.
    pub screen: Vec2,
    /// The input `z`, passed through unchanged for depth sorting.
    pub depth: f32,
}

/// Simple pinhole camera looking down +z from `distance` units in front of the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    /// Distance from the camera to the origin.
    pub distance: f32,
    /// Screen pixels per unit at the origin's depth, times `distance`.
    pub scale: f32,
    /// Canvas size in pixels; the origin projects to its center.
    pub viewport: Vec2,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            distance: 5.0,
            scale: 200.0,
            viewport: Vec2::new(800.0, 600.0),
        }
    }
}

impl Projector {
    /// Perspective scale factor at depth `z`, or `None` if `z` is at or behind the camera plane.
    pub fn factor(&self, z: f32) -> Option<f32> {
        let depth = z + self.distance;
        (depth > 0.0).then(|| self.scale / depth)
    }

    /// Projects an already rotated point.  Returns `None` for points at or behind the camera,
    /// which simply are not visible this frame.
    pub fn project(&self, point: Vec3) -> Option<ProjectedPoint> {
        let factor = self.factor(point.z)?;
        Some(ProjectedPoint {
            screen: point.truncate() * factor + self.viewport / 2.0,
            depth: point.z,
        })
    }
}


// End of File
