// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Projector, Rotation, SampleGrid};
use glam::Vec2;

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Rgb(255, 255, 255);
}

/// One grid cell mapped to screen space, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedQuad {
    /// Screen-space corners in cell winding order.
    pub points: [Vec2; 4],
    /// Mean depth of the four corners; larger is farther from the camera.
    pub depth: f32,
    pub color: Rgb,
}

impl ProjectedQuad {
    /// Splits the face into two triangles that cover exactly the area its outline encloses.
    ///
    /// A projected cell is not always convex.  A concave face is split along the diagonal that
    /// lies inside it, and a self-intersecting (bow-tie) face is split at the crossing point into
    /// its two lobes.
    pub fn triangles(&self) -> [[Vec2; 3]; 2] {
        let [p0, p1, p2, p3] = self.points;
        if let Some(x) = crossing(p0, p1, p2, p3) {
            return [[x, p1, p2], [x, p3, p0]];
        }
        if let Some(x) = crossing(p1, p2, p3, p0) {
            return [[p0, p1, x], [x, p2, p3]];
        }
        // The 0-2 diagonal is inside the face iff it separates 1 from 3.
        let diagonal = p2 - p0;
        let side1 = diagonal.perp_dot(p1 - p0);
        let side3 = diagonal.perp_dot(p3 - p0);
        if side1 * side3 <= 0.0 {
            [[p0, p1, p2], [p0, p2, p3]]
        } else {
            [[p1, p2, p3], [p1, p3, p0]]
        }
    }
}

/// Where segment `a0`-`a1` crosses segment `b0`-`b1`, if they cross away from their ends.
fn crossing(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let (r, q) = (a1 - a0, b1 - b0);
    let denom = r.perp_dot(q);
    if denom == 0.0 {
        return None;
    }
    let t = (b0 - a0).perp_dot(q) / denom;
    let s = (b0 - a0).perp_dot(r) / denom;
    (t > 0.0 && t < 1.0 && s > 0.0 && s < 1.0).then(|| a0 + r * t)
}

/// Rotates and projects every cell of `grid`.
///
/// A cell is emitted only if all four corners project; a cell with any corner at or behind the
/// camera is dropped whole for this frame.  Corners shared by neighbouring cells are rotated again
/// for each cell.  The output follows grid order and is not yet depth sorted.
pub fn build_quads(
    grid: &SampleGrid,
    rotation: Rotation,
    projector: &Projector,
    color: Rgb,
) -> Vec<ProjectedQuad> {
    let mut quads = Vec::with_capacity(grid.cell_count());
    'cells: for cell in grid.cells() {
        let mut points = [Vec2::ZERO; 4];
        let mut depth = 0.0;
        for (slot, corner) in points.iter_mut().zip(grid.corners(&cell)) {
            let Some(projected) = projector.project(rotation.apply(corner)) else {
                continue 'cells;
            };
            *slot = projected.screen;
            depth += projected.depth;
        }
        quads.push(ProjectedQuad {
            points,
            depth: depth / 4.0,
            color,
        });
    }
    quads
}

/// Orders quads farthest first, so painting them in sequence lets nearer faces cover farther ones.
/// Equal depths end up in no particular order.
pub fn sort_back_to_front(quads: &mut [ProjectedQuad]) {
    quads.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Everything needed to paint one frame: [`build_quads`] followed by [`sort_back_to_front`].
pub fn build_frame(
    grid: &SampleGrid,
    rotation: Rotation,
    projector: &Projector,
    color: Rgb,
) -> Vec<ProjectedQuad> {
    let mut quads = build_quads(grid, rotation, projector, color);
    sort_back_to_front(&mut quads);
    log::trace!(
        "Frame has {} of {} cells visible",
        quads.len(),
        grid.cell_count()
    );
    quads
}


// End of File
