// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{ShellGrid, ViewState, ViewerSettings};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{Color32, LayerId, Mesh, Pos2, Shape, Stroke},
};
use surface::{ProjectedQuad, Rgb, build_frame};

pub(crate) fn color32(Rgb(r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn pos2(p: Vec2) -> Pos2 {
    Pos2::new(p.x, p.y)
}

/// The two shapes that paint one face: its fill, then its outline on top.
///
/// The fill is a two-triangle mesh rather than a polygon, since egui only fills convex polygons
/// and projected faces can be concave or twisted.
pub(crate) fn quad_shapes(quad: &ProjectedQuad, outline: Stroke) -> [Shape; 2] {
    let color = color32(quad.color);
    let mut fill = Mesh::default();
    for triangle in quad.triangles() {
        let base = fill.vertices.len() as u32;
        for point in triangle {
            fill.colored_vertex(pos2(point), color);
        }
        fill.add_triangle(base, base + 1, base + 2);
    }
    let points = quad.points.iter().copied().map(pos2).collect();
    [Shape::mesh(fill), Shape::closed_line(points, outline)]
}

/// Paints the current frame of the seashell onto the background layer, farthest faces first.
///
/// The canvas itself is cleared by the camera's clear color, so all this has to do is overdraw.
pub(crate) fn paint_shell(
    mut contexts: EguiContexts,
    grid: Res<ShellGrid>,
    view: Res<ViewState>,
    settings: Res<ViewerSettings>,
) {
    let quads = build_frame(&grid, view.rotation, &settings.projector, settings.fill);
    let outline = Stroke::new(settings.outline_width, color32(settings.outline));

    let painter = contexts.ctx_mut().layer_painter(LayerId::background());
    painter.extend(quads.iter().flat_map(|quad| quad_shapes(quad, outline)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_is_filled_then_outlined() {
        let quad = ProjectedQuad {
            points: [
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ],
            depth: 1.0,
            color: Rgb(248, 24, 148),
        };
        let outline = Stroke::new(1.0, Color32::from_rgb(50, 50, 50));
        let [fill, edge] = quad_shapes(&quad, outline);

        let Shape::Mesh(fill) = fill else {
            panic!("fill is not a mesh");
        };
        assert_eq!(fill.indices.len(), 6);
        assert_eq!(fill.vertices.len(), 6);
        assert!(fill.vertices.iter().all(|v| v.color == Color32::from_rgb(248, 24, 148)));

        let Shape::Path(edge) = edge else {
            panic!("outline is not a path");
        };
        assert!(edge.closed);
        assert_eq!(edge.fill, Color32::TRANSPARENT);
        assert_eq!(edge.stroke, outline);
        assert_eq!(edge.points.len(), 4);
        assert_eq!(edge.points[2], Pos2::new(10.0, 10.0));
    }

    #[test]
    fn concave_face_fill_stays_inside_outline() {
        let quad = ProjectedQuad {
            points: [
                Vec2::new(0.0, 0.0),
                Vec2::new(40.0, 20.0),
                Vec2::new(0.0, 40.0),
                Vec2::new(10.0, 20.0),
            ],
            depth: 1.0,
            color: Rgb(248, 24, 148),
        };
        let [fill, _] = quad_shapes(&quad, Stroke::NONE);
        let Shape::Mesh(fill) = fill else {
            panic!("fill is not a mesh");
        };
        // The notch between (0, 0), (10, 20) and (0, 40) must stay unpainted.
        let notch = Pos2::new(4.0, 20.0);
        let covers = |[a, b, c]: [Pos2; 3]| {
            let side = |p: Pos2, q: Pos2| (q - p).x * (notch - p).y - (q - p).y * (notch - p).x;
            let (d1, d2, d3) = (side(a, b), side(b, c), side(c, a));
            (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
        };
        for triangle in fill.indices.chunks(3) {
            let corners = [0, 1, 2].map(|k| fill.vertices[triangle[k] as usize].pos);
            assert!(!covers(corners));
        }
    }
}

// End of File
