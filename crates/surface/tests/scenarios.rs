// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::{Vec2, Vec3};
use seashell_surface::prelude::*;
use seashell_surface::shell_point;

const PINK: Rgb = Rgb(248, 24, 148);
const SENSITIVITY: f32 = 0.01;

#[test]
fn spiral_origin_lands_right_of_center() {
    let params = ShellParams::default();
    let grid = SampleGrid::sample(&params).unwrap();

    assert_eq!(grid.row(0).map(<[Vec3]>::len), Some(150));
    assert!(grid.row(50).is_none());

    let origin = grid.get(0, 0).unwrap();
    assert!((origin - Vec3::new(0.4, 0.0, 0.0)).abs().max_element() < 1e-6);
    assert_eq!(origin, shell_point(&params, 0.0, 0.0));

    let projected = Projector::default()
        .project(Rotation::default().apply(origin))
        .unwrap();
    assert!((projected.screen - Vec2::new(416.0, 300.0)).abs().max_element() < 1e-4);
    assert_eq!(projected.depth, 0.0);
}

#[test]
fn default_shell_is_fully_visible_at_rest() {
    // The outer whorl has radius 0.2 * e^(0.15 * 6pi) ~ 3.4, so no point reaches z = -5.
    let grid = SampleGrid::sample(&ShellParams::default()).unwrap();
    let quads = build_frame(&grid, Rotation::default(), &Projector::default(), PINK);
    assert_eq!(quads.len(), grid.cell_count());
    assert!(quads.windows(2).all(|pair| pair[0].depth >= pair[1].depth));
    assert!(quads.iter().all(|q| q.color == PINK));
}

#[test]
fn enlarged_shell_loses_cells_behind_the_camera() {
    let params = ShellParams {
        alpha: 1.0,
        ..Default::default()
    };
    let grid = SampleGrid::sample(&params).unwrap();
    let projector = Projector::default();
    let rotation = Rotation::default();
    let quads = build_frame(&grid, rotation, &projector, PINK);
    assert!(!quads.is_empty());
    assert!(quads.len() < grid.cell_count());

    // A cell survives exactly when all four of its corners project.
    let expected = grid
        .cells()
        .filter(|cell| {
            grid.corners(cell)
                .iter()
                .all(|&p| projector.project(rotation.apply(p)).is_some())
        })
        .count();
    assert_eq!(quads.len(), expected);
}

#[test]
fn drag_turns_the_view() {
    let mut drag = DragState::default();
    let mut rotation = Rotation::default();

    drag.apply(
        PointerEvent::Pressed(Vec2::new(100.0, 100.0)),
        &mut rotation,
        SENSITIVITY,
    );
    drag.apply(
        PointerEvent::Moved(Vec2::new(110.0, 115.0)),
        &mut rotation,
        SENSITIVITY,
    );
    assert!((rotation.angle_y - 0.10).abs() < 1e-6);
    assert!((rotation.angle_x - 0.15).abs() < 1e-6);

    let before = rotation;
    drag.apply(
        PointerEvent::Moved(Vec2::new(110.0, 115.0)),
        &mut rotation,
        SENSITIVITY,
    );
    assert_eq!(rotation, before);
}

#[test]
fn move_without_press_keeps_the_view() {
    let mut drag = DragState::default();
    let mut rotation = Rotation::default();
    drag.apply(
        PointerEvent::Moved(Vec2::new(110.0, 115.0)),
        &mut rotation,
        SENSITIVITY,
    );
    drag.apply(PointerEvent::Released, &mut rotation, SENSITIVITY);
    drag.apply(
        PointerEvent::Moved(Vec2::new(300.0, 20.0)),
        &mut rotation,
        SENSITIVITY,
    );
    assert_eq!(rotation, Rotation::default());
}

#[test]
fn rotated_frame_keeps_depth_order() {
    let grid = SampleGrid::sample(&ShellParams::default()).unwrap();
    let quads = build_frame(&grid, Rotation::new(0.8, -2.1), &Projector::default(), PINK);
    assert!(!quads.is_empty());
    assert!(quads.windows(2).all(|pair| pair[0].depth >= pair[1].depth));
}

// End of File
