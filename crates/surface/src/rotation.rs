// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::Vec3;

/// Rotates `point` about the X axis by `angle_x`, then about the Y axis by `angle_y`.
///
/// Both rotations are right-handed.  The order is significant; rotating about Y first gives a
/// different picture.
pub fn rotate_point(point: Vec3, angle_x: f32, angle_y: f32) -> Vec3 {
    let Vec3 { x, y, z } = point;

    let (sin_x, cos_x) = angle_x.sin_cos();
    let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);

    let (sin_y, cos_y) = angle_y.sin_cos();
    let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);

    Vec3::new(x, y, z)
}

/// Accumulated view rotation.
///
/// Angles are in radians and grow without bound; they only ever feed trigonometric functions, so
/// there is no need to wrap them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub angle_x: f32,
    pub angle_y: f32,
}

impl Rotation {
    pub fn new(angle_x: f32, angle_y: f32) -> Self {
        Self { angle_x, angle_y }
    }

    /// Rotates `point` by this view rotation.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        rotate_point(point, self.angle_x, self.angle_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = Vec3::new(1.5, -2.0, 0.25);
        assert_eq!(rotate_point(p, 0.0, 0.0), p);
        assert_eq!(Rotation::default().apply(p), p);
    }

    #[test]
    fn quarter_turn_about_x() {
        // Right-handed: +Y goes to +Z.
        assert!(approx_eq(rotate_point(Vec3::Y, FRAC_PI_2, 0.0), Vec3::Z));
        assert!(approx_eq(rotate_point(Vec3::Z, FRAC_PI_2, 0.0), -Vec3::Y));
    }

    #[test]
    fn quarter_turn_about_y() {
        // Right-handed: +Z goes to +X.
        assert!(approx_eq(rotate_point(Vec3::Z, 0.0, FRAC_PI_2), Vec3::X));
        assert!(approx_eq(rotate_point(Vec3::X, 0.0, FRAC_PI_2), -Vec3::Z));
    }

    #[test]
    fn x_then_y_composes() {
        let p = Vec3::new(0.3, -1.1, 2.4);
        let (ax, ay) = (0.7, -1.3);
        let stepwise = rotate_point(rotate_point(p, ax, 0.0), 0.0, ay);
        assert!(approx_eq(stepwise, rotate_point(p, ax, ay)));
    }

    #[test]
    fn order_is_x_first() {
        // Rotating about Y first would leave +Y in place and end at +Z.
        let p = rotate_point(Vec3::Y, FRAC_PI_2, FRAC_PI_2);
        assert!(approx_eq(p, Vec3::X));
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(0.3, -1.1, 2.4);
        let q = Rotation::new(4.0, 11.5).apply(p);
        assert!((p.length() - q.length()).abs() < 1e-5);
    }
}

// End of File
