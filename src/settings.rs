// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use std::time::Duration;
use surface::{Projector, Rgb, ShellParams};

/// Configuration resource for the seashell viewer.
///
/// Every knob of the viewer lives here; [`Default`] gives the stock 800×600 pink seashell.
/// Settings are read once at startup to size the window and sample the surface, and every frame
/// by the input and paint systems.
#[derive(Resource, Clone, Debug)]
pub struct ViewerSettings {
    /// Title of the primary window.
    pub title: String,

    /// Shape and sampling of the surface.
    pub shell: ShellParams,

    /// Camera and canvas.  The window is created at `projector.viewport` logical pixels and
    /// cannot be resized, so screen coordinates from the projector map directly onto it.
    pub projector: Projector,

    /// CSS selector of the page `<canvas>` the window draws into when running in a browser.
    pub canvas: Option<String>,

    /// Fill color of every face.
    pub fill: Rgb,

    /// Color of the face outlines.
    pub outline: Rgb,

    /// Width of the face outlines, in logical pixels.
    pub outline_width: f32,

    /// Color the canvas is cleared to before each frame.
    pub background: Rgb,

    /// Radians of rotation per pixel of pointer movement while dragging.
    pub drag_sensitivity: f32,

    /// Longest time between two redraws.
    pub frame_interval: Duration,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            title: "Seashell Surface".into(),
            shell: ShellParams::default(),
            projector: Projector::default(),
            canvas: Some("#bevy".into()),
            fill: Rgb(248, 24, 148),
            outline: Rgb(50, 50, 50),
            outline_width: 1.0,
            background: Rgb::WHITE,
            drag_sensitivity: 0.01,
            frame_interval: Duration::from_secs_f64(1.0 / 60.0),
        }
    }
}

impl ViewerSettings {
    /// The canvas size in logical pixels.
    pub fn canvas_size(&self) -> Vec2 {
        self.projector.viewport
    }
}


// End of File
