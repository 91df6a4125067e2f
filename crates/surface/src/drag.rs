// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::Rotation;
use glam::Vec2;

/// Pointer input, reduced to what click-drag rotation needs.  Positions are canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Released,
    Moved(Vec2),
}

/// Whether a drag gesture is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Button held; `anchor` is the last pointer position seen during the drag.
    Dragging { anchor: Vec2 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Advances the gesture by one event, turning `rotation` for pointer movement while dragging.
    ///
    /// Horizontal movement turns the view about the Y axis and vertical movement about the X axis,
    /// each by `sensitivity` radians per pixel.  Movement while idle is ignored.
    pub fn apply(&mut self, event: PointerEvent, rotation: &mut Rotation, sensitivity: f32) {
        *self = match (*self, event) {
            (_, PointerEvent::Pressed(position)) => DragState::Dragging { anchor: position },
            (_, PointerEvent::Released) => DragState::Idle,
            (DragState::Dragging { anchor }, PointerEvent::Moved(position)) => {
                let delta = position - anchor;
                rotation.angle_y += delta.x * sensitivity;
                rotation.angle_x += delta.y * sensitivity;
                DragState::Dragging { anchor: position }
            }
            (DragState::Idle, PointerEvent::Moved(_)) => DragState::Idle,
        };
    }
}


// End of File
