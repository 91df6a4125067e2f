// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{ViewState, ViewerSettings};
use bevy::{
    input::{ButtonState, mouse::MouseButtonInput},
    prelude::*,
    window::PrimaryWindow,
};
use surface::PointerEvent;

/// Translates one frame's worth of Bevy mouse input into drag-gesture events.
///
/// Pending cursor motion is delivered first, at the current cursor `position`, so that a release
/// later in the same frame still accounts for the last stretch of the drag.  Button changes follow
/// in arrival order.  Any mouse button drives the gesture.  A press without a known cursor position
/// cannot anchor a drag and is dropped.
pub fn pointer_events<'a>(
    buttons: impl IntoIterator<Item = &'a MouseButtonInput>,
    moved: bool,
    position: Option<Vec2>,
) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    if moved {
        events.extend(position.map(PointerEvent::Moved));
    }
    for button in buttons {
        match button.state {
            ButtonState::Pressed => match position {
                Some(position) => events.push(PointerEvent::Pressed(position)),
                None => debug!("Ignoring {:?} press outside the window", button.button),
            },
            ButtonState::Released => events.push(PointerEvent::Released),
        }
    }
    events
}

/// Feeds mouse input into the view's drag gesture, turning the view while a button is held.
pub(crate) fn track_pointer(
    settings: Res<ViewerSettings>,
    mut view: ResMut<ViewState>,
    mut buttons: EventReader<MouseButtonInput>,
    mut moves: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let last_move = moves.read().last().map(|event| event.position);
    let position = windows
        .get_single()
        .ok()
        .and_then(Window::cursor_position)
        .or(last_move);

    let events = pointer_events(buttons.read(), last_move.is_some(), position);
    if events.is_empty() {
        return;
    }

    let ViewState { rotation, drag } = &mut *view;
    for event in events {
        let was_dragging = drag.is_dragging();
        drag.apply(event, rotation, settings.drag_sensitivity);
        match (was_dragging, drag.is_dragging()) {
            (false, true) => debug!("Drag started at {:?}", position),
            (true, false) => debug!("Drag ended, view at {:?}", rotation),
            _ => {}
        }
    }
}


// End of File
