// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{ViewerSettings, input::track_pointer, paint::paint_shell};
use bevy::{prelude::*, window::WindowCloseRequested};
use surface::{DragState, Rotation, SampleGrid};

/// The sampled seashell surface.  Built once before the app starts and never modified.
#[derive(Resource, Deref, Debug)]
pub struct ShellGrid(pub SampleGrid);

/// Interactive view state: the accumulated rotation and the drag gesture driving it.  Only the
/// input system writes to it.
#[derive(Resource, Default, Debug)]
pub struct ViewState {
    pub rotation: Rotation,
    pub drag: DragState,
}

/// A plugin that shows a [`ShellGrid`] as a mouse-rotatable solid mesh.
///
/// Each frame, pointer input is applied to [`ViewState`] first, then the grid is rotated,
/// projected, depth sorted and painted through egui.  The app must provide the [`ShellGrid`]
/// resource and `bevy_egui`'s `EguiPlugin`; [`ViewerSettings`] falls back to its default.
pub struct ShellViewPlugin;

impl Plugin for ShellViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerSettings>()
            .init_resource::<ViewState>()
            .add_systems(Startup, setup_view)
            .add_systems(Update, (track_pointer, paint_shell).chain())
            .add_systems(Last, log_close_requests);
    }
}

fn setup_view(
    mut commands: Commands,
    mut clear_color: ResMut<ClearColor>,
    settings: Res<ViewerSettings>,
    grid: Res<ShellGrid>,
) {
    debug!("{:?}", *settings);

    let surface::Rgb(r, g, b) = settings.background;
    clear_color.0 = Color::rgb_u8(r, g, b);
    commands.spawn(Camera2dBundle::default());

    info!(
        "Showing {}x{} seashell grid ({} faces)",
        grid.rows(),
        grid.columns(),
        grid.cell_count()
    );
}

fn log_close_requests(mut close_requests: EventReader<WindowCloseRequested>) {
    for request in close_requests.read() {
        info!("Window {:?} closed, leaving render loop", request.window);
    }
}


// End of File
