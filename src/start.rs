// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{ShellGrid, ShellViewPlugin, ViewerSettings};
use anyhow::{Context, Result};
use bevy::{
    log::{Level, LogPlugin},
    prelude::*,
    window::{ExitCondition, WindowResolution},
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use surface::SampleGrid;

/// Default log filter.  Our crates log at the configured level; the noisy render backends only
/// report problems.  `RUST_LOG` overrides it, e.g. `RUST_LOG=seashell=debug`.
const LOG_FILTER: &str = "wgpu=error,naga=warn,seashell=info,seashell_surface=info";

/// Runs the viewer with the default settings until its window is closed.
pub fn start() -> Result<()> {
    start_with(ViewerSettings::default())
}

/// Runs the viewer with `settings` until its window is closed.  Fails without opening a window if
/// the surface cannot be sampled.
pub fn start_with(settings: ViewerSettings) -> Result<()> {
    // Route panics to the Javascript console in the browser.
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    let grid = SampleGrid::sample(&settings.shell).context("Invalid seashell parameters")?;

    let window_plugin = WindowPlugin {
        primary_window: Some(primary_window(&settings)),
        exit_condition: ExitCondition::OnPrimaryClosed,
        close_when_requested: true,
    };

    let log_plugin = LogPlugin {
        filter: LOG_FILTER.into(),
        level: Level::INFO,
        ..default()
    };

    // Redraw on input, and otherwise once per frame interval.
    let winit_settings = WinitSettings {
        focused_mode: UpdateMode::Reactive {
            wait: settings.frame_interval,
        },
        unfocused_mode: UpdateMode::Reactive {
            wait: settings.frame_interval,
        },
        ..default()
    };

    App::new()
        .insert_resource(winit_settings)
        .insert_resource(ShellGrid(grid))
        .insert_resource(settings)
        .add_plugins(DefaultPlugins.set(window_plugin).set(log_plugin))
        .add_plugins(EguiPlugin)
        .add_plugins(ShellViewPlugin)
        .run();

    Ok(())
}

/// The fixed-size primary window.  In the browser it attaches to the page's `settings.canvas`
/// element and keeps browser hotkeys from firing while the viewer has focus.
pub(crate) fn primary_window(settings: &ViewerSettings) -> Window {
    let canvas = settings.canvas_size();
    Window {
        title: settings.title.clone(),
        resolution: WindowResolution::new(canvas.x, canvas.y),
        resizable: false,
        canvas: settings.canvas.clone(), // For web; no effect elsewhere.
        prevent_default_event_handling: true,
        ..default()
    }
}


// End of File
