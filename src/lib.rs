// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Seashell viewer
//!
//! A Bevy application that draws a logarithmic-spiral seashell as a pink, outlined mesh which can
//! be turned by dragging with the mouse.  The geometry pipeline lives in the `seashell-surface`
//! crate; this crate supplies the window, input handling and painting.
//!
//! Faces are painted with egui in back-to-front order, with no depth buffer and no shading.

mod input;
mod paint;

mod settings;
pub use settings::ViewerSettings;

mod start;
pub use start::{start, start_with};

mod view;
pub use view::{ShellGrid, ShellViewPlugin, ViewState};

pub use input::pointer_events;

// End of File
