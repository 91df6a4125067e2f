// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Seashell surface pipeline
//!
//! Everything needed to turn the parametric seashell surface into an ordered list of screen-space
//! quadrilaterals, independent of any windowing or drawing backend:
//!
//! 1. [`SampleGrid::sample`] evaluates the surface once into an immutable grid of points.
//! 2. [`Rotation`] holds the accumulated view angles, updated by [`DragState::apply`].
//! 3. [`build_frame`] rotates and projects every grid cell through a [`Projector`], drops cells
//!    with a corner behind the camera, and sorts the survivors back-to-front so they can be
//!    painted in order.
//!
//! The crate logs through the [`log`] facade, so whichever logger the host application installs
//! picks up its messages.

mod drag;
mod error;
mod params;
mod projection;
mod quads;
mod rotation;
mod sampler;

pub use drag::{DragState, PointerEvent};
pub use error::SurfaceError;
pub use params::{Axis, ShellParams};
pub use projection::{ProjectedPoint, Projector};
pub use quads::{ProjectedQuad, Rgb, build_frame, build_quads, sort_back_to_front};
pub use rotation::{Rotation, rotate_point};
pub use sampler::{Cell, SampleGrid, shell_point};

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::{
        DragState, PointerEvent, ProjectedQuad, Projector, Rgb, Rotation, SampleGrid,
        ShellParams, SurfaceError, build_frame,
    };
}

// End of File
