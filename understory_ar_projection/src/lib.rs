// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ar_projection --heading-base-level=0

//! Understory AR Projection: world directions to viewport pixels.
//!
//! This crate maps a real-world direction (compass bearing and altitude
//! above the horizon) onto the pixel grid of a camera viewport, given where
//! the camera points and how wide its field of view is. It provides:
//! - Degree-based angle helpers ([`normalize_angle`], [`wrap_angle`],
//!   [`delta_angle`]).
//! - Per-frame camera state ([`ViewState`]).
//! - The projection itself ([`Projector`], [`project`]).
//! - A capability trait for anything that can be placed in the view
//!   ([`ArPoint`]), with fixed-direction and geographic implementations.
//!
//! It does **not** read sensors, filter orientation, or draw anything.
//! Callers are expected to:
//! - Produce a [`ViewState`] once per frame from their orientation and
//!   camera sources.
//! - Feed the projected pixels to a clipper (see `understory_ar_clip`)
//!   and a renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_ar_projection::{Projector, ViewState, WorldDirection};
//!
//! // A 1000x1000 px viewport with a 90° field of view, facing north.
//! let view = ViewState::new(0.0, 0.0, Size::new(1000.0, 1000.0), Size::new(90.0, 90.0));
//! let projector = Projector::new(&view);
//!
//! let north = projector.project(WorldDirection::new(0.0, 0.0));
//! assert_eq!((north.x, north.y), (500.0, 500.0));
//!
//! let north_east = projector.project(WorldDirection::new(45.0, 0.0));
//! assert!(north_east.x > 500.0);
//! ```
//!
//! ## Off-screen points
//!
//! Directions outside the field of view are pushed a further viewport width
//! or height away from the center, so a point behind the viewer always lands
//! well off-screen instead of aliasing back toward the center.
//!
//! Projection assumes positive viewport and field-of-view sizes and does not
//! check them; [`ViewState::try_new`] validates sizes coming from outside.
//!
//! This crate is `no_std`.

#![no_std]

mod angle;
mod point;
mod project;
mod view;

pub use angle::{delta_angle, normalize_angle, wrap_angle};
pub use point::{
    ArPoint, EARTH_RADIUS_M, GeographicPoint, SphericalPoint, haversine_distance, initial_bearing,
};
pub use project::{Projector, project};
pub use view::{GeoPosition, ViewState, ViewStateError, WorldDirection};
