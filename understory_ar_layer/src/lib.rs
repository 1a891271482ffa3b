// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ar_layer --heading-base-level=0

//! Understory AR Layer: poly-lines drawn over a camera view.
//!
//! A [`LineLayer`] holds a set of [`ArLine`]s, each an ordered list of
//! [`ArPoint`](understory_ar_projection::ArPoint)s plus a [`LineStyle`].
//! Every frame, [`LineLayer::draw`] projects each point with the frame's
//! [`ViewState`](understory_ar_projection::ViewState), clips the result to
//! the viewport, and strokes one path per line through a [`LineRenderer`].
//!
//! - Lines can be replaced or cleared from any thread while frames are
//!   drawn; a frame always sees one complete set.
//! - Thickness is given either in density-independent pixels, converted by
//!   the renderer, or in degrees, converted by the view.
//! - Lines that run behind the viewer are split instead of being joined
//!   across the screen.
//! - Standard overlays (horizon, altitude rings, meridians, grids) are
//!   available as builders and from a JSON line set ([`LineSetConfig`]).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{PathEl, Size};
//! use understory_ar_layer::{LineLayer, LineStyle, RecordingRenderer, horizon_line};
//! use understory_ar_projection::ViewState;
//!
//! let layer = LineLayer::new();
//! layer.set_lines([horizon_line(LineStyle::default())]);
//!
//! let view = ViewState::new(0.0, 0.0, Size::new(800.0, 600.0), Size::new(60.0, 45.0));
//! let mut renderer = RecordingRenderer::new();
//! layer.draw(&mut renderer, &view);
//!
//! // The horizon runs straight across the middle of the screen.
//! let path = &renderer.events()[0].path;
//! for el in path.elements() {
//!     if let PathEl::LineTo(p) = el {
//!         assert_eq!(p.y, 300.0);
//!         assert!((0.0..=800.0).contains(&p.x));
//!     }
//! }
//! ```

mod builders;
mod config;
mod layer;
mod line;
mod render;

pub use builders::{
    GRID_RESOLUTION, MIN_GRID_SPACING, MIN_STEP, altitude_ring, grid, horizon_line, meridian,
};
pub use config::{
    CapConfig, ConfigError, JoinConfig, LineConfig, LineSetConfig, PointConfig, ShapeConfig,
    UnitsConfig,
};
pub use layer::LineLayer;
pub use line::{ArLine, LineStyle, ThicknessUnits};
pub use render::{ArView, LineRenderer, RecordingRenderer, StrokeEvent};
