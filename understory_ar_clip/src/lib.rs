// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ar_clip --heading-base-level=0

//! Understory AR Clip: viewport clipping for projected poly-lines.
//!
//! Lines drawn in an augmented-reality view (horizons, grids, trails) are
//! projected point by point onto the screen. Once projected, neighbouring
//! points may sit on opposite sides of the viewport because the real line
//! runs around or behind the viewer. Joining such points naively draws a
//! spurious chord across the screen.
//!
//! This crate turns a sequence of projected pixels into `MoveTo`/`LineTo`
//! elements of a [`kurbo::BezPath`]:
//! - Segments whose ends lie beyond opposite sides of an oversized box
//!   around the viewport are treated as wrap-around and broken
//!   ([`WrapGuard`]).
//! - Segments that cross the viewport edge are clipped exactly to it
//!   ([`clip_segment`], [`segment_rect_intersections`]).
//! - Everything else is drawn as-is.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{BezPath, PathEl, Point, Rect};
//! use understory_ar_clip::clip_polyline;
//!
//! let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//! let mut path = BezPath::new();
//! clip_polyline(
//!     bounds,
//!     Point::ZERO,
//!     [Point::new(500.0, 500.0), Point::new(1500.0, 500.0)],
//!     &mut path,
//! );
//! // The segment is cut where it leaves the viewport.
//! assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(1000.0, 500.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod intersect;
mod polyline;

pub use intersect::{clip_segment, contains_inclusive, segment_rect_intersections};
pub use polyline::{ClipConfig, PolylineClipper, WrapGuard, clip_polyline};
