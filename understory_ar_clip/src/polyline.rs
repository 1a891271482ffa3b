// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Line, Point, Rect, Vec2};

use crate::intersect::{contains_inclusive, segment_rect_intersections};

/// Tunables for [`PolylineClipper`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ClipConfig {
    /// How far past the bounds, as a multiple of the bounds' size, both
    /// endpoints of a segment must lie on opposite sides before the segment
    /// is treated as a wrap-around artifact.
    ///
    /// Defaults to `1.5`, which suits points produced by
    /// `understory_ar_projection`: its off-screen shift moves any point
    /// outside the field of view a full viewport away.
    ///
    /// Must be finite and non-negative; see [`ClipConfig::is_valid`]. Other
    /// values are not checked by the clipper and produce a guard box that
    /// breaks arbitrary segments or none at all.
    pub wrap_margin: f64,
}

impl ClipConfig {
    /// Returns `true` if `wrap_margin` is finite and non-negative.
    ///
    /// Check this where the configuration comes from untrusted input.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.wrap_margin.is_finite() && self.wrap_margin >= 0.0
    }
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self { wrap_margin: 1.5 }
    }
}

/// Detects segments that jump across the oversized box around the bounds.
///
/// A poly-line that runs around the viewer projects to points far off one
/// side of the viewport followed by points far off the other side. Joining
/// them would draw a chord straight across the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WrapGuard {
    min: Point,
    max: Point,
}

impl WrapGuard {
    /// Creates a guard for `bounds`, expanded by `margin` times its size on
    /// every side.
    ///
    /// `margin` is expected to be finite and non-negative.
    #[must_use]
    pub fn new(bounds: Rect, margin: f64) -> Self {
        let bounds = bounds.abs();
        let pad = Vec2::new(bounds.width() * margin, bounds.height() * margin);
        Self {
            min: Point::new(bounds.x0 - pad.x, bounds.y0 - pad.y),
            max: Point::new(bounds.x1 + pad.x, bounds.y1 + pad.y),
        }
    }

    /// Returns `true` if the segment from `previous` to `current` starts
    /// beyond one extreme of the oversized box and ends beyond the opposite
    /// extreme, on either axis.
    #[must_use]
    pub fn is_wrapped(&self, previous: Point, current: Point) -> bool {
        (current.x < self.min.x && previous.x > self.max.x)
            || (current.x > self.max.x && previous.x < self.min.x)
            || (current.y < self.min.y && previous.y > self.max.y)
            || (current.y > self.max.y && previous.y < self.min.y)
    }
}

/// Streams projected pixels of one poly-line into path elements clipped to a
/// rectangle.
///
/// Each pushed pixel extends the path:
/// - The first pixel, and any pixel that follows a wrapped segment or a
///   [`break_path`](Self::break_path), starts a new subpath with `MoveTo`.
/// - A segment inside the bounds is drawn with `LineTo`.
/// - A segment that crosses the bounds draws only its visible part, then
///   moves to the new pixel so the next segment continues from there.
///
/// Every emitted point is offset by `-origin`. A clipper carries state for
/// a single path; use a fresh one (or [`reset`](Self::reset)) for each path.
#[derive(Clone, Debug)]
pub struct PolylineClipper {
    bounds: Rect,
    offset: Vec2,
    guard: WrapGuard,
    previous: Option<Point>,
}

impl PolylineClipper {
    /// Creates a clipper for `bounds` with the default [`ClipConfig`].
    #[must_use]
    pub fn new(bounds: Rect, origin: Point) -> Self {
        Self::with_config(bounds, origin, ClipConfig::default())
    }

    /// Creates a clipper for `bounds` with explicit tunables.
    #[must_use]
    pub fn with_config(bounds: Rect, origin: Point, config: ClipConfig) -> Self {
        let bounds = bounds.abs();
        Self {
            bounds,
            offset: origin.to_vec2(),
            guard: WrapGuard::new(bounds, config.wrap_margin),
            previous: None,
        }
    }

    /// The clipping rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Forgets the previous pixel so the next one starts a new subpath.
    pub fn break_path(&mut self) {
        self.previous = None;
    }

    /// Same as [`break_path`](Self::break_path); use when reusing the
    /// clipper for another path.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Appends the next pixel of the poly-line to `path`.
    pub fn push(&mut self, pixel: Point, path: &mut BezPath) {
        match self.previous {
            Some(previous) if !self.guard.is_wrapped(previous, pixel) => {
                self.segment(previous, pixel, path);
            }
            _ => path.move_to(pixel - self.offset),
        }
        self.previous = Some(pixel);
    }

    fn segment(&self, start: Point, end: Point, path: &mut BezPath) {
        let start_inside = contains_inclusive(self.bounds, start);
        let end_inside = contains_inclusive(self.bounds, end);

        if start_inside && end_inside {
            path.line_to(end - self.offset);
            return;
        }

        let hits = segment_rect_intersections(Line::new(start, end), self.bounds);

        if start_inside {
            if let Some(&exit) = hits.first() {
                path.line_to(exit - self.offset);
            }
            path.move_to(end - self.offset);
            return;
        }

        if end_inside {
            if let Some(&entry) = hits.first() {
                path.move_to(entry - self.offset);
            }
            path.line_to(end - self.offset);
            return;
        }

        if let [entry, exit] = hits.as_slice() {
            path.move_to(*entry - self.offset);
            path.line_to(*exit - self.offset);
        }
        path.move_to(end - self.offset);
    }
}

/// Clips a whole poly-line of projected pixels to `bounds`, appending the
/// result to `path`.
///
/// See [`PolylineClipper`] for the emitted elements.
pub fn clip_polyline(
    bounds: Rect,
    origin: Point,
    pixels: impl IntoIterator<Item = Point>,
    path: &mut BezPath,
) {
    let mut clipper = PolylineClipper::new(bounds, origin);
    for pixel in pixels {
        clipper.push(pixel, path);
    }
}
