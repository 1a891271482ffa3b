// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Stroke};
use peniko::Color;
use understory_ar_projection::ViewState;

/// Source of the per-frame view a layer draws against.
///
/// [`ViewState`] implements this directly. Camera wrappers that know a
/// better angle-to-pixel scale (for example from calibrated lens intrinsics)
/// can override [`angular_size_to_pixels`](Self::angular_size_to_pixels).
pub trait ArView {
    /// The view for the current frame.
    fn view_state(&self) -> ViewState;

    /// Converts an angular size in degrees into pixels.
    fn angular_size_to_pixels(&self, degrees: f64) -> f64 {
        self.view_state().angular_size_to_pixels(degrees)
    }
}

impl ArView for ViewState {
    fn view_state(&self) -> ViewState {
        *self
    }
}

/// Drawing surface for clipped lines.
pub trait LineRenderer {
    /// Converts density-independent pixels into device pixels.
    fn dp(&self, value: f64) -> f64 {
        value
    }

    /// Strokes `path` with `stroke` and a solid `color`.
    ///
    /// The path only contains `MoveTo` and `LineTo` elements in device
    /// pixels.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color);
}

impl<R: LineRenderer + ?Sized> LineRenderer for &mut R {
    fn dp(&self, value: f64) -> f64 {
        (**self).dp(value)
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        (**self).stroke_path(path, stroke, color);
    }
}

/// A stroke issued to a [`RecordingRenderer`].
#[derive(Clone, Debug)]
pub struct StrokeEvent {
    /// Path that was stroked.
    pub path: BezPath,
    /// Stroke parameters, with the width in device pixels.
    pub stroke: Stroke,
    /// Stroke color.
    pub color: Color,
}

/// Renderer that records every stroke instead of rasterizing.
///
/// Intended for tests and debugging that want to assert on the emitted
/// paths and stroke state.
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    density: f64,
    events: Vec<StrokeEvent>,
}

impl RecordingRenderer {
    /// Creates a recorder where one dp is one pixel.
    #[must_use]
    pub fn new() -> Self {
        Self::with_density(1.0)
    }

    /// Creates a recorder with `density` pixels per dp.
    #[must_use]
    pub fn with_density(density: f64) -> Self {
        Self {
            density,
            events: Vec::new(),
        }
    }

    /// Returns the recorded strokes in the order they were issued.
    #[must_use]
    pub fn events(&self) -> &[StrokeEvent] {
        &self.events
    }

    /// Clears all recorded strokes.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRenderer for RecordingRenderer {
    fn dp(&self, value: f64) -> f64 {
        value * self.density
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.events.push(StrokeEvent {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }
}
