// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use kurbo::{BezPath, Point};
use parking_lot::Mutex;
use tracing::{debug, trace, trace_span};
use understory_ar_clip::{ClipConfig, PolylineClipper};
use understory_ar_projection::{Projector, ViewState};

use crate::line::{ArLine, ThicknessUnits};
use crate::render::{ArView, LineRenderer};

/// A set of poly-lines drawn over an augmented-reality view.
///
/// Lines are replaced wholesale with [`set_lines`](Self::set_lines) or
/// removed with [`clear_lines`](Self::clear_lines) from any thread. A
/// [`draw`](Self::draw) pass takes a snapshot of the current set and does
/// all projection and clipping without holding the lock, so writers are
/// never blocked by a frame in progress and a frame never sees a partially
/// replaced set.
#[derive(Debug)]
pub struct LineLayer {
    lines: Mutex<Arc<[ArLine]>>,
    clip: ClipConfig,
    split_at_back_seam: bool,
}

impl LineLayer {
    /// Creates an empty layer with the default clipping configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Arc::from([])),
            clip: ClipConfig::default(),
            split_at_back_seam: true,
        }
    }

    /// Returns this layer with a different clipping configuration.
    #[must_use]
    pub fn with_clip_config(mut self, clip: ClipConfig) -> Self {
        self.clip = clip;
        self
    }

    /// Controls whether lines are broken where they pass behind the viewer.
    ///
    /// When enabled (the default), two consecutive points whose bearings
    /// relative to the view differ by more than 180° are never joined: the
    /// shortest path between them runs behind the viewer. When disabled,
    /// only the pixel-space wrap guard of the clipper applies.
    #[must_use]
    pub fn with_back_seam_split(mut self, enabled: bool) -> Self {
        self.split_at_back_seam = enabled;
        self
    }

    /// Replaces every line in the layer.
    pub fn set_lines(&self, lines: impl IntoIterator<Item = ArLine>) {
        let lines: Arc<[ArLine]> = lines.into_iter().collect();
        debug!(lines = lines.len(), "set AR lines");
        *self.lines.lock() = lines;
    }

    /// Removes every line from the layer.
    pub fn clear_lines(&self) {
        debug!("cleared AR lines");
        *self.lines.lock() = Arc::from([]);
    }

    /// Returns a snapshot of the current lines.
    #[must_use]
    pub fn lines(&self) -> Arc<[ArLine]> {
        self.lines.lock().clone()
    }

    /// Projects, clips, and strokes every line against `view`.
    ///
    /// Each line produces at most one [`LineRenderer::stroke_path`] call.
    /// Lines with no placeable points draw nothing.
    pub fn draw<R, V>(&self, renderer: &mut R, view: &V)
    where
        R: LineRenderer + ?Sized,
        V: ArView + ?Sized,
    {
        let lines = self.lines();
        let state = view.view_state();
        let projector = Projector::new(&state);

        let span = trace_span!("draw_ar_lines", lines = lines.len());
        let _guard = span.enter();

        let mut elements = 0;
        for line in lines.iter() {
            let path = self.trace_line(line, &state, &projector);
            if path.elements().is_empty() {
                continue;
            }
            elements += path.elements().len();

            let width = match line.style.units {
                ThicknessUnits::Dp => renderer.dp(line.style.thickness),
                ThicknessUnits::Angle => view.angular_size_to_pixels(line.style.thickness),
            };
            renderer.stroke_path(&path, &line.style.stroke(width), line.style.color);
        }
        trace!(elements, "drew AR lines");
    }

    fn trace_line(&self, line: &ArLine, state: &ViewState, projector: &Projector) -> BezPath {
        let mut path = BezPath::new();
        let mut clipper = PolylineClipper::with_config(state.bounds(), Point::ZERO, self.clip);
        let mut previous_bearing: Option<f64> = None;

        for point in &line.points {
            let Some(direction) = point.direction(state) else {
                trace!(?point, "skipping AR point without a direction");
                continue;
            };
            let relative = projector.relative_direction(direction);
            let crosses_back = previous_bearing
                .is_some_and(|previous| (relative.bearing - previous).abs() > 180.0);
            if self.split_at_back_seam && crosses_back {
                clipper.break_path();
            }
            previous_bearing = Some(relative.bearing);
            clipper.push(projector.project_relative(relative), &mut path);
        }
        path
    }
}

impl Default for LineLayer {
    fn default() -> Self {
        Self::new()
    }
}
