// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use kurbo::{Cap, Join, Stroke};
use peniko::Color;
use understory_ar_projection::ArPoint;

/// Unit in which a line's thickness is expressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThicknessUnits {
    /// Density-independent pixels, converted by the renderer.
    #[default]
    Dp,
    /// Degrees of the view. The line keeps a constant apparent width on the
    /// sky as the field of view changes.
    Angle,
}

/// How a line is stroked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke thickness, in `units`.
    pub thickness: f64,
    /// Unit of `thickness`.
    pub units: ThicknessUnits,
    /// Cap style at the ends of each subpath.
    pub cap: Cap,
    /// Join style between segments.
    pub join: Join,
}

impl LineStyle {
    /// Creates a style with round caps and joins.
    #[must_use]
    pub const fn new(color: Color, thickness: f64, units: ThicknessUnits) -> Self {
        Self {
            color,
            thickness,
            units,
            cap: Cap::Round,
            join: Join::Round,
        }
    }

    /// Returns this style with a different cap.
    #[must_use]
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns this style with a different join.
    #[must_use]
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// Builds the stroke for a resolved width in pixels.
    #[must_use]
    pub fn stroke(&self, width: f64) -> Stroke {
        Stroke::new(width).with_caps(self.cap).with_join(self.join)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(Color::WHITE, 1.0, ThicknessUnits::Dp)
    }
}

/// A poly-line drawn by [`LineLayer`](crate::LineLayer).
#[derive(Clone, Debug, Default)]
pub struct ArLine {
    /// Points of the line in drawing order.
    pub points: Vec<Arc<dyn ArPoint>>,
    /// How the line is stroked.
    pub style: LineStyle,
}

impl ArLine {
    /// Creates a line from shared points.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Arc<dyn ArPoint>>, style: LineStyle) -> Self {
        Self {
            points: points.into_iter().collect(),
            style,
        }
    }

    /// Creates a line from points of a single concrete type.
    #[must_use]
    pub fn from_points<P>(points: impl IntoIterator<Item = P>, style: LineStyle) -> Self
    where
        P: ArPoint + 'static,
    {
        Self::new(
            points
                .into_iter()
                .map(|point| Arc::new(point) as Arc<dyn ArPoint>),
            style,
        )
    }

    /// Returns `true` if the line has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
