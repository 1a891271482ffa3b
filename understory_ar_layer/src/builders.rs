// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builders for the standard sky overlays.
//!
//! All builders sample the sphere at most [`GRID_RESOLUTION`] degrees apart
//! so that the straight screen-space segments between samples still read as
//! smooth arcs.

use understory_ar_projection::SphericalPoint;

use crate::line::{ArLine, LineStyle};

/// Largest angular step between consecutive samples of a built line.
pub const GRID_RESOLUTION: f64 = 5.0;

/// Smallest sampling step accepted by [`altitude_ring`] and [`meridian`].
///
/// Bounds a single line to 36 001 points.
pub const MIN_STEP: f64 = 0.01;

/// Smallest spacing accepted by [`grid`].
///
/// A grid holds one line per meridian and ring, so its spacing is bounded
/// far tighter than a single line's step.
pub const MIN_GRID_SPACING: f64 = 1.0;

fn is_valid_step(step: f64, min: f64) -> bool {
    step.is_finite() && step >= min
}

/// Samples `start..=end` with at most `step` between values. The last value
/// is always `end`. Yields nothing if `step` is below [`MIN_STEP`] or not
/// finite.
fn samples(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if !is_valid_step(step, MIN_STEP) || end < start {
        return values;
    }
    let mut i = 0_u32;
    loop {
        let value = start + f64::from(i) * step;
        if value >= end {
            values.push(end);
            return values;
        }
        values.push(value);
        i += 1;
    }
}

/// A full circle at constant `altitude`, from bearing 0 through 360.
///
/// An empty line is returned if `step` is below [`MIN_STEP`] or not finite.
#[must_use]
pub fn altitude_ring(altitude: f64, step: f64, style: LineStyle) -> ArLine {
    ArLine::from_points(
        samples(0.0, 360.0, step)
            .into_iter()
            .map(|bearing| SphericalPoint::new(bearing, altitude)),
        style,
    )
}

/// The horizon: a ring at altitude 0.
#[must_use]
pub fn horizon_line(style: LineStyle) -> ArLine {
    altitude_ring(0.0, GRID_RESOLUTION, style)
}

/// A half circle at constant `bearing`, from the nadir to the zenith.
///
/// An empty line is returned if `step` is below [`MIN_STEP`] or not finite.
#[must_use]
pub fn meridian(bearing: f64, step: f64, style: LineStyle) -> ArLine {
    ArLine::from_points(
        samples(-90.0, 90.0, step)
            .into_iter()
            .map(|altitude| SphericalPoint::new(bearing, altitude)),
        style,
    )
}

/// A bearing/altitude grid with lines every `spacing` degrees.
///
/// Meridians start at bearing 0. Rings are placed symmetrically around the
/// horizon, which is included; the poles are not, since a ring there
/// collapses to a point. Returns no lines if `spacing` is below
/// [`MIN_GRID_SPACING`] or not finite.
#[must_use]
pub fn grid(spacing: f64, style: LineStyle) -> Vec<ArLine> {
    let mut lines = Vec::new();
    if !is_valid_step(spacing, MIN_GRID_SPACING) {
        return lines;
    }
    let resolution = spacing.min(GRID_RESOLUTION);

    let bearings = samples(0.0, 360.0, spacing);
    // The final sample is 360, which coincides with 0.
    for &bearing in &bearings[..bearings.len() - 1] {
        lines.push(meridian(bearing, resolution, style));
    }

    let mut rings = vec![0.0];
    let mut i = 1_u32;
    while f64::from(i) * spacing < 90.0 {
        let altitude = f64::from(i) * spacing;
        rings.push(altitude);
        rings.push(-altitude);
        i += 1;
    }
    rings.sort_by(f64::total_cmp);
    for altitude in rings {
        lines.push(altitude_ring(altitude, resolution, style));
    }
    lines
}
