// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degree-based angle helpers.
//!
//! Angles throughout this crate are plain `f64` degrees and are never
//! normalized implicitly. Use these helpers whenever two bearings are
//! compared or subtracted.

/// Normalizes an angle into `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // `-1e-20 + 360.0` rounds to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wraps an angle into `[-180, 180)`.
#[inline]
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    normalize_angle(angle + 180.0) - 180.0
}

/// Returns the smallest signed angle that turns `from` onto `to`.
///
/// The result lies in `(-180, 180]`: a target directly behind resolves to
/// `+180`, never `-180`.
///
/// ```
/// use understory_ar_projection::delta_angle;
///
/// assert_eq!(delta_angle(350.0, 10.0), 20.0);
/// assert_eq!(delta_angle(10.0, 350.0), -20.0);
/// assert_eq!(delta_angle(0.0, 180.0), 180.0);
/// assert_eq!(delta_angle(180.0, 0.0), 180.0);
/// ```
#[inline]
#[must_use]
pub fn delta_angle(from: f64, to: f64) -> f64 {
    let delta = wrap_angle(to - from);
    if delta <= -180.0 { 180.0 } else { delta }
}
