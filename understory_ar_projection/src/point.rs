// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of world directions.
//!
//! The projector only understands [`WorldDirection`]s. Anything that can
//! produce one for the current frame implements [`ArPoint`], which keeps new
//! coordinate sources out of the projection and clipping code.

use core::fmt::Debug;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::angle::normalize_angle;
use crate::view::{GeoPosition, ViewState, WorldDirection};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A point that can be placed in an augmented-reality view.
pub trait ArPoint: Debug + Send + Sync {
    /// Resolves the direction of this point as seen from `view`.
    ///
    /// Returns `None` when the view lacks the information needed to place
    /// the point, for example an observer position for a geographic point.
    fn direction(&self, view: &ViewState) -> Option<WorldDirection>;
}

/// A point at a fixed bearing and altitude, independent of where the
/// observer stands.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SphericalPoint {
    /// Compass bearing in degrees.
    pub bearing: f64,
    /// Angle above the horizon in degrees.
    pub altitude: f64,
}

impl SphericalPoint {
    /// Creates a point from a bearing and an altitude in degrees.
    #[inline]
    #[must_use]
    pub const fn new(bearing: f64, altitude: f64) -> Self {
        Self { bearing, altitude }
    }
}

impl ArPoint for SphericalPoint {
    fn direction(&self, _view: &ViewState) -> Option<WorldDirection> {
        Some(WorldDirection::new(self.bearing, self.altitude))
    }
}

impl From<WorldDirection> for SphericalPoint {
    fn from(direction: WorldDirection) -> Self {
        Self::new(direction.bearing, direction.altitude)
    }
}

/// A point at a position on the earth.
///
/// Its direction depends on [`ViewState::observer`]: the bearing is the
/// initial great-circle bearing from the observer and the altitude is the
/// elevation angle over the surface distance. Earth curvature is ignored
/// for the altitude.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GeographicPoint {
    /// Where the point is.
    pub position: GeoPosition,
}

impl GeographicPoint {
    /// Creates a point at `position`.
    #[inline]
    #[must_use]
    pub const fn new(position: GeoPosition) -> Self {
        Self { position }
    }
}

impl ArPoint for GeographicPoint {
    fn direction(&self, view: &ViewState) -> Option<WorldDirection> {
        let observer = view.observer?;
        let distance = haversine_distance(observer, self.position);
        let rise = self.position.elevation - observer.elevation;
        Some(WorldDirection::new(
            initial_bearing(observer, self.position),
            rise.atan2(distance).to_degrees(),
        ))
    }
}

/// Great-circle distance between two positions in meters, ignoring elevation.
#[must_use]
pub fn haversine_distance(from: GeoPosition, to: GeoPosition) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial compass bearing in `[0, 360)` of the great circle from `from` to `to`.
#[must_use]
pub fn initial_bearing(from: GeoPosition, to: GeoPosition) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    normalize_angle(y.atan2(x).to_degrees())
}
