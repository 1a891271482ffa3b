// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// A direction in the world, relative to the observer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldDirection {
    /// Compass bearing in degrees.
    pub bearing: f64,
    /// Angle above the horizon in degrees.
    pub altitude: f64,
}

impl WorldDirection {
    /// Creates a direction from a bearing and an altitude, both in degrees.
    #[inline]
    #[must_use]
    pub const fn new(bearing: f64, altitude: f64) -> Self {
        Self { bearing, altitude }
    }
}

/// A position on the earth's surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPosition {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}

impl GeoPosition {
    /// Creates a position from latitude/longitude in degrees and elevation in meters.
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
}

/// Errors reported by [`ViewState::try_new`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ViewStateError {
    /// The viewport has a zero, negative, or non-finite dimension.
    #[error("viewport must be positive and finite, got {width}x{height}")]
    NonPositiveViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },
    /// The field of view has a zero, negative, or non-finite dimension.
    #[error("field of view must be positive and finite, got {width}x{height} degrees")]
    NonPositiveFov {
        /// Horizontal field of view in degrees.
        width: f64,
        /// Vertical field of view in degrees.
        height: f64,
    },
    /// The azimuth or inclination is NaN or infinite.
    #[error("azimuth and inclination must be finite")]
    NonFiniteAngle,
}

/// Per-frame camera state consumed by the projector.
///
/// A `ViewState` is produced once per frame by whatever owns the device
/// orientation and camera, and is read-only for the duration of a projection
/// pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    /// Compass bearing the camera faces, in degrees. Maps to the horizontal
    /// center of the viewport.
    pub azimuth: f64,
    /// Vertical tilt of the camera, in degrees. Maps to the vertical center of
    /// the viewport.
    pub inclination: f64,
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Camera field of view in degrees.
    pub fov: Size,
    /// Where the observer stands, when known.
    ///
    /// Only needed by points defined by a geographic position.
    pub observer: Option<GeoPosition>,
}

impl ViewState {
    /// Creates a view state without validating its sizes.
    ///
    /// Projection through a view with a zero-sized viewport or field of view
    /// produces meaningless coordinates; use [`ViewState::try_new`] at the
    /// boundary where sizes come from untrusted input.
    #[inline]
    #[must_use]
    pub const fn new(azimuth: f64, inclination: f64, viewport: Size, fov: Size) -> Self {
        Self {
            azimuth,
            inclination,
            viewport,
            fov,
            observer: None,
        }
    }

    /// Creates a view state, checking that both sizes are positive and finite.
    pub fn try_new(
        azimuth: f64,
        inclination: f64,
        viewport: Size,
        fov: Size,
    ) -> Result<Self, ViewStateError> {
        if !azimuth.is_finite() || !inclination.is_finite() {
            return Err(ViewStateError::NonFiniteAngle);
        }
        if !is_positive(viewport) {
            return Err(ViewStateError::NonPositiveViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !is_positive(fov) {
            return Err(ViewStateError::NonPositiveFov {
                width: fov.width,
                height: fov.height,
            });
        }
        Ok(Self::new(azimuth, inclination, viewport, fov))
    }

    /// Returns this view with the observer position set.
    #[inline]
    #[must_use]
    pub fn with_observer(mut self, observer: GeoPosition) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The viewport rectangle in pixels, anchored at the origin.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.viewport.to_rect()
    }

    /// The pixel at the center of the viewport.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Converts an angular size in degrees into pixels using the horizontal
    /// pixels-per-degree ratio of the viewport.
    #[inline]
    #[must_use]
    pub fn angular_size_to_pixels(&self, degrees: f64) -> f64 {
        degrees * self.viewport.width / self.fov.width
    }
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ViewState, ViewStateError};

    #[test]
    fn try_new_rejects_degenerate_sizes() {
        let fov = Size::new(60.0, 45.0);
        assert_eq!(
            ViewState::try_new(0.0, 0.0, Size::new(0.0, 100.0), fov),
            Err(ViewStateError::NonPositiveViewport {
                width: 0.0,
                height: 100.0
            })
        );
        assert!(matches!(
            ViewState::try_new(0.0, 0.0, Size::new(100.0, 100.0), Size::new(60.0, -1.0)),
            Err(ViewStateError::NonPositiveFov { .. })
        ));
        assert_eq!(
            ViewState::try_new(f64::NAN, 0.0, Size::new(100.0, 100.0), fov),
            Err(ViewStateError::NonFiniteAngle)
        );
    }

    #[test]
    fn try_new_accepts_valid_state() {
        let view = ViewState::try_new(10.0, -5.0, Size::new(800.0, 600.0), Size::new(60.0, 45.0))
            .unwrap();
        assert_eq!(view.bounds(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(view.center().x, 400.0);
        assert_eq!(view.center().y, 300.0);
        assert!(view.observer.is_none());
    }

    #[test]
    fn angular_size_scales_with_fov() {
        let wide = ViewState::new(0.0, 0.0, Size::new(1000.0, 1000.0), Size::new(100.0, 100.0));
        let narrow = ViewState::new(0.0, 0.0, Size::new(1000.0, 1000.0), Size::new(50.0, 50.0));
        assert_eq!(wide.angular_size_to_pixels(1.0), 10.0);
        assert_eq!(narrow.angular_size_to_pixels(1.0), 20.0);
    }
}
