// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size, Vec2};

use crate::angle::delta_angle;
use crate::view::{ViewState, WorldDirection};

/// Projects world directions onto the viewport of a single [`ViewState`].
///
/// The projection treats the viewport as a window onto a sphere whose
/// radius is chosen so that the viewport diagonal spans the camera's
/// diagonal field of view. Constructing a `Projector` computes that radius
/// once; reuse it for every point projected during a frame.
#[derive(Copy, Clone, Debug)]
pub struct Projector {
    azimuth: f64,
    inclination: f64,
    viewport: Size,
    half_fov: Size,
    radius: f64,
}

impl Projector {
    /// Creates a projector for the given view.
    #[must_use]
    pub fn new(view: &ViewState) -> Self {
        let diagonal_fov = view.fov.width.hypot(view.fov.height);
        let diagonal_viewport = view.viewport.width.hypot(view.viewport.height);
        let radius = diagonal_viewport / ((diagonal_fov / 2.0).to_radians().sin() * 2.0);
        Self {
            azimuth: view.azimuth,
            inclination: view.inclination,
            viewport: view.viewport,
            half_fov: Size::new(view.fov.width / 2.0, view.fov.height / 2.0),
            radius,
        }
    }

    /// Radius of the projection sphere in pixels.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `direction` relative to the center of the view.
    ///
    /// The bearing component is the signed delta from the view azimuth, in
    /// `(-180, 180]`; the altitude component is the altitude minus the view
    /// inclination.
    #[inline]
    #[must_use]
    pub fn relative_direction(&self, direction: WorldDirection) -> WorldDirection {
        WorldDirection {
            bearing: delta_angle(self.azimuth, direction.bearing),
            altitude: direction.altitude - self.inclination,
        }
    }

    /// Projects a world direction to a pixel.
    #[inline]
    #[must_use]
    pub fn project(&self, direction: WorldDirection) -> Point {
        self.project_relative(self.relative_direction(direction))
    }

    /// Projects a direction that is already relative to the view center.
    ///
    /// Points outside the field of view are pushed a further viewport width
    /// (or height) away from the center. Without that shift, a direction far
    /// behind the viewer would alias back toward the center through the
    /// periodicity of `sin`.
    #[must_use]
    pub fn project_relative(&self, relative: WorldDirection) -> Point {
        let offset = self.to_rectangular(relative);

        let mut x = self.viewport.width / 2.0 + offset.x;
        if relative.bearing > self.half_fov.width {
            x += self.viewport.width;
        } else if relative.bearing < -self.half_fov.width {
            x -= self.viewport.width;
        }

        let mut y = self.viewport.height / 2.0 + offset.y;
        if relative.altitude > self.half_fov.height {
            y += self.viewport.height;
        } else if relative.altitude < -self.half_fov.height {
            y -= self.viewport.height;
        }

        Point::new(x, y)
    }

    // X and Y are swapped relative to the usual spherical convention.
    fn to_rectangular(&self, relative: WorldDirection) -> Vec2 {
        let bearing = relative.bearing.to_radians();
        let altitude = relative.altitude.to_radians();
        Vec2::new(
            bearing.sin() * altitude.cos() * self.radius,
            bearing.cos() * altitude.sin() * self.radius,
        )
    }
}

/// Projects a single direction through `view`.
///
/// Prefer [`Projector`] when projecting many points against the same view.
///
/// ```
/// use kurbo::Size;
/// use understory_ar_projection::{ViewState, WorldDirection, project};
///
/// let view = ViewState::new(0.0, 0.0, Size::new(1000.0, 1000.0), Size::new(90.0, 90.0));
/// let center = project(WorldDirection::new(0.0, 0.0), &view);
/// assert_eq!((center.x, center.y), (500.0, 500.0));
/// ```
#[inline]
#[must_use]
pub fn project(direction: WorldDirection, view: &ViewState) -> Point {
    Projector::new(view).project(direction)
}
