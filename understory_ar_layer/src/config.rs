// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative line sets loaded from JSON.
//!
//! ```json
//! {
//!   "clip": { "wrap_margin": 1.5 },
//!   "lines": [
//!     { "color": [255, 255, 255, 128], "shape": { "kind": "grid", "spacing": 15.0 } },
//!     {
//!       "color": [255, 64, 0, 255],
//!       "thickness": 0.5,
//!       "units": "angle",
//!       "shape": {
//!         "kind": "points",
//!         "points": [
//!           { "kind": "spherical", "bearing": 10.0, "altitude": 5.0 },
//!           { "kind": "geographic", "latitude": 46.55, "longitude": 7.98, "elevation": 4158.0 }
//!         ]
//!       }
//!     }
//!   ]
//! }
//! ```

use std::sync::Arc;

use kurbo::{Cap, Join};
use peniko::Color;
use serde::{Deserialize, Serialize};
use understory_ar_clip::ClipConfig;
use understory_ar_projection::{ArPoint, GeoPosition, GeographicPoint, SphericalPoint};

use crate::builders::{
    GRID_RESOLUTION, MIN_GRID_SPACING, MIN_STEP, altitude_ring, grid, meridian,
};
use crate::line::{ArLine, LineStyle, ThicknessUnits};

/// Errors raised while loading a [`LineSetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid line set document: {0}")]
    Json(#[from] serde_json::Error),
    /// A line has a negative or non-finite thickness.
    #[error("line {line}: thickness must be finite and non-negative, got {thickness}")]
    InvalidThickness {
        /// Index of the offending line.
        line: usize,
        /// The rejected thickness.
        thickness: f64,
    },
    /// A builder shape has a step or spacing that is too small or not
    /// finite. Tiny steps would expand into millions of points.
    #[error("line {line}: step must be finite and at least {min}°, got {step}")]
    InvalidStep {
        /// Index of the offending line.
        line: usize,
        /// The rejected step.
        step: f64,
        /// Smallest step accepted for this shape.
        min: f64,
    },
    /// The clip settings have a negative or non-finite wrap margin.
    #[error("clip wrap margin must be finite and non-negative, got {0}")]
    InvalidWrapMargin(f64),
}

/// A set of lines, as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSetConfig {
    /// Clipper tunables for layers drawing this set.
    #[serde(default)]
    pub clip: ClipConfig,
    /// Lines in drawing order.
    #[serde(default)]
    pub lines: Vec<LineConfig>,
}

impl LineSetConfig {
    /// Parses a line set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this line set to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the validated clip settings.
    pub fn clip_config(&self) -> Result<ClipConfig, ConfigError> {
        if self.clip.is_valid() {
            Ok(self.clip)
        } else {
            Err(ConfigError::InvalidWrapMargin(self.clip.wrap_margin))
        }
    }

    /// Validates every line and builds the drawable lines.
    ///
    /// A `grid` shape expands into several lines sharing one style.
    pub fn into_lines(self) -> Result<Vec<ArLine>, ConfigError> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for (index, line) in self.lines.into_iter().enumerate() {
            line.build(index, &mut lines)?;
        }
        Ok(lines)
    }
}

/// One entry of a [`LineSetConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Straight RGBA8 color.
    #[serde(default = "default_color")]
    pub color: [u8; 4],
    /// Stroke thickness, in `units`.
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Unit of `thickness`.
    #[serde(default)]
    pub units: UnitsConfig,
    /// Cap style.
    #[serde(default)]
    pub cap: CapConfig,
    /// Join style.
    #[serde(default)]
    pub join: JoinConfig,
    /// Geometry of the line.
    pub shape: ShapeConfig,
}

fn default_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_thickness() -> f64 {
    1.0
}

fn default_step() -> f64 {
    GRID_RESOLUTION
}

impl LineConfig {
    fn style(&self) -> LineStyle {
        let [r, g, b, a] = self.color;
        LineStyle::new(Color::from_rgba8(r, g, b, a), self.thickness, self.units.into())
            .with_cap(self.cap.into())
            .with_join(self.join.into())
    }

    fn build(self, line: usize, out: &mut Vec<ArLine>) -> Result<(), ConfigError> {
        if !(self.thickness >= 0.0 && self.thickness.is_finite()) {
            return Err(ConfigError::InvalidThickness {
                line,
                thickness: self.thickness,
            });
        }
        let check_step = |step: f64, min: f64| {
            if step.is_finite() && step >= min {
                Ok(step)
            } else {
                Err(ConfigError::InvalidStep { line, step, min })
            }
        };

        let style = self.style();
        match self.shape {
            ShapeConfig::Points { points } => {
                out.push(ArLine::new(
                    points.into_iter().map(PointConfig::into_point),
                    style,
                ));
            }
            ShapeConfig::Horizon { step } => {
                out.push(altitude_ring(0.0, check_step(step, MIN_STEP)?, style));
            }
            ShapeConfig::AltitudeRing { altitude, step } => {
                out.push(altitude_ring(altitude, check_step(step, MIN_STEP)?, style));
            }
            ShapeConfig::Meridian { bearing, step } => {
                out.push(meridian(bearing, check_step(step, MIN_STEP)?, style));
            }
            ShapeConfig::Grid { spacing } => {
                out.extend(grid(check_step(spacing, MIN_GRID_SPACING)?, style));
            }
        }
        Ok(())
    }
}

/// Serialized form of [`ThicknessUnits`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitsConfig {
    /// Density-independent pixels.
    #[default]
    Dp,
    /// Degrees of the view.
    Angle,
}

impl From<UnitsConfig> for ThicknessUnits {
    fn from(units: UnitsConfig) -> Self {
        match units {
            UnitsConfig::Dp => Self::Dp,
            UnitsConfig::Angle => Self::Angle,
        }
    }
}

/// Serialized form of [`Cap`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapConfig {
    /// Flat end at the endpoint.
    Butt,
    /// Semicircle around the endpoint.
    #[default]
    Round,
    /// Square extending past the endpoint.
    Square,
}

impl From<CapConfig> for Cap {
    fn from(cap: CapConfig) -> Self {
        match cap {
            CapConfig::Butt => Self::Butt,
            CapConfig::Round => Self::Round,
            CapConfig::Square => Self::Square,
        }
    }
}

/// Serialized form of [`Join`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinConfig {
    /// Flat corner.
    Bevel,
    /// Sharp corner.
    Miter,
    /// Rounded corner.
    #[default]
    Round,
}

impl From<JoinConfig> for Join {
    fn from(join: JoinConfig) -> Self {
        match join {
            JoinConfig::Bevel => Self::Bevel,
            JoinConfig::Miter => Self::Miter,
            JoinConfig::Round => Self::Round,
        }
    }
}

/// Geometry of a [`LineConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// An explicit list of points.
    Points {
        /// Points in drawing order.
        points: Vec<PointConfig>,
    },
    /// The horizon.
    Horizon {
        /// Bearing step between samples.
        #[serde(default = "default_step")]
        step: f64,
    },
    /// A ring of constant altitude.
    AltitudeRing {
        /// Altitude of the ring, in degrees.
        altitude: f64,
        /// Bearing step between samples.
        #[serde(default = "default_step")]
        step: f64,
    },
    /// A half circle of constant bearing from nadir to zenith.
    Meridian {
        /// Bearing of the meridian, in degrees.
        bearing: f64,
        /// Altitude step between samples.
        #[serde(default = "default_step")]
        step: f64,
    },
    /// A bearing/altitude grid. Expands into several lines.
    Grid {
        /// Spacing between grid lines, in degrees.
        spacing: f64,
    },
}

/// A point of a [`ShapeConfig::Points`] line.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointConfig {
    /// A fixed bearing and altitude.
    Spherical {
        /// Degrees clockwise from north.
        bearing: f64,
        /// Degrees above the horizon.
        altitude: f64,
    },
    /// A place on Earth, seen from the view's observer.
    Geographic {
        /// Degrees north.
        latitude: f64,
        /// Degrees east.
        longitude: f64,
        /// Meters above sea level.
        #[serde(default)]
        elevation: f64,
    },
}

impl PointConfig {
    fn into_point(self) -> Arc<dyn ArPoint> {
        match self {
            Self::Spherical { bearing, altitude } => {
                Arc::new(SphericalPoint::new(bearing, altitude))
            }
            Self::Geographic {
                latitude,
                longitude,
                elevation,
            } => Arc::new(GeographicPoint::new(GeoPosition::new(
                latitude, longitude, elevation,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Cap, Join};
    use peniko::Color;
    use understory_ar_clip::ClipConfig;

    use super::{ConfigError, LineSetConfig, PointConfig, ShapeConfig};
    use crate::builders::{MIN_GRID_SPACING, MIN_STEP};
    use crate::line::ThicknessUnits;

    #[test]
    fn defaults_fill_in_style() {
        let config = LineSetConfig::from_json(r#"{ "lines": [ { "shape": { "kind": "horizon" } } ] }"#)
            .unwrap();
        assert_eq!(config.lines[0].shape, ShapeConfig::Horizon { step: 5.0 });

        let lines = config.into_lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].points.len(), 73);
        let style = lines[0].style;
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.thickness, 1.0);
        assert_eq!(style.units, ThicknessUnits::Dp);
        assert_eq!(style.cap, Cap::Round);
        assert_eq!(style.join, Join::Round);
    }

    #[test]
    fn explicit_points_and_style() {
        let json = r#"{
            "lines": [{
                "color": [255, 0, 0, 255],
                "thickness": 0.5,
                "units": "angle",
                "cap": "butt",
                "join": "miter",
                "shape": {
                    "kind": "points",
                    "points": [
                        { "kind": "spherical", "bearing": 10.0, "altitude": 5.0 },
                        { "kind": "geographic", "latitude": 1.0, "longitude": 2.0 }
                    ]
                }
            }]
        }"#;
        let config = LineSetConfig::from_json(json).unwrap();
        let ShapeConfig::Points { points } = &config.lines[0].shape else {
            panic!("expected explicit points");
        };
        assert_eq!(
            points[1],
            PointConfig::Geographic {
                latitude: 1.0,
                longitude: 2.0,
                elevation: 0.0
            }
        );

        let lines = config.into_lines().unwrap();
        let style = lines[0].style;
        assert_eq!(style.color, Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(style.units, ThicknessUnits::Angle);
        assert_eq!(style.cap, Cap::Butt);
        assert_eq!(style.join, Join::Miter);
        assert_eq!(lines[0].points.len(), 2);
    }

    #[test]
    fn grid_expands_into_many_lines() {
        let config =
            LineSetConfig::from_json(r#"{ "lines": [ { "shape": { "kind": "grid", "spacing": 30.0 } } ] }"#)
                .unwrap();
        assert_eq!(config.into_lines().unwrap().len(), 12 + 5);
    }

    #[test]
    fn round_trips_through_json() {
        let config = LineSetConfig::from_json(
            r#"{ "lines": [ { "shape": { "kind": "meridian", "bearing": 90.0 } } ] }"#,
        )
        .unwrap();
        let again = LineSetConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, again);
    }

    #[test]
    fn clip_settings_default_and_validate() {
        let config = LineSetConfig::from_json(r#"{ "lines": [] }"#).unwrap();
        assert_eq!(config.clip_config().unwrap(), ClipConfig::default());

        let config = LineSetConfig::from_json(r#"{ "clip": { "wrap_margin": 4.0 } }"#).unwrap();
        assert_eq!(config.clip_config().unwrap().wrap_margin, 4.0);
        let again = LineSetConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(again.clip, config.clip);

        let config = LineSetConfig::from_json(r#"{ "clip": { "wrap_margin": -1.0 } }"#).unwrap();
        assert!(matches!(
            config.clip_config(),
            Err(ConfigError::InvalidWrapMargin(margin)) if margin == -1.0
        ));
    }

    #[test]
    fn rejects_bad_values() {
        let negative = r#"{ "lines": [ { "thickness": -1.0, "shape": { "kind": "horizon" } } ] }"#;
        assert!(matches!(
            LineSetConfig::from_json(negative).unwrap().into_lines(),
            Err(ConfigError::InvalidThickness { line: 0, .. })
        ));

        let zero_step = r#"{ "lines": [
            { "shape": { "kind": "horizon" } },
            { "shape": { "kind": "grid", "spacing": 0.0 } }
        ] }"#;
        assert!(matches!(
            LineSetConfig::from_json(zero_step).unwrap().into_lines(),
            Err(ConfigError::InvalidStep { line: 1, .. })
        ));

        let tiny_step = r#"{ "lines": [ { "shape": { "kind": "horizon", "step": 1e-9 } } ] }"#;
        assert!(matches!(
            LineSetConfig::from_json(tiny_step).unwrap().into_lines(),
            Err(ConfigError::InvalidStep { line: 0, min, .. }) if min == MIN_STEP
        ));

        let dense_grid = r#"{ "lines": [ { "shape": { "kind": "grid", "spacing": 0.1 } } ] }"#;
        assert!(matches!(
            LineSetConfig::from_json(dense_grid).unwrap().into_lines(),
            Err(ConfigError::InvalidStep { line: 0, min, .. }) if min == MIN_GRID_SPACING
        ));

        let finest = r#"{ "lines": [ { "shape": { "kind": "meridian", "bearing": 0.0, "step": 0.01 } } ] }"#;
        let lines = LineSetConfig::from_json(finest).unwrap().into_lines().unwrap();
        assert_eq!(lines[0].points.len(), 18_001);

        let unknown = r#"{ "lines": [ { "shape": { "kind": "spiral" } } ] }"#;
        assert!(matches!(
            LineSetConfig::from_json(unknown),
            Err(ConfigError::Json(_))
        ));
    }
}
