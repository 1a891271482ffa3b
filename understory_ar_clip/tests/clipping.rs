// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for viewport clipping.

use kurbo::{BezPath, Line, PathEl, Point, Rect};
use proptest::prelude::*;
use understory_ar_clip::{clip_polyline, clip_segment, contains_inclusive};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn coord() -> impl Strategy<Value = f64> {
    -3000.0_f64..3000.0
}

proptest! {
    #[test]
    fn clipped_segment_stays_in_bounds(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
        if let Some(clipped) = clip_segment(Line::new((x0, y0), (x1, y1)), BOUNDS) {
            prop_assert!(contains_inclusive(BOUNDS, clipped.p0), "{:?}", clipped);
            prop_assert!(contains_inclusive(BOUNDS, clipped.p1), "{:?}", clipped);
        }
    }

    #[test]
    fn every_drawn_segment_is_on_screen(points in prop::collection::vec((coord(), coord()), 0..16)) {
        let mut path = BezPath::new();
        clip_polyline(
            BOUNDS,
            Point::ZERO,
            points.iter().map(|&(x, y)| Point::new(x, y)),
            &mut path,
        );
        let mut current = None;
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => current = Some(p),
                PathEl::LineTo(p) => {
                    let start = current.expect("line_to follows a move_to");
                    prop_assert!(contains_inclusive(BOUNDS, start), "start {:?}", start);
                    prop_assert!(contains_inclusive(BOUNDS, p), "end {:?}", p);
                    current = Some(p);
                }
                _ => prop_assert!(false, "unexpected element {:?}", el),
            }
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn clip_config_reads_json() {
    use understory_ar_clip::ClipConfig;

    let config: ClipConfig = serde_json::from_str(r#"{ "wrap_margin": 3.0 }"#).unwrap();
    assert_eq!(config, ClipConfig { wrap_margin: 3.0 });

    // Missing fields fall back to the defaults.
    let config: ClipConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ClipConfig::default());

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<ClipConfig>(&json).unwrap(), config);
}
