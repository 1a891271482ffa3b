// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment/rectangle intersection via Cohen–Sutherland outcodes.

use kurbo::{Line, Point, Rect};
use smallvec::SmallVec;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

// Each endpoint is clipped at most once per axis in exact arithmetic; the
// slack covers rounding that lands a computed point just past a second edge.
const MAX_CLIP_STEPS: usize = 8;

/// Returns `true` if `pt` lies inside `rect` or on its boundary.
///
/// Unlike [`Rect::contains`], the right and bottom edges are included, so a
/// point clipped onto any edge counts as inside.
#[inline]
#[must_use]
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    let rect = rect.abs();
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

fn outcode(rect: Rect, pt: Point) -> u8 {
    let mut code = INSIDE;
    if pt.x < rect.x0 {
        code |= LEFT;
    } else if pt.x > rect.x1 {
        code |= RIGHT;
    }
    if pt.y < rect.y0 {
        code |= TOP;
    } else if pt.y > rect.y1 {
        code |= BOTTOM;
    }
    code
}

/// Clips `line` to `rect`.
///
/// Returns the visible part of the segment with its direction preserved, or
/// `None` if the segment misses the rectangle. Endpoints that were moved lie
/// exactly on a rectangle edge.
#[must_use]
pub fn clip_segment(line: Line, rect: Rect) -> Option<Line> {
    let rect = rect.abs();
    let (mut p0, mut p1) = (line.p0, line.p1);
    let (mut c0, mut c1) = (outcode(rect, p0), outcode(rect, p1));

    for _ in 0..MAX_CLIP_STEPS {
        if c0 | c1 == INSIDE {
            return Some(Line::new(p0, p1));
        }
        if c0 & c1 != INSIDE {
            return None;
        }

        // The outside endpoint is on the far side of an edge the other one
        // is not, so the divisor below is never zero.
        let code = if c0 != INSIDE { c0 } else { c1 };
        let clipped = if code & TOP != 0 {
            Point::new(
                p0.x + (p1.x - p0.x) * (rect.y0 - p0.y) / (p1.y - p0.y),
                rect.y0,
            )
        } else if code & BOTTOM != 0 {
            Point::new(
                p0.x + (p1.x - p0.x) * (rect.y1 - p0.y) / (p1.y - p0.y),
                rect.y1,
            )
        } else if code & RIGHT != 0 {
            Point::new(
                rect.x1,
                p0.y + (p1.y - p0.y) * (rect.x1 - p0.x) / (p1.x - p0.x),
            )
        } else {
            Point::new(
                rect.x0,
                p0.y + (p1.y - p0.y) * (rect.x0 - p0.x) / (p1.x - p0.x),
            )
        };

        if code == c0 {
            p0 = clipped;
            c0 = outcode(rect, p0);
        } else {
            p1 = clipped;
            c1 = outcode(rect, p1);
        }
    }
    None
}

/// Points where `line` crosses the boundary of `rect`, ordered from `line.p0`
/// toward `line.p1`.
///
/// Endpoints already inside the rectangle (edges included) are not
/// reported, so the result holds zero, one, or two points. A segment that
/// only grazes a corner yields a single point.
#[must_use]
pub fn segment_rect_intersections(line: Line, rect: Rect) -> SmallVec<[Point; 2]> {
    let mut hits = SmallVec::new();
    let Some(clipped) = clip_segment(line, rect) else {
        return hits;
    };
    if clipped.p0 != line.p0 {
        hits.push(clipped.p0);
    }
    if clipped.p1 != line.p1 && hits.last() != Some(&clipped.p1) {
        hits.push(clipped.p1);
    }
    hits
}
