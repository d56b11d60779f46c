// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squared distances from a query point to points and closed line segments.
//!
//! Every spatial ranking in Plotpick is built on these functions, so they are
//! exact (no tolerance) and never take a square root: comparing squared
//! distances orders candidates the same way and keeps results consistent
//! across calls.

use kurbo::Point;

/// Where the orthogonal projection of a query point lands relative to a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Projection {
    /// The projection falls strictly between the endpoints; the nearest point
    /// lies in the segment's interior.
    Interior,
    /// The nearest point is the start point `a`.
    Start,
    /// The nearest point is the end point `b`.
    End,
}

/// Result of [`nearest_on_segment`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentHit {
    /// Squared Euclidean distance from the query point to the segment.
    pub distance2: f64,
    /// Which part of the segment is nearest.
    pub projection: Projection,
}

/// Squared distance between `pt` and `a`.
#[inline]
#[must_use]
pub fn distance2_point(pt: Point, a: Point) -> f64 {
    (a - pt).hypot2()
}

/// Squared distance from `pt` to the closed segment `[a, b]`.
///
/// `a` and `b` must be distinct; callers handle zero-length segments with
/// [`distance2_point`].
#[inline]
#[must_use]
pub fn distance2_segment(pt: Point, a: Point, b: Point) -> f64 {
    nearest_on_segment(pt, a, b).distance2
}

/// Squared distance from `pt` to the closed segment `[a, b]`, together with the
/// classification of where the nearest point lies.
///
/// With `u = a - pt`, `v = b - pt` and `d = v - u`, the projection is interior
/// exactly when `d·u < 0` and `d·v > 0`. The interior distance is evaluated as
/// `¼((u+v)·(u+v) − (u·u − v·v)² / d·d)`, which needs neither the projected
/// point nor a square root. Otherwise the nearer endpoint wins, `a` on ties.
///
/// `a` and `b` must be distinct.
#[must_use]
pub fn nearest_on_segment(pt: Point, a: Point, b: Point) -> SegmentHit {
    let u = a - pt;
    let v = b - pt;
    let d = v - u;
    let uu = u.hypot2();
    let vv = v.hypot2();

    if d.dot(u) < 0.0 && d.dot(v) > 0.0 {
        let sum = u + v;
        let diff = uu - vv;
        // Collinear points can round a hair below zero.
        let distance2 = (0.25 * (sum.hypot2() - diff * diff / d.hypot2())).max(0.0);
        return SegmentHit {
            distance2,
            projection: Projection::Interior,
        };
    }

    if vv < uu {
        SegmentHit {
            distance2: vv,
            projection: Projection::End,
        }
    } else {
        SegmentHit {
            distance2: uu,
            projection: Projection::Start,
        }
    }
}
