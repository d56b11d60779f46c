// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The absolute point sequence of one path and the geometry derived from it.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use plotpick_geometry::{bounds, distance2_point, distance2_segment, within};

/// The absolute point sequence a path expands to.
///
/// An outline may be empty, a single point, a polyline, or the
/// [unsupported](Self::unsupported) sentinel: exactly one NaN point, produced
/// when the path uses curve commands. The sentinel has an undefined distance
/// to everything, so it never wins a spatial query, but the path is still
/// enumerable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    /// Creates an outline from absolute points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The sentinel outline for geometry this crate does not model.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            points: vec![Point::new(f64::NAN, f64::NAN)],
        }
    }

    /// Returns `true` for the [unsupported](Self::unsupported) sentinel.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.points.as_slice(), [p] if p.is_nan())
    }

    /// The absolute points, in path order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the outline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Squared distance from `pt` to this outline.
    ///
    /// - NaN for an empty outline or the unsupported sentinel.
    /// - The squared point distance for a single point.
    /// - Otherwise the minimum squared distance to any segment between
    ///   consecutive points.
    #[must_use]
    pub fn distance2(&self, pt: Point) -> f64 {
        match self.points.as_slice() {
            [] => f64::NAN,
            [only] => distance2_point(pt, *only),
            points => points
                .windows(2)
                .map(|w| {
                    if w[0] == w[1] {
                        distance2_point(pt, w[0])
                    } else {
                        distance2_segment(pt, w[0], w[1])
                    }
                })
                .fold(f64::NAN, f64::min),
        }
    }

    /// The vertex nearest to `pt`.
    ///
    /// This is one of the outline's own points, never a point interpolated
    /// along an edge. Ties go to the earlier vertex. Returns `None` when the
    /// outline has no finite vertex.
    #[must_use]
    pub fn closest_point(&self, pt: Point) -> Option<Point> {
        let mut best: Option<(Point, f64)> = None;
        for &candidate in &self.points {
            let d2 = distance2_point(pt, candidate);
            if d2.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
                best = Some((candidate, d2));
            }
        }
        best.map(|(p, _)| p)
    }

    /// Returns `true` if every point lies within the closed box `[min, max]`.
    ///
    /// An empty outline is never inside, and neither is the unsupported
    /// sentinel.
    #[must_use]
    pub fn is_inside(&self, min: Point, max: Point) -> bool {
        !self.points.is_empty() && self.points.iter().all(|&p| within(p, min, max))
    }

    /// Bounding box of the finite points, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        bounds(self.points.iter().copied())
    }

    /// Squared length of the bounding box diagonal; `0` without finite points.
    #[must_use]
    pub fn extent2(&self) -> f64 {
        self.bounds()
            .map_or(0.0, |r| (Point::new(r.x1, r.y1) - Point::new(r.x0, r.y0)).hypot2())
    }

    /// Center of the bounding box; a NaN point without finite points.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds()
            .map_or(Point::new(f64::NAN, f64::NAN), |r| r.center())
    }
}
