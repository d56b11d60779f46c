// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Axis-aligned bounding box of the finite points in `points`.
///
/// Points with a NaN component (the unsupported-geometry sentinel) are skipped.
/// Returns `None` when no point remains.
#[must_use]
pub fn bounds<I>(points: I) -> Option<Rect>
where
    I: IntoIterator<Item = Point>,
{
    let mut acc: Option<Rect> = None;
    for pt in points {
        if pt.is_nan() {
            continue;
        }
        acc = Some(match acc {
            Some(r) => Rect::new(r.x0.min(pt.x), r.y0.min(pt.y), r.x1.max(pt.x), r.y1.max(pt.y)),
            None => Rect::from_points(pt, pt),
        });
    }
    acc
}

/// Returns `true` if `pt` lies in the closed box spanned by `min` and `max`.
///
/// Any NaN component makes the test fail.
#[inline]
#[must_use]
pub fn within(pt: Point, min: Point, max: Point) -> bool {
    pt.x >= min.x && pt.x <= max.x && pt.y >= min.y && pt.y <= max.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_nan_points() {
        let pts = [
            Point::new(f64::NAN, f64::NAN),
            Point::new(1.0, -2.0),
            Point::new(f64::NAN, 3.0),
            Point::new(-4.0, 5.0),
        ];
        assert_eq!(bounds(pts), Some(Rect::new(-4.0, -2.0, 1.0, 5.0)));
    }

    #[test]
    fn empty_and_all_nan_have_no_bounds() {
        assert_eq!(bounds(core::iter::empty::<Point>()), None);
        assert_eq!(bounds([Point::new(f64::NAN, f64::NAN)]), None);
    }

    #[test]
    fn within_is_closed() {
        let min = Point::new(0.0, 0.0);
        let max = Point::new(2.0, 1.0);
        assert!(within(min, min, max));
        assert!(within(max, min, max));
        assert!(within(Point::new(1.0, 0.5), min, max));
        assert!(!within(Point::new(2.5, 0.5), min, max));
        assert!(!within(Point::new(f64::NAN, 0.5), min, max));
    }
}
