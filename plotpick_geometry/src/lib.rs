// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpick Geometry: exact distance primitives for picking drawn paths.
//!
//! This crate is the numeric floor of Plotpick. It answers one question
//! precisely: how far is a query point from a point or from a closed line
//! segment? Everything above it (nearest-path search, vertex snapping,
//! rectangle containment) is expressed in terms of these squared distances.
//!
//! - [`distance2_point`] and [`distance2_segment`] return squared Euclidean
//!   distances with no tolerance and no square root.
//! - [`nearest_on_segment`] additionally reports whether the nearest point is
//!   interior to the segment or one of its endpoints.
//! - [`bounds`] computes an axis-aligned bounding box while ignoring NaN
//!   sentinel points, which Plotpick uses to mark unsupported geometry.
//!
//! ```rust
//! use kurbo::Point;
//! use plotpick_geometry::{Projection, distance2_segment, nearest_on_segment};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(4.0, 0.0);
//! assert_eq!(distance2_segment(Point::new(2.0, 3.0), a, b), 9.0);
//!
//! let hit = nearest_on_segment(Point::new(6.0, 0.0), a, b);
//! assert_eq!(hit.projection, Projection::End);
//! assert_eq!(hit.distance2, 4.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod segment;

pub use bounds::{bounds, within};
pub use segment::{Projection, SegmentHit, distance2_point, distance2_segment, nearest_on_segment};
