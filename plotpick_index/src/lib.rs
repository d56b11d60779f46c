// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotpick_index --heading-base-level=0

//! Plotpick Index: spatial queries over the paths of a vector plot.
//!
//! A [`PathIndex`] is built from the markup of one rendered page. Each styled
//! `<path>` element becomes a [`PathRecord`]; paths carrying only `d` and
//! `transform` are construction geometry and are left out. Queries answer
//! the questions a digitizer asks while the user clicks on a plot:
//!
//! - [`PathIndex::find_nearest`]: which drawn path is under the pointer?
//! - [`PathIndex::find_inside`]: which path did a drag rectangle enclose?
//! - [`PathIndex::find_nearest_point`]: which vertex of that path was meant?
//! - [`PathIndex::group`]: which other paths share its style, i.e. belong to
//!   the same data series?
//! - [`PathIndex::select`]: the enclosure-then-nearest policy combining the
//!   first two.
//!
//! Documents are measured in points; queries are asked in inches. The
//! conversion lives in [`Units`] and only documents whose root `width` is
//! declared in `pt` are accepted.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use plotpick_index::PathIndex;
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="144pt" height="144pt">
//!   <path d="M 0 0 L 72 0" stroke="red"/>
//!   <path d="M 0 72 L 72 72" stroke="blue"/>
//! </svg>"#;
//! let index = PathIndex::parse(svg)?;
//!
//! // Half an inch right of the origin, a tenth of an inch down.
//! let nearest = index.find_nearest(Point::new(0.5, 0.1)).unwrap();
//! assert_eq!(nearest.node().attribute("stroke"), Some("red"));
//!
//! let vertex = index.find_nearest_point(nearest, Point::new(0.9, 0.0));
//! assert_eq!(vertex, Some(Point::new(1.0, 0.0)));
//! # Ok::<(), plotpick_index::LoadError>(())
//! ```
//!
//! Outlines are interpreted lazily, on the first query that needs them, and
//! cached in the record. An index is immutable once built and can be shared
//! between threads.

mod error;
mod index;
mod node;
mod record;
mod units;

pub use error::LoadError;
pub use index::{PathIndex, SelectedBy, Selection};
pub use node::{PathNode, StyleKey};
pub use record::{PathRecord, RecordId};
pub use units::{POINTS_PER_INCH, Units};
