// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotpick_path --heading-base-level=0

//! Plotpick Path: turn path data into absolute polylines.
//!
//! Vector renderers of PDF pages emit plots as `<path>` elements whose `d`
//! attribute is a small command language: moves, straight lines, horizontal
//! and vertical lines and close-path, each absolute or relative, optionally
//! placed by an affine `matrix(...)` transform. This crate interprets that
//! language into an [`Outline`], the fully resolved point sequence of one
//! path, and answers the geometric questions a plot digitizer asks of it:
//!
//! - how far is a click from the drawn path ([`Outline::distance2`]),
//! - which of its vertices is nearest ([`Outline::closest_point`]),
//! - does it fit in a drag rectangle ([`Outline::is_inside`]),
//! - how big is it ([`Outline::extent2`], [`Outline::center`]).
//!
//! Curves are deliberately not approximated. A path using any curve command
//! becomes [`Outline::unsupported`], a single NaN point whose distances are
//! NaN, so callers skip it when ranking instead of trusting a wrong
//! straight-line answer.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use plotpick_path::interpret;
//!
//! let outline = interpret("M 0 0 L 1 0 L 1 1 Z", None);
//! assert_eq!(
//!     outline.points(),
//!     &[
//!         Point::new(0.0, 0.0),
//!         Point::new(1.0, 0.0),
//!         Point::new(1.0, 1.0),
//!         Point::new(0.0, 0.0),
//!     ]
//! );
//! assert_eq!(outline.distance2(Point::new(0.5, -1.0)), 1.0);
//!
//! assert!(interpret("M 0 0 C 1 1 2 2 3 3", None).is_unsupported());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod interpret;
mod outline;

pub use interpret::{interpret, parse_transform};
pub use outline::Outline;
