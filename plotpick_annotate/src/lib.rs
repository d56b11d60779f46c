// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotpick_annotate --heading-base-level=0

//! Plotpick Annotate: highlight selected paths of a loaded plot.
//!
//! The [`Annotator`] writes a new document instead of editing the loaded one.
//! The original markup is copied verbatim up to the root's closing tag. Each
//! selected path is appended as a fresh `<path>` element that keeps its
//! geometry and other attributes but is drawn with the highlight stroke. An
//! optional diamond marks a picked point. Because the copies come last they
//! paint over the originals.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use plotpick_annotate::annotate;
//! use plotpick_index::PathIndex;
//!
//! let index = PathIndex::parse(
//!     r#"<svg width="144pt"><path d="M 0 0 L 72 0" stroke="black"/></svg>"#,
//! )?;
//! let selected: Vec<_> = index.records().iter().collect();
//! let out = annotate(&index, &selected, Some(Point::new(1.0, 0.0)));
//!
//! assert!(out.starts_with(r#"<svg width="144pt"><path d="M 0 0 L 72 0" stroke="black"/>"#));
//! assert!(out.contains(r##"<path d="M 0 0 L 72 0" stroke="#ff0000" stroke-width="1.5" fill="none"/>"##));
//! assert!(out.ends_with("</svg>"));
//! # Ok::<(), plotpick_index::LoadError>(())
//! ```
//!
//! The source index is left untouched, so it can be rendered again with a
//! different selection.

mod render;
mod style;

pub use render::{Annotator, annotate};
pub use style::HighlightStyle;
