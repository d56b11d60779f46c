// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotpick_source --heading-base-level=0

//! Plotpick Source: where page markup comes from.
//!
//! Plots usually arrive as PDF pages. Converting a page to SVG is the job of
//! an external renderer; this crate only defines the boundary through the
//! [`PageSource`] trait, plus two simple sources:
//!
//! - [`SvgFileSource`]: a file already rendered to SVG, one page.
//! - [`SvgPages`]: page documents held in memory.
//!
//! [`load_page`] chains a source with [`PathIndex::parse`](plotpick_index::PathIndex::parse)
//! and keeps the two kinds of failure apart in [`PageError`].
//!
//! ```rust
//! use plotpick_source::{SvgPages, load_page};
//!
//! let pages = SvgPages::new(vec![
//!     r#"<svg width="72pt"><path d="M 0 0 L 72 72" stroke="black"/></svg>"#.to_owned(),
//! ]);
//! let index = load_page(&pages, 0).unwrap();
//! assert_eq!(index.len(), 1);
//! assert!(load_page(&pages, 1).is_err());
//! ```

mod error;
mod source;

pub use error::{PageError, SourceError};
pub use source::{PageSource, SvgFileSource, SvgPages, load_page};
