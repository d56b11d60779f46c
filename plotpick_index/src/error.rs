// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a document cannot be turned into a [`PathIndex`](crate::PathIndex).
///
/// These are whole-document failures. Problems with individual paths (curves,
/// empty data) never surface here; they are represented in the affected
/// record's outline instead.
#[derive(Debug)]
pub enum LoadError {
    /// The document is not well-formed markup.
    Xml(roxmltree::Error),
    /// The root element has no `width` attribute.
    MissingWidth,
    /// The root `width` attribute is not a number followed by a unit.
    InvalidWidth {
        /// The attribute value as written.
        width: String,
    },
    /// The root `width` is declared in a unit other than points (`pt`).
    UnsupportedUnit {
        /// The unit suffix as written; empty for a unitless width.
        unit: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(err) => write!(f, "document is not well-formed: {err}"),
            Self::MissingWidth => f.write_str("document root has no width attribute"),
            Self::InvalidWidth { width } => write!(f, "document width {width:?} is not a length"),
            Self::UnsupportedUnit { unit } => {
                write!(f, "document width unit {unit:?} is not supported (expected \"pt\")")
            }
        }
    }
}

impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Xml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for LoadError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Xml(err)
    }
}
