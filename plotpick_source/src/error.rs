// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::path::PathBuf;

use plotpick_index::LoadError;

/// A page source could not produce a page.
#[derive(Debug)]
pub enum SourceError {
    /// The backing file or renderer failed.
    Unreadable {
        /// What was being read.
        path: PathBuf,
        /// The underlying failure, as reported by the system.
        reason: String,
    },
    /// The requested page does not exist.
    PageOutOfRange {
        /// The requested zero-based page.
        page: usize,
        /// Number of pages the source has.
        count: usize,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, reason } => {
                write!(f, "cannot read {}: {reason}", path.display())
            }
            Self::PageOutOfRange { page, count } => {
                write!(f, "page {page} out of range (source has {count} pages)")
            }
        }
    }
}

impl core::error::Error for SourceError {}

/// Failure of [`load_page`](crate::load_page).
#[derive(Debug)]
pub enum PageError {
    /// The source could not render the page.
    Source(SourceError),
    /// The rendered page was not a usable document.
    Load(LoadError),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(err) => fmt::Display::fmt(err, f),
            Self::Load(err) => write!(f, "rendered page rejected: {err}"),
        }
    }
}

impl core::error::Error for PageError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Load(err) => Some(err),
        }
    }
}

impl From<SourceError> for PageError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

impl From<LoadError> for PageError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}
