// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use plotpick_index::PathIndex;

use crate::{PageError, SourceError};

/// Something that turns pages of a plot into vector markup.
///
/// Pages are numbered from zero. Implementations do not retry; a failure is
/// reported once and the caller decides what to do.
pub trait PageSource {
    /// Number of pages available.
    fn page_count(&self) -> Result<usize, SourceError>;

    /// Renders one page to markup whose root `width` is in points.
    fn render_page(&self, page: usize) -> Result<String, SourceError>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn page_count(&self) -> Result<usize, SourceError> {
        (**self).page_count()
    }

    fn render_page(&self, page: usize) -> Result<String, SourceError> {
        (**self).render_page(page)
    }
}

/// An already rendered SVG file, treated as a single page.
///
/// The file is read each time the page is requested, so edits on disk are
/// picked up on the next load.
#[derive(Clone, Debug)]
pub struct SvgFileSource {
    path: PathBuf,
}

impl SvgFileSource {
    /// Creates a source for the file at `path`. Nothing is read yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for SvgFileSource {
    fn page_count(&self) -> Result<usize, SourceError> {
        Ok(1)
    }

    fn render_page(&self, page: usize) -> Result<String, SourceError> {
        if page != 0 {
            return Err(SourceError::PageOutOfRange { page, count: 1 });
        }
        std::fs::read_to_string(&self.path).map_err(|err| {
            log::warn!("unreadable page source {}: {err}", self.path.display());
            SourceError::Unreadable {
                path: self.path.clone(),
                reason: err.to_string(),
            }
        })
    }
}

/// Pages held in memory.
#[derive(Clone, Debug, Default)]
pub struct SvgPages {
    pages: Vec<String>,
}

impl SvgPages {
    /// Creates a source over the given page documents.
    #[must_use]
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Appends a page.
    pub fn push(&mut self, page: impl Into<String>) {
        self.pages.push(page.into());
    }
}

impl PageSource for SvgPages {
    fn page_count(&self) -> Result<usize, SourceError> {
        Ok(self.pages.len())
    }

    fn render_page(&self, page: usize) -> Result<String, SourceError> {
        self.pages
            .get(page)
            .cloned()
            .ok_or(SourceError::PageOutOfRange {
                page,
                count: self.pages.len(),
            })
    }
}

/// Renders `page` of `source` and indexes its paths.
pub fn load_page<S: PageSource + ?Sized>(source: &S, page: usize) -> Result<PathIndex, PageError> {
    let text = source.render_page(page)?;
    let index = PathIndex::parse(text)?;
    log::debug!("page {page}: {} selectable paths", index.len());
    Ok(index)
}
