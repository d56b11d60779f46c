// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// How a page is shown on screen: scrolled, zoomed and at what resolution.
///
/// Used to turn a pointer position in device pixels into the inch coordinates
/// that path index queries take.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewMapping {
    /// Scroll offset of the page, in device pixels.
    pub scroll: Vec2,
    /// Zoom factor of the page view.
    pub zoom: f64,
    /// Device pixels per inch, per axis.
    pub dpi: Vec2,
}

impl Default for ViewMapping {
    fn default() -> Self {
        Self {
            scroll: Vec2::ZERO,
            zoom: 1.0,
            dpi: Vec2::new(96.0, 96.0),
        }
    }
}

impl ViewMapping {
    /// Converts a position in the view, in device pixels, to inches on the
    /// page.
    #[must_use]
    pub fn device_to_query(&self, pos: Point) -> Point {
        let page = (self.scroll + pos.to_vec2()) / self.zoom;
        Point::new(page.x / self.dpi.x, page.y / self.dpi.y)
    }
}
