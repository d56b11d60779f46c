// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// How highlighted paths and the pick marker are drawn.
///
/// Sizes are in document units.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightStyle {
    /// Stroke color of highlighted paths.
    pub stroke: Color,
    /// Stroke width of highlighted paths and of the marker.
    pub stroke_width: f64,
    /// Stroke color of the marker glyph.
    pub marker_stroke: Color,
    /// Distance from the marker's center to each of its corners.
    pub marker_half_size: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            stroke: Color::from_rgba8(255, 0, 0, 255),
            stroke_width: 1.5,
            marker_stroke: Color::from_rgba8(0, 102, 255, 255),
            marker_half_size: 3.0,
        }
    }
}
