// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use plotpick_index::{PathIndex, PathNode, PathRecord};

use crate::HighlightStyle;

/// Attributes replaced on a highlighted copy. Inline `style` is dropped since
/// CSS declarations would win over the presentation attributes we write.
const OVERRIDDEN: [&str; 5] = ["stroke", "stroke-width", "stroke-opacity", "fill", "style"];

/// Renders highlighted copies of selected paths into a new document.
#[derive(Clone, Debug, Default)]
pub struct Annotator {
    style: HighlightStyle,
}

impl Annotator {
    /// Creates an annotator drawing with `style`.
    #[must_use]
    pub fn new(style: HighlightStyle) -> Self {
        Self { style }
    }

    /// The highlight style.
    #[must_use]
    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Produces a new document: the original content, then a highlighted copy
    /// of each selected record, then an optional marker, then the root's
    /// closing tag.
    ///
    /// `marker` is in query units, like every other coordinate crossing the
    /// [`PathIndex`] API. The index and its records are only read; the copies
    /// are built from scratch.
    #[must_use]
    pub fn render(&self, index: &PathIndex, selected: &[&PathRecord], marker: Option<Point>) -> String {
        let mut out = String::with_capacity(index.header().len() + index.trailer().len() + 256 * (selected.len() + 1));
        out.push_str(index.header());

        for record in selected {
            self.write_highlight(&mut out, record.node());
        }
        if let Some(marker) = marker {
            self.write_marker(&mut out, index.units().to_document(marker));
        }

        out.push_str(index.trailer());
        log::debug!(
            "annotated {} paths{}",
            selected.len(),
            if marker.is_some() { " with marker" } else { "" }
        );
        out
    }

    fn write_highlight(&self, out: &mut String, node: &PathNode) {
        out.push_str("<path");
        for (name, value) in node.attributes() {
            if !OVERRIDDEN.contains(&name) {
                write_attr(out, name, value);
            }
        }
        write_stroke(out, self.style.stroke, self.style.stroke_width);
        write_attr(out, "fill", "none");
        out.push_str("/>\n");
    }

    fn write_marker(&self, out: &mut String, center: Point) {
        let h = self.style.marker_half_size;
        let Point { x, y } = center;
        let d = format!(
            "M {} {} L {} {} L {} {} L {} {} Z",
            fmt_coord(x - h),
            fmt_coord(y),
            fmt_coord(x),
            fmt_coord(y - h),
            fmt_coord(x + h),
            fmt_coord(y),
            fmt_coord(x),
            fmt_coord(y + h),
        );
        out.push_str("<path");
        write_attr(out, "d", &d);
        write_stroke(out, self.style.marker_stroke, self.style.stroke_width);
        write_attr(out, "fill", "none");
        out.push_str("/>\n");
    }
}

/// Renders with the default [`HighlightStyle`].
///
/// See [`Annotator::render`].
#[must_use]
pub fn annotate(index: &PathIndex, selected: &[&PathRecord], marker: Option<Point>) -> String {
    Annotator::default().render(index, selected, marker)
}

fn write_stroke(out: &mut String, color: Color, width: f64) {
    let (rgb, alpha) = color_to_svg(color);
    write_attr(out, "stroke", &rgb);
    if alpha < 1.0 {
        write_attr(out, "stroke-opacity", &fmt_coord(f64::from(alpha)));
    }
    write_attr(out, "stroke-width", &fmt_coord(width));
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_coord(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let mut s = format!("{v:.4}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
