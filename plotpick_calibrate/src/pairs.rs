// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

use kurbo::Point;

use crate::PairsError;

/// Writes one `x y` line per point.
pub fn write_pairs<W: io::Write>(mut writer: W, pairs: impl IntoIterator<Item = Point>) -> io::Result<()> {
    for p in pairs {
        writeln!(writer, "{} {}", p.x, p.y)?;
    }
    writer.flush()
}

/// Reads lines written by [`write_pairs`].
///
/// Blank lines are skipped. Columns are separated by whitespace and anything
/// after the second column is ignored.
pub fn read_pairs(text: &str) -> Result<Vec<Point>, PairsError> {
    let mut out = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let bad = || PairsError {
            line: n + 1,
            text: line.to_owned(),
        };
        let x: f64 = first.parse().map_err(|_| bad())?;
        let y: f64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        out.push(Point::new(x, y));
    }
    log::debug!("read {} pairs", out.len());
    Ok(out)
}
