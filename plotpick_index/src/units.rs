// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::LoadError;

/// Document points per inch, the query unit.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Scale between document units (points) and query units (inches).
///
/// Documents declare their size in points; callers ask questions in inches.
/// Every query converts its inputs with [`Units::to_document`] and its
/// outputs with [`Units::to_query`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    width: f64,
    per_query_unit: f64,
}

impl Units {
    /// Reads the unit from a root `width` attribute such as `"612pt"`.
    ///
    /// Only `pt` is accepted. Anything else, including a unitless width, is
    /// [`LoadError::UnsupportedUnit`]; there is no fallback unit.
    pub fn from_width(width: &str) -> Result<Self, LoadError> {
        let trimmed = width.trim();
        let number = trimmed.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
        let unit = &trimmed[number.len()..];
        let value: f64 = number.trim().parse().map_err(|_| LoadError::InvalidWidth {
            width: width.to_owned(),
        })?;

        match unit {
            "pt" => Ok(Self {
                width: value,
                per_query_unit: POINTS_PER_INCH,
            }),
            _ => Err(LoadError::UnsupportedUnit {
                unit: unit.to_owned(),
            }),
        }
    }

    /// Declared document width, in document units.
    #[must_use]
    pub fn document_width(&self) -> f64 {
        self.width
    }

    /// Document units per query unit.
    #[must_use]
    pub fn per_query_unit(&self) -> f64 {
        self.per_query_unit
    }

    /// Converts a point from query units to document units.
    #[must_use]
    pub fn to_document(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.per_query_unit).to_point()
    }

    /// Converts a point from document units to query units.
    #[must_use]
    pub fn to_query(&self, pt: Point) -> Point {
        (pt.to_vec2() / self.per_query_unit).to_point()
    }

    /// Converts a squared distance from document units to query units.
    #[must_use]
    pub fn distance2_to_query(&self, distance2: f64) -> f64 {
        distance2 / (self.per_query_unit * self.per_query_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_72_per_inch() {
        let units = Units::from_width("612pt").unwrap();
        assert_eq!(units.document_width(), 612.0);
        assert_eq!(units.to_document(Point::new(1.0, 0.5)), Point::new(72.0, 36.0));
        assert_eq!(units.to_query(Point::new(144.0, 18.0)), Point::new(2.0, 0.25));
        assert_eq!(units.distance2_to_query(5184.0), 1.0);
    }

    #[test]
    fn fractional_and_padded_widths() {
        assert_eq!(Units::from_width(" 595.28pt ").unwrap().document_width(), 595.28);
    }

    #[test]
    fn other_units_are_rejected() {
        for (width, unit) in [("10mm", "mm"), ("8.5in", "in"), ("800px", "px"), ("100", ""), ("50%", "%")] {
            match Units::from_width(width) {
                Err(LoadError::UnsupportedUnit { unit: got }) => assert_eq!(got, unit, "{width}"),
                other => panic!("{width}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn garbage_width_is_invalid() {
        assert!(matches!(Units::from_width("wide"), Err(LoadError::InvalidWidth { .. })));
        assert!(matches!(Units::from_width("pt"), Err(LoadError::InvalidWidth { .. })));
    }
}
