// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

use crate::{AxisCalibration, AxisScale, CalibrationError};

/// One of the four reference picks of a calibration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pick {
    /// Lower reference on the x axis.
    XMin,
    /// Lower reference on the y axis.
    YMin,
    /// Upper reference on the x axis.
    XMax,
    /// Upper reference on the y axis.
    YMax,
}

impl Pick {
    /// All picks, in the order missing ones are reported.
    pub const ALL: [Self; 4] = [Self::XMin, Self::YMin, Self::XMax, Self::YMax];

    fn slot(self) -> usize {
        match self {
            Self::XMin => 0,
            Self::YMin => 1,
            Self::XMax => 2,
            Self::YMax => 3,
        }
    }

    /// Returns `true` for the x axis picks.
    #[must_use]
    pub fn is_x(self) -> bool {
        matches!(self, Self::XMin | Self::XMax)
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::XMin => "X_min",
            Self::YMin => "Y_min",
            Self::XMax => "X_max",
            Self::YMax => "Y_max",
        })
    }
}

/// Collects reference picks one at a time, in any order.
///
/// Each pick has a picture coordinate (where on the plot it was clicked) and
/// a real value (what the axis label says). Both may be set and reset freely
/// until [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CalibrationBuilder {
    pic: [Option<f64>; 4],
    real: [Option<f64>; 4],
    x_scale: AxisScale,
    y_scale: AxisScale,
}

impl CalibrationBuilder {
    /// Creates a builder with no picks and linear axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the picture coordinate of `pick`.
    pub fn set_picture(&mut self, pick: Pick, value: f64) -> &mut Self {
        self.pic[pick.slot()] = Some(value);
        self
    }

    /// Sets the picture coordinate of `pick` from a clicked point: its x for
    /// x axis picks, its y for y axis picks.
    pub fn pick_point(&mut self, pick: Pick, pt: Point) -> &mut Self {
        self.set_picture(pick, if pick.is_x() { pt.x } else { pt.y })
    }

    /// Sets the real value of `pick`.
    pub fn set_real(&mut self, pick: Pick, value: f64) -> &mut Self {
        self.real[pick.slot()] = Some(value);
        self
    }

    /// Sets the scale of the x axis.
    pub fn x_scale(&mut self, scale: AxisScale) -> &mut Self {
        self.x_scale = scale;
        self
    }

    /// Sets the scale of the y axis.
    pub fn y_scale(&mut self, scale: AxisScale) -> &mut Self {
        self.y_scale = scale;
        self
    }

    /// Builds the calibration.
    ///
    /// Missing picks are reported one at a time: every picture coordinate is
    /// checked before any real value, each in [`Pick::ALL`] order.
    pub fn build(&self) -> Result<Calibration, CalibrationError> {
        let pic = collect(&self.pic)?;
        let real = collect(&self.real)?;
        let x = AxisCalibration::new(
            [pic[Pick::XMin.slot()], pic[Pick::XMax.slot()]],
            [real[Pick::XMin.slot()], real[Pick::XMax.slot()]],
            self.x_scale,
        )?;
        let y = AxisCalibration::new(
            [pic[Pick::YMin.slot()], pic[Pick::YMax.slot()]],
            [real[Pick::YMin.slot()], real[Pick::YMax.slot()]],
            self.y_scale,
        )?;
        Ok(Calibration { x, y })
    }
}

fn collect(values: &[Option<f64>; 4]) -> Result<[f64; 4], CalibrationError> {
    let mut out = [0.0; 4];
    for pick in Pick::ALL {
        out[pick.slot()] = values[pick.slot()].ok_or(CalibrationError::MissingPick(pick))?;
    }
    Ok(out)
}

/// Calibrations of both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Calibration {
    /// Horizontal axis.
    pub x: AxisCalibration,
    /// Vertical axis.
    pub y: AxisCalibration,
}

impl Calibration {
    /// Converts a picture point to data values.
    #[must_use]
    pub fn to_real(&self, pt: Point) -> Point {
        Point::new(self.x.to_real(pt.x), self.y.to_real(pt.y))
    }

    /// Converts a sequence of picture points to data values.
    #[must_use]
    pub fn to_real_all(&self, points: impl IntoIterator<Item = Point>) -> Vec<Point> {
        points.into_iter().map(|p| self.to_real(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CalibrationBuilder {
        let mut b = CalibrationBuilder::new();
        b.pick_point(Pick::XMin, Point::new(1.0, 9.0))
            .pick_point(Pick::XMax, Point::new(5.0, 9.0))
            .pick_point(Pick::YMin, Point::new(1.0, 9.0))
            .pick_point(Pick::YMax, Point::new(1.0, 1.0))
            .set_real(Pick::XMin, 0.0)
            .set_real(Pick::XMax, 100.0)
            .set_real(Pick::YMin, 1.0)
            .set_real(Pick::YMax, 1000.0);
        b
    }

    #[test]
    fn missing_picks_are_reported_pictures_first() {
        let mut b = CalibrationBuilder::new();
        assert_eq!(b.build(), Err(CalibrationError::MissingPick(Pick::XMin)));

        b.set_picture(Pick::XMin, 0.0).set_real(Pick::XMin, 0.0);
        b.set_real(Pick::YMin, 0.0);
        assert_eq!(b.build(), Err(CalibrationError::MissingPick(Pick::YMin)));

        b.set_picture(Pick::YMin, 0.0)
            .set_picture(Pick::XMax, 1.0)
            .set_picture(Pick::YMax, 1.0);
        // All pictures present; the first absent real value is X_max.
        assert_eq!(b.build(), Err(CalibrationError::MissingPick(Pick::XMax)));
    }

    #[test]
    fn mixed_scales() {
        let mut b = complete();
        b.y_scale(AxisScale::Log10);
        let cal = b.build().unwrap();

        let p = cal.to_real(Point::new(3.0, 5.0));
        assert_eq!(p.x, 50.0);
        assert!((p.y - 31.622_776_601_683_793).abs() < 1e-9, "got {}", p.y);

        let all = cal.to_real_all([Point::new(1.0, 9.0), Point::new(5.0, 1.0)]);
        assert_eq!(all[0].x, 0.0);
        assert!((all[0].y - 1.0).abs() < 1e-12);
        assert_eq!(all[1].x, 100.0);
        assert!((all[1].y - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn axis_errors_surface_from_build() {
        let mut b = complete();
        b.pick_point(Pick::XMax, Point::new(1.0, 0.0));
        assert_eq!(b.build(), Err(CalibrationError::DegenerateAxis));
    }
}
