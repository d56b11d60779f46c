// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::CalibrationError;

/// How data values are laid out along an axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisScale {
    /// Equal distances are equal differences.
    #[default]
    Linear,
    /// Equal distances are equal ratios (decades).
    Log10,
}

/// Maps a picture coordinate to a data value given two reference picks.
///
/// `x0_pic`/`x1_pic` are where the references were picked and
/// `x0_real`/`x1_real` their data values. With `use_log` the interpolation
/// happens between the base 10 logarithms of the data values.
///
/// No validation is done: equal picture coordinates divide by zero, and a log
/// axis with a non-positive data value yields NaN. Use [`AxisCalibration`] to
/// have both rejected up front.
#[must_use]
pub fn interpolate(value: f64, x0_pic: f64, x1_pic: f64, x0_real: f64, x1_real: f64, use_log: bool) -> f64 {
    let t = (value - x0_pic) / (x1_pic - x0_pic);
    if use_log {
        let lo = x0_real.log10();
        let hi = x1_real.log10();
        10_f64.powf(lo + t * (hi - lo))
    } else {
        x0_real + (x1_real - x0_real) * t
    }
}

/// A validated calibration of one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisCalibration {
    pic: [f64; 2],
    real: [f64; 2],
    scale: AxisScale,
}

impl AxisCalibration {
    /// Creates a calibration from the picture coordinates of two reference
    /// picks and their data values.
    ///
    /// The two picture coordinates must differ, and on a
    /// [`AxisScale::Log10`] axis both data values must be positive.
    pub fn new(pic: [f64; 2], real: [f64; 2], scale: AxisScale) -> Result<Self, CalibrationError> {
        if pic[0] == pic[1] || !(pic[1] - pic[0]).is_finite() {
            return Err(CalibrationError::DegenerateAxis);
        }
        if scale == AxisScale::Log10 && !(real[0] > 0.0 && real[1] > 0.0) {
            return Err(CalibrationError::NonPositiveLogBound);
        }
        Ok(Self { pic, real, scale })
    }

    /// Picture coordinates of the two reference picks.
    #[must_use]
    pub fn pic(&self) -> [f64; 2] {
        self.pic
    }

    /// Data values of the two reference picks.
    #[must_use]
    pub fn real(&self) -> [f64; 2] {
        self.real
    }

    /// The axis scale.
    #[must_use]
    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    /// The data value at picture coordinate `value`.
    #[must_use]
    pub fn to_real(&self, value: f64) -> f64 {
        interpolate(
            value,
            self.pic[0],
            self.pic[1],
            self.real[0],
            self.real[1],
            self.scale == AxisScale::Log10,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_hits_references_and_midpoint() {
        assert_eq!(interpolate(1.0, 1.0, 3.0, 10.0, 20.0, false), 10.0);
        assert_eq!(interpolate(3.0, 1.0, 3.0, 10.0, 20.0, false), 20.0);
        assert_eq!(interpolate(2.0, 1.0, 3.0, 10.0, 20.0, false), 15.0);
        // Extrapolation is allowed.
        assert_eq!(interpolate(5.0, 1.0, 3.0, 10.0, 20.0, false), 30.0);
    }

    #[test]
    fn log_midpoint_is_geometric_mean() {
        let mid = interpolate(2.0, 1.0, 3.0, 1.0, 100.0, true);
        assert!((mid - 10.0).abs() < 1e-12, "got {mid}");
        let end = interpolate(3.0, 1.0, 3.0, 1.0, 100.0, true);
        assert!((end - 100.0).abs() < 1e-9, "got {end}");
    }

    #[test]
    fn reversed_picture_axis() {
        // Picture y grows downwards while data grows upwards.
        let axis = AxisCalibration::new([8.0, 2.0], [0.0, 60.0], AxisScale::Linear).unwrap();
        assert_eq!(axis.to_real(8.0), 0.0);
        assert_eq!(axis.to_real(5.0), 30.0);
    }

    #[test]
    fn invalid_axes_are_rejected() {
        assert_eq!(
            AxisCalibration::new([1.0, 1.0], [0.0, 1.0], AxisScale::Linear),
            Err(CalibrationError::DegenerateAxis)
        );
        assert_eq!(
            AxisCalibration::new([0.0, 1.0], [0.0, 10.0], AxisScale::Log10),
            Err(CalibrationError::NonPositiveLogBound)
        );
        assert_eq!(
            AxisCalibration::new([0.0, 1.0], [1.0, f64::NAN], AxisScale::Log10),
            Err(CalibrationError::NonPositiveLogBound)
        );
        assert!(AxisCalibration::new([0.0, 1.0], [-5.0, 10.0], AxisScale::Linear).is_ok());
    }
}
