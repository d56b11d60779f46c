// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Pick;

/// A calibration cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    /// A reference pick has not been made yet.
    MissingPick(Pick),
    /// Both reference picks of an axis share the same picture coordinate.
    DegenerateAxis,
    /// A logarithmic axis has a reference value that is zero or negative.
    NonPositiveLogBound,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPick(pick) => write!(f, "please pick {pick}"),
            Self::DegenerateAxis => f.write_str("both reference picks of an axis are at the same position"),
            Self::NonPositiveLogBound => f.write_str("logarithmic axes need positive reference values"),
        }
    }
}

impl core::error::Error for CalibrationError {}

/// A line of a two-column file is not a pair of numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairsError {
    /// 1-based line number.
    pub line: usize,
    /// The offending line.
    pub text: String,
}

impl fmt::Display for PairsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: expected two numbers, found {:?}", self.line, self.text)
    }
}

impl core::error::Error for PairsError {}
