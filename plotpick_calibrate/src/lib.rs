// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotpick_calibrate --heading-base-level=0

//! Plotpick Calibrate: from picked positions to data values.
//!
//! Positions picked on a plot are in page inches. Turning them into the
//! numbers the plot shows needs four reference picks, two per axis, each with
//! a picture coordinate and the value read off the axis label. A
//! [`CalibrationBuilder`] collects them and builds a [`Calibration`] that
//! interpolates linearly or in decades ([`AxisScale`]).
//!
//! ```rust
//! use kurbo::Point;
//! use plotpick_calibrate::{AxisScale, CalibrationBuilder, Pick};
//!
//! let mut picks = CalibrationBuilder::new();
//! picks
//!     .pick_point(Pick::XMin, Point::new(1.0, 6.0))
//!     .pick_point(Pick::XMax, Point::new(6.0, 6.0))
//!     .pick_point(Pick::YMin, Point::new(1.0, 6.0))
//!     .pick_point(Pick::YMax, Point::new(1.0, 1.0))
//!     .set_real(Pick::XMin, 0.0)
//!     .set_real(Pick::XMax, 10.0)
//!     .set_real(Pick::YMin, 1.0)
//!     .set_real(Pick::YMax, 1e5)
//!     .y_scale(AxisScale::Log10);
//! let calibration = picks.build()?;
//!
//! let value = calibration.to_real(Point::new(3.5, 5.0));
//! assert_eq!(value.x, 5.0);
//! assert!((value.y - 10.0).abs() < 1e-9);
//! # Ok::<(), plotpick_calibrate::CalibrationError>(())
//! ```
//!
//! [`ViewMapping`] converts pointer positions from device pixels to inches,
//! and [`write_pairs`]/[`read_pairs`] handle the plain two-column text files
//! digitized series are exchanged in.

mod axis;
mod calibration;
mod error;
mod pairs;
mod view;

pub use axis::{AxisCalibration, AxisScale, interpolate};
pub use calibration::{Calibration, CalibrationBuilder, Pick};
pub use error::{CalibrationError, PairsError};
pub use pairs::{read_pairs, write_pairs};
pub use view::ViewMapping;
