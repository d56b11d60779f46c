// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `plotpick`: pick paths out of vector plots and turn them into numbers.
//!
//! Coordinates on the command line are in inches from the top-left corner of
//! the page. Set `RUST_LOG=debug` to see what the loader skipped.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "plotpick", version, about = "Pick paths out of vector plots")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the selectable paths of a page.
    Paths {
        /// SVG page with its width in points.
        svg: PathBuf,
    },
    /// Find the path nearest to a point, and its nearest vertex.
    #[command(allow_negative_numbers = true)]
    Nearest {
        /// SVG page with its width in points.
        svg: PathBuf,
        /// Horizontal position in inches.
        x: f64,
        /// Vertical position in inches.
        y: f64,
        /// Write the page with the path and vertex highlighted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Select the largest path inside a rectangle, or the one nearest its center.
    #[command(allow_negative_numbers = true)]
    Select {
        /// SVG page with its width in points.
        svg: PathBuf,
        /// First corner, inches.
        x0: f64,
        /// First corner, inches.
        y0: f64,
        /// Second corner, inches.
        x1: f64,
        /// Second corner, inches.
        y1: f64,
        /// Also select every path drawn in the same style.
        #[arg(long)]
        series: bool,
        /// Write the page with the selection highlighted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Convert a two-column file of picked positions to data values.
    Calibrate(CalibrateArgs),
}

#[derive(Debug, clap::Args)]
#[command(allow_negative_numbers = true)]
struct CalibrateArgs {
    /// Picture x of the lower and upper x references.
    #[arg(long, num_args = 2, required = true, value_names = ["MIN", "MAX"])]
    x_pic: Vec<f64>,
    /// Data values of the lower and upper x references.
    #[arg(long, num_args = 2, required = true, value_names = ["MIN", "MAX"])]
    x_real: Vec<f64>,
    /// The x axis is logarithmic.
    #[arg(long)]
    x_log: bool,
    /// Picture y of the lower and upper y references.
    #[arg(long, num_args = 2, required = true, value_names = ["MIN", "MAX"])]
    y_pic: Vec<f64>,
    /// Data values of the lower and upper y references.
    #[arg(long, num_args = 2, required = true, value_names = ["MIN", "MAX"])]
    y_real: Vec<f64>,
    /// The y axis is logarithmic.
    #[arg(long)]
    y_log: bool,
    /// Picked positions, one `x y` line each.
    points: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Paths { svg } => commands::paths(&svg, &mut stdout),
        Command::Nearest { svg, x, y, out } => commands::nearest(&svg, x, y, out.as_deref(), &mut stdout),
        Command::Select {
            svg,
            x0,
            y0,
            x1,
            y1,
            series,
            out,
        } => commands::select(&svg, [x0, y0, x1, y1], series, out.as_deref(), &mut stdout),
        Command::Calibrate(args) => commands::calibrate(&args, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from(["plotpick", "select", "a.svg", "-1", "-2.5", "3", "4", "--series"]).unwrap();
        match cli.command {
            Command::Select { x0, y0, series, .. } => {
                assert_eq!((x0, y0), (-1.0, -2.5));
                assert!(series);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn calibrate_takes_pairs() {
        let cli = Cli::try_parse_from([
            "plotpick", "calibrate", "--x-pic", "1", "5", "--x-real", "0", "100", "--y-pic", "5", "1",
            "--y-real", "1", "1000", "--y-log", "picks.txt",
        ])
        .unwrap();
        let Command::Calibrate(args) = cli.command else {
            panic!("expected calibrate");
        };
        assert_eq!(args.x_pic, [1.0, 5.0]);
        assert_eq!(args.y_real, [1.0, 1000.0]);
        assert!(args.y_log && !args.x_log);
        assert_eq!(args.points, PathBuf::from("picks.txt"));

        assert!(Cli::try_parse_from(["plotpick", "calibrate", "--x-pic", "1", "p.txt"]).is_err());
    }
}
