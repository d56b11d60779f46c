// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use kurbo::Point;
use plotpick_annotate::annotate;
use plotpick_calibrate::{AxisScale, CalibrationBuilder, Pick, read_pairs, write_pairs};
use plotpick_index::{PathIndex, PathRecord};
use plotpick_source::{SvgFileSource, load_page};

use crate::CalibrateArgs;

fn load(svg: &Path) -> Result<PathIndex> {
    load_page(&SvgFileSource::new(svg), 0).with_context(|| format!("failed to load {}", svg.display()))
}

fn save(out: &Path, text: &str) -> Result<()> {
    std::fs::write(out, text).with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn describe(index: &PathIndex, record: &PathRecord) -> String {
    let center = index.units().to_query(record.center());
    let outline = record.outline();
    let points = if outline.is_unsupported() {
        "curved".to_owned()
    } else {
        format!("{} points", outline.len())
    };
    format!(
        "#{} {points}, center ({:.3}, {:.3}) in",
        record.id().index(),
        center.x,
        center.y
    )
}

pub(crate) fn paths(svg: &Path, w: &mut impl Write) -> Result<()> {
    let index = load(svg)?;
    for record in index.records() {
        let style: Vec<String> = record.style().pairs().map(|(k, v)| format!("{k}={v}")).collect();
        writeln!(w, "{} [{}]", describe(&index, record), style.join(" "))?;
    }
    writeln!(
        w,
        "{} selectable, {} unstyled skipped",
        index.len(),
        index.skipped()
    )?;
    Ok(())
}

pub(crate) fn nearest(svg: &Path, x: f64, y: f64, out: Option<&Path>, w: &mut impl Write) -> Result<()> {
    let index = load(svg)?;
    let q = Point::new(x, y);
    let Some(record) = index.find_nearest(q) else {
        writeln!(w, "no selectable path")?;
        return Ok(());
    };
    let vertex = index.find_nearest_point(record, q);
    writeln!(
        w,
        "{}, distance {:.4} in",
        describe(&index, record),
        index.distance2(record, q).sqrt()
    )?;
    if let Some(v) = vertex {
        writeln!(w, "nearest vertex ({:.4}, {:.4}) in", v.x, v.y)?;
    }
    if let Some(out) = out {
        save(out, &annotate(&index, &[record], vertex))?;
    }
    Ok(())
}

pub(crate) fn select(
    svg: &Path,
    [x0, y0, x1, y1]: [f64; 4],
    series: bool,
    out: Option<&Path>,
    w: &mut impl Write,
) -> Result<()> {
    let index = load(svg)?;
    let Some(selection) = index.select(Point::new(x0, y0), Point::new(x1, y1)) else {
        writeln!(w, "no selectable path")?;
        return Ok(());
    };
    let selected = if series {
        index.group(selection.record)
    } else {
        vec![selection.record]
    };
    writeln!(w, "selected by {:?}", selection.by)?;
    for record in &selected {
        writeln!(w, "{}", describe(&index, record))?;
    }
    if let Some(out) = out {
        save(out, &annotate(&index, &selected, None))?;
    }
    Ok(())
}

fn bounds(values: &[f64], what: &str) -> Result<[f64; 2]> {
    match values {
        [lo, hi] => Ok([*lo, *hi]),
        _ => bail!("{what} needs exactly two values"),
    }
}

pub(crate) fn calibrate(args: &CalibrateArgs, w: &mut impl Write) -> Result<()> {
    let scale = |log| if log { AxisScale::Log10 } else { AxisScale::Linear };
    let x_pic = bounds(&args.x_pic, "--x-pic")?;
    let x_real = bounds(&args.x_real, "--x-real")?;
    let y_pic = bounds(&args.y_pic, "--y-pic")?;
    let y_real = bounds(&args.y_real, "--y-real")?;

    let mut picks = CalibrationBuilder::new();
    picks
        .set_picture(Pick::XMin, x_pic[0])
        .set_picture(Pick::XMax, x_pic[1])
        .set_real(Pick::XMin, x_real[0])
        .set_real(Pick::XMax, x_real[1])
        .set_picture(Pick::YMin, y_pic[0])
        .set_picture(Pick::YMax, y_pic[1])
        .set_real(Pick::YMin, y_real[0])
        .set_real(Pick::YMax, y_real[1])
        .x_scale(scale(args.x_log))
        .y_scale(scale(args.y_log));
    let calibration = picks.build().context("invalid calibration")?;

    let text = std::fs::read_to_string(&args.points)
        .with_context(|| format!("failed to read {}", args.points.display()))?;
    let picked = read_pairs(&text).with_context(|| format!("in {}", args.points.display()))?;
    write_pairs(w, calibration.to_real_all(picked))?;
    Ok(())
}
