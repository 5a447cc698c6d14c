//! Convergence chart: iteration index against friction factor estimate.

use cw_flow::FrictionSolution;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

use crate::error::{AppError, AppResult};

const CHART_SIZE: (u32, u32) = (800, 600);

fn ensure_svg_path(path: &Path) -> AppResult<()> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "chart path must end in .svg: {}",
            path.display()
        )))
    }
}

/// Draw the convergence chart to an SVG file.
pub fn render_convergence_chart(path: &Path, solution: &FrictionSolution) -> AppResult<()> {
    let points: Vec<(f64, f64)> = solution
        .iteration_series()
        .map(|(i, f)| (i as f64, f))
        .collect();
    let caption = format!(
        "Colebrook-White secant convergence (Re = {:.0})",
        solution.reynolds
    );

    ensure_svg_path(path)?;
    draw(
        SVGBackend::new(path, CHART_SIZE).into_drawing_area(),
        &caption,
        &points,
    )
    .map_err(|message| AppError::Plot {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::info!(path = %path.display(), points = points.len(), "rendered convergence chart");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    caption: &str,
    points: &[(f64, f64)],
) -> Result<(), String> {
    let (x_range, y_range) = chart_bounds(points);

    root.fill(&WHITE).map_err(|e| e.to_string())?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Iteration Number")
        .y_desc("fD")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(|e| e.to_string())?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

/// Axis ranges covering every point with a 5% vertical margin.
fn chart_bounds(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let x_max = points.iter().map(|p| p.0).fold(1.0, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    if !y_min.is_finite() || !y_max.is_finite() {
        return (0.0..x_max, 0.0..1.0);
    }
    let margin = ((y_max - y_min) * 0.05).max(1e-6);
    (0.0..x_max, (y_min - margin)..(y_max + margin))
}
