use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::color::ColorMap;
use crate::data::model::ModeFigure;

/// Figure dimensions in pixels.
const FIGURE_SIZE: (u32, u32) = (1000, 600);

// ---------------------------------------------------------------------------
// Speedup chart renderer
// ---------------------------------------------------------------------------

/// Render one mode's figure to a PNG: one line per dataset, point markers on
/// the measurements, shared axes, grid, and legend.
pub fn render_figure(figure: &ModeFigure, colors: &ColorMap, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("preparing chart canvas {}", path.display()))?;

    let x_max = figure.max_threads() as f64 + 1.0;
    let y_max = figure.max_speedup().max(1.0) * 1.15;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Editor Speedup Graph ({})", figure.mode.to_uppercase()),
            ("sans-serif", 32),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .with_context(|| format!("laying out chart {}", path.display()))?;

    chart
        .configure_mesh()
        .x_desc("Number of Threads")
        .y_desc("Speedup")
        .draw()
        .context("drawing chart mesh")?;

    for curve in &figure.curves {
        let color = colors.color_for(&curve.dataset);
        let points: Vec<(f64, f64)> = curve
            .points
            .iter()
            .map(|p| (p.threads as f64, p.speedup))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .with_context(|| format!("drawing curve '{}'", curve.dataset))?
            .label(curve.dataset.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        // Marker per measurement, matching the line colour.
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )
            .with_context(|| format!("drawing markers for '{}'", curve.dataset))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .context("drawing chart legend")?;

    root.present()
        .with_context(|| format!("writing chart {}", path.display()))?;

    Ok(())
}
