use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::render;
use crate::color::ColorMap;
use crate::config::ReportConfig;
use crate::data::speedup;
use crate::export;

// ---------------------------------------------------------------------------
// Report pipeline
// ---------------------------------------------------------------------------

/// Run the full pipeline: one figure per mode, one chart PNG per figure, and
/// optionally a CSV summary of everything computed.
pub fn run(config: &ReportConfig, csv_out: Option<&Path>) -> Result<()> {
    // Colour per dataset, shared across figures.
    let colors = ColorMap::new(&config.datasets);

    let mut figures = Vec::with_capacity(config.modes.len());
    for mode in &config.modes {
        let figure = speedup::mode_figure(
            &config.results_dir,
            mode,
            &config.datasets,
            &config.thread_counts,
        )
        .with_context(|| format!("computing speedups for mode '{mode}'"))?;

        let out_path = config.out_dir.join(format!("speedup-{mode}.png"));
        render::render_figure(&figure, &colors, &out_path)?;
        log::info!(
            "{}: {} curves, {} thread counts",
            out_path.display(),
            figure.len(),
            config.thread_counts.len()
        );

        figures.push(figure);
    }

    if let Some(path) = csv_out {
        export::write_summary(&figures, path)?;
        log::info!("{}: CSV summary", path.display());
    }

    Ok(())
}
