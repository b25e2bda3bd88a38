use std::path::Path;

use anyhow::{Context, Result};

use super::loader::min_runtime;
use super::model::{ModeFigure, SpeedupCurve, SpeedupPoint};

// ---------------------------------------------------------------------------
// Speedup computation
// ---------------------------------------------------------------------------

/// Divide the sequential baseline by each parallel minimum.
///
/// Pure arithmetic; the `(threads, runtime)` pairs come in already ordered by
/// thread count.
pub fn compute_speedups(sequential: f64, parallel: &[(u32, f64)]) -> Vec<SpeedupPoint> {
    parallel
        .iter()
        .map(|&(threads, runtime)| SpeedupPoint {
            threads,
            speedup: sequential / runtime,
        })
        .collect()
}

/// Build the speedup curve for one `(mode, dataset)` pair.
///
/// Loads `{dataset}_sequential.txt` once, then one
/// `{dataset}_{mode}_{threads}.txt` per thread count.
pub fn speedup_curve(
    results_dir: &Path,
    dataset: &str,
    mode: &str,
    thread_counts: &[u32],
) -> Result<SpeedupCurve> {
    let sequential_path = results_dir.join(format!("{dataset}_sequential.txt"));
    let sequential = min_runtime(&sequential_path)
        .with_context(|| format!("loading sequential baseline for dataset '{dataset}'"))?;
    log::debug!("{dataset}: sequential minimum {sequential}s");

    let mut parallel = Vec::with_capacity(thread_counts.len());
    for &threads in thread_counts {
        let path = results_dir.join(format!("{dataset}_{mode}_{threads}.txt"));
        let runtime = min_runtime(&path).with_context(|| {
            format!("loading '{dataset}' results for mode '{mode}' at {threads} threads")
        })?;
        parallel.push((threads, runtime));
    }

    Ok(SpeedupCurve {
        dataset: dataset.to_string(),
        points: compute_speedups(sequential, &parallel),
    })
}

/// Build one figure: the curves of every dataset under a single mode.
pub fn mode_figure(
    results_dir: &Path,
    mode: &str,
    datasets: &[String],
    thread_counts: &[u32],
) -> Result<ModeFigure> {
    let curves = datasets
        .iter()
        .map(|dataset| speedup_curve(results_dir, dataset, mode, thread_counts))
        .collect::<Result<Vec<_>>>()?;

    Ok(ModeFigure {
        mode: mode.to_string(),
        curves,
    })
}
