use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::ModeFigure;

// ---------------------------------------------------------------------------
// CSV summary export
// ---------------------------------------------------------------------------

/// Write every computed speedup as a flat CSV table:
/// one `mode,dataset,threads,speedup` row per measurement.
pub fn write_summary(figures: &[ModeFigure], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV summary {}", path.display()))?;

    writer
        .write_record(["mode", "dataset", "threads", "speedup"])
        .context("writing CSV header")?;

    for figure in figures {
        for curve in &figure.curves {
            for point in &curve.points {
                let threads = point.threads.to_string();
                let speedup = format!("{:.4}", point.speedup);
                writer
                    .write_record([
                        figure.mode.as_str(),
                        curve.dataset.as_str(),
                        threads.as_str(),
                        speedup.as_str(),
                    ])
                    .with_context(|| {
                        format!("writing CSV row for {}/{}", figure.mode, curve.dataset)
                    })?;
            }
        }
    }

    writer.flush().context("flushing CSV summary")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SpeedupCurve, SpeedupPoint};

    #[test]
    fn one_row_per_mode_dataset_threads_triple() {
        let figures = vec![
            ModeFigure {
                mode: "bsp".to_string(),
                curves: vec![SpeedupCurve {
                    dataset: "small".to_string(),
                    points: vec![
                        SpeedupPoint { threads: 2, speedup: 1.0 },
                        SpeedupPoint { threads: 4, speedup: 2.0 },
                    ],
                }],
            },
            ModeFigure {
                mode: "bspsteal".to_string(),
                curves: vec![SpeedupCurve {
                    dataset: "small".to_string(),
                    points: vec![SpeedupPoint { threads: 2, speedup: 1.25 }],
                }],
            },
        ];

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("summary.csv");
        write_summary(&figures, &path).expect("write summary");

        let text = std::fs::read_to_string(&path).expect("read summary");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "mode,dataset,threads,speedup");
        assert_eq!(lines.len(), 1 + 3);
        assert_eq!(lines[1], "bsp,small,2,1.0000");
        assert_eq!(lines[3], "bspsteal,small,2,1.2500");
    }
}
