use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Report configuration
// ---------------------------------------------------------------------------

/// The benchmark matrix and directory layout, independent of rendering.
///
/// Defaults mirror the benchmark harness; a JSON config file can override any
/// subset of fields:
///
/// ```json
/// {
///   "thread_counts": [2, 4, 8],
///   "datasets": ["small", "big"],
///   "modes": ["bsp"],
///   "results_dir": "results",
///   "out_dir": "charts"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Thread counts on the x axis, strictly increasing.
    pub thread_counts: Vec<u32>,

    /// Dataset labels; one curve per dataset in every figure.
    pub datasets: Vec<String>,

    /// Execution modes; one figure per mode.
    pub modes: Vec<String>,

    /// Directory holding the raw `*.txt` runtime measurements.
    pub results_dir: PathBuf,

    /// Directory the `speedup-{mode}.png` charts are written to.
    pub out_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            thread_counts: vec![2, 4, 6, 8, 12],
            datasets: vec![
                "small".to_string(),
                "mixture".to_string(),
                "big".to_string(),
            ],
            modes: vec!["bsp".to_string(), "bspsteal".to_string()],
            results_dir: PathBuf::from("results"),
            out_dir: PathBuf::from("."),
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file. Unknown keys are rejected.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ReportConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a meaningful chart.
    pub fn validate(&self) -> Result<()> {
        if self.thread_counts.is_empty() {
            bail!("config error: thread_counts is empty");
        }
        if self.datasets.is_empty() {
            bail!("config error: datasets is empty");
        }
        if self.modes.is_empty() {
            bail!("config error: modes is empty");
        }
        if !self.thread_counts.windows(2).all(|w| w[0] < w[1]) {
            bail!(
                "config error: thread_counts must be strictly increasing, got {:?}",
                self.thread_counts
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_benchmark_harness() {
        let config = ReportConfig::default();
        assert_eq!(config.thread_counts, vec![2, 4, 6, 8, 12]);
        assert_eq!(config.datasets, vec!["small", "mixture", "big"]);
        assert_eq!(config.modes, vec!["bsp", "bspsteal"]);
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: ReportConfig =
            serde_json::from_str(r#"{ "modes": ["bsp"], "out_dir": "charts" }"#).expect("parse");
        assert_eq!(config.modes, vec!["bsp"]);
        assert_eq!(config.out_dir, PathBuf::from("charts"));
        assert_eq!(config.thread_counts, vec![2, 4, 6, 8, 12]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<ReportConfig, _> =
            serde_json::from_str(r#"{ "threads": [2, 4] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_increasing_thread_counts_fail_validation() {
        let config = ReportConfig {
            thread_counts: vec![2, 4, 4, 8],
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_lists_fail_validation() {
        let config = ReportConfig {
            modes: Vec::new(),
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
