// ---------------------------------------------------------------------------
// SpeedupPoint – one measurement on a curve
// ---------------------------------------------------------------------------

/// Speedup at a single thread count: `sequential_min / parallel_min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupPoint {
    pub threads: u32,
    pub speedup: f64,
}

// ---------------------------------------------------------------------------
// SpeedupCurve – one dataset within a figure
// ---------------------------------------------------------------------------

/// The speedup curve of one dataset under a fixed execution mode.
/// Points are ordered by strictly increasing thread count.
#[derive(Debug, Clone)]
pub struct SpeedupCurve {
    /// Dataset label, used for the legend and the colour map.
    pub dataset: String,
    pub points: Vec<SpeedupPoint>,
}

impl SpeedupCurve {
    /// Largest speedup on the curve (for axis scaling).
    pub fn max_speedup(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.speedup)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

// ---------------------------------------------------------------------------
// ModeFigure – everything drawn into one chart
// ---------------------------------------------------------------------------

/// One chart: all dataset curves for a single execution mode.
#[derive(Debug, Clone)]
pub struct ModeFigure {
    /// Mode label exactly as configured (lower-case in filenames).
    pub mode: String,
    pub curves: Vec<SpeedupCurve>,
}

impl ModeFigure {
    /// Largest speedup across all curves.
    pub fn max_speedup(&self) -> f64 {
        self.curves
            .iter()
            .map(SpeedupCurve::max_speedup)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest thread count across all curves.
    pub fn max_threads(&self) -> u32 {
        self.curves
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.threads))
            .max()
            .unwrap_or(0)
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the figure has no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
