use serde::Serialize;

/// Summary statistics over the per-trial savings distribution.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SavingsStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub p10: f64,
    pub p90: f64,
    /// Fraction of trials with savings strictly greater than zero.
    pub prob_positive: f64,
}

/// One histogram bin: the representative lower edge (rounded to the nearest
/// integer for display) and the number of trials that fell into it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower_edge: f64,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct SavingsReport {
    pub scenario: String,
    pub seed: u64,
    pub trials: usize,
    pub stats: SavingsStats,
    pub histogram: Vec<HistogramBin>,
}

/// Full result of one run. `savings` holds the raw per-trial values in
/// trial order; the report is the persistable summary.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationResult {
    pub report: SavingsReport,
    pub savings: Vec<f64>,
}
