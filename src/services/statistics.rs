use crate::services::percentiles::value_f64_sorted;
use crate::services::simulation_types::{HistogramBin, SavingsStats};

pub const HISTOGRAM_BINS: usize = 40;

/// Reduces the raw savings sequence to summary statistics. Expects at least
/// one trial. Order statistics come from a sorted copy; `std` uses the
/// sample (N-1) denominator and reports 0.0 for a single trial, where the
/// denominator would vanish.
pub fn summarize(savings: &[f64]) -> SavingsStats {
    let n = savings.len();
    let mut sorted = savings.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = savings.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let squared: f64 = savings.iter().map(|value| (value - mean).powi(2)).sum();
        (squared / (n - 1) as f64).sqrt()
    } else {
        0.0
    };
    let positive = savings.iter().filter(|value| **value > 0.0).count();

    SavingsStats {
        mean,
        median: value_f64_sorted(&sorted, 0.5),
        std,
        min: sorted[0],
        max: sorted[n - 1],
        p10: value_f64_sorted(&sorted, 0.1),
        p90: value_f64_sorted(&sorted, 0.9),
        prob_positive: positive as f64 / n as f64,
    }
}

/// Bins the savings sequence into [`HISTOGRAM_BINS`] fixed-width bins over
/// `[min, max]`. The maximum value is clamped into the last bin. When all
/// savings are identical the range is empty and a single bin holds every
/// count.
pub fn histogram(savings: &[f64]) -> Vec<HistogramBin> {
    let min = savings.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = savings.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= 0.0 {
        return vec![HistogramBin {
            lower_edge: min.round(),
            count: savings.len(),
        }];
    }

    let width = range / HISTOGRAM_BINS as f64;
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for value in savings {
        let index = (((value - min) / width).floor() as usize).min(HISTOGRAM_BINS - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| HistogramBin {
            lower_edge: (min + index as f64 * width).round(),
            count,
        })
        .collect()
}
