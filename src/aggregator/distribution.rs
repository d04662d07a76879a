//! Chart-ready series derived from the metrics amount sequence.

use super::metrics::LedgerMetrics;
use crate::utils::config::{MAX_HISTOGRAM_BINS, MIN_HISTOGRAM_BINS};
use log::debug;
use serde::{Deserialize, Serialize};

/// One equal-width histogram bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Histogram plus running volume for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub histogram: Vec<HistogramBin>,
    pub cumulative_volume: Vec<f64>,
}

/// Bin count for a sample of `value_count` amounts: half the sample, at least 5
pub fn default_bin_count(value_count: usize) -> usize {
    MIN_HISTOGRAM_BINS.max(value_count / 2)
}

/// Bucket values into `bins` equal-width bins over `[min, max]`
///
/// The last bin is closed so the maximum lands in it. Identical values
/// collapse into a single bin, as does a range too wide to represent.
/// `bins` is capped at `MAX_HISTOGRAM_BINS`.
pub fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let bins = bins.min(MAX_HISTOGRAM_BINS);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let width = (max - min) / bins as f64;
    if max == min || !width.is_finite() {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let mut counts = vec![0usize; bins];
    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i == bins - 1 {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Running total of amounts in ledger order
pub fn cumulative_volume(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |running, value| {
            *running += value;
            Some(*running)
        })
        .collect()
}

/// Distribution for a metrics record; `None` when amounts are unavailable
pub fn describe_distribution(metrics: &LedgerMetrics, bins: Option<usize>) -> Option<Distribution> {
    if !metrics.has_amounts() {
        return None;
    }

    let requested = bins.unwrap_or_else(|| default_bin_count(metrics.amounts.len()));
    let bins = requested.min(MAX_HISTOGRAM_BINS);
    if bins < requested {
        debug!("Histogram bins capped at {} (requested {})", bins, requested);
    }
    debug!("Building {}-bin histogram over {} amounts", bins, metrics.amounts.len());

    Some(Distribution {
        histogram: build_histogram(&metrics.amounts, bins),
        cumulative_volume: cumulative_volume(&metrics.amounts),
    })
}
