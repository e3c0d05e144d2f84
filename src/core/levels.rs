use ordered_float::NotNan;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::OhlcBar;
use crate::core::peaks::{find_peaks, find_troughs};
use crate::error::{ChartError, ChartResult};

/// Detects significant price levels from prominent highs and lows.
///
/// Prominent peak highs and trough lows are merged, sorted, clustered by a
/// distance relative to the series' full price range, and each cluster is
/// collapsed to its mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelDetector {
    /// Minimum topographic prominence for a high/low to count.
    pub prominence: f64,
    /// Cluster width as a percentage of the full price range.
    pub cluster_distance_factor: f64,
}

impl Default for LevelDetector {
    fn default() -> Self {
        Self {
            prominence: 2.0,
            cluster_distance_factor: 0.5,
        }
    }
}

impl LevelDetector {
    #[must_use]
    pub fn new(prominence: f64, cluster_distance_factor: f64) -> Self {
        Self {
            prominence,
            cluster_distance_factor,
        }
    }

    /// Returns significant levels in ascending price order.
    ///
    /// An input with no sufficiently prominent highs or lows yields an empty
    /// vec; an empty candle series or non-positive parameters are errors.
    pub fn detect(&self, bars: &[OhlcBar]) -> ChartResult<Vec<f64>> {
        if bars.is_empty() {
            return Err(ChartError::InvalidData(
                "level detection requires at least one candle".to_owned(),
            ));
        }
        if !(self.prominence > 0.0) || !(self.cluster_distance_factor > 0.0) {
            return Err(ChartError::InvalidData(
                "level detector parameters must be positive".to_owned(),
            ));
        }

        let highs: Vec<f64> = bars.iter().map(|bar| bar.high).collect();
        let lows: Vec<f64> = bars.iter().map(|bar| bar.low).collect();

        let max_high = highs.iter().copied().fold(f64::MIN, f64::max);
        let min_low = lows.iter().copied().fold(f64::MAX, f64::min);
        let price_range = max_high - min_low;
        let cluster_distance = price_range * self.cluster_distance_factor / 100.0;

        let mut merged: Vec<NotNan<f64>> = Vec::new();
        for idx in find_peaks(&highs, self.prominence) {
            merged.push(NotNan::new(highs[idx]).map_err(|_| {
                ChartError::InvalidData("peak level must not be NaN".to_owned())
            })?);
        }
        for idx in find_troughs(&lows, self.prominence) {
            merged.push(NotNan::new(lows[idx]).map_err(|_| {
                ChartError::InvalidData("trough level must not be NaN".to_owned())
            })?);
        }

        if merged.is_empty() {
            debug!(candles = bars.len(), "no prominent highs or lows");
            return Ok(Vec::new());
        }
        merged.sort_unstable();

        let mut levels = Vec::new();
        let mut cluster: SmallVec<[f64; 8]> = SmallVec::new();
        for level in merged {
            let level = level.into_inner();
            if let Some(&last) = cluster.last() {
                if level - last > cluster_distance {
                    levels.push(cluster_mean(&cluster));
                    cluster.clear();
                }
            }
            cluster.push(level);
        }
        levels.push(cluster_mean(&cluster));

        debug!(
            candles = bars.len(),
            raw_levels = levels.len(),
            cluster_distance,
            "detected significant levels"
        );
        Ok(levels)
    }
}

fn cluster_mean(cluster: &[f64]) -> f64 {
    cluster.iter().sum::<f64>() / cluster.len() as f64
}
