use tracing::debug;

#[cfg(feature = "parallel-confirm")]
use rayon::prelude::*;

use crate::core::OhlcBar;

/// Price tolerance used by the reference multi-timeframe analysis.
pub const DEFAULT_CONFIRM_TOLERANCE: f64 = 0.5;

/// Keeps only levels that reappear in every higher-timeframe series.
///
/// A level is confirmed by a series when at least one bar's high or low lies
/// within `tolerance` of it. With no higher frames every level is confirmed;
/// an empty frame confirms nothing.
#[must_use]
pub fn confirm_levels(levels: &[f64], higher_frames: &[&[OhlcBar]], tolerance: f64) -> Vec<f64> {
    let confirmed: Vec<f64> = levels
        .iter()
        .copied()
        .filter(|&level| {
            higher_frames
                .iter()
                .all(|frame| frame_touches_level(frame, level, tolerance))
        })
        .collect();

    debug!(
        candidates = levels.len(),
        confirmed = confirmed.len(),
        frames = higher_frames.len(),
        tolerance,
        "confirmed levels against higher timeframes"
    );
    confirmed
}

#[cfg(not(feature = "parallel-confirm"))]
fn frame_touches_level(frame: &[OhlcBar], level: f64, tolerance: f64) -> bool {
    frame
        .iter()
        .any(|bar| (bar.high - level).abs() < tolerance || (bar.low - level).abs() < tolerance)
}

#[cfg(feature = "parallel-confirm")]
fn frame_touches_level(frame: &[OhlcBar], level: f64, tolerance: f64) -> bool {
    frame
        .par_iter()
        .any(|bar| (bar.high - level).abs() < tolerance || (bar.low - level).abs() < tolerance)
}
