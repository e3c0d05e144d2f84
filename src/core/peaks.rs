//! Prominence-based peak detection over price series.
//!
//! A peak is a strict local maximum (plateaus collapse to their midpoint).
//! Its prominence is the drop from the peak to the higher of the two lowest
//! points separating it from higher terrain (or the series edge) on each side.

/// Returns indices of local maxima whose prominence is at least `prominence`.
///
/// Series edges never qualify as peaks. Non-finite prominences (from
/// non-finite samples) never pass the threshold.
#[must_use]
pub fn find_peaks(values: &[f64], prominence: f64) -> Vec<usize> {
    local_maxima(values)
        .into_iter()
        .filter(|&idx| peak_prominence(values, idx) >= prominence)
        .collect()
}

/// Returns indices of local minima with at least `prominence`, by running
/// peak detection over the negated series.
#[must_use]
pub fn find_troughs(values: &[f64], prominence: f64) -> Vec<usize> {
    let negated: Vec<f64> = values.iter().map(|v| -v).collect();
    find_peaks(&negated, prominence)
}

fn local_maxima(values: &[f64]) -> Vec<usize> {
    let mut maxima = Vec::new();
    if values.len() < 3 {
        return maxima;
    }

    let mut i = 1;
    while i < values.len() - 1 {
        if values[i] <= values[i - 1] {
            i += 1;
            continue;
        }

        // Ascent confirmed; scan across a possible plateau.
        let plateau_start = i;
        let mut j = i;
        while j + 1 < values.len() && values[j + 1] == values[i] {
            j += 1;
        }

        if j + 1 < values.len() && values[j + 1] < values[i] {
            maxima.push(plateau_start + (j - plateau_start) / 2);
        }
        i = j + 1;
    }

    maxima
}

fn peak_prominence(values: &[f64], peak: usize) -> f64 {
    let height = values[peak];

    let mut left_base = height;
    for &value in values[..peak].iter().rev() {
        if value > height {
            break;
        }
        if value < left_base {
            left_base = value;
        }
    }

    let mut right_base = height;
    for &value in &values[peak + 1..] {
        if value > height {
            break;
        }
        if value < right_base {
            right_base = value;
        }
    }

    height - left_base.max(right_base)
}
