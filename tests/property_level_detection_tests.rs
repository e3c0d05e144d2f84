use proptest::prelude::*;

use levelplot::core::{LevelDetector, OhlcBar, confirm_levels};

fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<OhlcBar>> {
    prop::collection::vec(
        (10.0f64..500.0, 0.0f64..50.0, 0.0f64..1.0, 0.0f64..1.0),
        1..max_len,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (low, spread, open_factor, close_factor))| {
                let high = low + spread;
                let open = low + open_factor * spread;
                let close = low + close_factor * spread;
                OhlcBar::new(i as f64, open, high, low, close).expect("generated bar is valid")
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn levels_stay_inside_the_observed_price_range(bars in arb_series(64)) {
        let levels = LevelDetector::new(1.0, 0.5).detect(&bars).expect("detect");

        let max_high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let min_low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);

        for level in levels {
            prop_assert!(level >= min_low - 1e-9);
            prop_assert!(level <= max_high + 1e-9);
        }
    }

    #[test]
    fn levels_are_sorted_ascending(bars in arb_series(64)) {
        let levels = LevelDetector::new(1.0, 0.5).detect(&bars).expect("detect");
        for pair in levels.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn widening_the_cluster_factor_never_increases_level_count(bars in arb_series(64)) {
        let narrow = LevelDetector::new(1.0, 0.1).detect(&bars).expect("detect");
        let wide = LevelDetector::new(1.0, 5.0).detect(&bars).expect("detect");
        prop_assert!(wide.len() <= narrow.len());
    }

    #[test]
    fn confirmation_only_removes_levels(bars in arb_series(64), frame in arb_series(32)) {
        let levels = LevelDetector::new(1.0, 0.5).detect(&bars).expect("detect");
        let frames: Vec<&[OhlcBar]> = vec![&frame];
        let confirmed = confirm_levels(&levels, &frames, 0.5);

        prop_assert!(confirmed.len() <= levels.len());
        for level in &confirmed {
            prop_assert!(levels.contains(level));
        }
    }
}
