use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use levelplot::core::{LevelDetector, OhlcBar, confirm_levels};

fn synthetic_bars(count: usize, wave_period: usize) -> Vec<OhlcBar> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let wave = ((i % wave_period) as f64 / wave_period as f64 * std::f64::consts::TAU)
                .sin()
                * 4.0;
            let base = 100.0 + wave;
            let open = base;
            let close = if i % 2 == 0 { base + 0.5 } else { base - 0.5 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            OhlcBar::new(t, open, high, low, close).expect("valid generated bar")
        })
        .collect()
}

fn bench_level_detection_10k(c: &mut Criterion) {
    let bars = synthetic_bars(10_000, 390);
    let detector = LevelDetector::default();

    c.bench_function("level_detection_10k", |b| {
        b.iter(|| {
            let _ = detector
                .detect(black_box(&bars))
                .expect("detection should succeed");
        })
    });
}

fn bench_confirmation_3_frames(c: &mut Criterion) {
    let bars_1m = synthetic_bars(10_000, 390);
    let bars_5m = synthetic_bars(2_000, 78);
    let bars_15m = synthetic_bars(667, 26);
    let bars_1h = synthetic_bars(167, 7);

    let levels = LevelDetector::default()
        .detect(&bars_1m)
        .expect("detection should succeed");
    let frames: Vec<&[OhlcBar]> = vec![&bars_5m, &bars_15m, &bars_1h];

    c.bench_function("confirmation_3_frames", |b| {
        b.iter(|| {
            let _ = confirm_levels(black_box(&levels), black_box(&frames), black_box(0.5));
        })
    });
}

criterion_group!(benches, bench_level_detection_10k, bench_confirmation_3_frames);
criterion_main!(benches);
