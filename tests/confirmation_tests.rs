use levelplot::core::{DEFAULT_CONFIRM_TOLERANCE, OhlcBar, confirm_levels};

fn bar_with_extremes(time: f64, high: f64, low: f64) -> OhlcBar {
    let mid = (high + low) / 2.0;
    OhlcBar::new(time, mid, high, low, mid).expect("valid ohlc")
}

#[test]
fn level_must_reappear_in_every_higher_frame() {
    let levels = [100.0, 110.0];
    // 5m frame touches both levels, 15m frame only the first.
    let frame_5m = vec![
        bar_with_extremes(0.0, 100.3, 98.0),
        bar_with_extremes(300.0, 110.1, 105.0),
    ];
    let frame_15m = vec![bar_with_extremes(0.0, 100.4, 99.8)];

    let frames: Vec<&[OhlcBar]> = vec![&frame_5m, &frame_15m];
    let confirmed = confirm_levels(&levels, &frames, DEFAULT_CONFIRM_TOLERANCE);
    assert_eq!(confirmed, vec![100.0]);
}

#[test]
fn low_side_touches_confirm_as_well() {
    let levels = [100.0];
    let frame = vec![bar_with_extremes(0.0, 120.0, 100.2)];
    let frames: Vec<&[OhlcBar]> = vec![&frame];

    let confirmed = confirm_levels(&levels, &frames, DEFAULT_CONFIRM_TOLERANCE);
    assert_eq!(confirmed, vec![100.0]);
}

#[test]
fn no_higher_frames_confirms_everything() {
    let levels = [100.0, 110.0, 120.0];
    let confirmed = confirm_levels(&levels, &[], DEFAULT_CONFIRM_TOLERANCE);
    assert_eq!(confirmed, levels.to_vec());
}

#[test]
fn an_empty_frame_confirms_nothing() {
    let levels = [100.0, 110.0];
    let empty: Vec<OhlcBar> = Vec::new();
    let frames: Vec<&[OhlcBar]> = vec![&empty];

    let confirmed = confirm_levels(&levels, &frames, DEFAULT_CONFIRM_TOLERANCE);
    assert!(confirmed.is_empty());
}

#[test]
fn tolerance_is_exclusive() {
    let levels = [100.0];
    let frame = vec![bar_with_extremes(0.0, 100.5, 99.5)];
    let frames: Vec<&[OhlcBar]> = vec![&frame];

    // |100.5 - 100.0| == 0.5 is not "within" the reference tolerance,
    // but the low side |99.5 - 100.0| == 0.5 is excluded too.
    assert!(confirm_levels(&levels, &frames, 0.5).is_empty());
    assert_eq!(confirm_levels(&levels, &frames, 0.51), vec![100.0]);
}
