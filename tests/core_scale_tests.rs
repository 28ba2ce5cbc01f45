use price_graph::core::{ClipScale, GraphScales, PricePoint};

#[test]
fn clip_scale_maps_domain_ends_onto_clip_ends() {
    let scale = ClipScale::from_domain(90.0, 110.0);
    assert_eq!(scale.to_clip(90.0), -1.0);
    assert_eq!(scale.to_clip(110.0), 1.0);
}

#[test]
fn clip_scale_is_monotonic_non_decreasing() {
    let scale = ClipScale::from_domain(10.0, 5_000.0);
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=100 {
        let value = 10.0 + (step as f64) * 49.9;
        let clip = scale.to_clip(value);
        assert!(clip >= previous);
        previous = clip;
    }
}

#[test]
fn flat_series_maps_to_chart_center_without_dividing_by_zero() {
    let sample = vec![
        PricePoint::new(1_000, 50.0),
        PricePoint::new(2_000, 50.0),
        PricePoint::new(3_000, 50.0),
    ];
    let scales = GraphScales::from_sample(&sample).expect("non-empty sample");

    for point in &sample {
        assert_eq!(scales.price_to_clip_y(point.price), 0.0);
    }
}

#[test]
fn single_point_sample_maps_both_axes_to_center() {
    let sample = vec![PricePoint::new(1_000, 42.0)];
    let scales = GraphScales::from_sample(&sample).expect("non-empty sample");

    assert_eq!(scales.price_to_clip_y(42.0), 0.0);
    assert_eq!(scales.unix_to_clip_x(1_000), 0.0);
}

#[test]
fn three_point_scenario_spans_the_price_domain() {
    let sample = vec![
        PricePoint::new(1_000, 100.0),
        PricePoint::new(2_000, 110.0),
        PricePoint::new(3_000, 90.0),
    ];
    let scales = GraphScales::from_sample(&sample).expect("non-empty sample");

    assert_eq!(scales.price_scale().domain(), (90.0, 110.0));
    assert_eq!(scales.price_to_clip_y(90.0), -1.0);
    assert_eq!(scales.price_to_clip_y(110.0), 1.0);

    let middle = scales.price_to_clip_y(100.0);
    assert!(middle > -1.0 && middle < 1.0);
}

#[test]
fn clip_points_preserve_input_order_and_raw_values() {
    let sample = vec![
        PricePoint::new(1_000, 100.0),
        PricePoint::new(2_000, 110.0),
        PricePoint::new(3_000, 90.0),
    ];
    let scales = GraphScales::from_sample(&sample).expect("non-empty sample");
    let clip_points = scales.clip_points(&sample);

    assert_eq!(clip_points.len(), sample.len());
    for (clip, raw) in clip_points.iter().zip(&sample) {
        assert_eq!(clip.price, raw.price);
        assert_eq!(clip.unix, raw.unix);
        assert!((-1.0..=1.0).contains(&clip.x));
        assert!((-1.0..=1.0).contains(&clip.y));
    }
    for pair in clip_points.windows(2) {
        assert!(pair[0].x <= pair[1].x);
    }
}

#[test]
fn ticks_are_deterministic_and_span_the_domain() {
    let sample = vec![
        PricePoint::new(1_000, 90.0),
        PricePoint::new(2_000, 110.0),
    ];
    let scales = GraphScales::from_sample(&sample).expect("non-empty sample");

    let first = scales.price_ticks(4);
    let second = scales.price_ticks(4);
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert_eq!(first[0], 90.0);
    assert_eq!(*first.last().expect("non-empty ticks"), 110.0);

    let times = scales.time_ticks(4);
    assert_eq!(times[0], 1_000);
    assert_eq!(*times.last().expect("non-empty ticks"), 2_000);
}

#[test]
fn degenerate_domain_collapses_to_a_single_tick() {
    let sample = vec![PricePoint::new(1_000, 50.0), PricePoint::new(2_000, 50.0)];
    let scales = GraphScales::from_sample(&sample).expect("non-empty sample");

    assert_eq!(scales.price_ticks(4), vec![50.0]);
}

#[test]
fn empty_sample_builds_no_scales() {
    assert!(GraphScales::from_sample(&[]).is_none());
}
