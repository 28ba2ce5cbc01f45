use approx::assert_relative_eq;
use proptest::prelude::*;
use price_graph::core::{
    ClipScale, GraphProjection, GraphTuning, PricePoint, Viewport, sample_for_width,
};

fn arbitrary_series(max_len: usize) -> impl Strategy<Value = Vec<PricePoint>> {
    prop::collection::vec((0i64..1_000_000, 1.0f64..100_000.0), 0..max_len).prop_map(|raw| {
        let mut points: Vec<PricePoint> = raw
            .into_iter()
            .map(|(unix, price)| PricePoint::new(unix, price))
            .collect();
        points.sort_by_key(|point| point.unix);
        points
    })
}

proptest! {
    #[test]
    fn sampler_length_obeys_the_bound(values in arbitrary_series(5_000), width in 1u32..2_000) {
        let sampled = sample_for_width(&values, width);

        let len = values.len();
        if len == 0 {
            prop_assert!(sampled.is_empty());
        } else {
            let stride = len.div_ceil(width as usize);
            prop_assert_eq!(sampled.len(), len.min(len.div_ceil(stride)));
            prop_assert!(sampled.len() <= width as usize + 1);
            prop_assert_eq!(sampled[0].unix, values[0].unix);
        }
    }

    #[test]
    fn clip_scale_is_monotonic_over_its_domain(
        min in -1.0e9f64..1.0e9,
        span in 1.0e-6f64..1.0e9,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let scale = ClipScale::from_domain(min, min + span);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let clip_low = scale.to_clip(min + span * low);
        let clip_high = scale.to_clip(min + span * high);
        prop_assert!(clip_low <= clip_high);
    }

    #[test]
    fn horizontal_projection_round_trips(
        width in 1u32..4_000,
        height in 1u32..4_000,
        clip_x in -1.0f64..1.0,
    ) {
        let projection = GraphProjection::new(Viewport::new(width, height), GraphTuning::default())
            .expect("valid projection");
        let recovered = projection.canvas_x_to_clip(projection.clip_x_to_canvas(clip_x));
        assert_relative_eq!(recovered, clip_x, epsilon = 1e-9);
    }

    #[test]
    fn clip_values_stay_inside_clip_space(values in arbitrary_series(500)) {
        prop_assume!(!values.is_empty());
        let sampled = sample_for_width(&values, 400);
        let scales = price_graph::core::GraphScales::from_sample(&sampled)
            .expect("non-empty sample");
        for point in scales.clip_points(&sampled) {
            prop_assert!((-1.0..=1.0).contains(&point.x));
            prop_assert!((-1.0..=1.0).contains(&point.y));
        }
    }
}
