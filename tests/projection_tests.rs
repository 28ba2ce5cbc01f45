use approx::assert_relative_eq;
use price_graph::core::{ClipPoint, GraphProjection, GraphTuning, Viewport};
use price_graph::error::GraphError;

fn projection(width: u32, height: u32) -> GraphProjection {
    GraphProjection::new(Viewport::new(width, height), GraphTuning::default())
        .expect("valid projection")
}

#[test]
fn horizontal_round_trip_recovers_clip_x() {
    let projection = projection(800, 300);

    for clip_x in [-1.0, -0.5, 0.0, 0.25, 0.731, 1.0] {
        let canvas_x = projection.clip_x_to_canvas(clip_x);
        let recovered = projection.canvas_x_to_clip(canvas_x);
        assert_relative_eq!(recovered, clip_x, epsilon = 1e-12);
    }
}

#[test]
fn clip_ends_map_onto_canvas_edges_horizontally() {
    let projection = projection(800, 300);
    assert_eq!(projection.clip_x_to_canvas(-1.0), 0.0);
    assert_eq!(projection.clip_x_to_canvas(1.0), 800.0);
}

#[test]
fn higher_prices_render_toward_the_top() {
    let projection = projection(800, 300);
    let low = projection.clip_y_to_canvas(-1.0);
    let high = projection.clip_y_to_canvas(1.0);
    // Canvas y grows downward, so the higher clip value has the smaller y.
    assert!(high < low);
}

#[test]
fn vertical_band_stays_inside_the_frame_with_default_margins() {
    let projection = projection(800, 300);
    for step in 0..=20 {
        let clip_y = -1.0 + (step as f64) / 10.0;
        let canvas_y = projection.clip_y_to_canvas(clip_y);
        assert!(canvas_y >= 0.0 && canvas_y <= 300.0, "clip_y={clip_y}");
    }
}

#[test]
fn baseline_offset_reserves_bottom_margin() {
    let projection = projection(800, 300);
    // Clip-space bottom sits one offset above the fill baseline.
    let tuning = GraphTuning::default();
    assert_eq!(
        projection.clip_y_to_canvas(-1.0),
        projection.baseline_y() - tuning.y_offset_px
    );
}

#[test]
fn clip_point_maps_through_both_axes() {
    let projection = projection(100, 50);
    let mapped = projection.clip_to_canvas(ClipPoint {
        x: 0.0,
        y: -1.0,
        price: 10.0,
        unix: 1_000,
    });
    assert_eq!(mapped.x, 50.0);
    assert_eq!(mapped.y, 50.0 - 12.0);
}

#[test]
fn pointer_containment_matches_the_drawable_area() {
    let projection = projection(800, 300);
    assert!(projection.contains_canvas_x(0.0));
    assert!(projection.contains_canvas_x(800.0));
    assert!(!projection.contains_canvas_x(-0.001));
    assert!(!projection.contains_canvas_x(800.001));
    assert!(!projection.contains_canvas_x(f64::NAN));
}

#[test]
fn invalid_viewport_is_rejected() {
    let result = GraphProjection::new(Viewport::new(0, 300), GraphTuning::default());
    assert!(matches!(
        result,
        Err(GraphError::InvalidViewport { width: 0, .. })
    ));
}

#[test]
fn tuning_that_expands_past_the_frame_is_rejected() {
    let tuning = GraphTuning {
        y_denominator: 1.5,
        ..GraphTuning::default()
    };
    assert!(tuning.validate().is_err());

    let tuning = GraphTuning {
        y_offset_px: -1.0,
        ..GraphTuning::default()
    };
    assert!(tuning.validate().is_err());

    let tuning = GraphTuning {
        price_label_count: 0,
        ..GraphTuning::default()
    };
    assert!(tuning.validate().is_err());
}

#[test]
fn projection_is_rebuilt_per_viewport_without_stale_constants() {
    let small = projection(400, 200);
    let large = projection(800, 400);
    assert_eq!(small.clip_x_to_canvas(1.0), 400.0);
    assert_eq!(large.clip_x_to_canvas(1.0), 800.0);
}
