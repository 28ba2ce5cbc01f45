use serde::{Deserialize, Serialize};

use crate::core::CanvasPoint;

/// Deterministic geometry for the filled-area chart body.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline,
/// anchored at the left and right canvas edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<CanvasPoint>,
    pub fill_polygon: Vec<CanvasPoint>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Builds the area geometry from canvas-space points.
///
/// The fill path is baseline-left, the sampled curve, baseline-right; the
/// stroked line covers the curve alone, never the baseline closure.
#[must_use]
pub fn project_area_geometry(
    points: &[CanvasPoint],
    graph_width: f64,
    baseline_y: f64,
) -> AreaGeometry {
    if points.is_empty() {
        return AreaGeometry::empty();
    }

    let mut fill_polygon = Vec::with_capacity(points.len() + 3);
    fill_polygon.push(CanvasPoint {
        x: 0.0,
        y: baseline_y,
    });
    fill_polygon.extend(points.iter().copied());
    fill_polygon.push(CanvasPoint {
        x: graph_width,
        y: baseline_y,
    });
    // Repeat the first baseline vertex so consumers can render this as a
    // closed polygon without implicit closure rules.
    fill_polygon.push(CanvasPoint {
        x: 0.0,
        y: baseline_y,
    });

    AreaGeometry {
        line_points: points.to_vec(),
        fill_polygon,
    }
}
