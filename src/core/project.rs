use serde::{Deserialize, Serialize};

use crate::core::{ClipPoint, Viewport};
use crate::error::{GraphError, GraphResult};

/// Tuning for the empirically chosen layout margins and drawing sizes.
///
/// The vertical divisor compresses the curve into a narrower band and the
/// baseline offset lifts it off the bottom edge, reserving room for axis
/// labels and the hovered-point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphTuning {
    /// Divisor applied to the clip-to-graph vertical map. `2.0` uses the full
    /// height; larger values compress the curve band.
    pub y_denominator: f64,
    /// Logical pixels the curve band is lifted above the baseline.
    pub y_offset_px: f64,
    pub price_label_count: usize,
    pub date_label_count: usize,
    pub stroke_width_px: f64,
    pub marker_diameter_px: f64,
}

impl Default for GraphTuning {
    fn default() -> Self {
        Self {
            y_denominator: 2.2,
            y_offset_px: 12.0,
            price_label_count: 4,
            date_label_count: 4,
            stroke_width_px: 2.0,
            marker_diameter_px: 16.0,
        }
    }
}

impl GraphTuning {
    pub fn validate(self) -> GraphResult<Self> {
        if !self.y_denominator.is_finite() || self.y_denominator < 2.0 {
            return Err(GraphError::InvalidData(
                "vertical divisor must be finite and >= 2".to_owned(),
            ));
        }
        if !self.y_offset_px.is_finite() || self.y_offset_px < 0.0 {
            return Err(GraphError::InvalidData(
                "baseline offset must be finite and >= 0".to_owned(),
            ));
        }
        if self.price_label_count == 0 || self.date_label_count == 0 {
            return Err(GraphError::InvalidData(
                "label counts must be >= 1".to_owned(),
            ));
        }
        if !self.stroke_width_px.is_finite() || self.stroke_width_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_diameter_px.is_finite() || self.marker_diameter_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "marker diameter must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// A point in logical canvas pixel space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Composes the clip-space -> graph-space -> canvas-space transforms for one
/// viewport. Pure and stateless; rebuilt on every pass so a resize can never
/// leave stale constants behind.
///
/// Device-pixel scaling is intentionally not part of this mapper: layout math
/// stays in logical pixels and backends apply the ratio carried on the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphProjection {
    graph_width: f64,
    graph_depth: f64,
    y_denominator: f64,
    y_offset_px: f64,
}

impl GraphProjection {
    pub fn new(viewport: Viewport, tuning: GraphTuning) -> GraphResult<Self> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let tuning = tuning.validate()?;

        Ok(Self {
            graph_width: f64::from(viewport.width),
            graph_depth: f64::from(viewport.height),
            y_denominator: tuning.y_denominator,
            y_offset_px: tuning.y_offset_px,
        })
    }

    #[must_use]
    pub fn graph_width(self) -> f64 {
        self.graph_width
    }

    #[must_use]
    pub fn graph_depth(self) -> f64 {
        self.graph_depth
    }

    /// Canvas y of graph-space zero, where the area fill closes.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.graph_depth
    }

    #[must_use]
    pub fn clip_x_to_canvas(self, clip_x: f64) -> f64 {
        (clip_x + 1.0) / 2.0 * self.graph_width
    }

    /// Maps clip y through the compressed graph band, then flips so data "up"
    /// renders toward the top of the canvas.
    #[must_use]
    pub fn clip_y_to_canvas(self, clip_y: f64) -> f64 {
        let graph_y = (clip_y + 1.0) / self.y_denominator * self.graph_depth + self.y_offset_px;
        self.graph_depth - graph_y
    }

    #[must_use]
    pub fn clip_to_canvas(self, point: ClipPoint) -> CanvasPoint {
        CanvasPoint {
            x: self.clip_x_to_canvas(point.x),
            y: self.clip_y_to_canvas(point.y),
        }
    }

    /// Inverse of the horizontal transform, used to resolve pointer pixels
    /// back into clip space.
    #[must_use]
    pub fn canvas_x_to_clip(self, canvas_x: f64) -> f64 {
        canvas_x / self.graph_width * 2.0 - 1.0
    }

    /// Whether a pointer x in logical pixels falls inside the drawable area.
    #[must_use]
    pub fn contains_canvas_x(self, canvas_x: f64) -> bool {
        canvas_x.is_finite() && canvas_x >= 0.0 && canvas_x <= self.graph_width
    }
}
