use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::api::colors::{GRID_COLOR, LABEL_COLOR, LABEL_FONT_SIZE_PX, palette};
use crate::api::labels::{GridLine, PositionedLabel, layout_date_labels, layout_price_labels};
use crate::core::{
    ClipPoint, GraphProjection, GraphScales, GraphTuning, PeriodConfig, PricePoint,
    TrendDirection, Viewport, project_area_geometry, sample_for_width,
};
use crate::error::{GraphError, GraphResult};
use crate::interaction::ActivePoint;
use crate::render::{
    AreaPrimitive, CirclePrimitive, LinePrimitive, PathVertex, PolylinePrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

const GUIDE_STROKE_WIDTH_PX: f64 = 1.0;
const GRID_STROKE_WIDTH_PX: f64 = 1.0;

/// Immutable inputs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput {
    pub values: Vec<PricePoint>,
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub period: PeriodConfig,
    pub trend: TrendDirection,
    pub loading: bool,
}

impl GraphInput {
    #[must_use]
    pub fn new(values: Vec<PricePoint>, viewport: Viewport) -> Self {
        Self {
            values,
            viewport,
            device_pixel_ratio: 1.0,
            period: PeriodConfig::default(),
            trend: TrendDirection::Neutral,
            loading: false,
        }
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_period(mut self, period: PeriodConfig) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn with_trend(mut self, trend: TrendDirection) -> Self {
        self.trend = trend;
        self
    }

    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Per-pass pointer resolution state: the sampled clip points and the
/// projection needed to invert pointer pixels back into clip space.
///
/// The scan is linear over the *sampled* sequence, so its cost is bounded by
/// the pixel width regardless of raw series length.
#[derive(Debug, Clone, PartialEq)]
pub struct HitTester {
    clip_points: Vec<ClipPoint>,
    projection: Option<GraphProjection>,
}

impl HitTester {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            clip_points: Vec::new(),
            projection: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clip_points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clip_points.is_empty()
    }

    /// Resolves a pointer x in logical canvas pixels to the nearest sample.
    ///
    /// Ties resolve to the first point in sequence order. A pointer outside
    /// the drawable area resolves to no point, never an error.
    #[must_use]
    pub fn resolve_at_x(&self, pointer_x: f64) -> Option<ActivePoint> {
        let projection = self.projection?;
        if !projection.contains_canvas_x(pointer_x) {
            return None;
        }

        let pointer_clip_x = projection.canvas_x_to_clip(pointer_x);
        let mut best: Option<(OrderedFloat<f64>, ClipPoint)> = None;
        for point in &self.clip_points {
            let dist = OrderedFloat((point.x - pointer_clip_x).abs());
            match best {
                Some((current, _)) if current <= dist => {}
                _ => best = Some((dist, *point)),
            }
        }

        best.map(|(_, point)| ActivePoint {
            canvas_x: projection.clip_x_to_canvas(point.x),
            canvas_y: projection.clip_y_to_canvas(point.y),
            price: point.price,
            unix: point.unix,
        })
    }
}

/// Everything one render pass produces for the host: the backend-agnostic
/// frame, the positioned labels and grid lines, and the pass's hit tester.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphScene {
    pub frame: RenderFrame,
    pub price_labels: Vec<PositionedLabel>,
    pub date_labels: Vec<PositionedLabel>,
    pub grid_lines: Vec<GridLine>,
    pub hit_test: HitTester,
}

impl GraphScene {
    fn empty(viewport: Viewport, device_pixel_ratio: f64) -> Self {
        Self {
            frame: RenderFrame::new(viewport, device_pixel_ratio),
            price_labels: Vec::new(),
            date_labels: Vec::new(),
            grid_lines: Vec::new(),
            hit_test: HitTester::empty(),
        }
    }

    /// Folds labels and grid lines into draw primitives for single-surface
    /// backends that have no separate label layer.
    #[must_use]
    pub fn composited_frame(&self) -> RenderFrame {
        let mut frame = self.frame.clone();
        let width = f64::from(frame.viewport.width);
        let depth = f64::from(frame.viewport.height);

        for grid_line in &self.grid_lines {
            let line = match grid_line {
                GridLine::Horizontal { top } => {
                    LinePrimitive::new(0.0, *top, width, *top, GRID_STROKE_WIDTH_PX, GRID_COLOR)
                }
                GridLine::Vertical { left } => {
                    LinePrimitive::new(*left, 0.0, *left, depth, GRID_STROKE_WIDTH_PX, GRID_COLOR)
                }
            };
            frame.lines.push(line);
        }

        for label in &self.price_labels {
            frame.texts.push(TextPrimitive::new(
                label.text.clone(),
                label.left + 2.0,
                label.top,
                LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Left,
            ));
        }
        for label in &self.date_labels {
            // Date labels sit below the drawable area in layered hosts; a
            // single raster surface has to pull them up inside the frame.
            frame.texts.push(TextPrimitive::new(
                label.text.clone(),
                label.left,
                (label.top - LABEL_FONT_SIZE_PX - 4.0).max(0.0),
                LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Center,
            ));
        }

        frame
    }
}

/// Builds the full scene for one render pass: sample, fit scales, project,
/// emit draw primitives and label layout. Pure: identical inputs produce an
/// identical scene.
///
/// `active` is the currently hovered point, if any; it forces the neutral
/// palette and adds the guide line and marker highlight.
pub fn build_scene(
    input: &GraphInput,
    tuning: GraphTuning,
    active: Option<ActivePoint>,
) -> GraphResult<GraphScene> {
    let tuning = tuning.validate()?;
    if !input.viewport.is_valid() {
        return Err(GraphError::InvalidViewport {
            width: input.viewport.width,
            height: input.viewport.height,
        });
    }
    if !input.device_pixel_ratio.is_finite() || input.device_pixel_ratio <= 0.0 {
        return Err(GraphError::InvalidData(
            "device pixel ratio must be finite and > 0".to_owned(),
        ));
    }

    let values = canonicalize_values(&input.values);
    if input.loading || values.is_empty() {
        return Ok(GraphScene::empty(input.viewport, input.device_pixel_ratio));
    }

    let sample = sample_for_width(&values, input.viewport.width);
    let Some(scales) = GraphScales::from_sample(&sample) else {
        return Ok(GraphScene::empty(input.viewport, input.device_pixel_ratio));
    };
    let projection = GraphProjection::new(input.viewport, tuning)?;

    let clip_points = scales.clip_points(&sample);
    let canvas_points: Vec<_> = clip_points
        .iter()
        .map(|point| projection.clip_to_canvas(*point))
        .collect();

    // Interaction overrides trend color for the whole pass.
    let trend = if active.is_some() {
        TrendDirection::Neutral
    } else {
        input.trend
    };
    let colors = palette(trend);

    let mut frame = RenderFrame::new(input.viewport, input.device_pixel_ratio);

    let area = project_area_geometry(&canvas_points, projection.graph_width(), projection.baseline_y());
    frame.areas.push(AreaPrimitive::new(
        area.fill_polygon
            .iter()
            .map(|point| PathVertex::new(point.x, point.y))
            .collect(),
        colors.fill_gradient(),
    ));
    if area.line_points.len() >= 2 {
        frame.polylines.push(PolylinePrimitive::new(
            area.line_points
                .iter()
                .map(|point| PathVertex::new(point.x, point.y))
                .collect(),
            tuning.stroke_width_px,
            colors.color,
        ));
    }

    if let Some(active) = active {
        frame.lines.push(LinePrimitive::new(
            active.canvas_x,
            projection.baseline_y(),
            active.canvas_x,
            active.canvas_y,
            GUIDE_STROKE_WIDTH_PX,
            colors.color,
        ));
        frame.circles.push(CirclePrimitive::new(
            active.canvas_x,
            active.canvas_y,
            tuning.marker_diameter_px,
            colors.color,
        ));
    }

    let (price_labels, price_grid) =
        layout_price_labels(&scales.price_ticks(tuning.price_label_count), scales, projection);
    let (date_labels, date_grid) = layout_date_labels(
        &scales.time_ticks(tuning.date_label_count),
        scales,
        projection,
        &input.period,
    );
    let mut grid_lines = Vec::with_capacity(price_grid.len() + date_grid.len());
    grid_lines.extend(date_grid);
    grid_lines.extend(price_grid);

    debug!(
        raw_count = values.len(),
        sampled_count = sample.len(),
        price_labels = price_labels.len(),
        date_labels = date_labels.len(),
        hovered = active.is_some(),
        "built graph scene"
    );

    Ok(GraphScene {
        frame,
        price_labels,
        date_labels,
        grid_lines,
        hit_test: HitTester {
            clip_points,
            projection: Some(projection),
        },
    })
}

/// Drops non-finite prices and restores non-decreasing time order so the
/// rest of the pipeline can rely on both. Duplicate timestamps keep the
/// latest sample.
fn canonicalize_values(values: &[PricePoint]) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = values
        .iter()
        .copied()
        .filter(|point| point.price.is_finite())
        .collect();
    points.sort_by_key(|point| point.unix);

    let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if last.unix == point.unix {
                *last = point;
                continue;
            }
        }
        deduped.push(point);
    }

    if deduped.len() != values.len() {
        warn!(
            original_count = values.len(),
            canonical_count = deduped.len(),
            "canonicalized series before render pass"
        );
    }
    deduped
}
