use serde::{Deserialize, Serialize};

use crate::api::format::{format_unix, number_with_significant_digits};
use crate::core::{GraphProjection, GraphScales, PeriodConfig};

/// A formatted axis label positioned in logical canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLabel {
    pub text: String,
    pub left: f64,
    pub top: f64,
}

/// A grid line at a label's mapped position, spanning the full chart width
/// (horizontal, per price label) or height (vertical, per date label).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GridLine {
    Horizontal { top: f64 },
    Vertical { left: f64 },
}

/// Lays out the price (Y) axis: one label and one grid line per tick, pinned
/// to the left edge at the tick's mapped height.
#[must_use]
pub fn layout_price_labels(
    ticks: &[f64],
    scales: GraphScales,
    projection: GraphProjection,
) -> (Vec<PositionedLabel>, Vec<GridLine>) {
    let mut labels = Vec::with_capacity(ticks.len());
    let mut grid_lines = Vec::with_capacity(ticks.len());

    for &price in ticks {
        let top = projection.clip_y_to_canvas(scales.price_to_clip_y(price));
        labels.push(PositionedLabel {
            text: number_with_significant_digits(price),
            left: 0.0,
            top,
        });
        grid_lines.push(GridLine::Horizontal { top });
    }

    (labels, grid_lines)
}

/// Lays out the time (X) axis: one label and one grid line per tick, sitting
/// below the drawable area at the tick's mapped x.
#[must_use]
pub fn layout_date_labels(
    ticks: &[i64],
    scales: GraphScales,
    projection: GraphProjection,
    period: &PeriodConfig,
) -> (Vec<PositionedLabel>, Vec<GridLine>) {
    let mut labels = Vec::with_capacity(ticks.len());
    let mut grid_lines = Vec::with_capacity(ticks.len());

    for &unix in ticks {
        let left = projection.clip_x_to_canvas(scales.unix_to_clip_x(unix));
        labels.push(PositionedLabel {
            text: format_unix(unix, &period.label_format),
            left,
            top: projection.graph_depth(),
        });
        grid_lines.push(GridLine::Vertical { left });
    }

    (labels, grid_lines)
}
