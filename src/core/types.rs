use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One raw series sample: a unix timestamp in seconds and its price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub unix: i64,
    pub price: f64,
}

impl PricePoint {
    #[must_use]
    pub fn new(unix: i64, price: f64) -> Self {
        Self { unix, price }
    }

    /// Lossless ingestion path for feeds that deliver decimal prices.
    pub fn from_decimal_time(time: DateTime<Utc>, price: Decimal) -> GraphResult<Self> {
        let price = price.to_f64().ok_or_else(|| {
            GraphError::InvalidData("price is not representable as f64".to_owned())
        })?;
        if !price.is_finite() {
            return Err(GraphError::InvalidData("price must be finite".to_owned()));
        }
        Ok(Self {
            unix: time.timestamp(),
            price,
        })
    }
}

/// Direction of change over the displayed window, driving the palette choice.
///
/// `Neutral` is also forced while a point is actively hovered so the scrub
/// visuals never carry a trend color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Positive,
    Negative,
    Neutral,
}

impl TrendDirection {
    /// Derives the direction from the signed change over the window.
    #[must_use]
    pub fn from_change(change: f64) -> Self {
        if !change.is_finite() {
            return Self::Neutral;
        }
        if change >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Display time-range configuration: one strftime pattern for axis tick
/// labels and one for the scrub readout shown while a point is hovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub label_format: String,
    pub scrub_format: String,
}

impl PeriodConfig {
    #[must_use]
    pub fn new(label_format: impl Into<String>, scrub_format: impl Into<String>) -> Self {
        Self {
            label_format: label_format.into(),
            scrub_format: scrub_format.into(),
        }
    }

    #[must_use]
    pub fn day() -> Self {
        Self::new("%H:%M", "%H:%M, %-d %b")
    }

    #[must_use]
    pub fn week() -> Self {
        Self::new("%a %-d", "%H:%M, %-d %b")
    }

    #[must_use]
    pub fn month() -> Self {
        Self::new("%-d %b", "%-d %b %Y")
    }

    #[must_use]
    pub fn year() -> Self {
        Self::new("%b %Y", "%-d %b %Y")
    }
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self::month()
    }
}
