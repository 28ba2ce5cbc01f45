use serde::{Deserialize, Serialize};

use crate::api::format::{format_unix, number_to_string, trim_trailing_zeros};
use crate::core::{PeriodConfig, TrendDirection};
use crate::interaction::ActivePoint;

/// Display state for the header above the chart: current price on the left,
/// and on the right either the signed percentage change over the window or,
/// while a point is actively hovered, the scrubbed timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderReadout {
    pub price_text: String,
    pub trend: TrendDirection,
    pub detail: String,
}

/// Resolves the header from the latest price, the change over the window,
/// and the active point reported by the chart (or `None`).
#[must_use]
pub fn header_readout(
    price: f64,
    daily_change: f64,
    active: Option<ActivePoint>,
    period: &PeriodConfig,
) -> HeaderReadout {
    let trend = TrendDirection::from_change(daily_change);

    if let Some(active) = active {
        return HeaderReadout {
            price_text: number_to_string(active.price),
            trend,
            detail: format_unix(active.unix, &period.scrub_format),
        };
    }

    let price_before = price + daily_change;
    let change_ratio = if price_before != 0.0 && price_before.is_finite() {
        (daily_change / price_before).abs()
    } else {
        0.0
    };
    let change_percent = (change_ratio * 10_000.0).round() / 100.0;
    let sign = match trend {
        TrendDirection::Positive => "+",
        _ => "-",
    };
    let percent_text = trim_trailing_zeros(format!("{change_percent:.2}"));

    HeaderReadout {
        price_text: number_to_string(price),
        trend,
        detail: format!("{sign}{percent_text}%"),
    }
}
