use crate::core::TrendDirection;
use crate::render::{Color, VerticalGradient};

const POSITIVE_COLOR: Color = Color::rgb(0.0, 0.784, 0.020);
const NEGATIVE_COLOR: Color = Color::rgb(1.0, 0.314, 0.0);
const NEUTRAL_COLOR: Color = Color::rgb(0.549, 0.549, 0.557);

pub(crate) const LABEL_COLOR: Color = Color::rgb(0.42, 0.44, 0.47);
pub(crate) const GRID_COLOR: Color = Color::rgba(0.5, 0.5, 0.55, 0.18);
pub(crate) const LABEL_FONT_SIZE_PX: f64 = 12.0;

/// Color set for one trend direction: the solid line color plus the
/// alpha-blend used to derive the area fill gradient from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPalette {
    pub color: Color,
}

impl TrendPalette {
    /// Fill gradient: line color at 60% alpha on top fading to fully
    /// transparent at the baseline.
    #[must_use]
    pub fn fill_gradient(self) -> VerticalGradient {
        VerticalGradient::new(self.color.with_alpha(0.6), self.color.with_alpha(0.0))
    }
}

/// Maps a trend direction to its color set.
#[must_use]
pub fn palette(trend: TrendDirection) -> TrendPalette {
    let color = match trend {
        TrendDirection::Positive => POSITIVE_COLOR,
        TrendDirection::Negative => NEGATIVE_COLOR,
        TrendDirection::Neutral => NEUTRAL_COLOR,
    };
    TrendPalette { color }
}
