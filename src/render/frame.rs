use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::render::{
    AreaPrimitive, CirclePrimitive, LinePrimitive, PolylinePrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are logical pixels; `device_pixel_ratio` tells backends how to
/// scale their backing store so strokes stay crisp on high-density displays
/// without leaking into layout math.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub areas: Vec<AreaPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, device_pixel_ratio: f64) -> Self {
        Self {
            viewport,
            device_pixel_ratio,
            areas: Vec::new(),
            polylines: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(GraphError::InvalidData(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }

        for area in &self.areas {
            area.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
            && self.polylines.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
