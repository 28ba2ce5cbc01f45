use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub areas_drawn: usize,
    pub polylines_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// The backing surface is allocated at device resolution and the context is
/// scaled by the frame's device pixel ratio, so all primitive coordinates stay
/// in logical pixels while strokes remain crisp on high-density displays.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    device_pixel_ratio: f64,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport, device_pixel_ratio: f64) -> GraphResult<Self> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(GraphError::InvalidData(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }

        let device_width = (f64::from(viewport.width) * device_pixel_ratio).round() as i32;
        let device_height = (f64::from(viewport.height) * device_pixel_ratio).round() as i32;
        let surface = ImageSurface::create(Format::ARgb32, device_width, device_height)
            .map_err(|err| GraphError::SurfaceUnavailable {
                reason: format!("failed to create cairo image surface: {err}"),
            })?;

        Ok(Self {
            surface,
            device_pixel_ratio,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> GraphResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;

        // Full clear before every pass; frames never accumulate.
        context.save().map_err(map_backend_error)?;
        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context.paint().map_err(map_backend_error)?;
        context.restore().map_err(map_backend_error)?;

        let mut stats = CairoRenderStats::default();
        let graph_depth = f64::from(frame.viewport.height);

        for area in &frame.areas {
            let gradient = LinearGradient::new(0.0, 0.0, 0.0, graph_depth);
            let top = area.gradient.top;
            let bottom = area.gradient.bottom;
            gradient.add_color_stop_rgba(0.0, top.red, top.green, top.blue, top.alpha);
            gradient.add_color_stop_rgba(1.0, bottom.red, bottom.green, bottom.blue, bottom.alpha);

            let first = area.vertices[0];
            context.move_to(first.x, first.y);
            for vertex in &area.vertices[1..] {
                context.line_to(vertex.x, vertex.y);
            }
            context.close_path();
            context.set_source(&gradient).map_err(map_backend_error)?;
            context.fill().map_err(map_backend_error)?;
            stats.areas_drawn += 1;
        }

        for polyline in &frame.polylines {
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            let first = polyline.vertices[0];
            context.move_to(first.x, first.y);
            for vertex in &polyline.vertices[1..] {
                context.line_to(vertex.x, vertex.y);
            }
            context.stroke().map_err(map_backend_error)?;
            stats.polylines_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context.stroke().map_err(map_backend_error)?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            apply_color(context, circle.color);
            context.arc(
                circle.center_x,
                circle.center_y,
                circle.diameter / 2.0,
                0.0,
                2.0 * PI,
            );
            context.fill().map_err(map_backend_error)?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let context = Context::new(&self.surface).map_err(|err| GraphError::SurfaceUnavailable {
            reason: format!("failed to create cairo context: {err}"),
        })?;
        context.scale(self.device_pixel_ratio, self.device_pixel_ratio);
        self.render_with_context(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(err: cairo::Error) -> GraphError {
    GraphError::InvalidData(format!("cairo drawing operation failed: {err}"))
}
