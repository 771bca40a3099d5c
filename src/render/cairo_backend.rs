use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::error::{FunnelError, FunnelResult};
use crate::render::{Color, FontSpec, RenderFrame, Renderer, Shape, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub ellipses_drawn: usize,
    pub texts_drawn: usize,
    pub rects_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> FunnelResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport) -> FunnelResult<Self> {
        let invalid = || FunnelError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid());
        }
        let width = i32::try_from(viewport.width).map_err(|_| invalid())?;
        let height = i32::try_from(viewport.height).map_err(|_| invalid())?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
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
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> FunnelResult<()> {
        frame.validate()?;

        context.set_operator(cairo::Operator::Source);
        apply_color(context, frame.background, 1.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(cairo::Operator::Over);

        let mut stats = CairoRenderStats::default();

        for command in &frame.commands {
            match &command.shape {
                Shape::Path(path) => {
                    let mut points = path.points.iter();
                    let Some(first) = points.next() else {
                        continue;
                    };
                    context.move_to(first.x, first.y);
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                    context.close_path();
                    apply_color(context, path.fill, path.opacity);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill path", err))?;
                    stats.paths_drawn += 1;
                }
                Shape::Ellipse(ellipse) => {
                    if ellipse.radius_x <= 0.0 || ellipse.radius_y <= 0.0 {
                        continue;
                    }
                    context.save().map_err(|err| map_backend_error("failed to save", err))?;
                    context.translate(ellipse.center.x, ellipse.center.y);
                    context.scale(ellipse.radius_x, ellipse.radius_y);
                    context.arc(0.0, 0.0, 1.0, 0.0, TAU);
                    context
                        .restore()
                        .map_err(|err| map_backend_error("failed to restore", err))?;
                    apply_color(context, ellipse.fill, ellipse.opacity);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill ellipse", err))?;
                    stats.ellipses_drawn += 1;
                }
                Shape::Circle(circle) => {
                    context.new_sub_path();
                    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
                    apply_color(context, circle.fill, 1.0);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                }
                Shape::Text(text) => {
                    let layout = pangocairo::functions::create_layout(context);
                    layout.set_font_description(Some(&font_description(&text.font)));
                    layout.set_text(&text.text);

                    let (text_width, _text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };

                    apply_color(context, text.color, text.opacity);
                    context.move_to(x, text.y);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_drawn += 1;
                }
                Shape::Rect(rect) => {
                    context.rectangle(rect.rect.x, rect.rect.y, rect.rect.width, rect.rect.height);
                    apply_color(context, rect.fill, 1.0);
                    context
                        .fill_preserve()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    if rect.border_width > 0.0 {
                        apply_color(context, rect.border_color, 1.0);
                        context.set_line_width(rect.border_width);
                        context.stroke().map_err(|err| {
                            map_backend_error("failed to stroke rectangle border", err)
                        })?;
                    } else {
                        context.new_path();
                    }
                    stats.rects_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> FunnelResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color, opacity: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * opacity);
}

fn font_description(font: &FontSpec) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family(&font.family);
    description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
    description.set_weight(match font.weight.as_str() {
        "bold" | "700" | "800" | "900" => pango::Weight::Bold,
        "lighter" | "300" => pango::Weight::Light,
        _ => pango::Weight::Normal,
    });
    description.set_style(match font.style.as_str() {
        "italic" => pango::Style::Italic,
        "oblique" => pango::Style::Oblique,
        _ => pango::Style::Normal,
    });
    description
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> FunnelError {
    FunnelError::InvalidData(format!("{prefix}: {err}"))
}
