//! Standalone SVG output, one element per draw command.

use std::fmt::Write;

use crate::error::{FunnelError, FunnelResult};
use crate::render::{RenderFrame, Renderer, Shape, TextHAlign};

/// Renders frames into an in-memory SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()> {
        frame.validate()?;
        self.document = write_document(frame).map_err(|err| {
            FunnelError::InvalidData(format!("failed to write svg document: {err}"))
        })?;
        Ok(())
    }
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        frame.viewport.width, frame.viewport.height
    )?;
    if !frame.background.is_transparent() {
        writeln!(
            out,
            r#"  <rect class="background" width="100%" height="100%" fill="{}"/>"#,
            frame.background.to_css()
        )?;
    }

    for command in &frame.commands {
        let key = command
            .element
            .as_ref()
            .map(|key| format!(r#" data-key="{}""#, escape(key.as_str())))
            .unwrap_or_default();
        let class = command.class;

        match &command.shape {
            Shape::Path(path) => writeln!(
                out,
                r#"  <path class="{class}"{key} d="{}" fill="{}" opacity="{}"/>"#,
                path.to_path_data(),
                path.fill.to_css(),
                path.opacity
            )?,
            Shape::Ellipse(ellipse) => writeln!(
                out,
                r#"  <ellipse class="{class}"{key} cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" opacity="{}"/>"#,
                ellipse.center.x,
                ellipse.center.y,
                ellipse.radius_x,
                ellipse.radius_y,
                ellipse.fill.to_css(),
                ellipse.opacity
            )?,
            Shape::Circle(circle) => writeln!(
                out,
                r#"  <circle class="{class}"{key} cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                circle.center.x,
                circle.center.y,
                circle.radius,
                circle.fill.to_css()
            )?,
            Shape::Text(text) => {
                let anchor = match text.h_align {
                    TextHAlign::Left => "start",
                    TextHAlign::Center => "middle",
                    TextHAlign::Right => "end",
                };
                writeln!(
                    out,
                    r#"  <text class="{class}"{key} x="{}" y="{}" dy="1em" font-size="{}" font-family="{}" font-weight="{}" font-style="{}" fill="{}" opacity="{}" text-anchor="{anchor}">{}</text>"#,
                    text.x,
                    text.y,
                    text.font.size_px,
                    escape(&text.font.family),
                    escape(&text.font.weight),
                    escape(&text.font.style),
                    text.color.to_css(),
                    text.opacity,
                    escape(&text.text)
                )?;
            }
            Shape::Rect(rect) => writeln!(
                out,
                r#"  <rect class="{class}"{key} x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                rect.rect.x,
                rect.rect.y,
                rect.rect.width,
                rect.rect.height,
                rect.fill.to_css(),
                rect.border_color.to_css(),
                rect.border_width
            )?,
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
