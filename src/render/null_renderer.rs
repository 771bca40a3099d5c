use crate::error::FunnelResult;
use crate::render::{RenderFrame, Renderer, Shape};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_ellipse_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()> {
        frame.validate()?;
        let count = |predicate: fn(&Shape) -> bool| {
            frame
                .commands
                .iter()
                .filter(|command| predicate(&command.shape))
                .count()
        };
        self.last_path_count = count(|shape| matches!(shape, Shape::Path(_)));
        self.last_ellipse_count = count(|shape| matches!(shape, Shape::Ellipse(_)));
        self.last_text_count = count(|shape| matches!(shape, Shape::Text(_)));
        self.frames_rendered += 1;
        Ok(())
    }
}
