use crate::core::{SliceKey, Viewport};
use crate::error::{FunnelError, FunnelResult};
use crate::render::{
    CirclePrimitive, Color, EllipsePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(PathPrimitive),
    Ellipse(EllipsePrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
    Rect(RectPrimitive),
}

impl Shape {
    pub fn validate(&self) -> FunnelResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Ellipse(ellipse) => ellipse.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
            Self::Rect(rect) => rect.validate(),
        }
    }
}

/// One shape in paint order, tagged with the scene class it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Owning slice, `None` for container-level shapes such as the marking overlay.
    pub element: Option<SliceKey>,
    pub class: &'static str,
    pub shape: Shape,
}

/// Backend-agnostic scene for one draw pass, in absolute pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn push(&mut self, element: Option<SliceKey>, class: &'static str, shape: Shape) {
        self.commands.push(DrawCommand {
            element,
            class,
            shape,
        });
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if !self.viewport.is_valid() {
            return Err(FunnelError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        for command in &self.commands {
            command.shape.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands carrying `class`, in paint order.
    pub fn commands_with_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a DrawCommand> + 'a {
        self.commands
            .iter()
            .filter(move |command| command.class == class)
    }
}
