use std::time::Duration;

use tracing::{debug, trace};

use crate::api::{FunnelHost, FunnelSettings};
use crate::core::{FunnelLayout, Point, Slice, SliceKey, Viewport};
use crate::error::FunnelResult;
use crate::interaction::{
    CaptureChange, HoverChange, HoverState, PointerEvent, RectangularMarking,
};
use crate::render::{RenderFrame, Renderer, Shape};
use crate::scene::{Scene, SyncParams, SyncReport, classes};

/// Result of a render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    Applied(SyncReport),
    /// A drag is in progress; the latest deferred request runs on pointer-up.
    Deferred,
}

#[derive(Debug, Clone)]
struct PendingRender {
    slices: Vec<Slice>,
    settings: FunnelSettings,
}

/// One funnel instance bound to a renderer.
pub struct FunnelChart<R: Renderer> {
    renderer: R,
    settings: FunnelSettings,
    layout: FunnelLayout,
    scene: Scene,
    marking: RectangularMarking,
    hover: HoverState,
    /// The hovered slice left the scene before the host saw a `mouse_leave`.
    hover_lost: bool,
    pending: Option<PendingRender>,
    debug_markers: bool,
}

impl<R: Renderer> FunnelChart<R> {
    pub fn new(renderer: R, settings: FunnelSettings) -> FunnelResult<Self> {
        settings.validate()?;
        let layout = FunnelLayout::compute(&settings.layout_input(), &[]);
        let marking = RectangularMarking::new(settings.marking.clone());

        Ok(Self {
            renderer,
            settings,
            layout,
            scene: Scene::new(),
            marking,
            hover: HoverState::default(),
            hover_lost: false,
            pending: None,
            debug_markers: false,
        })
    }

    /// Lays out `slices` and reconciles the scene with them.
    ///
    /// `slices` are ordered bottom to top. While a marking drag is active the
    /// request is held and replaced by any later one.
    pub fn render(&mut self, slices: &[Slice], settings: FunnelSettings) -> FunnelResult<RenderStatus> {
        settings.validate()?;
        if self.marking.is_dragging() {
            debug!(slices = slices.len(), "render deferred during marking gesture");
            self.pending = Some(PendingRender {
                slices: slices.to_vec(),
                settings,
            });
            return Ok(RenderStatus::Deferred);
        }
        Ok(RenderStatus::Applied(self.apply(slices, settings)))
    }

    fn apply(&mut self, slices: &[Slice], settings: FunnelSettings) -> SyncReport {
        self.layout = FunnelLayout::compute(&settings.layout_input(), slices);
        let report = self.scene.sync(
            slices,
            SyncParams {
                layout: &self.layout,
                style: &settings.style,
                animation: settings.animation_duration(),
            },
        );
        let scene = &self.scene;
        if self
            .hover
            .forget_unless(|key| scene.element(key).is_some_and(|element| !element.is_exiting()))
        {
            trace!("hovered slice left the scene");
            self.hover_lost = true;
        }
        self.marking.install(settings.marking.clone());
        self.settings = settings;
        report
    }

    /// Steps running transitions. Returns `true` while more frames are needed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.scene.advance(elapsed)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scene.is_animating()
    }

    /// Current scene plus the marking overlay, in paint order.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let style = &self.settings.style;
        let mut frame =
            self.scene
                .frame(self.settings.viewport, style.background_color, self.debug_markers);
        if let Some(overlay) = self.marking.overlay(style.marking_color) {
            frame.push(None, classes::RECTANGLE, Shape::Rect(overlay));
        }
        frame
    }

    /// Hands the current frame to the renderer. An empty viewport draws nothing.
    pub fn draw(&mut self) -> FunnelResult<()> {
        if !self.settings.viewport.is_valid() {
            trace!(
                width = self.settings.viewport.width,
                height = self.settings.viewport.height,
                "skipping draw for empty viewport"
            );
            return Ok(());
        }
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    /// Per-element click. Marks the slice under the pointer and reports
    /// whether the click was consumed.
    pub fn click<H: FunnelHost + ?Sized>(&mut self, event: PointerEvent, host: &mut H) -> bool {
        match self.scene.key_at(event.position) {
            Some(key) => {
                trace!(key = %key, ctrl = event.ctrl_key, "slice clicked");
                host.mark(key, event.ctrl_key);
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, event: PointerEvent) -> CaptureChange {
        self.marking.pointer_down(event, &self.scene)
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        self.marking.pointer_move(event);
    }

    /// Finishes the marking gesture, then applies a render deferred during it.
    pub fn pointer_up<H: FunnelHost + ?Sized>(
        &mut self,
        event: PointerEvent,
        host: &mut H,
    ) -> CaptureChange {
        let (change, _outcome) = self.marking.pointer_up(event, &self.scene, host);
        if let Some(pending) = self.pending.take() {
            debug!(slices = pending.slices.len(), "applying deferred render");
            self.apply(&pending.slices, pending.settings);
        }
        change
    }

    /// Tracks which slice the pointer is over and reports enter/leave.
    pub fn pointer_hover<H: FunnelHost + ?Sized>(&mut self, point: Point, host: &mut H) {
        self.flush_lost_hover(host);
        let target = self.scene.key_at(point).cloned();
        match self.hover.update(target.as_ref()) {
            HoverChange::Unchanged => {}
            HoverChange::Entered(key) => host.mouse_over(&key),
            HoverChange::Moved { to } => {
                host.mouse_leave();
                host.mouse_over(&to);
            }
            HoverChange::Left => host.mouse_leave(),
        }
    }

    pub fn pointer_leave<H: FunnelHost + ?Sized>(&mut self, host: &mut H) {
        self.flush_lost_hover(host);
        if self.hover.clear() == HoverChange::Left {
            host.mouse_leave();
        }
    }

    /// Slice currently under the pointer, as last reported to the host.
    #[must_use]
    pub fn hovered(&self) -> Option<&SliceKey> {
        self.hover.current()
    }

    fn flush_lost_hover<H: FunnelHost + ?Sized>(&mut self, host: &mut H) {
        if std::mem::take(&mut self.hover_lost) {
            host.mouse_leave();
        }
    }

    /// Shows the per-slice label anchor dots.
    pub fn set_debug_markers(&mut self, enabled: bool) {
        self.debug_markers = enabled;
    }

    #[must_use]
    pub fn has_pending_render(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn settings(&self) -> &FunnelSettings {
        &self.settings
    }

    #[must_use]
    pub fn layout(&self) -> &FunnelLayout {
        &self.layout
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn marking(&self) -> &RectangularMarking {
        &self.marking
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.settings.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
