use crate::core::SliceKey;
use crate::interaction::MarkingHandler;

/// Host-owned callbacks. Only `mark` is required.
pub trait FunnelHost {
    /// Toggles marking of the slice's rows.
    fn mark(&mut self, key: &SliceKey, ctrl_key: bool);

    fn clear_marking(&mut self) {}

    fn mouse_over(&mut self, _key: &SliceKey) {}

    fn mouse_leave(&mut self) {}
}

impl<H: FunnelHost + ?Sized> MarkingHandler<SliceKey> for H {
    fn clear_marking(&mut self) {
        FunnelHost::clear_marking(self);
    }

    fn mark(&mut self, item: &SliceKey, ctrl_key: bool) {
        FunnelHost::mark(self, item, ctrl_key);
    }
}
