use crate::core::SliceKey;

/// Change in the hovered slice after a pointer move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(SliceKey),
    Left,
    Moved { to: SliceKey },
}

/// Which slice, if any, the pointer is currently over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<SliceKey>,
}

impl HoverState {
    #[must_use]
    pub fn current(&self) -> Option<&SliceKey> {
        self.current.as_ref()
    }

    pub fn update(&mut self, target: Option<&SliceKey>) -> HoverChange {
        if self.current.as_ref() == target {
            return HoverChange::Unchanged;
        }
        let previous = self.current.take();
        self.current = target.cloned();
        match (previous, target) {
            (None, Some(key)) => HoverChange::Entered(key.clone()),
            (Some(_), Some(key)) => HoverChange::Moved { to: key.clone() },
            (Some(_), None) => HoverChange::Left,
            (None, None) => HoverChange::Unchanged,
        }
    }

    /// Drops the hovered key when `is_live` rejects it. Returns `true` if dropped.
    pub fn forget_unless(&mut self, is_live: impl Fn(&SliceKey) -> bool) -> bool {
        if self.current.as_ref().is_some_and(|key| !is_live(key)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) -> HoverChange {
        self.update(None)
    }
}
