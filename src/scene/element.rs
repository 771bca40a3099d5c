use std::time::Duration;

use crate::core::{Slice, SliceKey};
use crate::scene::ElementAttributes;
use crate::scene::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementPhase {
    Entering,
    Present,
    Updating,
    Exiting,
}

/// Persistent scene node for one slice key.
///
/// `current` is what gets drawn; while a transition runs it is derived from
/// `from` and `to` at the eased progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceElement {
    key: SliceKey,
    slice: Slice,
    phase: ElementPhase,
    from: ElementAttributes,
    to: ElementAttributes,
    current: ElementAttributes,
    transition: Transition,
}

impl SliceElement {
    /// New element fading in at its target geometry.
    #[must_use]
    pub fn enter(slice: Slice, target: ElementAttributes, duration: Duration) -> Self {
        let from = target.with_opacity(0.0);
        let transition = Transition::new(duration);
        let mut element = Self {
            key: slice.key.clone(),
            slice,
            phase: ElementPhase::Entering,
            current: from.clone(),
            from,
            to: target,
            transition,
        };
        element.refresh();
        element
    }

    /// Points the element at a new target. Returns `false` when nothing changed.
    pub fn retarget(&mut self, slice: Slice, target: ElementAttributes, duration: Duration) -> bool {
        let unchanged = self.to == target && self.slice == slice;
        self.slice = slice;
        if unchanged {
            return false;
        }

        self.from = self.current.clone();
        self.to = target;
        self.transition = Transition::new(duration);
        if self.phase != ElementPhase::Entering {
            self.phase = ElementPhase::Updating;
        }
        self.refresh();
        true
    }

    /// Starts the fade out. Exiting elements never come back; a returning key
    /// gets a fresh element.
    pub fn exit(&mut self, duration: Duration) {
        if self.phase == ElementPhase::Exiting {
            return;
        }
        self.from = self.current.clone();
        self.to = self.current.with_opacity(0.0);
        self.transition = Transition::new(duration);
        self.phase = ElementPhase::Exiting;
        self.refresh();
    }

    pub fn advance(&mut self, delta: Duration) {
        self.transition.advance(delta);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.current = self.from.lerp(&self.to, self.transition.eased());
        if self.transition.is_finished() && self.phase != ElementPhase::Exiting {
            self.phase = ElementPhase::Present;
        }
    }

    /// Exit transition has run to completion and the node can be dropped.
    #[must_use]
    pub fn is_removable(&self) -> bool {
        self.phase == ElementPhase::Exiting && self.transition.is_finished()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transition.is_finished()
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == ElementPhase::Exiting
    }

    #[must_use]
    pub fn key(&self) -> &SliceKey {
        &self.key
    }

    #[must_use]
    pub fn slice(&self) -> &Slice {
        &self.slice
    }

    #[must_use]
    pub fn phase(&self) -> ElementPhase {
        self.phase
    }

    #[must_use]
    pub fn current(&self) -> &ElementAttributes {
        &self.current
    }

    #[must_use]
    pub fn target(&self) -> &ElementAttributes {
        &self.to
    }
}
