use crate::core::carousel::{Carousel, Direction};
use crate::domain::model::CarouselItem;
use serde::Serialize;

/// Crossfade signal for the view layer.
///
/// `Begin` carries the item to fade out; the index has not moved yet.
/// `Commit` carries the item to fade in, after the index moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TransitionEvent {
    Begin { outgoing: CarouselItem, index: usize },
    Commit { incoming: CarouselItem, index: usize },
}

impl TransitionEvent {
    pub fn item(&self) -> &CarouselItem {
        match self {
            TransitionEvent::Begin { outgoing, .. } => outgoing,
            TransitionEvent::Commit { incoming, .. } => incoming,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TransitionEvent::Begin { index, .. } | TransitionEvent::Commit { index, .. } => *index,
        }
    }
}

/// Splits one navigation step into begin and commit halves.
#[derive(Debug, Default)]
pub struct Transition {
    pending: Option<Direction>,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition; a second call before commit replaces the direction.
    pub fn begin(&mut self, carousel: &Carousel, direction: Direction) -> TransitionEvent {
        self.pending = Some(direction);
        TransitionEvent::Begin {
            outgoing: carousel.current().clone(),
            index: carousel.index(),
        }
    }

    /// Applies the pending step. `None` when nothing was begun.
    pub fn commit(&mut self, carousel: &mut Carousel) -> Option<TransitionEvent> {
        let direction = self.pending.take()?;
        let incoming = carousel.advance(direction).clone();
        Some(TransitionEvent::Commit {
            incoming,
            index: carousel.index(),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
