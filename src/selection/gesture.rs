//! Drag-gesture state machine — functional core of the region selector.
//!
//! A gesture value is created when selection mode is activated and fed
//! every pointer/key event; each event yields a [`Transition`] telling the
//! host what happened. No DOM, no timers, no globals — the whole machine
//! is a value, which is what makes the 10-px minimum and the cancel paths
//! unit-testable.

use crate::geometry::{Point, Rect};

/// Selections with either dimension at or below this many logical pixels
/// are treated as accidental clicks and dropped without a capture.
pub const MIN_SELECTION_PX: f64 = 10.0;

/// An input event relayed from the host overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Escape,
}

/// What a single event did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Event was irrelevant in the current phase.
    Ignored,
    /// The selection box appeared or changed geometry.
    SelectionChanged(Rect),
    /// Pointer released over a box exceeding the minimum size.
    Completed(Rect),
    /// Escape pressed, or the released box was too small to act on.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Overlay shown, waiting for the first pointer press.
    Armed,
    /// Pointer held down, box being drawn.
    Drawing { start: Point, current: Point },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionGesture {
    phase: Phase,
}

impl SelectionGesture {
    pub fn new() -> Self {
        Self {
            phase: Phase::Armed,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, Phase::Drawing { .. })
    }

    /// Current selection box, while one is being drawn.
    pub fn selection(&self) -> Option<Rect> {
        match self.phase {
            Phase::Armed => None,
            Phase::Drawing { start, current } => Some(Rect::from_drag(start, current)),
        }
    }

    pub fn on_event(&mut self, event: GestureEvent) -> Transition {
        match (self.phase, event) {
            // Escape cancels from any phase.
            (_, GestureEvent::Escape) => {
                self.phase = Phase::Armed;
                Transition::Cancelled
            }

            (Phase::Armed, GestureEvent::PointerDown(p)) => {
                self.phase = Phase::Drawing {
                    start: p,
                    current: p,
                };
                Transition::SelectionChanged(Rect::from_drag(p, p))
            }

            (Phase::Drawing { start, .. }, GestureEvent::PointerMove(p)) => {
                self.phase = Phase::Drawing {
                    start,
                    current: p,
                };
                Transition::SelectionChanged(Rect::from_drag(start, p))
            }

            (Phase::Drawing { start, .. }, GestureEvent::PointerUp(p)) => {
                self.phase = Phase::Armed;
                let rect = Rect::from_drag(start, p);
                if rect.exceeds_min_size(MIN_SELECTION_PX) {
                    Transition::Completed(rect)
                } else {
                    Transition::Cancelled
                }
            }

            // Moves and releases without a press, or a second press
            // mid-drag, do nothing.
            _ => Transition::Ignored,
        }
    }
}

impl Default for SelectionGesture {
    fn default() -> Self {
        Self::new()
    }
}
