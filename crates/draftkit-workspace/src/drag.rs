//! Pan gesture tracking.
//!
//! A press becomes a pan once the pointer has moved at least `threshold`
//! pixels on either axis. From then on every move yields the vector from the
//! current pointer back to the press point, until release.

use draftkit_core::{Point, Vector};

#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    threshold: f64,
    begin: Option<Point>,
    live: bool,
}

impl DragGesture {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            begin: None,
            live: false,
        }
    }

    pub fn pointer_down(&mut self, screen: Point) {
        self.begin = Some(screen);
        self.live = false;
    }

    /// Drag vector for a pointer move, `None` when no press is held or the
    /// press has not yet passed the threshold.
    pub fn pointer_move(&mut self, screen: Point) -> Option<Vector> {
        let begin = self.begin?;
        let vector = begin - screen;
        if !self.live {
            if vector.x.abs() < self.threshold && vector.y.abs() < self.threshold {
                return None;
            }
            tracing::trace!("Drag started at {}", begin);
            self.live = true;
        }
        Some(vector)
    }

    /// Ends the gesture. Returns `true` when it had turned into a pan.
    pub fn pointer_up(&mut self) -> bool {
        let was_live = self.live;
        self.begin = None;
        self.live = false;
        was_live
    }

    pub fn is_pressed(&self) -> bool {
        self.begin.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.live
    }
}
