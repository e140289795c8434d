//! Proximity candidates under the pointer and the hotkey that cycles them.
//!
//! Overlapping or near-coincident geometry leaves several candidates under
//! the pointer. The cycler keeps them in hit-test order and exposes one of
//! them as the proximity target.

use draftkit_core::Point;

use crate::workspace_state::{view, WorkspaceState};

/// Hit test of rendered geometry at a screen point.
pub trait ProximityProbe: Send {
    /// Ids under `pointer`, most specific first.
    fn hit_test(&self, state: &WorkspaceState, pointer: Point) -> Vec<String>;
}

/// Default probe over the workspace's own screen-space view models.
///
/// Endpoints are reported before segments so a shared point wins over the
/// segments meeting at it.
#[derive(Debug, Clone, Copy)]
pub struct ViewProbe {
    tolerance: f64,
}

impl ViewProbe {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl ProximityProbe for ViewProbe {
    fn hit_test(&self, state: &WorkspaceState, pointer: Point) -> Vec<String> {
        let models = view::segment_view_models(state);
        let mut points: Vec<String> = Vec::new();
        let mut segments = Vec::new();

        for model in &models {
            for point in &model.geometry {
                let near = point.point().distance_to(&pointer) <= self.tolerance;
                if near && !points.contains(&point.id) {
                    points.push(point.id.clone());
                }
            }
            if model.segment().distance_to_point(&pointer) <= self.tolerance {
                segments.push(model.id.clone());
            }
        }

        points.extend(segments);
        points
    }
}

/// Candidate list plus the index the cycle hotkey advances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityCycler {
    ids: Vec<String>,
    active_index: usize,
}

impl ProximityCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the candidates. The active index restarts only when the
    /// candidate list actually changed, so pointer jitter over the same
    /// geometry keeps the user's choice.
    pub fn set_candidates(&mut self, ids: Vec<String>) {
        if ids != self.ids {
            self.ids = ids;
            self.active_index = 0;
        }
    }

    /// Advances to the next candidate, wrapping around. No-op when empty.
    pub fn cycle(&mut self) {
        if !self.ids.is_empty() {
            self.active_index = (self.active_index + 1) % self.ids.len();
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.ids
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The current proximity target.
    pub fn proximity_id(&self) -> Option<&str> {
        self.ids.get(self.active_index).map(String::as_str)
    }
}
