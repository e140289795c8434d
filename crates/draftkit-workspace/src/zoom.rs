//! Zoom controller: turns wheel ticks and zoom buttons into scale changes.

use draftkit_core::{Point, Rect};
use draftkit_settings::ZoomSettings;
use serde::{Deserialize, Serialize};

/// Which way a zoom input points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel convention: a positive delta zooms in, anything else zooms out.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }
}

/// A requested scale together with the screen point it is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleChange {
    pub new_scale: f64,
    pub scaling_center: Point,
}

/// Computes stepped, clamped scale changes.
#[derive(Debug, Clone, Default)]
pub struct ZoomController {
    settings: ZoomSettings,
}

impl ZoomController {
    pub fn new(settings: ZoomSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    /// Step size for one zoom input at `current`.
    ///
    /// Exactly 1:1 is the hinge: zooming in from it takes the coarse step and
    /// zooming out takes the fine one.
    #[allow(clippy::float_cmp)]
    pub fn zoom_change(&self, current: f64, direction: ZoomDirection) -> f64 {
        let (fine, coarse) = (self.settings.fine_step, self.settings.coarse_step);
        let magnitude = if current == 1.0 {
            match direction {
                ZoomDirection::In => coarse,
                ZoomDirection::Out => fine,
            }
        } else if current < 1.0 {
            fine
        } else {
            coarse
        };
        match direction {
            ZoomDirection::In => magnitude,
            ZoomDirection::Out => -magnitude,
        }
    }

    /// Next scale, rounded to two decimals and clamped to the zoom limits.
    pub fn next_scale(&self, current: f64, direction: ZoomDirection) -> f64 {
        let raw = current + self.zoom_change(current, direction);
        self.settings.clamp((raw * 100.0).round() / 100.0)
    }

    /// Wheel input, anchored at the pointer.
    pub fn wheel(&self, current: f64, delta_y: f64, pointer: Point) -> ScaleChange {
        ScaleChange {
            new_scale: self.next_scale(current, ZoomDirection::from_delta(delta_y)),
            scaling_center: pointer,
        }
    }

    /// Zoom button input, anchored at the viewport centre.
    pub fn step(&self, current: f64, direction: ZoomDirection, viewport: Rect) -> ScaleChange {
        ScaleChange {
            new_scale: self.next_scale(current, direction),
            scaling_center: viewport.center(),
        }
    }
}

/// [`ZoomController::next_scale`] with the default step sizes and limits.
pub fn next_scale(current: f64, direction: ZoomDirection) -> f64 {
    ZoomController::default().next_scale(current, direction)
}
