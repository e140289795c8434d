//! Default engine constants.
//!
//! These are the values [`draftkit_settings`](../draftkit_settings/index.html)
//! falls back to when no configuration file overrides them.

/// Smallest allowed scale.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed scale.
pub const MAX_ZOOM: f64 = 10.0;

/// Scale a freshly opened workspace starts at.
pub const INITIAL_ZOOM: f64 = 1.0;

/// Coarse zoom step, used at and above 1:1 when zooming in.
pub const ZOOM_IN_STEP: f64 = 0.5;

/// Fine zoom step, used below 1:1 and when zooming out from 1:1.
pub const ZOOM_OUT_STEP: f64 = 0.05;

/// Upper bound on grid lines per axis.
pub const MAX_GRID_LINES: usize = 100;

/// Pointer travel (screen pixels, per axis) before a press becomes a pan.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Hit-test radius around rendered geometry, in screen pixels.
pub const PROXIMITY_TOLERANCE: f64 = 10.0;

/// Intent channel capacity.
pub const INTENT_CHANNEL_CAPACITY: usize = 64;
