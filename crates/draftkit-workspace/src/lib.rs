//! # DraftKit Workspace
//!
//! The viewport engine of a 2D line-drawing workspace. It turns pointer,
//! keyboard and resize events into render-ready view models and emits store
//! intents for the geometry the user draws or deletes.
//!
//! ## Components
//!
//! - **Viewport**: world/screen transforms and anchor-preserving zoom
//! - **Zoom**: stepped, clamped scale changes from wheel and buttons
//! - **Grid**: adaptive power-of-ten grid lines
//! - **Selection**: window and crossing rubber-band selection
//! - **Drag**: press-move-release pan gesture with a dead zone
//! - **Proximity**: hit testing and the hotkey that cycles candidates
//! - **Workspace state**: the state struct, transition table and derived view
//! - **Store**: a reference in-memory object store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use draftkit_workspace::{MemoryStore, Workspace, WorkspaceEvent};
//!
//! let mut workspace = Workspace::default();
//! let mut store = MemoryStore::new();
//!
//! for intent in workspace.dispatch(WorkspaceEvent::Click) {
//!     store.apply(&intent)?;
//! }
//! workspace.dispatch(WorkspaceEvent::ObjectsChanged {
//!     objects: store.select_all_objects()?,
//! });
//! let view = workspace.view();
//! ```

pub mod drag;
pub mod grid;
pub mod keyboard;
pub mod proximity;
pub mod selection;
pub mod store;
pub mod viewport;
pub mod workspace;
pub mod workspace_state;
pub mod zoom;

pub use drag::DragGesture;
pub use grid::{get_step, grid_lines, GridLines};
pub use keyboard::{KeyAction, KeyMap};
pub use proximity::{ProximityCycler, ProximityProbe, ViewProbe};
pub use selection::{will_be_selected, SelectionMode};
pub use store::MemoryStore;
pub use viewport::{handle_scale_change, mouse_screen_to_real, segment_to_screen, world_to_screen};
pub use workspace::Workspace;
pub use workspace_state::view::{
    Axes, CursorData, PointViewModel, SegmentOrientation, SegmentViewModel, WorkspaceView,
};
pub use workspace_state::{
    transition, Command, StatePatch, Transition, TransitionContext, WorkspaceEvent, WorkspaceState,
};
pub use zoom::{next_scale, ScaleChange, ZoomController, ZoomDirection};
