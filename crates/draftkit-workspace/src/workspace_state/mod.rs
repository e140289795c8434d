//! Workspace state and its transition table.
//!
//! `WorkspaceState` is owned by exactly one [`crate::Workspace`]. Every input
//! arrives as a [`WorkspaceEvent`] and is mapped by [`transition`] to a
//! [`Transition`]: a patch over the state plus the store intents the event
//! produced. Transitions only read the state they are given.
//!
//! This module is split into submodules:
//! - `events`: the tagged event union
//! - `viewport`: drag, resize and zoom
//! - `pointer`: mouse move and click (drawing and rubber-band selection)
//! - `commands`: command switch, delete, cancel and store updates
//! - `view`: derived, render-ready outputs

mod commands;
mod events;
mod pointer;
pub mod view;
mod viewport;

pub use events::WorkspaceEvent;

use draftkit_core::{IdSource, Point, Rect, Segment, SegmentState, StoreIntent};
use draftkit_settings::{StartupCommand, WorkspaceConfig};
use serde::{Deserialize, Serialize};

use crate::zoom::ZoomController;

/// Primary tool driving click semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    #[default]
    Select,
    Line,
}

impl From<StartupCommand> for Command {
    fn from(command: StartupCommand) -> Self {
        match command {
            StartupCommand::Select => Command::Select,
            StartupCommand::Line => Command::Line,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Select => write!(f, "select"),
            Command::Line => write!(f, "line"),
        }
    }
}

/// Transient state of one open workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceState {
    /// Point-resolved segments, as last pushed by the store.
    pub objects: Vec<SegmentState>,
    /// Screen pixels per world unit.
    pub scale: f64,
    /// World point at the screen origin.
    pub position: Point,
    /// `position` at the last gesture boundary; a click only counts as one
    /// when nothing has panned since.
    pub last_position: Point,
    pub viewport_size: Rect,
    pub mouse_screen_position: Point,
    /// Line under construction, world space.
    pub draft_segment: Option<Segment>,
    /// Rubber band as the two dragged corners, world space.
    pub selection_area: Option<Segment>,
    pub selected_object_ids: Vec<String>,
    pub will_be_selected_ids: Vec<String>,
    pub main_command: Command,
    pub proximity_id: Option<String>,
}

impl WorkspaceState {
    /// Fresh state for a newly opened workspace.
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            objects: Vec::new(),
            scale: config.zoom.initial,
            position: Point::ORIGIN,
            last_position: Point::ORIGIN,
            viewport_size: Rect::default(),
            mouse_screen_position: Point::ORIGIN,
            draft_segment: None,
            selection_area: None,
            selected_object_ids: Vec::new(),
            will_be_selected_ids: Vec::new(),
            main_command: config.initial_command.into(),
            proximity_id: None,
        }
    }

    /// World position under the pointer.
    pub fn mouse_real(&self) -> Point {
        crate::viewport::mouse_screen_to_real(self.position, self.mouse_screen_position, self.scale)
    }
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new(&WorkspaceConfig::default())
    }
}

/// Partial update of a [`WorkspaceState`]. `None` leaves a field untouched;
/// nullable fields use a nested `Option` so they can be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct StatePatch {
    pub objects: Option<Vec<SegmentState>>,
    pub scale: Option<f64>,
    pub position: Option<Point>,
    pub last_position: Option<Point>,
    pub viewport_size: Option<Rect>,
    pub mouse_screen_position: Option<Point>,
    pub draft_segment: Option<Option<Segment>>,
    pub selection_area: Option<Option<Segment>>,
    pub selected_object_ids: Option<Vec<String>>,
    pub will_be_selected_ids: Option<Vec<String>>,
    pub main_command: Option<Command>,
    pub proximity_id: Option<Option<String>>,
}

impl StatePatch {
    pub fn objects(mut self, objects: Vec<SegmentState>) -> Self {
        self.objects = Some(objects);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn last_position(mut self, position: Point) -> Self {
        self.last_position = Some(position);
        self
    }

    pub fn viewport_size(mut self, size: Rect) -> Self {
        self.viewport_size = Some(size);
        self
    }

    pub fn mouse_screen_position(mut self, position: Point) -> Self {
        self.mouse_screen_position = Some(position);
        self
    }

    pub fn draft_segment(mut self, segment: Option<Segment>) -> Self {
        self.draft_segment = Some(segment);
        self
    }

    pub fn selection_area(mut self, area: Option<Segment>) -> Self {
        self.selection_area = Some(area);
        self
    }

    pub fn selected_object_ids(mut self, ids: Vec<String>) -> Self {
        self.selected_object_ids = Some(ids);
        self
    }

    pub fn will_be_selected_ids(mut self, ids: Vec<String>) -> Self {
        self.will_be_selected_ids = Some(ids);
        self
    }

    pub fn main_command(mut self, command: Command) -> Self {
        self.main_command = Some(command);
        self
    }

    pub fn proximity_id(mut self, id: Option<String>) -> Self {
        self.proximity_id = Some(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == StatePatch::default()
    }

    /// Writes every set field into `state`.
    pub fn apply(self, state: &mut WorkspaceState) {
        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    state.$field = value;
                })*
            };
        }
        set!(
            objects,
            scale,
            position,
            last_position,
            viewport_size,
            mouse_screen_position,
            draft_segment,
            selection_area,
            selected_object_ids,
            will_be_selected_ids,
            main_command,
            proximity_id,
        );
    }
}

/// Outcome of one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub patch: StatePatch,
    pub intents: Vec<StoreIntent>,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_intent(mut self, intent: StoreIntent) -> Self {
        self.intents.push(intent);
        self
    }
}

impl From<StatePatch> for Transition {
    fn from(patch: StatePatch) -> Self {
        Self {
            patch,
            intents: Vec::new(),
        }
    }
}

/// Collaborators a transition may consult.
pub struct TransitionContext<'a> {
    pub zoom: &'a ZoomController,
    pub ids: &'a mut dyn IdSource,
}

/// The transition table.
///
/// Gesture, keyboard and proximity events carry no state change of their own;
/// [`crate::Workspace`] resolves them into the events handled here.
pub fn transition(
    state: &WorkspaceState,
    event: &WorkspaceEvent,
    ctx: &mut TransitionContext<'_>,
) -> Transition {
    match event {
        WorkspaceEvent::Drag { x, y } => viewport::drag(state, Point::new(*x, *y).to_vector()),
        WorkspaceEvent::Resize { width, height } => viewport::resize(Rect::new(*width, *height)),
        WorkspaceEvent::ScaleChange {
            new_scale,
            scaling_center,
        } => viewport::scale_change(state, *new_scale, *scaling_center, ctx.zoom),
        WorkspaceEvent::Wheel { delta_y, x, y } => {
            viewport::wheel(state, *delta_y, Point::new(*x, *y), ctx.zoom)
        }
        WorkspaceEvent::Zoom { direction } => viewport::zoom(state, *direction, ctx.zoom),
        WorkspaceEvent::MouseMove { x, y } => pointer::mouse_move(state, Point::new(*x, *y)),
        WorkspaceEvent::Click => pointer::click(state, ctx.ids),
        WorkspaceEvent::Command { command } => commands::command(*command),
        WorkspaceEvent::Delete => commands::delete(state),
        WorkspaceEvent::Cancel => commands::cancel(state),
        WorkspaceEvent::ObjectsChanged { objects } => commands::objects_changed(objects.clone()),
        WorkspaceEvent::PointerDown { .. }
        | WorkspaceEvent::PointerUp { .. }
        | WorkspaceEvent::KeyDown { .. }
        | WorkspaceEvent::CycleProximity => Transition::none(),
    }
}
