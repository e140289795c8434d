//! The workspace orchestrator.
//!
//! Owns the state of one open workspace and is its only writer. Hosts feed
//! [`WorkspaceEvent`]s into [`Workspace::dispatch`], read [`Workspace::view`]
//! for rendering, and forward the store intents (returned from `dispatch` and
//! broadcast to subscribers) to their object store.

use draftkit_core::{IdSource, IntentDispatcher, Point, StoreIntent, UuidIds};
use draftkit_settings::WorkspaceConfig;
use tokio::sync::broadcast;

use crate::drag::DragGesture;
use crate::keyboard::{KeyAction, KeyMap};
use crate::proximity::{ProximityCycler, ProximityProbe, ViewProbe};
use crate::workspace_state::view::WorkspaceView;
use crate::workspace_state::{
    transition, StatePatch, TransitionContext, WorkspaceEvent, WorkspaceState,
};
use crate::zoom::ZoomController;

pub struct Workspace {
    config: WorkspaceConfig,
    state: WorkspaceState,
    zoom: ZoomController,
    keys: KeyMap,
    drag: DragGesture,
    proximity: ProximityCycler,
    probe: Box<dyn ProximityProbe>,
    ids: Box<dyn IdSource>,
    intents: IntentDispatcher,
}

impl Workspace {
    /// Opens a workspace with `config`, UUID ids and the built-in view probe.
    pub fn new(config: WorkspaceConfig) -> Self {
        Self {
            state: WorkspaceState::new(&config),
            zoom: ZoomController::new(config.zoom.clone()),
            keys: KeyMap::new(config.keys.clone()),
            drag: DragGesture::new(config.drag.threshold),
            proximity: ProximityCycler::new(),
            probe: Box::new(ViewProbe::new(config.proximity.tolerance)),
            ids: Box::new(UuidIds),
            intents: IntentDispatcher::default(),
            config,
        }
    }

    /// Replaces the id source, e.g. with sequential ids for replays.
    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replaces the proximity hit test.
    pub fn with_probe(mut self, probe: impl ProximityProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn proximity(&self) -> &ProximityCycler {
        &self.proximity
    }

    /// Receives every intent emitted from now on. The channel closes when the
    /// workspace is dropped.
    pub fn subscribe_intents(&self) -> broadcast::Receiver<StoreIntent> {
        self.intents.subscribe()
    }

    /// Current render-ready view.
    pub fn view(&self) -> WorkspaceView {
        WorkspaceView::from_state(&self.state, self.config.grid.max_lines)
    }

    /// Feeds one event through the workspace and returns the intents it
    /// produced, in order.
    pub fn dispatch(&mut self, event: WorkspaceEvent) -> Vec<StoreIntent> {
        match event {
            WorkspaceEvent::PointerDown { x, y } => {
                self.drag.pointer_down(Point::new(x, y));
                Vec::new()
            }
            WorkspaceEvent::PointerUp { .. } => {
                if self.drag.pointer_up() {
                    tracing::debug!("Pan ended at {}", self.state.position);
                }
                Vec::new()
            }
            WorkspaceEvent::MouseMove { x, y } => {
                let mut intents = Vec::new();
                if let Some(vector) = self.drag.pointer_move(Point::new(x, y)) {
                    intents.extend(self.apply(&WorkspaceEvent::Drag {
                        x: vector.x,
                        y: vector.y,
                    }));
                }
                intents.extend(self.apply(&event));
                self.refresh_proximity();
                intents
            }
            WorkspaceEvent::KeyDown { ref key } => match self.keys.resolve(key) {
                Some(KeyAction::CycleProximity) => self.dispatch(WorkspaceEvent::CycleProximity),
                Some(KeyAction::Delete) => self.dispatch(WorkspaceEvent::Delete),
                Some(KeyAction::Cancel) => self.dispatch(WorkspaceEvent::Cancel),
                None => {
                    tracing::trace!("Unbound key: {}", key);
                    Vec::new()
                }
            },
            WorkspaceEvent::CycleProximity => {
                self.proximity.cycle();
                self.sync_proximity();
                Vec::new()
            }
            event => {
                let intents = self.apply(&event);
                if event.moves_view() {
                    self.refresh_proximity();
                }
                intents
            }
        }
    }

    fn apply(&mut self, event: &WorkspaceEvent) -> Vec<StoreIntent> {
        let mut ctx = TransitionContext {
            zoom: &self.zoom,
            ids: self.ids.as_mut(),
        };
        let result = transition(&self.state, event, &mut ctx);
        tracing::trace!("Transition for {}: {:?}", event.name(), result.patch);
        result.patch.apply(&mut self.state);

        for intent in &result.intents {
            self.intents.publish(intent.clone());
        }
        result.intents
    }

    /// Re-runs the hit test at the last pointer position.
    fn refresh_proximity(&mut self) {
        let ids = self
            .probe
            .hit_test(&self.state, self.state.mouse_screen_position);
        self.proximity.set_candidates(ids);
        self.sync_proximity();
    }

    fn sync_proximity(&mut self) {
        let id = self.proximity.proximity_id().map(str::to_string);
        if id != self.state.proximity_id {
            tracing::trace!("Proximity target: {:?}", id);
            StatePatch::default().proximity_id(id).apply(&mut self.state);
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(WorkspaceConfig::default())
    }
}
