//! Event-script replay against a workspace and the reference store.
//!
//! A script is a JSON array of [`WorkspaceEvent`]s. Every intent the
//! workspace emits is applied to a [`MemoryStore`], and the store's new
//! segment list is pushed back into the workspace, as a live host would.

use std::path::Path;

use draftkit_core::{Result, SequentialIds};
use draftkit_settings::WorkspaceConfig;
use draftkit_workspace::{MemoryStore, Workspace, WorkspaceEvent, WorkspaceView};

/// Parses a JSON event script.
pub fn parse_script(json: &str) -> Result<Vec<WorkspaceEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON event script from disk.
pub fn load_script(path: &Path) -> Result<Vec<WorkspaceEvent>> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

/// A workspace wired to an in-memory store.
pub struct Replay {
    workspace: Workspace,
    store: MemoryStore,
}

impl Replay {
    /// Sequential ids keep replays reproducible.
    pub fn new(config: WorkspaceConfig) -> Self {
        Self {
            workspace: Workspace::new(config).with_ids(SequentialIds::new("id")),
            store: MemoryStore::new(),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Dispatches one event and settles the store round trip.
    pub fn step(&mut self, event: WorkspaceEvent) -> Result<()> {
        tracing::debug!("Replaying {}", event.name());
        let intents = self.workspace.dispatch(event);
        if intents.is_empty() {
            return Ok(());
        }
        for intent in &intents {
            self.store.apply(intent)?;
        }
        let objects = self.store.select_all_objects()?;
        self.workspace
            .dispatch(WorkspaceEvent::ObjectsChanged { objects });
        Ok(())
    }

    /// Dispatches every event in order, stopping at the first store error.
    pub fn run(&mut self, events: impl IntoIterator<Item = WorkspaceEvent>) -> Result<()> {
        for (index, event) in events.into_iter().enumerate() {
            self.step(event).map_err(|e| {
                tracing::warn!("Replay stopped at event {}: {}", index, e);
                e
            })?;
        }
        Ok(())
    }

    pub fn view(&self) -> WorkspaceView {
        self.workspace.view()
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new(WorkspaceConfig::default())
    }
}
