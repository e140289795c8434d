use draftkit_core::{PointEntity, SegmentState, SequentialIds};
use draftkit_workspace::{MemoryStore, Workspace, WorkspaceEvent};

/// The three segments used across the scenario tests.
pub fn triangle() -> Vec<SegmentState> {
    vec![
        SegmentState::new(
            "1",
            PointEntity::new("a", 10.0, 10.0),
            PointEntity::new("b", 10.0, 30.0),
        ),
        SegmentState::new(
            "2",
            PointEntity::new("a", 10.0, 10.0),
            PointEntity::new("c", 30.0, 30.0),
        ),
        SegmentState::new(
            "3",
            PointEntity::new("b", 10.0, 30.0),
            PointEntity::new("c", 30.0, 30.0),
        ),
    ]
}

pub fn workspace_with(objects: Vec<SegmentState>) -> Workspace {
    let mut workspace = Workspace::default().with_ids(SequentialIds::new("id"));
    workspace.dispatch(WorkspaceEvent::Resize {
        width: 800.0,
        height: 600.0,
    });
    workspace.dispatch(WorkspaceEvent::ObjectsChanged { objects });
    workspace
}

pub fn mouse_move(workspace: &mut Workspace, x: f64, y: f64) {
    workspace.dispatch(WorkspaceEvent::MouseMove { x, y });
}

pub fn click_at(workspace: &mut Workspace, x: f64, y: f64) -> Vec<draftkit_core::StoreIntent> {
    mouse_move(workspace, x, y);
    workspace.dispatch(WorkspaceEvent::Click)
}

/// Applies intents to `store` and pushes the result back into the workspace.
pub fn sync(workspace: &mut Workspace, store: &mut MemoryStore, intents: &[draftkit_core::StoreIntent]) {
    for intent in intents {
        store.apply(intent).unwrap();
    }
    workspace.dispatch(WorkspaceEvent::ObjectsChanged {
        objects: store.select_all_objects().unwrap(),
    });
}
