use draftkit_core::{Point, PointEntity, PointRef, Segment, StoreIntent};
use draftkit_settings::WorkspaceConfig;
use draftkit_workspace::{Command, MemoryStore, Workspace, WorkspaceEvent, ZoomDirection};
use tokio::sync::broadcast::error::TryRecvError;

use crate::common::{click_at, mouse_move, sync, triangle, workspace_with};

fn key(workspace: &mut draftkit_workspace::Workspace, key: &str) -> Vec<StoreIntent> {
    workspace.dispatch(WorkspaceEvent::KeyDown {
        key: key.to_string(),
    })
}

fn line_mode() -> draftkit_workspace::Workspace {
    let mut workspace = workspace_with(Vec::new());
    workspace.dispatch(WorkspaceEvent::Command {
        command: Command::Line,
    });
    workspace
}

#[test]
fn test_pan_release_is_not_a_click() {
    let mut workspace = line_mode();

    workspace.dispatch(WorkspaceEvent::PointerDown { x: 100.0, y: 100.0 });
    mouse_move(&mut workspace, 90.0, 100.0);
    workspace.dispatch(WorkspaceEvent::PointerUp { x: 90.0, y: 100.0 });
    assert_eq!(workspace.state().position, Point::new(10.0, 0.0));

    let intents = workspace.dispatch(WorkspaceEvent::Click);
    assert!(intents.is_empty());
    assert!(workspace.state().draft_segment.is_none());
    assert_eq!(workspace.state().last_position, Point::new(10.0, 0.0));

    // the following click is a real one, in the panned frame
    workspace.dispatch(WorkspaceEvent::Click);
    assert_eq!(
        workspace.state().draft_segment,
        Some(Segment::degenerate(Point::new(100.0, 100.0)))
    );
}

#[test]
fn test_jitter_below_threshold_still_clicks() {
    let mut workspace = line_mode();

    workspace.dispatch(WorkspaceEvent::PointerDown { x: 100.0, y: 100.0 });
    mouse_move(&mut workspace, 103.0, 96.0);
    workspace.dispatch(WorkspaceEvent::PointerUp { x: 103.0, y: 96.0 });
    assert_eq!(workspace.state().position, Point::ORIGIN);

    workspace.dispatch(WorkspaceEvent::Click);
    assert!(workspace.state().draft_segment.is_some());
}

#[test]
fn test_drag_vectors_do_not_compound() {
    let mut workspace = workspace_with(Vec::new());
    workspace.dispatch(WorkspaceEvent::PointerDown { x: 50.0, y: 50.0 });
    mouse_move(&mut workspace, 40.0, 50.0);
    mouse_move(&mut workspace, 30.0, 50.0);
    assert_eq!(workspace.state().position, Point::new(20.0, 0.0));
}

#[test]
fn test_draw_and_store_segments() {
    let mut workspace = line_mode();
    let mut store = MemoryStore::new();

    click_at(&mut workspace, 100.0, 100.0);
    mouse_move(&mut workspace, 200.0, 100.0);
    assert_eq!(
        workspace.view().draft_segment,
        Some(Segment::new(Point::new(100.0, 100.0), Point::new(200.0, 100.0)))
    );

    let intents = workspace.dispatch(WorkspaceEvent::Click);
    assert_eq!(
        intents,
        vec![StoreIntent::AddSegment {
            id: "id-1".into(),
            geometry: [
                PointRef::New(PointEntity::new("id-2", 100.0, 100.0)),
                PointRef::New(PointEntity::new("id-3", 200.0, 100.0)),
            ],
        }]
    );
    assert!(workspace.state().draft_segment.is_none());
    sync(&mut workspace, &mut store, &intents);
    assert_eq!(workspace.view().objects.len(), 1);

    // start the next segment near the shared endpoint: it snaps and reuses the id
    click_at(&mut workspace, 203.0, 104.0);
    assert_eq!(workspace.state().proximity_id.as_deref(), Some("id-3"));
    assert_eq!(
        workspace.state().draft_segment,
        Some(Segment::degenerate(Point::new(200.0, 100.0)))
    );

    let intents = click_at(&mut workspace, 300.0, 300.0);
    assert_eq!(
        intents,
        vec![StoreIntent::AddSegment {
            id: "id-4".into(),
            geometry: [
                PointRef::Existing("id-3".into()),
                PointRef::New(PointEntity::new("id-5", 300.0, 300.0)),
            ],
        }]
    );
    sync(&mut workspace, &mut store, &intents);
    assert_eq!(store.point_count(), 3);
    assert_eq!(workspace.view().objects.len(), 2);
}

#[test]
fn test_hotkey_cycles_proximity() {
    let mut workspace = workspace_with(triangle());
    mouse_move(&mut workspace, 10.0, 10.0);
    assert_eq!(
        workspace.proximity().candidates(),
        &["a".to_string(), "1".to_string(), "2".to_string()]
    );
    assert_eq!(workspace.state().proximity_id.as_deref(), Some("a"));

    key(&mut workspace, "t");
    assert_eq!(workspace.state().proximity_id.as_deref(), Some("1"));
    assert!(workspace.view().object("1").unwrap().in_proximity);

    // small pointer movement over the same geometry keeps the choice
    mouse_move(&mut workspace, 11.0, 10.0);
    assert_eq!(workspace.state().proximity_id.as_deref(), Some("1"));

    key(&mut workspace, "T");
    workspace.dispatch(WorkspaceEvent::CycleProximity);
    assert_eq!(workspace.state().proximity_id.as_deref(), Some("a"));

    mouse_move(&mut workspace, 400.0, 400.0);
    assert_eq!(workspace.state().proximity_id, None);
    key(&mut workspace, "t");
    assert_eq!(workspace.state().proximity_id, None);
}

#[test]
fn test_delete_key_removes_selection() {
    let mut workspace = workspace_with(Vec::new());
    let mut store = MemoryStore::new();
    let seed = StoreIntent::AddSegment {
        id: "s1".into(),
        geometry: [
            PointRef::New(PointEntity::new("p1", 10.0, 10.0)),
            PointRef::New(PointEntity::new("p2", 20.0, 20.0)),
        ],
    };
    sync(&mut workspace, &mut store, &[seed]);

    click_at(&mut workspace, 0.0, 0.0);
    click_at(&mut workspace, 50.0, 50.0);
    assert_eq!(workspace.state().selected_object_ids, vec!["s1".to_string()]);

    let intents = key(&mut workspace, "Delete");
    assert_eq!(
        intents,
        vec![StoreIntent::DeleteObjects {
            object_ids: vec!["s1".into()]
        }]
    );
    assert!(workspace.state().selected_object_ids.is_empty());

    sync(&mut workspace, &mut store, &intents);
    assert!(workspace.view().objects.is_empty());
    assert_eq!(store.point_count(), 2);

    // nothing selected, nothing emitted
    assert!(key(&mut workspace, "Delete").is_empty());
}

#[test]
fn test_intents_are_broadcast_until_drop() {
    let mut workspace = line_mode();
    let mut rx = workspace.subscribe_intents();

    click_at(&mut workspace, 0.0, 0.0);
    let intents = click_at(&mut workspace, 10.0, 0.0);
    assert_eq!(rx.try_recv().unwrap(), intents[0]);
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

    drop(workspace);
    assert_eq!(rx.try_recv(), Err(TryRecvError::Closed));
}

#[test]
fn test_escape_drops_draft() {
    let mut workspace = line_mode();
    click_at(&mut workspace, 5.0, 5.0);
    assert!(workspace.state().draft_segment.is_some());

    key(&mut workspace, "Escape");
    assert!(workspace.state().draft_segment.is_none());
    assert!(workspace.dispatch(WorkspaceEvent::Click).is_empty());
    assert!(workspace.state().draft_segment.is_some());
}

#[test]
fn test_inverted_zoom_limits_do_not_panic() {
    let mut config = WorkspaceConfig::default();
    config.zoom.min = 5.0;
    config.zoom.max = 2.0;
    let mut workspace = Workspace::new(config);
    workspace.dispatch(WorkspaceEvent::Resize {
        width: 800.0,
        height: 600.0,
    });

    workspace.dispatch(WorkspaceEvent::Zoom {
        direction: ZoomDirection::In,
    });
    assert_eq!(workspace.state().scale, 2.0);

    workspace.dispatch(WorkspaceEvent::Wheel {
        delta_y: -120.0,
        x: 10.0,
        y: 10.0,
    });
    assert_eq!(workspace.state().scale, 2.0);
}
