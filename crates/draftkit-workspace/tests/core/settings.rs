use draftkit_core::Point;
use draftkit_settings::WorkspaceConfig;
use draftkit_workspace::{Command, Workspace, WorkspaceEvent};
use tempfile::tempdir;

#[test]
fn test_workspace_follows_loaded_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.toml");
    std::fs::write(
        &path,
        r#"
initial_command = "line"

[zoom]
initial = 2.0
max = 2.5

[drag]
threshold = 20.0

[keys]
cycle_proximity = "Tab"
"#,
    )
    .unwrap();

    let config = WorkspaceConfig::load_from_file(&path).unwrap();
    let mut workspace = Workspace::new(config);
    assert_eq!(workspace.state().scale, 2.0);
    assert_eq!(workspace.state().main_command, Command::Line);

    workspace.dispatch(WorkspaceEvent::Wheel {
        delta_y: 1.0,
        x: 0.0,
        y: 0.0,
    });
    assert_eq!(workspace.state().scale, 2.5);
    workspace.dispatch(WorkspaceEvent::Wheel {
        delta_y: 1.0,
        x: 0.0,
        y: 0.0,
    });
    assert_eq!(workspace.state().scale, 2.5);

    // a 10 px move is inside the larger dead zone
    workspace.dispatch(WorkspaceEvent::PointerDown { x: 0.0, y: 0.0 });
    workspace.dispatch(WorkspaceEvent::MouseMove { x: 10.0, y: 10.0 });
    assert_eq!(workspace.state().position, Point::ORIGIN);
}

#[test]
fn test_missing_config_opens_with_defaults() {
    let dir = tempdir().unwrap();
    let config = WorkspaceConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
    let workspace = Workspace::new(config);
    assert_eq!(workspace.state().scale, 1.0);
    assert_eq!(workspace.state().main_command, Command::Select);
}
