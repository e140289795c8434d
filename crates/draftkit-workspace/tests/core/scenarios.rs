use draftkit_core::Point;
use draftkit_workspace::{WorkspaceEvent, WorkspaceView};

use crate::common::{triangle, workspace_with};

fn geometry(view: &WorkspaceView, id: &str) -> [(f64, f64); 2] {
    let object = view.object(id).unwrap();
    [
        (object.geometry[0].x, object.geometry[0].y),
        (object.geometry[1].x, object.geometry[1].y),
    ]
}

#[test]
fn test_zoom_out_then_render() {
    let mut workspace = workspace_with(triangle());
    workspace.dispatch(WorkspaceEvent::ScaleChange {
        new_scale: 0.95,
        scaling_center: Point::new(10.0, 10.0),
    });

    let view = workspace.view();
    assert_eq!(view.scale, 0.95);
    assert_eq!(geometry(&view, "1"), [(10.0, 10.0), (10.0, 29.0)]);
    assert_eq!(geometry(&view, "2"), [(10.0, 10.0), (29.0, 29.0)]);
    assert_eq!(geometry(&view, "3"), [(10.0, 29.0), (29.0, 29.0)]);
}

#[test]
fn test_zoom_in_then_render() {
    let mut workspace = workspace_with(triangle());
    workspace.dispatch(WorkspaceEvent::ScaleChange {
        new_scale: 1.5,
        scaling_center: Point::new(10.0, 10.0),
    });

    let view = workspace.view();
    assert_eq!(geometry(&view, "1"), [(10.0, 10.0), (10.0, 40.0)]);
    assert_eq!(geometry(&view, "2"), [(10.0, 10.0), (40.0, 40.0)]);
}

#[test]
fn test_zoom_resets_gesture_origin() {
    let mut workspace = workspace_with(triangle());
    workspace.dispatch(WorkspaceEvent::ScaleChange {
        new_scale: 1.5,
        scaling_center: Point::new(10.0, 10.0),
    });
    let state = workspace.state();
    assert_eq!(state.position, state.last_position);
}

#[test]
fn test_wheel_zooms_about_pointer() {
    let mut workspace = workspace_with(triangle());
    workspace.dispatch(WorkspaceEvent::Wheel {
        delta_y: 100.0,
        x: 10.0,
        y: 10.0,
    });

    let view = workspace.view();
    assert_eq!(view.scale, 1.5);
    assert_eq!(geometry(&view, "1"), [(10.0, 10.0), (10.0, 40.0)]);
}

#[test]
fn test_view_reports_axes_grid_and_cursor() {
    let mut workspace = workspace_with(triangle());
    workspace.dispatch(WorkspaceEvent::MouseMove { x: 25.0, y: 40.0 });

    let view = workspace.view();
    assert_eq!(view.axes.x, 0.0);
    assert_eq!(view.grid.step, 10.0);
    assert_eq!(view.grid.vertical.len(), 80);
    assert_eq!(view.grid.horizontal.len(), 60);
    assert_eq!(view.cursor.label, "(25, 40)");
}
