use draftkit_core::{segments_intersect, Point, Segment};
use draftkit_workspace::{will_be_selected, WorkspaceEvent};

use crate::common::{click_at, mouse_move, triangle, workspace_with};

fn area(a: (f64, f64), b: (f64, f64)) -> Segment {
    Segment::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_box_vs_crossing_selection() {
    let objects = triangle();
    // encloses only segment 1; segments 2 and 3 cross the right edge
    assert_eq!(
        will_be_selected(&area((0.0, 0.0), (20.0, 35.0)), &objects),
        ids(&["1"])
    );
    assert_eq!(
        will_be_selected(&area((20.0, 35.0), (0.0, 0.0)), &objects),
        ids(&["1", "2", "3"])
    );
}

#[test]
fn test_area_enclosing_everything() {
    let objects = triangle();
    assert_eq!(
        will_be_selected(&area((0.0, 0.0), (35.0, 35.0)), &objects),
        ids(&["1", "2", "3"])
    );
}

#[test]
fn test_vertical_inversion_is_still_a_window() {
    let objects = triangle();
    assert_eq!(
        will_be_selected(&area((0.0, 35.0), (20.0, 0.0)), &objects),
        ids(&["1"])
    );
}

#[test]
fn test_intersection_predicate() {
    let x1 = area((0.0, 0.0), (10.0, 10.0));
    let x2 = area((0.0, 10.0), (10.0, 0.0));
    assert!(segments_intersect(&x1, &x2));
    assert!(segments_intersect(&x2, &x1));

    let p1 = area((0.0, 0.0), (10.0, 0.0));
    let p2 = area((0.0, 2.0), (10.0, 2.0));
    assert!(!segments_intersect(&p1, &p2));

    let s1 = area((0.0, 0.0), (5.0, 5.0));
    let s2 = area((5.0, 5.0), (9.0, 1.0));
    assert!(segments_intersect(&s1, &s2));

    let overlap1 = area((0.0, 0.0), (6.0, 0.0));
    let overlap2 = area((4.0, 0.0), (9.0, 0.0));
    assert!(segments_intersect(&overlap1, &overlap2));

    let apart1 = area((0.0, 0.0), (3.0, 0.0));
    let apart2 = area((4.0, 0.0), (9.0, 0.0));
    assert!(!segments_intersect(&apart1, &apart2));
}

#[test]
fn test_rubber_band_through_workspace() {
    let mut workspace = workspace_with(triangle());

    click_at(&mut workspace, 20.0, 35.0);
    mouse_move(&mut workspace, 0.0, 0.0);
    assert_eq!(workspace.state().will_be_selected_ids, ids(&["1", "2", "3"]));
    assert!(workspace.state().selected_object_ids.is_empty());

    let view = workspace.view();
    assert!(view.object("2").unwrap().will_be_selected);
    assert!(!view.object("2").unwrap().is_selected);
    assert!(view.selection_area.is_some());

    workspace.dispatch(WorkspaceEvent::Click);
    let view = workspace.view();
    assert_eq!(view.selected_object_ids, ids(&["1", "2", "3"]));
    assert!(view.is_anything_selected);
    assert!(view.selection_area.is_none());
    assert!(view.objects.iter().all(|o| o.is_selected && !o.will_be_selected));
}

#[test]
fn test_click_with_selection_clears_it() {
    let mut workspace = workspace_with(triangle());
    click_at(&mut workspace, 0.0, 0.0);
    click_at(&mut workspace, 20.0, 35.0);
    assert_eq!(workspace.state().selected_object_ids, ids(&["1"]));

    click_at(&mut workspace, 500.0, 500.0);
    assert!(workspace.state().selected_object_ids.is_empty());
    assert!(workspace.state().selection_area.is_none());

    // the next click starts a new band
    click_at(&mut workspace, 500.0, 500.0);
    assert!(workspace.state().selection_area.is_some());
}

#[test]
fn test_cancel_drops_open_band() {
    let mut workspace = workspace_with(triangle());
    click_at(&mut workspace, 0.0, 0.0);
    mouse_move(&mut workspace, 40.0, 40.0);
    assert!(!workspace.state().will_be_selected_ids.is_empty());

    workspace.dispatch(WorkspaceEvent::KeyDown {
        key: "Escape".to_string(),
    });
    assert!(workspace.state().selection_area.is_none());
    assert!(workspace.state().will_be_selected_ids.is_empty());
}
