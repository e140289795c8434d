//! Pointer transitions: draft segments and rubber-band selection.

use draftkit_core::{IdSource, Point, PointEntity, PointRef, Segment, StoreIntent};

use super::{Command, StatePatch, Transition, WorkspaceState};
use crate::selection::will_be_selected;
use crate::viewport::mouse_screen_to_real;

pub(super) fn mouse_move(state: &WorkspaceState, screen: Point) -> Transition {
    let real = mouse_screen_to_real(state.position, screen, state.scale);
    let mut patch = StatePatch::default().mouse_screen_position(screen);

    if let Some(draft) = state.draft_segment {
        patch = patch.draft_segment(Some(draft.with_end(real)));
    }
    if let Some(area) = state.selection_area {
        let area = area.with_end(real);
        patch = patch
            .selection_area(Some(area))
            .will_be_selected_ids(will_be_selected(&area, &state.objects));
    }
    patch.into()
}

/// A click only acts when nothing has panned since the last gesture
/// boundary; otherwise it closes the pan.
pub(super) fn click(state: &WorkspaceState, ids: &mut dyn IdSource) -> Transition {
    if !state.position.is_same_point(&state.last_position) {
        return StatePatch::default()
            .last_position(state.position)
            .into();
    }
    match state.main_command {
        Command::Line => click_line(state, ids),
        Command::Select => click_select(state),
    }
}

fn click_line(state: &WorkspaceState, ids: &mut dyn IdSource) -> Transition {
    match state.draft_segment {
        None => {
            let start = snapped(state, state.mouse_real());
            tracing::debug!("Draft segment opened at {}", start);
            StatePatch::default()
                .draft_segment(Some(Segment::degenerate(start)))
                .into()
        }
        Some(draft) => {
            let segment = draft.with_end(snapped(state, draft.end));
            let intent = add_segment(state, segment, ids);
            tracing::debug!("Draft segment committed: {}", intent);
            Transition::from(StatePatch::default().draft_segment(None)).with_intent(intent)
        }
    }
}

fn click_select(state: &WorkspaceState) -> Transition {
    if state.selection_area.is_some() {
        tracing::debug!(
            "Selection committed: {} object(s)",
            state.will_be_selected_ids.len()
        );
        StatePatch::default()
            .selected_object_ids(state.will_be_selected_ids.clone())
            .will_be_selected_ids(Vec::new())
            .selection_area(None)
            .into()
    } else if !state.selected_object_ids.is_empty() {
        StatePatch::default().selected_object_ids(Vec::new()).into()
    } else {
        StatePatch::default()
            .selection_area(Some(Segment::degenerate(state.mouse_real())))
            .into()
    }
}

/// Endpoint of any stored segment.
fn stored_point<'a>(
    state: &'a WorkspaceState,
    mut pred: impl FnMut(&PointEntity) -> bool,
) -> Option<&'a PointEntity> {
    state
        .objects
        .iter()
        .flat_map(|object| object.geometry.iter())
        .find(|point| pred(point))
}

/// Moves `point` onto the proximity target when that target is a stored point.
fn snapped(state: &WorkspaceState, point: Point) -> Point {
    state
        .proximity_id
        .as_deref()
        .and_then(|id| stored_point(state, |p| p.id == id))
        .map_or(point, PointEntity::point)
}

/// Builds the add-segment intent. Endpoints that coincide with a stored
/// point reuse its id; a zero-length segment gets a single new point.
fn add_segment(state: &WorkspaceState, segment: Segment, ids: &mut dyn IdSource) -> StoreIntent {
    let id = ids.next_id();
    let mut created: Vec<PointEntity> = Vec::new();
    let mut endpoint = |point: Point| {
        if let Some(existing) = stored_point(state, |p| p.point().is_same_point(&point)) {
            return PointRef::Existing(existing.id.clone());
        }
        if let Some(fresh) = created.iter().find(|p| p.point().is_same_point(&point)) {
            return PointRef::Existing(fresh.id.clone());
        }
        let fresh = PointEntity::at(ids.next_id(), point);
        created.push(fresh.clone());
        PointRef::New(fresh)
    };
    let start = endpoint(segment.start);
    let end = endpoint(segment.end);

    StoreIntent::AddSegment {
        id,
        geometry: [start, end],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::{SegmentState, SequentialIds};

    fn state_with_objects() -> WorkspaceState {
        let mut state = WorkspaceState::default();
        state.objects = vec![SegmentState::new(
            "s1",
            PointEntity::new("p1", 10.0, 10.0),
            PointEntity::new("p2", 30.0, 30.0),
        )];
        state
    }

    #[test]
    fn test_click_after_pan_only_closes_gesture() {
        let mut state = WorkspaceState::default();
        state.main_command = Command::Line;
        state.position = Point::new(5.0, 0.0);

        let t = click(&state, &mut SequentialIds::new("id"));
        assert_eq!(t.patch, StatePatch::default().last_position(Point::new(5.0, 0.0)));
        assert!(t.intents.is_empty());
    }

    #[test]
    fn test_commit_reuses_coinciding_points() {
        let mut state = state_with_objects();
        state.main_command = Command::Line;
        state.draft_segment = Some(Segment::new(Point::new(30.0, 30.0), Point::new(50.0, 10.0)));

        let t = click(&state, &mut SequentialIds::new("id"));
        assert_eq!(t.patch.draft_segment, Some(None));
        assert_eq!(
            t.intents,
            vec![StoreIntent::AddSegment {
                id: "id-1".into(),
                geometry: [
                    PointRef::Existing("p2".into()),
                    PointRef::New(PointEntity::new("id-2", 50.0, 10.0)),
                ],
            }]
        );
    }

    #[test]
    fn test_zero_length_segment_shares_one_new_point() {
        let mut state = WorkspaceState::default();
        state.main_command = Command::Line;
        state.draft_segment = Some(Segment::degenerate(Point::new(3.0, 4.0)));

        let t = click(&state, &mut SequentialIds::new("id"));
        assert_eq!(
            t.intents,
            vec![StoreIntent::AddSegment {
                id: "id-1".into(),
                geometry: [
                    PointRef::New(PointEntity::new("id-2", 3.0, 4.0)),
                    PointRef::Existing("id-2".into()),
                ],
            }]
        );
    }

    #[test]
    fn test_draft_snaps_to_proximity_point() {
        let mut state = state_with_objects();
        state.main_command = Command::Line;
        state.mouse_screen_position = Point::new(12.0, 9.0);
        state.proximity_id = Some("p1".into());

        let t = click(&state, &mut SequentialIds::new("id"));
        assert_eq!(
            t.patch.draft_segment,
            Some(Some(Segment::degenerate(Point::new(10.0, 10.0))))
        );
    }

    #[test]
    fn test_segment_proximity_does_not_snap() {
        let mut state = state_with_objects();
        state.main_command = Command::Line;
        state.mouse_screen_position = Point::new(12.0, 9.0);
        state.proximity_id = Some("s1".into());

        let t = click(&state, &mut SequentialIds::new("id"));
        assert_eq!(
            t.patch.draft_segment,
            Some(Some(Segment::degenerate(Point::new(12.0, 9.0))))
        );
    }

    #[test]
    fn test_select_click_cycle() {
        let mut state = state_with_objects();

        // opens an area
        let t = click(&state, &mut SequentialIds::new("id"));
        assert!(matches!(t.patch.selection_area, Some(Some(_))));
        t.patch.apply(&mut state);

        // preview follows the pointer
        mouse_move(&state, Point::new(40.0, 40.0)).patch.apply(&mut state);
        assert_eq!(state.will_be_selected_ids, vec!["s1".to_string()]);

        // commit
        click(&state, &mut SequentialIds::new("id")).patch.apply(&mut state);
        assert_eq!(state.selected_object_ids, vec!["s1".to_string()]);
        assert!(state.will_be_selected_ids.is_empty());
        assert!(state.selection_area.is_none());

        // clears
        click(&state, &mut SequentialIds::new("id")).patch.apply(&mut state);
        assert!(state.selected_object_ids.is_empty());
        assert!(state.selection_area.is_none());
    }
}
