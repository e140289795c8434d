//! Command, delete, cancel and store-update transitions.

use draftkit_core::{SegmentState, StoreIntent};

use super::{Command, StatePatch, Transition, WorkspaceState};

pub(super) fn command(command: Command) -> Transition {
    tracing::debug!("Command: {}", command);
    StatePatch::default().main_command(command).into()
}

/// Deletes the committed selection. Nothing is emitted when the selection is
/// empty.
pub(super) fn delete(state: &WorkspaceState) -> Transition {
    if state.selected_object_ids.is_empty() {
        return Transition::none();
    }
    let intent = StoreIntent::DeleteObjects {
        object_ids: state.selected_object_ids.clone(),
    };
    Transition::from(StatePatch::default().selected_object_ids(Vec::new())).with_intent(intent)
}

/// Drops the draft segment and the open selection area. The committed
/// selection is kept.
pub(super) fn cancel(state: &WorkspaceState) -> Transition {
    if state.draft_segment.is_none() && state.selection_area.is_none() {
        return Transition::none();
    }
    StatePatch::default()
        .draft_segment(None)
        .selection_area(None)
        .will_be_selected_ids(Vec::new())
        .into()
}

pub(super) fn objects_changed(objects: Vec<SegmentState>) -> Transition {
    tracing::debug!("Store pushed {} object(s)", objects.len());
    StatePatch::default().objects(objects).into()
}
