//! Key binding resolution.

use draftkit_settings::KeyBindings;
use serde::{Deserialize, Serialize};

/// Workspace actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    CycleProximity,
    Delete,
    Cancel,
}

/// Resolves host key names against configured bindings.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: KeyBindings,
}

impl KeyMap {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Action bound to `key`, if any. Single characters match regardless of
    /// case so the cycle hotkey still works with shift or caps lock held.
    pub fn resolve(&self, key: &str) -> Option<KeyAction> {
        let matches = |bound: &str| {
            if bound.chars().count() == 1 {
                bound.eq_ignore_ascii_case(key)
            } else {
                bound == key
            }
        };

        if matches(&self.bindings.cycle_proximity) {
            Some(KeyAction::CycleProximity)
        } else if matches(&self.bindings.delete) {
            Some(KeyAction::Delete)
        } else if matches(&self.bindings.cancel) {
            Some(KeyAction::Cancel)
        } else {
            None
        }
    }
}
