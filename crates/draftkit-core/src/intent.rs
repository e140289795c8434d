//! Store intents and the channel they are published on
//!
//! Provides:
//! - Intent types describing mutations of the object store
//! - Intent dispatcher for publishing intents to subscribers
//!
//! The workspace never writes to the store directly. Commits and deletions are
//! expressed as [`StoreIntent`]s; the store applies them and pushes the new
//! segment list back through the workspace's `ObjectsChanged` event.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::constants::INTENT_CHANNEL_CAPACITY;
use crate::data::PointRef;

/// Object store mutation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreIntent {
    /// Create a segment, creating any endpoints given as [`PointRef::New`]
    AddSegment {
        /// Id of the new segment.
        id: String,
        /// Start and end references.
        geometry: [PointRef; 2],
    },
    /// Remove segments (and any other objects) by id
    DeleteObjects {
        /// Ids to remove; unknown ids are ignored.
        object_ids: Vec<String>,
    },
}

impl std::fmt::Display for StoreIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreIntent::AddSegment { id, geometry } => write!(
                f,
                "Add segment {} ({} -> {})",
                id,
                geometry[0].id(),
                geometry[1].id()
            ),
            StoreIntent::DeleteObjects { object_ids } => {
                write!(f, "Delete {} object(s)", object_ids.len())
            }
        }
    }
}

/// Intent dispatcher for publishing store intents to subscribers
#[derive(Clone)]
pub struct IntentDispatcher {
    /// Broadcast sender channel for store intents.
    tx: broadcast::Sender<StoreIntent>,
}

impl IntentDispatcher {
    /// Create a new intent dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to intents
    pub fn subscribe(&self) -> broadcast::Receiver<StoreIntent> {
        self.tx.subscribe()
    }

    /// Publish an intent to all subscribers
    ///
    /// Returns the number of receivers reached. With no subscribers the
    /// intent is dropped.
    pub fn publish(&self, intent: StoreIntent) -> usize {
        tracing::debug!("Publishing intent: {}", intent);
        match self.tx.send(intent) {
            Ok(count) => count,
            Err(broadcast::error::SendError(intent)) => {
                tracing::trace!("No subscribers for intent: {}", intent);
                0
            }
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for IntentDispatcher {
    fn default() -> Self {
        Self::new(INTENT_CHANNEL_CAPACITY)
    }
}
