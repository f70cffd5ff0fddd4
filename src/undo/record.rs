//! Serializable metadata about recorded undo steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One step in an [`UndoStack`](super::UndoStack).
///
/// The record survives undo and redo: undoing a step moves it to the redo
/// side under the same id and name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRecord {
    pub id: Uuid,
    /// Name of the action the step reverses
    pub action_name: String,
    pub discardable: bool,
    /// When the action was first performed
    pub recorded_at: DateTime<Utc>,
}

impl UndoRecord {
    pub fn new(action_name: impl Into<String>, discardable: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            action_name: action_name.into(),
            discardable,
            recorded_at: Utc::now(),
        }
    }
}
