//! Workshop snapshot produced by one refresh cycle.

use serde::{Deserialize, Serialize};

use super::Vehicle;

/// Immutable snapshot of the board.
///
/// When `vehicles` is empty, `board_name` doubles as a status line (for
/// example a configuration or connection error).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkshopData {
    /// Board title or status message
    pub board_name: String,

    /// Vehicles in board order, or in display order once prioritized
    pub vehicles: Vec<Vehicle>,
}

impl WorkshopData {
    /// Snapshot carrying only a status message.
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            board_name: message.into(),
            vehicles: Vec::new(),
        }
    }

    /// Number of vehicles in the snapshot.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// True when the snapshot holds no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
