//! Vehicle model definition.

use serde::{Deserialize, Serialize};

use super::StageLabel;

/// One vehicle on the shop floor, built from a single board card.
///
/// Vehicles are rebuilt from scratch on every refresh; `id` is the card id
/// and is only stable for as long as the card exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    /// Card identifier
    pub id: String,

    /// Vehicle model, first part of the card name
    pub model: String,

    /// License plate, second part of the card name
    pub plate: String,

    /// Client name, third part of the card name
    pub client: String,

    /// Formatted delivery date or the "to be defined" sentinel
    pub delivery_date: String,

    /// Assigned mechanic (first card label) or the yard sentinel
    pub mechanic: String,

    /// Stage derived from the card's list
    pub stage: StageLabel,

    /// Formatted time of the card's last activity
    pub last_activity: String,
}
