//! Wire shapes of the two board collections.
//!
//! Only the fields the adapter reads are declared; everything else in the
//! payload is ignored. Every field defaults so a card with a missing
//! attribute still decodes and falls back per field during mapping.

use serde::Deserialize;

/// A board list (one workflow column).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RemoteList {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A label attached to a card.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RemoteLabel {
    #[serde(default)]
    pub name: String,
}

/// A board card (one vehicle).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// ISO-8601 due date, null when unset
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub id_list: Option<String>,
    #[serde(default)]
    pub labels: Vec<RemoteLabel>,
    /// ISO-8601 timestamp of the last card activity
    #[serde(default)]
    pub date_last_activity: Option<String>,
}

impl RemoteCard {
    /// Name of the first attached label, if it has one.
    pub fn first_label(&self) -> Option<&str> {
        self.labels
            .first()
            .map(|label| label.name.trim())
            .filter(|name| !name.is_empty())
    }
}
