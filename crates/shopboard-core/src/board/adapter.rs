//! Maps raw board lists and cards onto the workshop domain model.

use std::collections::HashMap;

use jiff::{tz::TimeZone, Timestamp};

use super::client::{BoardClient, BoardContents};
use super::remote::RemoteCard;
use crate::config::CredentialProvider;
use crate::dashboard::SnapshotSource;
use crate::display::datetime::{ClockTime, ShortDate};
use crate::error::Result;
use crate::models::{Stage, StageLabel, Vehicle, WorkshopData};

/// Board name shown when credentials are missing.
pub const CONFIG_ERROR_STATUS: &str = "Error: board credentials not configured";

/// Board name shown when the board could not be fetched or decoded.
pub const CONNECTION_ERROR_STATUS: &str = "Connection error";

pub const DEFAULT_MODEL: &str = "Vehicle";
pub const DEFAULT_PLATE: &str = "---";
pub const DEFAULT_CLIENT: &str = "Client";
pub const UNDEFINED_DELIVERY: &str = "To be defined";
pub const YARD_MECHANIC: &str = "Yard";
pub const UNKNOWN_ACTIVITY: &str = "--:--:--";

/// Stage assumed for cards whose list is not on the board.
pub const FALLBACK_STAGE: Stage = Stage::AwaitingEvaluation;

/// Turns a remote board into [`WorkshopData`] snapshots.
///
/// Credentials are pulled from the provider on every fetch. Failures never
/// leave the adapter: they are logged and replaced by a status snapshot.
pub struct BoardAdapter<C, K> {
    client: C,
    credentials: K,
    board_title: String,
    time_zone: TimeZone,
}

impl<C, K> BoardAdapter<C, K>
where
    C: BoardClient,
    K: CredentialProvider,
{
    /// Create an adapter formatting dates in the system time zone.
    pub fn new(client: C, credentials: K, board_title: impl Into<String>) -> Self {
        Self {
            client,
            credentials,
            board_title: board_title.into(),
            time_zone: TimeZone::system(),
        }
    }

    /// Format dates and times in `time_zone` instead of the system zone.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Fetch and map the board, propagating the first failure.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` when a credential is missing,
    /// `BoardError::Transport` or `BoardError::Decode` when the board cannot
    /// be retrieved.
    pub async fn try_fetch(&self) -> Result<WorkshopData> {
        let credentials = self.credentials.credentials();
        credentials.validate()?;

        let contents = self.client.fetch_board(&credentials).await?;
        let vehicles = map_board(&contents, &self.time_zone);

        log::debug!(
            "Mapped {} cards across {} lists",
            vehicles.len(),
            contents.lists.len()
        );

        Ok(WorkshopData {
            board_name: self.board_title.clone(),
            vehicles,
        })
    }

    /// Fetch the board, degrading every failure to a status snapshot.
    pub async fn fetch_workshop_data(&self) -> WorkshopData {
        match self.try_fetch().await {
            Ok(data) => data,
            Err(e) if e.is_configuration() => {
                log::error!("Board is not configured: {e}");
                WorkshopData::status(CONFIG_ERROR_STATUS)
            }
            Err(e) => {
                log::error!("Failed to load board: {e}");
                WorkshopData::status(CONNECTION_ERROR_STATUS)
            }
        }
    }
}

impl<C, K> SnapshotSource for BoardAdapter<C, K>
where
    C: BoardClient,
    K: CredentialProvider,
{
    async fn fetch_snapshot(&self) -> WorkshopData {
        self.fetch_workshop_data().await
    }
}

/// Map every card of a board to a vehicle, in card order.
pub fn map_board(contents: &BoardContents, time_zone: &TimeZone) -> Vec<Vehicle> {
    let list_names: HashMap<&str, &str> = contents
        .lists
        .iter()
        .map(|list| (list.id.as_str(), list.name.as_str()))
        .collect();

    contents
        .cards
        .iter()
        .map(|card| map_card(card, &list_names, time_zone))
        .collect()
}

/// Map one card, falling back per field when data is missing.
pub fn map_card(
    card: &RemoteCard,
    list_names: &HashMap<&str, &str>,
    time_zone: &TimeZone,
) -> Vehicle {
    let mut parts = card.name.split('-').map(str::trim);
    let mut next_part = |fallback: &str| {
        parts
            .next()
            .filter(|part| !part.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    let model = next_part(DEFAULT_MODEL);
    let plate = next_part(DEFAULT_PLATE);
    let client = next_part(DEFAULT_CLIENT);

    let stage = card
        .id_list
        .as_deref()
        .and_then(|id| list_names.get(id))
        .map_or(StageLabel::Recognized(FALLBACK_STAGE), |name| {
            StageLabel::parse(name)
        });

    let delivery_date = parse_timestamp(card.due.as_deref(), "due", &card.id).map_or_else(
        || UNDEFINED_DELIVERY.to_string(),
        |due| ShortDate::new(&due, time_zone).to_string(),
    );

    let last_activity = parse_timestamp(
        card.date_last_activity.as_deref(),
        "dateLastActivity",
        &card.id,
    )
    .map_or_else(
        || UNKNOWN_ACTIVITY.to_string(),
        |at| ClockTime::new(&at, time_zone).to_string(),
    );

    Vehicle {
        id: card.id.clone(),
        model,
        plate,
        client,
        delivery_date,
        mechanic: card.first_label().unwrap_or(YARD_MECHANIC).to_string(),
        stage,
        last_activity,
    }
}

fn parse_timestamp(raw: Option<&str>, field: &str, card_id: &str) -> Option<Timestamp> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<Timestamp>() {
        Ok(ts) => Some(ts),
        Err(e) => {
            log::debug!("Card {card_id}: ignoring unparseable {field} '{raw}': {e}");
            None
        }
    }
}
