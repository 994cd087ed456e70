//! HTTP client for the card board API.
//!
//! The [`BoardClient`] trait abstracts over where lists and cards come from,
//! so the adapter can be exercised without a network. [`TrelloClient`] is the
//! production implementation, issuing both collection requests concurrently.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::remote::{RemoteCard, RemoteList};
use crate::config::BoardCredentials;
use crate::error::{BoardError, Result, TransportResultExt};

/// Upper bound on a single collection request.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Raw contents of one board: its lists and its cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardContents {
    pub lists: Vec<RemoteList>,
    pub cards: Vec<RemoteCard>,
}

/// Fetches the raw lists and cards of a board.
///
/// Implementations treat the two collections as one unit: if either request
/// fails, the whole fetch fails.
pub trait BoardClient: Send + Sync {
    fn fetch_board(
        &self,
        credentials: &BoardCredentials,
    ) -> impl Future<Output = Result<BoardContents>> + Send;
}

/// Board client speaking the Trello REST API.
///
/// Credentials travel as `key`/`token` query parameters. The underlying
/// `reqwest::Client` is reused across refreshes for connection pooling.
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrelloClient {
    /// Create a client rooted at `base_url` (e.g. `https://api.trello.com/1`).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` for an empty base URL and
    /// `BoardError::Transport` if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BoardError::configuration("board API base URL is empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .transport_context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// URL of one board collection.
    pub fn collection_url(&self, board_id: &str, collection: &str) -> String {
        format!("{}/boards/{}/{}", self.base_url, board_id.trim(), collection)
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        credentials: &BoardCredentials,
        collection: &'static str,
    ) -> Result<Vec<T>> {
        let url = self.collection_url(&credentials.board_id, collection);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("token", credentials.token.as_str()),
            ])
            .send()
            .await
            .transport_context(&format!("GET board {collection}"))?
            .error_for_status()
            .transport_context(&format!("Board {collection} request rejected"))?;

        let bytes = response
            .bytes()
            .await
            .transport_context(&format!("Reading board {collection}"))?;

        let items: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|source| BoardError::Decode { collection, source })?;

        log::debug!("Fetched {} board {collection}", items.len());
        Ok(items)
    }
}

impl BoardClient for TrelloClient {
    async fn fetch_board(&self, credentials: &BoardCredentials) -> Result<BoardContents> {
        let (lists, cards) = tokio::try_join!(
            self.fetch_collection::<RemoteList>(credentials, "lists"),
            self.fetch_collection::<RemoteCard>(credentials, "cards"),
        )?;

        Ok(BoardContents { lists, cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let client = TrelloClient::new("https://api.trello.com/1/").unwrap();
        assert_eq!(
            client.collection_url("b0ard", "cards"),
            "https://api.trello.com/1/boards/b0ard/cards"
        );
        assert_eq!(
            client.collection_url(" b0ard ", "lists"),
            "https://api.trello.com/1/boards/b0ard/lists"
        );
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = TrelloClient::new("  /").err().unwrap();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_unreachable_board_is_transport_error() {
        let client = TrelloClient::new("http://127.0.0.1:9").unwrap();
        let creds = BoardCredentials::new("key", "token", "board");

        let err = client.fetch_board(&creds).await.unwrap_err();
        assert!(matches!(err, BoardError::Transport { .. }));
    }
}
