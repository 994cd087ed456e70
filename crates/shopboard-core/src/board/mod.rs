//! Board adapter: from remote lists and cards to workshop snapshots.
//!
//! - [`remote`]: serde shapes of the two board collections
//! - [`client`]: the [`BoardClient`] seam and its HTTP implementation
//! - [`adapter`]: per-field mapping and failure-to-status conversion

pub mod adapter;
pub mod client;
pub mod remote;

pub use adapter::{map_board, map_card, BoardAdapter, CONFIG_ERROR_STATUS, CONNECTION_ERROR_STATUS};
pub use client::{BoardClient, BoardContents, TrelloClient};
pub use remote::{RemoteCard, RemoteLabel, RemoteList};
