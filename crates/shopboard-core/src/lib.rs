//! Core library for the Shopboard workshop kiosk.
//!
//! Shopboard shows the repair status of every vehicle in an auto-repair shop
//! on a waiting-room screen. The shop tracks its work on a card board (one
//! list per repair stage, one card per vehicle); this crate polls that board,
//! maps it onto a fixed domain model, orders vehicles by workflow priority and
//! pages through them on a loop.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Board Adapter  │    │   Prioritizer   │    │    Dashboard    │
//! │  (board/)       │───▶│ (prioritizer)   │───▶│  (dashboard/)   │──▶ PageView
//! │  lists + cards  │    │  stage order    │    │ refresh + pages │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`board`]: fetches lists and cards and maps them to [`WorkshopData`];
//!   never fails, degrading to status snapshots instead
//! - [`prioritizer`]: stable sort by stage priority, hiding unknown stages
//! - [`pagination`]: page bounds and fixed-size slot grids
//! - [`dashboard`]: owns the current snapshot and page, driven by two timers
//! - [`display`]: presentation derivations for the kiosk rows
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shopboard_core::{
//!     board::{BoardAdapter, TrelloClient},
//!     config::{EnvCredentials, DEFAULT_API_BASE_URL},
//!     dashboard::{DashboardBuilder, DashboardRunner},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TrelloClient::new(DEFAULT_API_BASE_URL)?;
//! let adapter = BoardAdapter::new(client, EnvCredentials, "Workshop Yard");
//! let dashboard = DashboardBuilder::new(adapter).build()?;
//!
//! let handle = DashboardRunner::start(dashboard);
//! let mut views = handle.subscribe();
//! while views.changed().await.is_ok() {
//!     if let Some(view) = views.borrow_and_update().clone() {
//!         println!("{view}");
//!     }
//! }
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod models;
pub mod pagination;
pub mod prioritizer;

// Re-export commonly used types
pub use board::{BoardAdapter, BoardClient, TrelloClient};
pub use config::{BoardCredentials, CredentialProvider, DashboardConfig, EnvCredentials};
pub use dashboard::{Dashboard, DashboardBuilder, DashboardHandle, DashboardRunner, SnapshotSource};
pub use error::{BoardError, Result};
pub use models::{PageView, Slot, Stage, StageLabel, Vehicle, WorkshopData};
pub use prioritizer::{Prioritized, Prioritizer, StagePrioritizer};
