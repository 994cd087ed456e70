//! Refresh-and-rotation orchestration for the kiosk.
//!
//! This module owns the only mutable state of the system: the current
//! [`WorkshopData`] snapshot and the page being shown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ SnapshotSource  │    │   Prioritizer   │    │    Dashboard    │
//! │ (board adapter) │───▶│ (stage order)   │───▶│ snapshot + page │──▶ PageView
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!        refresh tick (30 s)                       rotation tick (10 s)
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures and validates a [`Dashboard`]
//! - [`runner`]: drives the two timers on a tokio task and publishes views
//!
//! [`Dashboard`] itself has no timers. Its two entry points,
//! [`Dashboard::on_refresh_tick`] and [`Dashboard::on_rotation_tick`], can be
//! called directly, which is how the scheduling rules are tested without
//! waiting on a clock.
//!
//! # Examples
//!
//! ```rust
//! use shopboard_core::{dashboard::{DashboardBuilder, SnapshotSource}, models::WorkshopData};
//!
//! struct Empty;
//!
//! impl SnapshotSource for Empty {
//!     async fn fetch_snapshot(&self) -> WorkshopData {
//!         WorkshopData::status("Nothing in the yard")
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut dashboard = DashboardBuilder::new(Empty).build()?;
//! dashboard.on_refresh_tick().await;
//!
//! let view = dashboard.view().expect("snapshot applied");
//! assert_eq!(view.board_name, "Nothing in the yard");
//! assert_eq!(view.total_pages, 1);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::models::{PageView, WorkshopData};
use crate::pagination::Pagination;
use crate::prioritizer::Prioritizer;

pub mod builder;
pub mod runner;


pub use builder::DashboardBuilder;
pub use runner::{DashboardHandle, DashboardRunner};

/// Capability producing a fresh snapshot on each refresh.
///
/// Implementations must not fail: errors are folded into the snapshot's
/// `board_name` (see [`crate::board::BoardAdapter`]).
pub trait SnapshotSource: Send + Sync {
    fn fetch_snapshot(&self) -> impl Future<Output = WorkshopData> + Send;
}

impl<T: SnapshotSource> SnapshotSource for Arc<T> {
    fn fetch_snapshot(&self) -> impl Future<Output = WorkshopData> + Send {
        T::fetch_snapshot(self)
    }
}

/// Current snapshot and page of the kiosk.
pub struct Dashboard<S, P> {
    source: Arc<S>,
    prioritizer: P,
    config: DashboardConfig,
    current: Option<WorkshopData>,
    pagination: Pagination,
}

impl<S, P> Dashboard<S, P>
where
    S: SnapshotSource,
    P: Prioritizer,
{
    pub(crate) fn new(source: S, prioritizer: P, config: DashboardConfig) -> Self {
        let pagination = Pagination::new(config.page_size);
        Self {
            source: Arc::new(source),
            prioritizer,
            config,
            current: None,
            pagination,
        }
    }

    /// Fetch, prioritize and install a new snapshot.
    ///
    /// Returns whether the new snapshot needs page rotation.
    pub async fn on_refresh_tick(&mut self) -> bool {
        let snapshot = self.source.fetch_snapshot().await;
        self.apply_snapshot(snapshot)
    }

    /// Prioritize `snapshot` and replace the current one with it.
    ///
    /// The page index is clamped against the new vehicle count. Returns
    /// whether the new snapshot needs page rotation.
    pub fn apply_snapshot(&mut self, snapshot: WorkshopData) -> bool {
        let WorkshopData {
            board_name,
            vehicles,
        } = snapshot;
        let received = vehicles.len();
        let prioritized = self.prioritizer.prioritize(vehicles);

        if prioritized.dropped_count() > 0 {
            log::warn!(
                "Hiding {} vehicles in unrecognized stages: {:?}",
                prioritized.dropped_count(),
                prioritized.dropped
            );
        }

        let next = WorkshopData {
            board_name,
            vehicles: prioritized.vehicles,
        };
        self.pagination.clamp(next.len());
        self.current = Some(next);

        log::debug!(
            "Snapshot applied: {} of {} vehicles shown, page {}",
            self.vehicle_count(),
            received,
            self.pagination.page()
        );

        self.needs_rotation()
    }

    /// Flip to the next page, re-deriving the page count from the current
    /// snapshot.
    pub fn on_rotation_tick(&mut self) {
        let count = self.vehicle_count();
        self.pagination.advance(count);
    }

    /// Page view for the presentation layer, `None` before the first
    /// snapshot.
    pub fn view(&self) -> Option<PageView> {
        self.current
            .as_ref()
            .map(|data| self.pagination.view(&data.board_name, &data.vehicles))
    }

    /// Current snapshot, in display order.
    pub fn current(&self) -> Option<&WorkshopData> {
        self.current.as_ref()
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    /// Vehicles in the current snapshot after prioritization.
    pub fn vehicle_count(&self) -> usize {
        self.current.as_ref().map_or(0, WorkshopData::len)
    }

    /// True when the current snapshot spans more than one page.
    pub fn needs_rotation(&self) -> bool {
        self.pagination.needs_rotation(self.vehicle_count())
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub(crate) fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }
}
