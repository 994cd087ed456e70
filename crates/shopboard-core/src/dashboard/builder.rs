//! Builder for creating and configuring Dashboard instances.

use std::time::Duration;

use super::{Dashboard, SnapshotSource};
use crate::{
    config::{DashboardConfig, MAX_INTERVAL},
    error::{BoardError, Result},
    prioritizer::{Prioritizer, StagePrioritizer},
};

/// Builder for creating and configuring Dashboard instances.
#[derive(Debug, Clone)]
pub struct DashboardBuilder<S, P = StagePrioritizer> {
    source: S,
    prioritizer: P,
    config: DashboardConfig,
}

impl<S: SnapshotSource> DashboardBuilder<S> {
    /// Creates a new builder around a snapshot source, using stage
    /// prioritization and the default timings.
    pub fn new(source: S) -> Self {
        Self {
            source,
            prioritizer: StagePrioritizer,
            config: DashboardConfig::default(),
        }
    }
}

impl<S, P> DashboardBuilder<S, P>
where
    S: SnapshotSource,
    P: Prioritizer,
{
    /// Replaces the prioritizer.
    pub fn with_prioritizer<Q: Prioritizer>(self, prioritizer: Q) -> DashboardBuilder<S, Q> {
        DashboardBuilder {
            source: self.source,
            prioritizer,
            config: self.config,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the interval between board refreshes.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.config.refresh_interval = interval;
        self
    }

    /// Sets the interval between page flips.
    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.config.rotation_interval = interval;
        self
    }

    /// Sets the number of vehicles per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Builds the configured dashboard.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` if an interval or the page size
    /// is zero, or if an interval is longer than [`MAX_INTERVAL`].
    pub fn build(self) -> Result<Dashboard<S, P>> {
        if self.config.refresh_interval.is_zero() {
            return Err(BoardError::configuration("refresh interval must be positive"));
        }
        if self.config.rotation_interval.is_zero() {
            return Err(BoardError::configuration("rotation interval must be positive"));
        }
        if self.config.refresh_interval > MAX_INTERVAL
            || self.config.rotation_interval > MAX_INTERVAL
        {
            return Err(BoardError::configuration(format!(
                "intervals must not exceed {}s",
                MAX_INTERVAL.as_secs()
            )));
        }
        if self.config.page_size == 0 {
            return Err(BoardError::configuration("page size must be positive"));
        }

        Ok(Dashboard::new(self.source, self.prioritizer, self.config))
    }
}
