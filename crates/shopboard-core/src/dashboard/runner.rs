//! Timer-driven runtime for a [`Dashboard`].
//!
//! # Architecture
//!
//! One tokio task owns the dashboard and multiplexes everything through a
//! single `select!` loop, so state is never touched from two places:
//!
//! 1. The refresh interval fires immediately, then every refresh period. Each
//!    tick spawns the fetch on its own task; the loop keeps rotating pages
//!    while it runs. A tick that finds a fetch still in flight is skipped.
//! 2. A finished fetch is applied to the dashboard and the rotation interval
//!    is dropped and re-armed one full period later against the new vehicle
//!    count, or left disarmed if everything fits on one page. A fetch that
//!    panicked is logged and the next tick fetches again.
//! 3. Every change is published on a `watch` channel for the presentation
//!    layer.
//!
//! [`DashboardHandle::stop`] ends the loop, aborts any in-flight fetch and
//! drops both intervals.

use std::future;

use tokio::{
    sync::{oneshot, watch},
    task::{JoinError, JoinHandle},
    time::{self, Instant, Interval, MissedTickBehavior},
};

use super::{Dashboard, SnapshotSource};
use crate::{
    error::{Result, SchedulerResultExt},
    models::{PageView, WorkshopData},
    prioritizer::Prioritizer,
};

/// Starts dashboards on the current tokio runtime.
pub struct DashboardRunner;

impl DashboardRunner {
    /// Spawn the refresh/rotation loop for `dashboard`.
    ///
    /// The first refresh starts immediately. Must be called from within a
    /// tokio runtime.
    pub fn start<S, P>(dashboard: Dashboard<S, P>) -> DashboardHandle
    where
        S: SnapshotSource + 'static,
        P: Prioritizer + 'static,
    {
        let (views_tx, views_rx) = watch::channel(dashboard.view());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        log::info!(
            "Starting dashboard: refresh every {:?}, rotate every {:?}",
            dashboard.config().refresh_interval,
            dashboard.config().rotation_interval
        );

        let task = tokio::spawn(run(dashboard, views_tx, shutdown_rx));

        DashboardHandle {
            views: views_rx,
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Handle to a running dashboard.
///
/// Dropping the handle also stops the loop; [`DashboardHandle::stop`] waits
/// for it to finish.
pub struct DashboardHandle {
    views: watch::Receiver<Option<PageView>>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl DashboardHandle {
    /// Receiver notified on every new view.
    pub fn subscribe(&self) -> watch::Receiver<Option<PageView>> {
        self.views.clone()
    }

    /// Most recently published view.
    pub fn current_view(&self) -> Option<PageView> {
        self.views.borrow().clone()
    }

    /// Stop both timers and wait for the loop to exit.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Scheduler` if the dashboard task panicked.
    pub async fn stop(self) -> Result<()> {
        // The loop may already be gone; a closed channel is fine.
        let _ = self.shutdown.send(());
        self.task.await.scheduler_context("Dashboard task failed")?;
        log::info!("Dashboard stopped");
        Ok(())
    }
}

async fn run<S, P>(
    mut dashboard: Dashboard<S, P>,
    views: watch::Sender<Option<PageView>>,
    mut shutdown: oneshot::Receiver<()>,
) where
    S: SnapshotSource + 'static,
    P: Prioritizer + 'static,
{
    let mut refresh = time::interval(dashboard.config().refresh_interval);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut rotation: Option<Interval> = None;
    let mut in_flight: Option<JoinHandle<WorkshopData>> = None;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = refresh.tick() => {
                if in_flight.is_some() {
                    log::debug!("Previous refresh still running, skipping tick");
                } else {
                    let source = dashboard.source();
                    in_flight = Some(tokio::spawn(async move { source.fetch_snapshot().await }));
                }
            }
            fetched = next_fetch(&mut in_flight) => {
                in_flight = None;
                match fetched {
                    Ok(snapshot) => {
                        let rotate = dashboard.apply_snapshot(snapshot);
                        rotation = rotate.then(|| rotation_interval(&dashboard));
                        views.send_replace(dashboard.view());
                    }
                    Err(e) => log::warn!("Refresh task failed, keeping current snapshot: {e}"),
                }
            }
            _ = next_rotation(&mut rotation) => {
                dashboard.on_rotation_tick();
                views.send_replace(dashboard.view());
            }
        }
    }

    if let Some(fetch) = in_flight.take() {
        fetch.abort();
    }
}

/// Fresh rotation interval whose first tick is one full period away.
fn rotation_interval<S, P>(dashboard: &Dashboard<S, P>) -> Interval
where
    S: SnapshotSource,
    P: Prioritizer,
{
    let period = dashboard.config().rotation_interval;
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Result of the in-flight fetch, or never while no fetch is running.
async fn next_fetch(
    fetch: &mut Option<JoinHandle<WorkshopData>>,
) -> std::result::Result<WorkshopData, JoinError> {
    match fetch {
        Some(handle) => handle.await,
        None => future::pending().await,
    }
}

/// Next rotation tick, or never while rotation is disarmed.
async fn next_rotation(rotation: &mut Option<Interval>) -> Instant {
    match rotation {
        Some(interval) => interval.tick().await,
        None => future::pending().await,
    }
}
