//! Kiosk command handlers
//!
//! `Kiosk` wires a snapshot source to the dashboard runtime and the terminal
//! renderer. The source is generic so the handlers stay independent of how
//! the board is reached.

use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use shopboard_core::{DashboardBuilder, DashboardRunner, SnapshotSource};

use crate::{args::RunArgs, renderer::TerminalRenderer};

pub struct Kiosk<S> {
    source: S,
    renderer: TerminalRenderer,
}

impl<S> Kiosk<S>
where
    S: SnapshotSource + 'static,
{
    pub fn new(source: S, renderer: TerminalRenderer) -> Self {
        Self { source, renderer }
    }

    /// Run the refresh/rotation loop until Ctrl-C.
    pub async fn run(self, args: RunArgs) -> Result<()> {
        let dashboard = DashboardBuilder::new(self.source)
            .with_refresh_interval(Duration::from_secs(args.refresh_secs))
            .with_rotation_interval(Duration::from_secs(args.rotate_secs))
            .build()
            .context("Invalid dashboard settings")?;

        let handle = DashboardRunner::start(dashboard);
        let mut views = handle.subscribe();
        self.renderer.render(None)?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                changed = views.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let view = views.borrow_and_update().clone();
                    self.renderer.render(view.as_ref())?;
                }
                signal = &mut ctrl_c => {
                    signal.context("Failed to listen for Ctrl-C")?;
                    info!("Interrupted, shutting down");
                    break;
                }
            }
        }

        handle.stop().await.context("Dashboard did not stop cleanly")
    }

    /// Refresh once and print the first page.
    pub async fn snapshot(self, json: bool) -> Result<()> {
        let mut dashboard = DashboardBuilder::new(self.source)
            .build()
            .context("Invalid dashboard settings")?;
        dashboard.on_refresh_tick().await;

        let view = dashboard
            .view()
            .context("Refresh produced no snapshot")?;

        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&view).context("Failed to serialize page")?
            );
        } else {
            self.renderer.render(Some(&view))?;
        }
        Ok(())
    }
}
