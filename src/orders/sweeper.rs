//! Scheduled Sweeper
//!
//! Fixed-period background task that advances every PENDING order to
//! PROCESSING. Registered as `TaskKind::Periodic` in
//! `start_background_tasks()`. Each tick is independent: the sweeper keeps
//! no memory of previous runs and takes no locks, so a manual transition
//! racing a sweep is last-write-wins.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::orders::OrderService;

pub struct OrderSweeper {
    service: OrderService,
    period: Duration,
    shutdown: CancellationToken,
}

impl OrderSweeper {
    pub fn new(service: OrderService, period: Duration, shutdown: CancellationToken) -> Self {
        Self {
            service,
            period,
            shutdown,
        }
    }

    /// Main loop: tick → bulk advance, until shutdown
    pub async fn run(self) {
        tracing::info!("Order sweeper started (period: {:?})", self.period);

        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval fires immediately; skip the startup tick so the first
        // sweep happens one full period after boot
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = ticker.tick() => self.sweep_once().await,
            }
        }

        tracing::info!("Order sweeper stopped");
    }

    async fn sweep_once(&self) {
        tracing::debug!("Running scheduled sweep of pending orders");
        match self.service.advance_pending_orders().await {
            Ok(0) => {}
            Ok(n) => tracing::info!(count = n, "Sweep advanced pending orders to PROCESSING"),
            Err(e) => tracing::error!("Order sweep failed: {}", e),
        }
    }
}
