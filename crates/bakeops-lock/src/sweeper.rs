//! Background sweeper for expired lock records
//!
//! Purely a hygiene/observability task: the lazy expiry check in every lock
//! operation remains authoritative. The sweeper keeps the registry (and any
//! "currently locked orders" listing built from it) free of dead entries.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bakeops_common::now_millis;
use tracing::{debug, info};

use crate::registry::LockRegistry;

pub struct LockSweeper {
    registry: Arc<LockRegistry>,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl LockSweeper {
    pub fn new(registry: Arc<LockRegistry>, interval: Duration) -> Self {
        Self {
            registry,
            interval,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the background sweep task; a second call is a no-op
    pub fn start(&self) {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        info!(interval_secs = self.interval.as_secs(), "Starting lock sweeper");

        let running = self.running.clone();
        let registry = self.registry.clone();
        let interval = self.interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            while running.load(Ordering::SeqCst) {
                ticker.tick().await;
                let removed = registry.sweep_expired(now_millis());
                if removed > 0 {
                    debug!(count = removed, "Swept expired lock records");
                }
            }
        });
    }

    /// Stop the sweeper; the task exits on its next tick
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        info!("Stopped lock sweeper");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
