//! Expiry Sweep Task
//!
//! Background task that periodically purges expired cache entries.
//!
//! Reads already refuse expired entries, so this sweep only bounds how
//! long dead entries occupy memory between reads.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task loops forever, sleeping for `sweep_interval_secs` between
/// passes. Each pass takes the exclusive cache lock for the duration of
/// one sweep.
///
/// Returns a JoinHandle used to abort the task during graceful shutdown.
pub fn spawn_cleanup_task(cache: SharedCache, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!("Expiry sweep removed {} entries", removed);
            } else {
                debug!("Expiry sweep found nothing to remove");
            }
        }
    })
}
