//! Detached Warm-up Task
//!
//! Runs a warm-up in the background so the purge that triggered it is not
//! delayed at all.

use tokio::task::JoinHandle;
use tracing::debug;

use crate::warmer::{WarmOutcome, Warmer};

/// Spawns a task that warms `url` once.
///
/// The task ends on its own within the warmer's timeout. Awaiting the handle
/// yields the outcome; dropping it detaches the task.
///
/// # Example
/// ```ignore
/// let warmer = Warmer::new(WarmerConfig::default())?;
/// let handle = spawn_warmup(warmer.clone(), "https://example.com/".to_string());
/// // Either drop the handle, or:
/// let outcome = handle.await?;
/// ```
pub fn spawn_warmup(warmer: Warmer, url: String) -> JoinHandle<WarmOutcome> {
    tokio::spawn(async move {
        let outcome = warmer.warm(&url).await;
        debug!("Background warm-up of {:?} finished: {:?}", url, outcome);
        outcome
    })
}
