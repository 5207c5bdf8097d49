//! Purge Listener
//!
//! The callback seam a purge source talks to.

use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::tasks::spawn_warmup;
use crate::warmer::Warmer;

/// Receives one notification per purged URL.
///
/// Implementations must return quickly; the purge that triggered the call
/// is waiting on it.
pub trait PurgeListener: Send + Sync {
    fn on_purge(&self, url: &str);
}

/// Warms every purged URL in the background.
///
/// Outside a tokio runtime the warm-up is dropped with a warning.
impl PurgeListener for Warmer {
    fn on_purge(&self, url: &str) {
        if Handle::try_current().is_err() {
            warn!("No async runtime running, dropping warm-up of {:?}", url);
            return;
        }

        debug!("Purge of {:?} received, dispatching warm-up", url);
        // Dropping the handle detaches the task.
        drop(spawn_warmup(self.clone(), url.to_string()));
    }
}
