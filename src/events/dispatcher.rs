//! Purge Event Dispatcher
//!
//! Fans a purged URL out to every subscribed listener.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::PurgeListener;

// == Purge Events ==
/// Ordered set of listeners notified after each purge.
#[derive(Default, Clone)]
pub struct PurgeEvents {
    listeners: Vec<Arc<dyn PurgeListener>>,
}

impl PurgeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener; listeners are called in subscription order.
    pub fn subscribe(&mut self, listener: Arc<dyn PurgeListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // == Fire ==
    /// Notifies every listener that `url` was purged.
    pub fn after_purge_url(&self, url: &str) {
        debug!(
            "after_purge_url({:?}) -> {} listener(s)",
            url,
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener.on_purge(url);
        }
    }
}

impl fmt::Debug for PurgeEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurgeEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
