//! Purge Events Module
//!
//! Explicit registration of callbacks fired after a URL is purged.

mod dispatcher;
mod listener;

pub use dispatcher::PurgeEvents;
pub use listener::PurgeListener;
