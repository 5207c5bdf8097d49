//! Background Tasks Module
//!
//! Work that runs on the tokio runtime without holding up its caller.
//!
//! # Tasks
//! - Warm-up: warms one purged URL in the background

mod warmup;

pub use warmup::spawn_warmup;
