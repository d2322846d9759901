//! Poll loop and failure de-duplication for the homework watcher.

pub mod dedup;
pub mod poller;
