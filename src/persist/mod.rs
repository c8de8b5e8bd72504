//! Session persistence
//!
//! One session snapshot lives under one key in a small key-value store.
//! The game never notices persistence failures; see [`SessionStore`].

mod snapshot;
mod store;

pub use snapshot::{SessionStore, Snapshot, SnapshotEntry, SnapshotError};
pub use store::{FileStore, KvStore, MemoryStore};
