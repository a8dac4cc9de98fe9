//! Lock aliases.
//!
//! Everything in the workspace locks through these names so the backing
//! implementation can be swapped in one place.

/// A synchronous read-write lock. Never hold one across an `.await`.
pub type SyncRwLock<T> = parking_lot::RwLock<T>;
