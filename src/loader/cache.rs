//! Loaded-module cache.
//!
//! # Responsibilities
//! - Map (remote, exposed module) to its loaded handle
//! - Hold the in-flight slot concurrent loads rendezvous on
//!
//! # Design Decisions
//! - One `OnceCell` per key: a resolved cell is a cache hit, an
//!   initializing cell is the in-flight placeholder
//! - Successful loads live for the process lifetime; no eviction
//! - A failed initialization leaves its cell empty, so failures are never
//!   cached and the next load retries

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use super::handle::ModuleHandle;

/// Cache key: one exposed module of one remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey {
    pub remote: String,
    pub module: String,
}

impl ModuleKey {
    pub fn new(remote: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            module: module.into(),
        }
    }
}

/// Concurrent cache of loaded modules.
#[derive(Debug, Default)]
pub struct ModuleCache {
    slots: DashMap<ModuleKey, Arc<OnceCell<ModuleHandle>>>,
}

impl ModuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `key`, created empty on first use. Concurrent callers for
    /// the same key receive the same slot.
    pub fn slot(&self, key: &ModuleKey) -> Arc<OnceCell<ModuleHandle>> {
        self.slots.entry(key.clone()).or_default().clone()
    }

    /// Resolved handle for `key`, if a load already completed.
    pub fn get(&self, key: &ModuleKey) -> Option<ModuleHandle> {
        self.slots.get(key).and_then(|slot| slot.get().cloned())
    }

    /// Number of keys holding a resolved handle.
    pub fn resolved_len(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }
}
