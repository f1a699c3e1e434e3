//! Counter registry: `name -> value`.
//!
//! Backed by a sharded `DashMap`. Every operation performs its
//! existence check and mutation under one shard lock (`entry`, `get_mut`,
//! `remove`), so concurrent requests on the same name cannot interleave:
//! two creates never both succeed and increments are never lost.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{Result, TallyError};
use crate::protocol::body::CounterBody;

#[derive(Default)]
pub struct CounterRegistry {
    counters: DashMap<String, u64>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Insert `name` with value 0. Fails with `Conflict` if it already exists;
    /// the existing value is left untouched.
    pub fn create(&self, name: &str) -> Result<CounterBody> {
        if name.is_empty() {
            return Err(TallyError::BadRequest("counter name must not be empty".into()));
        }
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TallyError::Conflict(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                tracing::debug!(name = %name, "counter created");
                Ok(CounterBody::new(name, 0))
            }
        }
    }

    pub fn read(&self, name: &str) -> Result<CounterBody> {
        let value = self
            .counters
            .get(name)
            .map(|r| *r.value())
            .ok_or_else(|| TallyError::NotFound(name.to_string()))?;
        Ok(CounterBody::new(name, value))
    }

    /// Add one to an existing counter. Never creates implicitly.
    pub fn increment(&self, name: &str) -> Result<CounterBody> {
        let mut slot = self
            .counters
            .get_mut(name)
            .ok_or_else(|| TallyError::NotFound(name.to_string()))?;
        let next = slot
            .checked_add(1)
            .ok_or_else(|| TallyError::Overflow(name.to_string()))?;
        *slot = next;
        drop(slot);

        tracing::debug!(name = %name, value = next, "counter incremented");
        Ok(CounterBody::new(name, next))
    }

    /// Remove `name`. Deleting an absent name is `NotFound`, not a no-op.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.counters
            .remove(name)
            .map(|_| tracing::debug!(name = %name, "counter deleted"))
            .ok_or_else(|| TallyError::NotFound(name.to_string()))
    }

    /// Number of live counters.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
