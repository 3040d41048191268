//! In-memory encounter store.
//!
//! Stands in for the external key-value collaborator. Per-key atomicity
//! comes from the map's sharded locking; a whole encounter is the unit of
//! every read and write.

use async_trait::async_trait;
use dashmap::DashMap;
use skirmish_domain::{Encounter, EncounterId};

use crate::infrastructure::ports::{EncounterRepo, RepoError};

pub struct InMemoryEncounters {
    entries: DashMap<EncounterId, Encounter>,
}

impl InMemoryEncounters {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl Default for InMemoryEncounters {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EncounterRepo for InMemoryEncounters {
    async fn get(&self, id: EncounterId) -> Result<Option<Encounter>, RepoError> {
        Ok(self.entries.get(&id).map(|entry| entry.value().clone()))
    }

    async fn put(&self, encounter: &Encounter) -> Result<(), RepoError> {
        self.entries.insert(encounter.id.clone(), encounter.clone());
        Ok(())
    }
}
