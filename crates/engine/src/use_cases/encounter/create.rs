//! Create encounter use case.

use std::sync::Arc;

use skirmish_domain::{Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;

/// Create a new, empty encounter under a fresh id.
pub struct CreateEncounter {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateEncounter {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, name: String) -> Result<Encounter, EncounterError> {
        let encounter = Encounter::new(EncounterId::generate(), name, self.clock.now());
        self.repo.put(&encounter).await?;
        tracing::info!(id = %encounter.id, name = %encounter.name, "Created encounter");
        Ok(encounter)
    }
}
