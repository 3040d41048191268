//! Reset combat use case.

use std::sync::Arc;

use skirmish_domain::{Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;
use super::helpers;

/// Restore every combatant to full health, clear statuses, and rewind the
/// turn state to round 1.
pub struct ResetCombat {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ResetCombat {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, id: EncounterId) -> Result<Encounter, EncounterError> {
        let mut encounter = helpers::load(self.repo.as_ref(), self.clock.as_ref(), &id).await?;
        encounter.reset();
        self.repo.put(&encounter).await?;
        tracing::info!(id = %encounter.id, "Reset combat");
        Ok(encounter)
    }
}
