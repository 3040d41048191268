//! Remove combatant use case.

use std::sync::Arc;

use skirmish_domain::{CombatantId, Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;
use super::helpers;

/// Remove a combatant from the roster. The turn pointer is clamped so it
/// never lands outside the shrunk roster.
pub struct RemoveCombatant {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RemoveCombatant {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(
        &self,
        id: EncounterId,
        combatant_id: CombatantId,
    ) -> Result<Encounter, EncounterError> {
        let mut encounter = helpers::load(self.repo.as_ref(), self.clock.as_ref(), &id).await?;
        encounter.remove_combatant(&combatant_id)?;
        self.repo.put(&encounter).await?;
        tracing::debug!(id = %encounter.id, roster = encounter.combatants.len(), "Removed combatant");
        Ok(encounter)
    }
}
