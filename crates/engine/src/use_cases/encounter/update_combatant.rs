//! Update combatant use case.

use std::sync::Arc;

use skirmish_domain::{CombatantId, CombatantPatch, Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;
use super::helpers;

/// Merge a partial update onto one combatant and persist the re-sorted
/// roster. A missing combatant fails the operation with no state change.
pub struct UpdateCombatant {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateCombatant {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(
        &self,
        id: EncounterId,
        combatant_id: CombatantId,
        patch: CombatantPatch,
    ) -> Result<Encounter, EncounterError> {
        let mut encounter = helpers::load(self.repo.as_ref(), self.clock.as_ref(), &id).await?;
        encounter.patch_combatant(&combatant_id, patch)?;
        self.repo.put(&encounter).await?;
        Ok(encounter)
    }
}
