//! Next turn use case.

use std::sync::Arc;

use skirmish_domain::{Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;
use super::helpers;

/// Advance the turn pointer to the next living combatant, rolling the round
/// counter when the order wraps. An empty or fully-dead roster is a no-op.
pub struct NextTurn {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl NextTurn {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, id: EncounterId) -> Result<Encounter, EncounterError> {
        let mut encounter = helpers::load(self.repo.as_ref(), self.clock.as_ref(), &id).await?;
        encounter.advance_turn();
        self.repo.put(&encounter).await?;
        tracing::debug!(
            id = %encounter.id,
            round = encounter.round,
            active = encounter.active_combatant().map(|c| c.name.as_str()),
            "Advanced turn"
        );
        Ok(encounter)
    }
}
