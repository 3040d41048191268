//! Import encounter use case.

use std::sync::Arc;

use skirmish_domain::{Encounter, EncounterDocument, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;

/// Rebuild an encounter from a raw JSON document and persist it wholesale,
/// overwriting anything stored under the target id. Malformed documents fail
/// validation and commit nothing.
pub struct ImportEncounter {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ImportEncounter {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, id: EncounterId, raw: &str) -> Result<Encounter, EncounterError> {
        let document: EncounterDocument = serde_json::from_str(raw)
            .map_err(|e| EncounterError::Validation(format!("Invalid encounter document: {e}")))?;

        let encounter = Encounter::from_document(id, document, self.clock.now())?;
        self.repo.put(&encounter).await?;
        tracing::info!(
            id = %encounter.id,
            roster = encounter.combatants.len(),
            "Imported encounter"
        );
        Ok(encounter)
    }
}
