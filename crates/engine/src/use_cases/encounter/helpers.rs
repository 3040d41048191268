//! Shared load path for encounter operations.

use skirmish_domain::{Encounter, EncounterId, DEMO_ENCOUNTER_ID};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;

/// Load an encounter, re-sorting the persisted roster.
///
/// Persisted order is never trusted: imported or legacy data may carry an
/// arbitrary order, so every load reapplies the canonical ordering.
///
/// The reserved demo id materializes the built-in template on first access
/// and persists it, so repeated lookups (and mutations addressed at the demo)
/// all see the same stored encounter.
pub(super) async fn load(
    repo: &dyn EncounterRepo,
    clock: &dyn ClockPort,
    id: &EncounterId,
) -> Result<Encounter, EncounterError> {
    if let Some(mut encounter) = repo.get(id.clone()).await? {
        encounter.sort();
        return Ok(encounter);
    }

    if id.as_str() == DEMO_ENCOUNTER_ID {
        let demo = Encounter::demo(clock.now());
        repo.put(&demo).await?;
        tracing::info!("Materialized demo encounter");
        return Ok(demo);
    }

    Err(EncounterError::not_found("Encounter", id))
}
