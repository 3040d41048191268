//! Get encounter use case.

use std::sync::Arc;

use skirmish_domain::{Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;
use super::helpers;

/// Fetch an encounter by id, materializing the demo on first access.
pub struct GetEncounter {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GetEncounter {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(&self, id: EncounterId) -> Result<Encounter, EncounterError> {
        helpers::load(self.repo.as_ref(), self.clock.as_ref(), &id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockEncounterRepo, RepoError};
    use chrono::{DateTime, Utc};
    use skirmish_domain::{Combatant, CombatantDraft, CombatantId, CombatantKind};

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    fn member(name: &str, initiative: i32) -> Combatant {
        let draft = CombatantDraft {
            name: name.to_string(),
            kind: CombatantKind::Player,
            max_hp: 10,
            current_hp: None,
            initiative,
        };
        Combatant::new(CombatantId::generate(), draft).expect("valid draft")
    }

    #[tokio::test]
    async fn returns_stored_encounter_in_canonical_order() {
        // Persisted order is deliberately wrong: low initiative first.
        let mut stored = Encounter::new(EncounterId::new("e1"), "Stored", fixed_now());
        stored.combatants.push(member("Slow", 3));
        stored.combatants.push(member("Fast", 19));

        let mut repo = MockEncounterRepo::new();
        let stored_clone = stored.clone();
        repo.expect_get()
            .withf(|id: &EncounterId| id.as_str() == "e1")
            .returning(move |_| Ok(Some(stored_clone.clone())));

        let use_case = GetEncounter::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));
        let encounter = use_case
            .execute(EncounterId::new("e1"))
            .await
            .expect("get succeeds");

        assert_eq!(encounter.combatants[0].name, "Fast");
        assert_eq!(encounter.combatants[1].name, "Slow");
    }

    #[tokio::test]
    async fn first_demo_lookup_materializes_and_persists() {
        let mut repo = MockEncounterRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_put()
            .withf(|e: &Encounter| e.id.as_str() == "demo" && e.combatants.len() == 4)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = GetEncounter::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));
        let encounter = use_case
            .execute(EncounterId::new("demo"))
            .await
            .expect("demo materializes");

        assert_eq!(encounter.name, "Goblin Ambush");
        assert_eq!(encounter.combatants[0].name, "Valerius");
    }

    #[tokio::test]
    async fn when_encounter_missing_returns_not_found() {
        let mut repo = MockEncounterRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let use_case = GetEncounter::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));
        let result = use_case.execute(EncounterId::new("nope")).await;

        assert!(matches!(result, Err(EncounterError::NotFound { .. })));
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let mut repo = MockEncounterRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::storage("get", "shard offline")));

        let use_case = GetEncounter::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));
        let result = use_case.execute(EncounterId::new("e1")).await;

        assert!(matches!(result, Err(EncounterError::Repo(_))));
    }
}
