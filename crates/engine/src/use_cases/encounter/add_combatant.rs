//! Add combatant use case.

use std::sync::Arc;

use skirmish_domain::{Combatant, CombatantDraft, CombatantId, Encounter, EncounterId};

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

use super::error::EncounterError;
use super::helpers;

/// Validate a draft, add the combatant under a fresh id, and persist the
/// re-sorted roster.
pub struct AddCombatant {
    repo: Arc<dyn EncounterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AddCombatant {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn execute(
        &self,
        id: EncounterId,
        draft: CombatantDraft,
    ) -> Result<Encounter, EncounterError> {
        let combatant = Combatant::new(CombatantId::generate(), draft)?;
        let mut encounter = helpers::load(self.repo.as_ref(), self.clock.as_ref(), &id).await?;
        encounter.add(combatant);
        self.repo.put(&encounter).await?;
        tracing::debug!(id = %encounter.id, roster = encounter.combatants.len(), "Added combatant");
        Ok(encounter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockEncounterRepo;
    use chrono::{DateTime, Utc};
    use skirmish_domain::CombatantKind;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    fn draft(name: &str, initiative: i32) -> CombatantDraft {
        CombatantDraft {
            name: name.to_string(),
            kind: CombatantKind::Monster,
            max_hp: 7,
            current_hp: None,
            initiative,
        }
    }

    #[tokio::test]
    async fn adds_combatant_and_persists_sorted_roster() {
        let mut stored = Encounter::new(EncounterId::new("e1"), "Test", fixed_now());
        let low = Combatant::new(CombatantId::generate(), draft("Slow", 3)).expect("valid");
        stored.add(low);

        let mut repo = MockEncounterRepo::new();
        let stored_clone = stored.clone();
        repo.expect_get()
            .returning(move |_| Ok(Some(stored_clone.clone())));
        repo.expect_put()
            .withf(|e: &Encounter| e.combatants.len() == 2 && e.combatants[0].name == "Fast")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddCombatant::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));
        let encounter = use_case
            .execute(EncounterId::new("e1"), draft("Fast", 19))
            .await
            .expect("add succeeds");

        assert_eq!(encounter.combatants[0].name, "Fast");
        assert_eq!(encounter.combatants[0].current_hp, 7);
        assert!(!encounter.combatants[0].is_dead);
    }

    #[tokio::test]
    async fn when_draft_is_invalid_nothing_is_loaded_or_persisted() {
        let repo = MockEncounterRepo::new();
        let use_case = AddCombatant::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));

        let result = use_case
            .execute(EncounterId::new("e1"), draft("", 5))
            .await;

        assert!(matches!(result, Err(EncounterError::Validation(_))));
    }

    #[tokio::test]
    async fn when_encounter_missing_returns_not_found() {
        let mut repo = MockEncounterRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let use_case = AddCombatant::new(Arc::new(repo), Arc::new(FixedClock(fixed_now())));
        let result = use_case
            .execute(EncounterId::new("nope"), draft("Goblin", 5))
            .await;

        assert!(matches!(result, Err(EncounterError::NotFound { .. })));
    }
}
