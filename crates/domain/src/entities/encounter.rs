//! Encounter aggregate - one combat session and its turn state.
//!
//! The encounter owns its roster outright; combatants never exist outside
//! one. `active_index` always points into the canonical sorted roster and
//! stays in `0..len` whenever the roster is non-empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::combatant::{Combatant, CombatantDocument, CombatantPatch};
use crate::entities::CombatantKind;
use crate::error::DomainError;
use crate::ids::{CombatantId, EncounterId};
use crate::ordering;

/// Reserved id whose first lookup materializes the built-in demo encounter.
pub const DEMO_ENCOUNTER_ID: &str = "demo";

/// One combat session. The serde shape is the persisted/exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub id: EncounterId,
    pub name: String,
    #[serde(rename = "entities")]
    pub combatants: Vec<Combatant>,
    pub active_index: usize,
    pub round: u32,
    pub created_at: DateTime<Utc>,
}

/// Encounter shape accepted from imported documents. Turn state and the
/// creation timestamp are optional; combatant derived fields are recomputed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "entities")]
    pub combatants: Vec<CombatantDocument>,
    pub active_index: Option<usize>,
    pub round: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Encounter {
    /// Create an empty encounter: round 1, pointer at the top of the order.
    pub fn new(id: EncounterId, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            combatants: Vec::new(),
            active_index: 0,
            round: 1,
            created_at,
        }
    }

    /// The built-in demo encounter, "Goblin Ambush".
    ///
    /// Built fresh on every call so materialized copies never alias: mutating
    /// one stored demo can never corrupt the template for other sessions.
    pub fn demo(created_at: DateTime<Utc>) -> Self {
        let mut encounter = Self::new(EncounterId::new(DEMO_ENCOUNTER_ID), "Goblin Ambush", created_at);
        encounter.combatants = vec![
            demo_combatant("Valerius", CombatantKind::Player, 25, 18, 18, Vec::new()),
            demo_combatant("Goblin Archer", CombatantKind::Monster, 7, 7, 16, Vec::new()),
            demo_combatant("Lyra", CombatantKind::Player, 18, 18, 14, Vec::new()),
            demo_combatant(
                "Goblin Boss",
                CombatantKind::Monster,
                12,
                5,
                9,
                vec![crate::entities::StatusEffect::Bleed],
            ),
        ];
        encounter.sort();
        encounter
    }

    /// Rebuild an encounter from an imported document.
    ///
    /// `target` is the id the encounter is stored under; the document must
    /// carry an id of its own but the target wins. Derived combatant state is
    /// recomputed and the turn pointer is clamped into range.
    pub fn from_document(
        target: EncounterId,
        doc: EncounterDocument,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if doc.id.is_empty() {
            return Err(DomainError::validation("Encounter id cannot be empty"));
        }
        if doc.name.trim().is_empty() {
            return Err(DomainError::validation("Encounter name cannot be empty"));
        }

        let combatants = doc
            .combatants
            .into_iter()
            .map(Combatant::from_document)
            .collect::<Result<Vec<_>, _>>()?;

        let mut encounter = Self {
            id: target,
            name: doc.name,
            combatants,
            active_index: doc.active_index.unwrap_or(0),
            round: doc.round.unwrap_or(1).max(1),
            created_at: doc.created_at.unwrap_or(now),
        };
        encounter.sort();
        encounter.clamp_active_index();
        Ok(encounter)
    }

    /// Reapply the canonical ordering to the roster.
    pub fn sort(&mut self) {
        ordering::sort(&mut self.combatants);
    }

    /// Append a combatant and re-sort.
    pub fn add(&mut self, combatant: Combatant) {
        self.combatants.push(combatant);
        self.sort();
    }

    /// Merge a partial update onto one combatant and re-sort.
    pub fn patch_combatant(
        &mut self,
        id: &CombatantId,
        patch: CombatantPatch,
    ) -> Result<(), DomainError> {
        let combatant = self
            .combatants
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| DomainError::not_found("Combatant", id.as_str()))?;
        combatant.apply(patch);
        self.sort();
        Ok(())
    }

    /// Remove a combatant by id, keeping the turn pointer in range.
    pub fn remove_combatant(&mut self, id: &CombatantId) -> Result<(), DomainError> {
        let before = self.combatants.len();
        self.combatants.retain(|c| c.id != *id);
        if self.combatants.len() == before {
            return Err(DomainError::not_found("Combatant", id.as_str()));
        }
        self.clamp_active_index();
        Ok(())
    }

    /// Advance to the next living combatant's turn.
    ///
    /// No-op when the roster is empty or nobody is alive. The scan over dead
    /// combatants is bounded by the roster length. The round increments
    /// exactly when the pointer wraps back past the start of the order.
    pub fn advance_turn(&mut self) {
        if self.combatants.is_empty() || self.living_count() == 0 {
            return;
        }

        let len = self.combatants.len();
        let mut next = (self.active_index + 1) % len;
        let mut attempts = 0;
        while self.combatants[next].is_dead && attempts < len {
            next = (next + 1) % len;
            attempts += 1;
        }

        if next <= self.active_index {
            self.round += 1;
        }
        self.active_index = next;
    }

    /// Restore every combatant to full health and rewind the turn state.
    pub fn reset(&mut self) {
        for combatant in &mut self.combatants {
            combatant.revive();
        }
        self.active_index = 0;
        self.round = 1;
        // Death states changed, so the order may have too.
        self.sort();
    }

    /// The combatant whose turn it is, if any.
    pub fn active_combatant(&self) -> Option<&Combatant> {
        self.combatants.get(self.active_index)
    }

    /// Number of living combatants.
    pub fn living_count(&self) -> usize {
        self.combatants.iter().filter(|c| !c.is_dead).count()
    }

    fn clamp_active_index(&mut self) {
        if self.combatants.is_empty() {
            self.active_index = 0;
        } else {
            self.active_index = self.active_index.min(self.combatants.len() - 1);
        }
    }
}

fn demo_combatant(
    name: &str,
    kind: CombatantKind,
    max_hp: i32,
    current_hp: i32,
    initiative: i32,
    statuses: Vec<crate::entities::StatusEffect>,
) -> Combatant {
    Combatant {
        id: CombatantId::generate(),
        name: name.to_string(),
        kind,
        max_hp,
        current_hp,
        initiative,
        statuses,
        is_dead: current_hp <= 0,
    }
}
