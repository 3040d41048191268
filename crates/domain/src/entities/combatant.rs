//! Combatant entity - one participant in an encounter.
//!
//! A combatant's `is_dead` flag is derived state: it must always equal
//! `current_hp <= 0`, and `current_hp` stays inside `[0, max_hp]`. Every
//! write path re-establishes both through [`Combatant::clamp_hp`].

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CombatantId;

/// Player characters act before monsters at equal initiative, so the variant
/// order here is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatantKind {
    Player,
    Monster,
}

/// A descriptive condition tag. Tags carry no rules of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusEffect {
    Poisoned,
    Stunned,
    Bleed,
}

/// One combatant. The serde shape is the persisted/exported document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CombatantKind,
    #[serde(rename = "maxHP")]
    pub max_hp: i32,
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    pub initiative: i32,
    pub statuses: Vec<StatusEffect>,
    pub is_dead: bool,
}

/// Payload for adding a combatant to an encounter.
///
/// `current_hp` is optional; a combatant joins at full health unless the
/// caller says otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CombatantKind,
    #[serde(rename = "maxHP")]
    pub max_hp: i32,
    #[serde(rename = "currentHP")]
    pub current_hp: Option<i32>,
    pub initiative: i32,
}

/// Partial update for an existing combatant. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CombatantKind>,
    #[serde(rename = "maxHP")]
    pub max_hp: Option<i32>,
    #[serde(rename = "currentHP")]
    pub current_hp: Option<i32>,
    pub initiative: Option<i32>,
    pub statuses: Option<Vec<StatusEffect>>,
}

/// Combatant shape accepted from imported documents.
///
/// `is_dead` is parsed but never trusted; it is recomputed from `current_hp`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CombatantKind,
    #[serde(rename = "maxHP")]
    pub max_hp: i32,
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    pub initiative: i32,
    pub statuses: Option<Vec<StatusEffect>>,
    pub is_dead: Option<bool>,
}

impl Combatant {
    /// Build a combatant from an add payload, validating the draft.
    pub fn new(id: CombatantId, draft: CombatantDraft) -> Result<Self, DomainError> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("Combatant name cannot be empty"));
        }
        if draft.max_hp < 1 {
            return Err(DomainError::validation("maxHP must be at least 1"));
        }
        if draft.initiative < 0 {
            return Err(DomainError::validation("initiative cannot be negative"));
        }

        let mut combatant = Self {
            id,
            name: draft.name,
            kind: draft.kind,
            max_hp: draft.max_hp,
            current_hp: draft.current_hp.unwrap_or(draft.max_hp),
            initiative: draft.initiative,
            statuses: Vec::new(),
            is_dead: false,
        };
        combatant.clamp_hp();
        Ok(combatant)
    }

    /// Normalize an imported combatant, enforcing the data-model constraints
    /// and recomputing the derived fields.
    pub fn from_document(doc: CombatantDocument) -> Result<Self, DomainError> {
        if doc.id.is_empty() {
            return Err(DomainError::validation("Combatant id cannot be empty"));
        }
        if doc.name.trim().is_empty() {
            return Err(DomainError::validation("Combatant name cannot be empty"));
        }
        if doc.max_hp < 1 {
            return Err(DomainError::validation("maxHP must be at least 1"));
        }

        let mut combatant = Self {
            id: CombatantId::new(doc.id),
            name: doc.name,
            kind: doc.kind,
            max_hp: doc.max_hp,
            current_hp: doc.current_hp,
            initiative: doc.initiative,
            statuses: Vec::new(),
            is_dead: false,
        };
        combatant.set_statuses(doc.statuses.unwrap_or_default());
        combatant.clamp_hp();
        Ok(combatant)
    }

    /// Merge a partial update, then re-establish the HP invariants.
    pub fn apply(&mut self, patch: CombatantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(max_hp) = patch.max_hp {
            self.max_hp = max_hp;
        }
        if let Some(current_hp) = patch.current_hp {
            self.current_hp = current_hp;
        }
        if let Some(statuses) = patch.statuses {
            self.set_statuses(statuses);
        }
        if let Some(initiative) = patch.initiative {
            self.initiative = initiative;
        }
        // Clamp against the post-merge maxHP, whichever side of the pair moved.
        self.clamp_hp();
    }

    /// Replace the status set, dropping duplicate tags.
    pub fn set_statuses(&mut self, statuses: Vec<StatusEffect>) {
        self.statuses.clear();
        for status in statuses {
            if !self.statuses.contains(&status) {
                self.statuses.push(status);
            }
        }
    }

    /// Restore full health and clear conditions.
    pub fn revive(&mut self) {
        self.current_hp = self.max_hp;
        self.is_dead = false;
        self.statuses.clear();
    }

    /// Clamp `current_hp` into `[0, max_hp]` and recompute `is_dead`.
    fn clamp_hp(&mut self) {
        self.current_hp = self.current_hp.clamp(0, self.max_hp.max(0));
        self.is_dead = self.current_hp <= 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, max_hp: i32, initiative: i32) -> CombatantDraft {
        CombatantDraft {
            name: name.to_string(),
            kind: CombatantKind::Player,
            max_hp,
            current_hp: None,
            initiative,
        }
    }

    #[test]
    fn new_combatant_joins_at_full_health() {
        let combatant =
            Combatant::new(CombatantId::generate(), draft("Valerius", 25, 18)).expect("valid");
        assert_eq!(combatant.current_hp, 25);
        assert!(!combatant.is_dead);
        assert!(combatant.statuses.is_empty());
    }

    #[test]
    fn new_combatant_honors_starting_hp() {
        let mut d = draft("Valerius", 25, 18);
        d.current_hp = Some(10);
        let combatant = Combatant::new(CombatantId::generate(), d).expect("valid");
        assert_eq!(combatant.current_hp, 10);
    }

    #[test]
    fn new_combatant_with_zero_starting_hp_is_dead() {
        let mut d = draft("Goblin", 7, 12);
        d.current_hp = Some(0);
        let combatant = Combatant::new(CombatantId::generate(), d).expect("valid");
        assert!(combatant.is_dead);
    }

    #[test]
    fn draft_validation_rejects_bad_fields() {
        assert!(Combatant::new(CombatantId::generate(), draft("  ", 10, 5)).is_err());
        assert!(Combatant::new(CombatantId::generate(), draft("Goblin", 0, 5)).is_err());
        assert!(Combatant::new(CombatantId::generate(), draft("Goblin", 10, -1)).is_err());
    }

    #[test]
    fn patch_clamps_hp_below_zero() {
        let mut combatant =
            Combatant::new(CombatantId::generate(), draft("Lyra", 10, 14)).expect("valid");
        combatant.apply(CombatantPatch {
            current_hp: Some(-5),
            ..Default::default()
        });
        assert_eq!(combatant.current_hp, 0);
        assert!(combatant.is_dead);
    }

    #[test]
    fn patch_clamps_hp_above_max() {
        let mut combatant =
            Combatant::new(CombatantId::generate(), draft("Lyra", 10, 14)).expect("valid");
        combatant.apply(CombatantPatch {
            current_hp: Some(999),
            ..Default::default()
        });
        assert_eq!(combatant.current_hp, 10);
        assert!(!combatant.is_dead);
    }

    #[test]
    fn lowering_max_hp_reclamps_current_hp() {
        let mut combatant =
            Combatant::new(CombatantId::generate(), draft("Ogre", 30, 8)).expect("valid");
        combatant.apply(CombatantPatch {
            max_hp: Some(12),
            ..Default::default()
        });
        assert_eq!(combatant.current_hp, 12);
        assert!(!combatant.is_dead);
    }

    #[test]
    fn set_statuses_drops_duplicates() {
        let mut combatant =
            Combatant::new(CombatantId::generate(), draft("Lyra", 10, 14)).expect("valid");
        combatant.set_statuses(vec![
            StatusEffect::Poisoned,
            StatusEffect::Bleed,
            StatusEffect::Poisoned,
        ]);
        assert_eq!(
            combatant.statuses,
            vec![StatusEffect::Poisoned, StatusEffect::Bleed]
        );
    }

    #[test]
    fn revive_restores_health_and_clears_statuses() {
        let mut combatant =
            Combatant::new(CombatantId::generate(), draft("Lyra", 10, 14)).expect("valid");
        combatant.apply(CombatantPatch {
            current_hp: Some(0),
            statuses: Some(vec![StatusEffect::Stunned]),
            ..Default::default()
        });
        combatant.revive();
        assert_eq!(combatant.current_hp, 10);
        assert!(!combatant.is_dead);
        assert!(combatant.statuses.is_empty());
    }

    #[test]
    fn document_recomputes_is_dead() {
        let doc = CombatantDocument {
            id: "c1".to_string(),
            name: "Goblin".to_string(),
            kind: CombatantKind::Monster,
            max_hp: 7,
            current_hp: 0,
            initiative: 12,
            statuses: None,
            is_dead: Some(false),
        };
        let combatant = Combatant::from_document(doc).expect("valid");
        assert!(combatant.is_dead);
        assert!(combatant.statuses.is_empty());
    }

    #[test]
    fn wire_shape_uses_original_field_names() {
        let combatant =
            Combatant::new(CombatantId::new("c1"), draft("Valerius", 25, 18)).expect("valid");
        let json = serde_json::to_value(&combatant).expect("serialize");
        assert_eq!(json["type"], "player");
        assert_eq!(json["maxHP"], 25);
        assert_eq!(json["currentHP"], 25);
        assert_eq!(json["isDead"], false);
    }
}
