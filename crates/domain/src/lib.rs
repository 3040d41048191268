pub mod entities;
pub mod error;
pub mod ids;
pub mod ordering;

pub use entities::{
    Combatant, CombatantDocument, CombatantDraft, CombatantKind, CombatantPatch, Encounter,
    EncounterDocument, StatusEffect, DEMO_ENCOUNTER_ID,
};

pub use error::DomainError;

pub use ids::{CombatantId, EncounterId};
