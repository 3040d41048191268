mod combatant;
mod encounter;

pub use combatant::{
    Combatant, CombatantDocument, CombatantDraft, CombatantKind, CombatantPatch, StatusEffect,
};
pub use encounter::{Encounter, EncounterDocument, DEMO_ENCOUNTER_ID};
