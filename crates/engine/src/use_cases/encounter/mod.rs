//! Encounter use cases.
//!
//! One struct per operation. Every operation reads the whole encounter,
//! applies a domain mutation, and writes the whole encounter back; a failed
//! operation commits nothing.

mod add_combatant;
mod create;
mod error;
mod get;
mod helpers;
mod import;
mod next_turn;
mod remove_combatant;
mod reset;
mod update_combatant;

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, EncounterRepo};

pub use add_combatant::AddCombatant;
pub use create::CreateEncounter;
pub use error::EncounterError;
pub use get::GetEncounter;
pub use import::ImportEncounter;
pub use next_turn::NextTurn;
pub use remove_combatant::RemoveCombatant;
pub use reset::ResetCombat;
pub use update_combatant::UpdateCombatant;

/// Container for encounter use cases.
pub struct EncounterUseCases {
    pub create: CreateEncounter,
    pub get: GetEncounter,
    pub add_combatant: AddCombatant,
    pub update_combatant: UpdateCombatant,
    pub remove_combatant: RemoveCombatant,
    pub next_turn: NextTurn,
    pub reset: ResetCombat,
    pub import: ImportEncounter,
}

impl EncounterUseCases {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            create: CreateEncounter::new(repo.clone(), clock.clone()),
            get: GetEncounter::new(repo.clone(), clock.clone()),
            add_combatant: AddCombatant::new(repo.clone(), clock.clone()),
            update_combatant: UpdateCombatant::new(repo.clone(), clock.clone()),
            remove_combatant: RemoveCombatant::new(repo.clone(), clock.clone()),
            next_turn: NextTurn::new(repo.clone(), clock.clone()),
            reset: ResetCombat::new(repo.clone(), clock.clone()),
            import: ImportEncounter::new(repo, clock),
        }
    }
}
