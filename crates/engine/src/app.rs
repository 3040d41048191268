//! Application wiring.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, EncounterRepo};
use crate::use_cases::encounter::EncounterUseCases;

/// Use cases exposed to the transport layer.
pub struct UseCases {
    pub encounter: EncounterUseCases,
}

/// Application container. Ports are wired exactly once, here.
pub struct App {
    pub use_cases: UseCases,
}

impl App {
    pub fn new(repo: Arc<dyn EncounterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases: UseCases {
                encounter: EncounterUseCases::new(repo, clock),
            },
        }
    }
}
