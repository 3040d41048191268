//! Ports for external collaborators: storage and time.

mod error;
mod repos;

use chrono::{DateTime, Utc};

pub use error::RepoError;
pub use repos::EncounterRepo;

#[cfg(test)]
pub use repos::MockEncounterRepo;

/// Clock abstraction so use cases never read wall-clock time directly.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
