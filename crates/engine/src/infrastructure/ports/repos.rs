//! Repository port for encounter storage.

use async_trait::async_trait;
use skirmish_domain::{Encounter, EncounterId};

use super::error::RepoError;

/// Keyed encounter storage: one encounter per id, written whole.
///
/// Operations read the full encounter, compute a new value, and put it back
/// as a single unit; the store's per-key atomicity is the only concurrency
/// guarantee. Racing writers on one id resolve last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncounterRepo: Send + Sync {
    async fn get(&self, id: EncounterId) -> Result<Option<Encounter>, RepoError>;
    async fn put(&self, encounter: &Encounter) -> Result<(), RepoError>;
}
