// Port errors define the full contract - some constructors are adapter-facing
#![allow(dead_code)]

//! Error types for port operations.

/// Storage operation errors with context for debugging.
///
/// The store itself is assumed reliable; this exists so adapters backed by a
/// real database can report failures through the same port contract.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }
}
