use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque string-backed identifier.
///
/// Encounter ids are user-visible URL segments and may be reserved literals
/// (the demo encounter), so ids are strings rather than raw UUIDs; imported
/// documents keep whatever ids they carried.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(EncounterId);
define_id!(CombatantId);

impl EncounterId {
    /// Generate a fresh short id (first segment of a v4 UUID).
    pub fn generate() -> Self {
        let hyphenated = Uuid::new_v4().to_string();
        Self(hyphenated[..8].to_string())
    }
}

impl CombatantId {
    /// Generate a fresh id from a v4 UUID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
