//! Strongly-typed ID wrappers for ledger entities
//!
//! IDs are opaque strings on the wire. New IDs are UUID v4, but any string
//! read back from storage is accepted so that entries written elsewhere stay
//! addressable.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of id characters shown in the short display form
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an existing raw id string
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short prefix of the raw id, as shown in listings
            pub fn short(&self) -> &str {
                match self.0.char_indices().nth(SHORT_LEN) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }

            /// Check whether a user-supplied identifier refers to this ID
            ///
            /// Accepts the full raw id, the short display form with or
            /// without its prefix.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim();
                if identifier.is_empty() {
                    return false;
                }
                if identifier == self.0 {
                    return true;
                }
                let bare = identifier.strip_prefix($display_prefix).unwrap_or(identifier);
                bare == self.short()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.short())
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from_raw(raw)
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(GoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| ExpenseId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_short_raw_id_displays_whole() {
        let id = GoalId::from_raw("1729");
        assert_eq!(id.to_string(), "goal-1729");
    }

    #[test]
    fn test_matches_full_and_short_forms() {
        let id = ExpenseId::from_raw("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("exp-550e8400"));
        assert!(id.matches("550e8400"));
        assert!(!id.matches("exp-550e840"));
        assert!(!id.matches(""));
    }

    #[test]
    fn test_legacy_timestamp_id_round_trips() {
        let json = "\"1729350000000\"";
        let id: GoalId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), "1729350000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
    }
}
