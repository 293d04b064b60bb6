//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are small positive integers, stable for the lifetime of a
//! record and serialized as bare numbers. `0` means "not assigned yet".

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::entity::SequentialId;
use crate::error::DomainError;

/// Identifier of an inventory item (raw material).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(u64);

/// Identifier of a recipe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u64);

macro_rules! impl_numeric_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }

        impl SequentialId for $t {
            fn is_unassigned(&self) -> bool {
                self.0 == 0
            }

            fn next_after(max: Option<&Self>) -> Self {
                Self(max.map_or(0, |id| id.0) + 1)
            }
        }
    };
}

impl_numeric_newtype!(InventoryItemId, "InventoryItemId");
impl_numeric_newtype!(RecipeId, "RecipeId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        let id: InventoryItemId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<RecipeId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("RecipeId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&RecipeId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn next_after_starts_at_one() {
        assert_eq!(InventoryItemId::next_after(None), InventoryItemId::new(1));
        assert_eq!(
            InventoryItemId::next_after(Some(&InventoryItemId::new(6))),
            InventoryItemId::new(7)
        );
    }
}
