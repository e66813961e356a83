//! Field-level presence for partial updates.
//!
//! A JSON body like `{"description": null}` has to mean something different
//! from `{}`: the first clears the column, the second leaves it alone. Plain
//! `Option<T>` collapses both into `None`, so update payloads use [`Patch`]
//! with `#[serde(default)]` on every field.

use serde::{Deserialize, Deserializer};

use crate::errors::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field absent from the payload.
    #[default]
    Missing,
    /// Field present with an explicit `null`.
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// Resolve against a NOT NULL column. `Ok(None)` means leave unchanged.
    pub fn required(self, field: &str) -> Result<Option<T>, ModelError> {
        match self {
            Patch::Missing => Ok(None),
            Patch::Null => Err(ModelError::Validation(format!("{field} may not be null"))),
            Patch::Value(v) => Ok(Some(v)),
        }
    }

    /// Resolve against a nullable column. `Some(None)` clears it.
    pub fn nullable(self) -> Option<Option<T>> {
        match self {
            Patch::Missing => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|v| match v {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
