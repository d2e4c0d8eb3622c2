//! Tri-state field type for partial updates.
//!
//! A JSON body either omits a field (leave the stored value alone) or
//! supplies it (overwrite). Plain `Option<T>` cannot tell "omitted" from
//! `null` once `T` is itself nullable, so update DTOs use [`Patch`] with
//! `#[serde(default)]`:
//!
//! ```
//! use roster_core::patch::Patch;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Update {
//!     #[serde(default)]
//!     age: Patch<Option<i64>>,
//! }
//!
//! let omitted: Update = serde_json::from_str("{}").unwrap();
//! assert_eq!(omitted.age, Patch::Unset);
//!
//! let cleared: Update = serde_json::from_str(r#"{"age": null}"#).unwrap();
//! assert_eq!(cleared.age, Patch::Set(None));
//! ```

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not present in the request.
    Unset,
    /// The field was present; store this value.
    Set(T),
}

// Hand-written so `Patch<T>: Default` holds without `T: Default`.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Unset => Patch::Unset,
            Patch::Set(value) => Patch::Set(value),
        }
    }

    /// The supplied value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Unset => None,
            Patch::Set(value) => Some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absent keys use `Default`.
        T::deserialize(deserializer).map(Patch::Set)
    }
}
