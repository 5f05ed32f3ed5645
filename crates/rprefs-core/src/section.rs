// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Opaque handles for the named sub-bundles (general + history).
//!
//! A handle aliases an object inside the bound tree. The facade never looks
//! at the keys; consumers either read raw entries or [`Section::decode`] into
//! a type they own.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{json_type_name, PrefsError};

/// Wire name of the general sub-bundle.
pub const GENERAL_PREFS_FIELD: &str = "general_prefs";
/// Wire name of the history sub-bundle.
pub const HISTORY_PREFS_FIELD: &str = "history_prefs";

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::General {}
    impl Sealed for super::History {}
}

/// Marker for a named sub-bundle. Sealed; only [`General`] and [`History`] exist.
pub trait SectionKind: sealed::Sealed {
    /// Field name the section is projected from.
    const FIELD: &'static str;
}

/// Marker for the `general_prefs` sub-bundle.
#[derive(Debug)]
pub enum General {}

/// Marker for the `history_prefs` sub-bundle.
#[derive(Debug)]
pub enum History {}

impl SectionKind for General {
    const FIELD: &'static str = GENERAL_PREFS_FIELD;
}

impl SectionKind for History {
    const FIELD: &'static str = HISTORY_PREFS_FIELD;
}

/// Handle over the general application settings.
pub type GeneralPrefs<'a> = Section<'a, General>;
/// Handle over the history-related settings.
pub type HistoryPrefs<'a> = Section<'a, History>;

/// Borrowed, read-only handle over one named sub-bundle.
pub struct Section<'a, K: SectionKind> {
    value: &'a Value,
    map: &'a Map<String, Value>,
    _kind: PhantomData<fn() -> K>,
}

impl<'a, K: SectionKind> Section<'a, K> {
    /// Lenient projection: absent, `null` and non-object values all yield `None`.
    pub(crate) fn project(root: &'a Value) -> Option<Self> {
        Self::try_project(root).ok().flatten()
    }

    /// Checked projection: absent or `null` is `Ok(None)`, any other non-object
    /// value is a [`PrefsError::TypeMismatch`].
    pub(crate) fn try_project(root: &'a Value) -> Result<Option<Self>, PrefsError> {
        match root.get(K::FIELD) {
            None | Some(Value::Null) => Ok(None),
            Some(value @ Value::Object(map)) => Ok(Some(Self {
                value,
                map,
                _kind: PhantomData,
            })),
            Some(other) => Err(PrefsError::TypeMismatch {
                field: K::FIELD,
                expected: "object",
                found: json_type_name(other),
            }),
        }
    }

    /// Field name this handle was projected from.
    pub fn field(&self) -> &'static str {
        K::FIELD
    }

    /// The aliased sub-value (always a JSON object).
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    /// The aliased sub-value as a map.
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// Raw entry lookup; the facade does not interpret the key.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Entry keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the sub-bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Deserialize the sub-bundle into a caller-owned type.
    pub fn decode<T>(&self) -> Result<T, PrefsError>
    where
        T: DeserializeOwned,
    {
        T::deserialize(self.value).map_err(|source| PrefsError::Decode {
            field: K::FIELD,
            source,
        })
    }
}

impl<K: SectionKind> Clone for Section<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: SectionKind> Copy for Section<'_, K> {}

impl<K: SectionKind> PartialEq for Section<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: SectionKind> PartialEq<Value> for Section<'_, K> {
    fn eq(&self, other: &Value) -> bool {
        self.value == other
    }
}

impl<K: SectionKind> fmt::Debug for Section<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("field", &K::FIELD)
            .field("value", self.value)
            .finish()
    }
}
