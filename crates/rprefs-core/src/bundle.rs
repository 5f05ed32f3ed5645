// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The preferences bundle and its borrowed view.

use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use crate::error::PrefsError;
use crate::section::{GeneralPrefs, HistoryPrefs};

/// Non-owning facade over a parsed preferences tree.
///
/// Every accessor is a keyed lookup on the bound tree; nothing is copied,
/// cached or mutated. Absent fields come back as `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefsView<'a> {
    root: &'a Value,
}

impl<'a> PrefsView<'a> {
    /// Bind a view to a tree owned elsewhere.
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// The underlying tree.
    pub fn raw(&self) -> &'a Value {
        self.root
    }

    /// The `general_prefs` sub-bundle, or `None` when absent.
    ///
    /// A value that is present but not an object is also reported as `None`;
    /// use [`PrefsView::try_general_prefs`] to tell the two apart.
    pub fn general_prefs(&self) -> Option<GeneralPrefs<'a>> {
        GeneralPrefs::project(self.root)
    }

    /// The `history_prefs` sub-bundle, or `None` when absent.
    ///
    /// Same mismatch handling as [`PrefsView::general_prefs`].
    pub fn history_prefs(&self) -> Option<HistoryPrefs<'a>> {
        HistoryPrefs::project(self.root)
    }

    /// Checked variant of [`PrefsView::general_prefs`].
    pub fn try_general_prefs(&self) -> Result<Option<GeneralPrefs<'a>>, PrefsError> {
        GeneralPrefs::try_project(self.root)
    }

    /// Checked variant of [`PrefsView::history_prefs`].
    pub fn try_history_prefs(&self) -> Result<Option<HistoryPrefs<'a>>, PrefsError> {
        HistoryPrefs::try_project(self.root)
    }
}

/// Shared, immutable preferences bundle.
///
/// Cloning shares the parsed tree; the bundle is `Send + Sync` so it can be
/// handed to other threads as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefsBundle {
    root: Arc<Value>,
}

impl PrefsBundle {
    /// Wrap an already-parsed tree.
    pub fn new(root: Value) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Parse a JSON payload.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PrefsError> {
        Ok(Self::new(serde_json::from_slice(bytes)?))
    }

    /// Borrowed facade over this bundle.
    pub fn view(&self) -> PrefsView<'_> {
        PrefsView::new(&self.root)
    }

    /// The underlying tree.
    pub fn raw(&self) -> &Value {
        &self.root
    }

    /// True when both handles share the same tree.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// See [`PrefsView::general_prefs`].
    pub fn general_prefs(&self) -> Option<GeneralPrefs<'_>> {
        self.view().general_prefs()
    }

    /// See [`PrefsView::history_prefs`].
    pub fn history_prefs(&self) -> Option<HistoryPrefs<'_>> {
        self.view().history_prefs()
    }

    /// See [`PrefsView::try_general_prefs`].
    pub fn try_general_prefs(&self) -> Result<Option<GeneralPrefs<'_>>, PrefsError> {
        self.view().try_general_prefs()
    }

    /// See [`PrefsView::try_history_prefs`].
    pub fn try_history_prefs(&self) -> Result<Option<HistoryPrefs<'_>>, PrefsError> {
        self.view().try_history_prefs()
    }
}

impl From<Value> for PrefsBundle {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

impl FromStr for PrefsBundle {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}
