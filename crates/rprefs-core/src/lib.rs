// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed read-only facade over preference bundles delivered as JSON.
//!
//! A bundle is produced elsewhere (usually a server payload) and handed to
//! [`PrefsBundle`] or borrowed through [`PrefsView`]. The facade projects the
//! `general_prefs` and `history_prefs` sub-bundles out as opaque handles
//! without copying or mutating the tree.

pub mod bundle;
pub mod error;
pub mod section;
pub mod source;

pub use bundle::{PrefsBundle, PrefsView};
pub use error::PrefsError;
pub use section::{GeneralPrefs, HistoryPrefs, GENERAL_PREFS_FIELD, HISTORY_PREFS_FIELD};
pub use source::{BundleLoader, BundleSource, SourceError};
