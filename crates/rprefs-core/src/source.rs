// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only source port for raw preference payloads.

use thiserror::Error;
use tracing::debug;

use crate::bundle::PrefsBundle;

/// Where raw preference payloads come from, addressed by a logical key.
pub trait BundleSource {
    /// Fetch the payload bytes for `key`, or `SourceError::NotFound` if there are none.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SourceError>;
}

/// Failure while fetching or parsing a payload.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No payload stored under the key.
    #[error("not found")]
    NotFound,
    /// Reading the payload failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Payload bytes are not JSON.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Source-specific failure (bad key, unresolvable location).
    #[error("other: {0}")]
    Other(String),
}

/// Turns payloads from a [`BundleSource`] into [`PrefsBundle`]s. Never writes back.
pub struct BundleLoader<S> {
    source: S,
}

impl<S> BundleLoader<S> {
    /// Wrap `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> BundleLoader<S>
where
    S: BundleSource,
{
    /// Fetch and parse the bundle for `key`.
    ///
    /// A missing key or an empty payload is `Ok(None)`; the caller decides what no prefs means.
    pub fn load(&self, key: &str) -> Result<Option<PrefsBundle>, SourceError> {
        match self.source.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    debug!(key, "empty prefs payload");
                    return Ok(None);
                }
                let root = serde_json::from_slice(&bytes)?;
                debug!(key, len = bytes.len(), "loaded prefs payload");
                Ok(Some(PrefsBundle::new(root)))
            }
            Err(SourceError::NotFound) => {
                debug!(key, "no prefs payload");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
