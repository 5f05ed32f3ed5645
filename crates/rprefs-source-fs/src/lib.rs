// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `BundleSource` for rprefs (uses platform config dir).

use directories::ProjectDirs;
use rprefs_core::source::{BundleSource, SourceError};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Read payloads as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FsBundleSource {
    base: PathBuf,
}

impl FsBundleSource {
    /// Create a source rooted at the user config directory (e.g., `~/.config/RPrefs`).
    ///
    /// The directory is not created; a missing directory simply yields `NotFound` on load.
    pub fn new() -> Result<Self, SourceError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "RPrefs")
            .ok_or_else(|| SourceError::Other("could not resolve config dir".into()))?;
        Ok(Self::with_base(proj.config_dir()))
    }

    /// Create a source rooted at an explicit directory.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Root directory payloads are read from.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SourceError> {
        let mut components = Path::new(key).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base.join(format!("{key}.json"))),
            _ => {
                warn!(key, "rejected prefs key");
                Err(SourceError::Other(format!("invalid prefs key: {key:?}")))
            }
        }
    }
}

impl BundleSource for FsBundleSource {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "reading prefs payload");
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound),
            Err(err) => Err(SourceError::Io(err)),
        }
    }
}
