//! File-backed persistence for the ATH cache.
//!
//! The on-disk format is a human-readable JSON object mapping ticker
//! symbol to `{ "ath": <number>, "updated": "<RFC 3339>" }`. The store
//! never fails the run: a missing or malformed file loads as an empty
//! cache, and a failed write leaves the in-memory cache authoritative
//! for the rest of the run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::model::AthCache;

/// Loads and persists the ATH cache at a fixed path.
#[derive(Clone, Debug)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cache from disk.
    ///
    /// Absence and corruption both yield an empty cache; the next
    /// refresh rewrites the file.
    pub fn load(&self) -> AthCache {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No ATH cache at {}, starting empty", self.path.display());
                return AthCache::new();
            }
            Err(e) => {
                warn!(
                    "Could not read ATH cache at {}: {}, starting empty",
                    self.path.display(),
                    e
                );
                return AthCache::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cache) => cache,
            Err(e) => {
                warn!(
                    "ATH cache at {} is malformed ({}), starting empty",
                    self.path.display(),
                    e
                );
                AthCache::new()
            }
        }
    }

    /// Write the cache to disk, best-effort.
    pub fn save(&self, cache: &AthCache) {
        let result = serde_json::to_string_pretty(cache)
            .map_err(std::io::Error::other)
            .and_then(|json| fs::write(&self.path, json));

        if let Err(e) = result {
            warn!(
                "Could not persist ATH cache to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
