//! Populate-once schedule cache
//!
//! The store starts empty, is populated by a single successful [`preload`],
//! and is never cleared or mutated afterwards. Every value handed back to a
//! caller is an owned copy, so callers can never reach the cached originals.
//!
//! [`preload`]: ScheduleStore::preload

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::schedule::compare;
use crate::schedule::error::ScheduleError;
use crate::schedule::source::{HttpScheduleSource, ScheduleSource};
use crate::schedule::types::ScheduleEntry;

/// Cache of the Node.js release schedule, keyed by significant version
/// number, with a chronologically ordered identifier list alongside.
///
/// Construct one explicitly and share it as needed; there is no process-wide
/// singleton, so independent stores (e.g. in tests) never leak into each
/// other. `preload` takes `&mut self` while queries take `&self`, so no
/// locking is involved anywhere.
pub struct ScheduleStore {
    source: Box<dyn ScheduleSource>,
    entries: HashMap<String, ScheduleEntry>,
    order: Vec<String>,
}

impl ScheduleStore {
    /// Creates a store that fetches from the published schedule URL.
    pub fn new() -> Self {
        Self::with_source(Box::new(HttpScheduleSource::default()))
    }

    /// Creates a store backed by a custom schedule source.
    pub fn with_source(source: Box<dyn ScheduleSource>) -> Self {
        Self {
            source,
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Whether the store has not yet been populated by a successful preload.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Fetches the schedule document and populates the cache.
    ///
    /// Idempotent: once the store holds entries, further calls return
    /// immediately without fetching. On any fetch or parse failure nothing is
    /// committed and the store stays empty, so the caller may simply call
    /// `preload` again.
    pub async fn preload(&mut self) -> Result<(), ScheduleError> {
        if !self.is_empty() {
            debug!("schedule cache already populated, skipping fetch");
            return Ok(());
        }

        let url = self.source.location();
        let raw = self
            .source
            .fetch()
            .await
            .map_err(|source| ScheduleError::FetchFailure {
                url: url.clone(),
                source,
            })?;

        // Parse everything before touching the cache so a bad entry commits
        // nothing.
        let mut parsed = Vec::with_capacity(raw.len());
        for (key, meta) in raw {
            let entry = ScheduleEntry::from_raw(&key, meta).map_err(|source| {
                ScheduleError::FetchFailure {
                    url: url.clone(),
                    source,
                }
            })?;
            parsed.push(entry);
        }

        // Sort before insertion so `order` is chronological (0.8, 0.12, 4, ...).
        parsed.sort_by(|a, b| compare::compare_identifiers(&a.version, &b.version));

        info!("populated schedule cache with {} release lines", parsed.len());
        for entry in parsed {
            let version = entry.version.clone();
            // Keyed insertion keeps `order` 1:1 with `entries` even if the
            // document carries a duplicate key like both "v4" and "4".
            if self.entries.insert(version.clone(), entry).is_none() {
                self.order.push(version);
            }
        }

        Ok(())
    }

    /// Returns an owned copy of the schedule information for a significant
    /// version number.
    ///
    /// The version may be anything displayable, so numeric `4` and string
    /// `"4"` are equivalent keys. Lookup is exact: `"4.0.0"` does not match
    /// the stored `"4"` — callers must pass significant version numbers, not
    /// full semver strings.
    pub fn information(&self, version: impl fmt::Display) -> Result<ScheduleEntry, ScheduleError> {
        let version = version.to_string();
        match self.entries.get(&version) {
            Some(entry) => Ok(entry.clone()),
            None if self.is_empty() => Err(ScheduleError::EmptyCache { version }),
            None => Err(ScheduleError::UnknownVersion {
                version,
                known: self.order.clone(),
            }),
        }
    }

    /// Returns an owned copy of the known version identifiers, sorted
    /// chronologically (oldest release line first).
    pub fn identifiers(&self) -> Result<Vec<String>, ScheduleError> {
        if self.is_empty() {
            return Err(ScheduleError::NotPreloaded);
        }
        Ok(self.order.clone())
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}
