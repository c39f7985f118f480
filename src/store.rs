//! # Ephemeris store
//!
//! Process-wide holder of the current [`EphemerisSet`]. The store is either **Unloaded** (no set)
//! or **Loaded** (one set); every transition replaces the whole set through a single guarded
//! reference swap, so a reader sees either the old set or the new one, never a mix of both.
//!
//! ```text
//!            load()                      load()  (full replacement)
//! Unloaded ────────────▶ Loaded ◀─────────────┐
//!    ▲                     │  └───────────────┘
//!    └──────── unload() ───┘
//! ```
//!
//! Readers obtain an [`Arc`] snapshot via [`EphemerisStore::current`] once per request and keep
//! using it even if a reload or an unload happens meanwhile.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::{
    oem::{feed::EphemerisFeed, EphemerisSet},
    tracker_errors::TrackerError,
};

pub struct EphemerisStore {
    feed: Box<dyn EphemerisFeed>,
    current: RwLock<Option<Arc<EphemerisSet>>>,
    // serializes load/unload so that two concurrent reloads cannot interleave
    lifecycle: Mutex<()>,
}

impl std::fmt::Debug for EphemerisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemerisStore")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

impl EphemerisStore {
    /// Create an unloaded store reading from `feed`.
    pub fn new(feed: Box<dyn EphemerisFeed>) -> Self {
        EphemerisStore {
            feed,
            current: RwLock::new(None),
            lifecycle: Mutex::new(()),
        }
    }

    /// Fetch the feed and replace the current set with the fresh one.
    ///
    /// The fetch happens before the swap: if it fails, the previous set (if any) stays in effect.
    ///
    /// Return
    /// ------
    /// * The newly installed set, or [`TrackerError::Ingestion`] if the feed could not be read.
    pub fn load(&self) -> Result<Arc<EphemerisSet>, TrackerError> {
        let _lifecycle = self.lifecycle.lock();

        let fresh = match self.feed.fetch() {
            Ok(set) => Arc::new(set),
            Err(err) => {
                log::warn!("Ephemeris load failed, keeping the previous state: {err}");
                return Err(err.into());
            }
        };

        let previous = self.current.write().replace(Arc::clone(&fresh));

        match previous {
            Some(old) => log::info!(
                "Reloaded ephemeris: {} state vectors (previously {})",
                fresh.len(),
                old.len()
            ),
            None => log::info!("Loaded ephemeris: {} state vectors", fresh.len()),
        }

        Ok(fresh)
    }

    /// Discard the current set.
    ///
    /// Return
    /// ------
    /// * The discarded set, or [`TrackerError::NotLoaded`] if there was nothing to discard.
    pub fn unload(&self) -> Result<Arc<EphemerisSet>, TrackerError> {
        let _lifecycle = self.lifecycle.lock();

        let discarded = self
            .current
            .write()
            .take()
            .ok_or(TrackerError::NotLoaded)?;

        log::info!("Unloaded ephemeris: {} state vectors discarded", discarded.len());
        Ok(discarded)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Snapshot of the current set, or [`TrackerError::NotLoaded`].
    pub fn current(&self) -> Result<Arc<EphemerisSet>, TrackerError> {
        self.current.read().clone().ok_or(TrackerError::NotLoaded)
    }
}
