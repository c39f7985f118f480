//! # IssTracker: store, queries and collaborators
//!
//! This module defines [`IssTracker`](crate::tracker::IssTracker), the façade served to a routing
//! layer. It wires together:
//!
//! 1. **Ephemeris store** ([`EphemerisStore`]): the loaded data and its load/unload lifecycle.
//! 2. **Queries**: epoch slicing ([`EpochIndex`]), speed and geodetic conversion
//!    ([`crate::orbital_math`]), closest epoch to now ([`find_closest_to_now`]).
//! 3. **Reverse geocoder** ([`GeoLookup`]): best-effort place names.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use iss_tracker::{config::TrackerConfig, tracker::IssTracker};
//!
//! let tracker = IssTracker::new(TrackerConfig::default());
//! tracker.load().unwrap();
//!
//! let epochs = tracker.epochs(Some("10"), Some("5")).unwrap();
//! let location = tracker.epoch_location("42").unwrap();
//! let now = tracker.now().unwrap();
//! ```
//!
//! ## Consistency
//!
//! Every query takes **one** snapshot of the current set before doing anything else and works on
//! it until it returns, so a concurrent reload or unload never tears a response. A query against
//! an unloaded tracker fails with [`TrackerError::NotLoaded`] before any parameter is examined.
//!
//! ## Errors
//!
//! Query parameters arrive as raw text and are validated before any computation:
//! non-integer input is a [`TrackerError::InvalidParameter`], an index past the data set a
//! [`TrackerError::OutOfRange`]. Geocoding failures are absorbed into the ocean placeholder.

use std::{collections::BTreeMap, sync::Arc};

use hifitime::Epoch;

use crate::{
    capabilities::help_text,
    config::TrackerConfig,
    epoch_index::{parse_index_param, EpochIndex},
    geocoding::{place_name_or_ocean, GeoLookup, NominatimClient},
    nearest::find_closest_to_now,
    oem::{
        feed::{EphemerisFeed, HttpFeed},
        EphemerisSet, OemHeader, OemMetadata, StateVector,
    },
    orbital_math::{geodetic, speed},
    responses::{
        CurrentState, EpochLocation, EpochPosition, EpochSpeed, LifecycleReport, Measure,
        StateVectorRecord,
    },
    store::EphemerisStore,
    tracker_errors::TrackerError,
};

pub struct IssTracker {
    config: TrackerConfig,
    store: EphemerisStore,
    geocoder: Box<dyn GeoLookup>,
}

impl std::fmt::Debug for IssTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssTracker")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl IssTracker {
    /// Construct a tracker reading the configured HTTP feed and geocoding with Nominatim.
    ///
    /// Nothing is fetched yet: the tracker starts unloaded, call [`IssTracker::load`].
    pub fn new(config: TrackerConfig) -> Self {
        let feed = HttpFeed::new(config.feed_url.clone(), config.feed_timeout);
        let geocoder = NominatimClient::new(
            config.geocoder_url.clone(),
            config.geocoder_user_agent.clone(),
            config.geocoder_language.clone(),
            config.geocoder_timeout,
        );
        Self::with_collaborators(config, Box::new(feed), Box::new(geocoder))
    }

    /// Construct a tracker from explicit collaborators (local files, test doubles, …).
    pub fn with_collaborators(
        config: TrackerConfig,
        feed: Box<dyn EphemerisFeed>,
        geocoder: Box<dyn GeoLookup>,
    ) -> Self {
        IssTracker {
            config,
            store: EphemerisStore::new(feed),
            geocoder,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    // ---------------------------------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------------------------------

    /// Fetch the feed and replace the loaded data (load or reload).
    pub fn load(&self) -> Result<LifecycleReport, TrackerError> {
        let set = self.store.load()?;
        Ok(LifecycleReport {
            message: "Data has been updated.",
            state_vectors: set.len(),
        })
    }

    /// Discard the loaded data.
    pub fn unload(&self) -> Result<LifecycleReport, TrackerError> {
        let set = self.store.unload()?;
        Ok(LifecycleReport {
            message: "Data has been deleted.",
            state_vectors: set.len(),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Snapshot of the loaded data, for callers composing their own queries.
    pub fn snapshot(&self) -> Result<Arc<EphemerisSet>, TrackerError> {
        self.store.current()
    }

    pub fn help(&self) -> String {
        help_text()
    }

    // ---------------------------------------------------------------------------------------------
    // Auxiliary blocks
    // ---------------------------------------------------------------------------------------------

    pub fn header(&self) -> Result<OemHeader, TrackerError> {
        Ok(self.store.current()?.header().clone())
    }

    pub fn metadata(&self) -> Result<OemMetadata, TrackerError> {
        Ok(self.store.current()?.metadata().clone())
    }

    pub fn comments(&self) -> Result<Vec<String>, TrackerError> {
        Ok(self.store.current()?.comments().to_vec())
    }

    // ---------------------------------------------------------------------------------------------
    // Epoch queries
    // ---------------------------------------------------------------------------------------------

    /// Every state vector of the loaded data.
    pub fn all_data(&self) -> Result<Vec<StateVectorRecord>, TrackerError> {
        let set = self.store.current()?;
        Ok(set.vectors().iter().map(StateVectorRecord::from).collect())
    }

    /// Epoch timestamps keyed by 1-based position.
    ///
    /// Arguments
    /// ---------
    /// * `offset`: raw text of the offset parameter, 0 when absent
    /// * `limit`: raw text of the limit parameter, all remaining epochs when absent
    pub fn epochs(
        &self,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> Result<BTreeMap<usize, String>, TrackerError> {
        let set = self.store.current()?;
        let offset = offset
            .map(|raw| parse_index_param("offset", raw))
            .transpose()?;
        let limit = limit.map(|raw| parse_index_param("limit", raw)).transpose()?;
        log::debug!("Epoch range query: offset={offset:?}, limit={limit:?}");

        let range = EpochIndex::new(&set).range(offset, limit)?;
        Ok(range
            .into_iter()
            .map(|(position, epoch)| (position, epoch.to_string()))
            .collect())
    }

    /// Full state vector at a 0-based position given as raw text.
    pub fn epoch(&self, position: &str) -> Result<StateVectorRecord, TrackerError> {
        let set = self.store.current()?;
        let state = Self::state_at(&set, position)?;
        Ok(state.into())
    }

    pub fn epoch_position(&self, position: &str) -> Result<EpochPosition, TrackerError> {
        let set = self.store.current()?;
        let state = Self::state_at(&set, position)?;
        let p = state.position();
        Ok(EpochPosition {
            epoch: state.epoch().to_string(),
            x: p.x,
            y: p.y,
            z: p.z,
        })
    }

    pub fn epoch_speed(&self, position: &str) -> Result<EpochSpeed, TrackerError> {
        let set = self.store.current()?;
        let state = Self::state_at(&set, position)?;
        Ok(EpochSpeed {
            epoch: state.epoch().to_string(),
            speed: speed(state.velocity()),
        })
    }

    /// Geodetic location of the epoch at a 0-based position, with its place name.
    pub fn epoch_location(&self, position: &str) -> Result<EpochLocation, TrackerError> {
        let set = self.store.current()?;
        let state = Self::state_at(&set, position)?;
        let geo = geodetic(state.position(), state.epoch())?;
        let place = place_name_or_ocean(self.geocoder.as_ref(), &geo, self.config.epoch_location_zoom);

        Ok(EpochLocation {
            epoch: state.epoch().to_string(),
            latitude: geo.latitude,
            longitude: geo.longitude,
            altitude: geo.altitude,
            geographic_location: place,
        })
    }

    // ---------------------------------------------------------------------------------------------
    // Current state
    // ---------------------------------------------------------------------------------------------

    /// State at the epoch closest to the system clock.
    pub fn now(&self) -> Result<CurrentState, TrackerError> {
        self.now_at(Epoch::now()?)
    }

    /// State at the epoch closest to `now`.
    ///
    /// The location and the speed are both derived from the selected epoch.
    pub fn now_at(&self, now: Epoch) -> Result<CurrentState, TrackerError> {
        let set = self.store.current()?;
        let closest = find_closest_to_now(set.vectors(), now)?;
        let state = closest.state;

        let geo = geodetic(state.position(), state.epoch())?;
        let place = place_name_or_ocean(self.geocoder.as_ref(), &geo, self.config.now_location_zoom);

        Ok(CurrentState {
            closest_epoch: state.epoch().to_string(),
            time_from_now: closest.time_difference,
            location: geo.into(),
            geographic_location: place,
            speed: Measure {
                value: speed(state.velocity()),
                units: "km/s",
            },
        })
    }

    fn state_at<'a>(set: &'a EphemerisSet, raw_position: &str) -> Result<&'a StateVector, TrackerError> {
        let position = parse_index_param("epoch", raw_position)?;
        EpochIndex::new(set).at(position)
    }
}
