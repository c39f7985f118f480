use std::time::Duration;

use crate::constants::{DEFAULT_USER_AGENT, ISS_OEM_URL, NOMINATIM_REVERSE_URL};

/// Settings of an [`IssTracker`](crate::tracker::IssTracker).
///
/// The defaults point at the public NASA ISS ephemeris and the public Nominatim instance.
///
/// ```rust
/// use std::time::Duration;
/// use iss_tracker::config::TrackerConfig;
///
/// let config = TrackerConfig::default()
///     .with_feed_timeout(Duration::from_secs(30))
///     .with_language("fr");
/// assert_eq!(config.geocoder_language, "fr");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub feed_url: String,
    pub feed_timeout: Duration,
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub geocoder_language: String,
    pub geocoder_timeout: Duration,
    /// Level of detail of the place name for a given epoch (10: city)
    pub epoch_location_zoom: u8,
    /// Level of detail of the place name for the current state (5: state/region)
    pub now_location_zoom: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            feed_url: ISS_OEM_URL.to_string(),
            feed_timeout: Duration::from_secs(10),
            geocoder_url: NOMINATIM_REVERSE_URL.to_string(),
            geocoder_user_agent: DEFAULT_USER_AGENT.to_string(),
            geocoder_language: "en".to_string(),
            geocoder_timeout: Duration::from_secs(5),
            epoch_location_zoom: 10,
            now_location_zoom: 5,
        }
    }
}

impl TrackerConfig {
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    pub fn with_feed_timeout(mut self, timeout: Duration) -> Self {
        self.feed_timeout = timeout;
        self
    }

    pub fn with_geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.geocoder_user_agent = user_agent.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.geocoder_language = language.into();
        self
    }

    pub fn with_geocoder_timeout(mut self, timeout: Duration) -> Self {
        self.geocoder_timeout = timeout;
        self
    }

    pub fn with_zoom_levels(mut self, epoch_location: u8, now_location: u8) -> Self {
        self.epoch_location_zoom = epoch_location;
        self.now_location_zoom = now_location;
        self
    }
}
