//! # Tracker environment state
//!
//! This module defines [`crate::env_state::TrackerEnv`], the **HTTP environment** shared by the
//! collaborators that reach the network: the ephemeris feed and the reverse geocoder.
//!
//! ## Structure
//!
//! ```text
//! TrackerEnv
//! ├── http_client  (ureq::Agent, global timeout)
//! └── timeout      (std::time::Duration)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use iss_tracker::env_state::TrackerEnv;
//!
//! let env = TrackerEnv::new(Duration::from_secs(10));
//! let xml = env.get_from_url(ISS_OEM_URL)?;
//! ```
//!
//! ## Notes
//!
//! - Each collaborator owns its own [`TrackerEnv`] so the feed and the geocoder can be bounded by
//!   different timeouts.
//! - The timeout covers the whole call (connection, request and body). A call exceeding it fails
//!   with [`ureq::Error::Timeout`].
use std::{fmt::Debug, time::Duration};
use ureq::Agent;

#[derive(Debug, Clone)]
pub struct TrackerEnv {
    pub http_client: Agent,
    pub timeout: Duration,
}

impl TrackerEnv {
    /// Create a new environment whose HTTP calls are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: Agent = config.into();

        TrackerEnv {
            http_client: agent,
            timeout,
        }
    }

    /// Perform a GET request and return the body as text.
    pub(crate) fn get_from_url(&self, url: &str) -> Result<String, ureq::Error> {
        self.http_client.get(url).call()?.body_mut().read_to_string()
    }

    /// Perform a GET request with query parameters and a `User-Agent` header.
    pub(crate) fn get_with_query(
        &self,
        url: &str,
        user_agent: &str,
        query: &[(&str, String)],
    ) -> Result<String, ureq::Error> {
        let mut request = self.http_client.get(url).header("User-Agent", user_agent);
        for (key, value) in query {
            request = request.query(*key, value);
        }
        request.call()?.body_mut().read_to_string()
    }
}
