//! # Reverse geocoding
//!
//! Best-effort enrichment of a geodetic position with a human readable place name.
//!
//! The lookup is **fail-open**: a missing match (open ocean), a timeout or any other failure of the
//! service all resolve to [`OCEAN_PLACEHOLDER`] through [`place_name_or_ocean`]. A
//! [`GeoLookupError`] never reaches the caller of the tracker.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::{
    constants::{Degree, OCEAN_PLACEHOLDER},
    env_state::TrackerEnv,
    orbital_math::GeodeticPosition,
};

#[derive(Error, Debug)]
pub enum GeoLookupError {
    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to decode the geocoding response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),
}

/// Any reverse geocoder should implement [GeoLookup].
pub trait GeoLookup: Send + Sync {
    /// Name of the place below (`latitude`, `longitude`), or `None` when the service has no match.
    ///
    /// `zoom` selects the level of detail, from country (3) to building (18).
    fn reverse(
        &self,
        latitude: Degree,
        longitude: Degree,
        zoom: u8,
    ) -> Result<Option<String>, GeoLookupError>;
}

/// Resolve the place name of a position, falling back to the ocean placeholder.
pub fn place_name_or_ocean(geocoder: &dyn GeoLookup, position: &GeodeticPosition, zoom: u8) -> String {
    match geocoder.reverse(position.latitude, position.longitude, zoom) {
        Ok(Some(place)) => place,
        Ok(None) => {
            log::debug!(
                "No place found at ({:.4}, {:.4})",
                position.latitude,
                position.longitude
            );
            OCEAN_PLACEHOLDER.to_string()
        }
        Err(err) => {
            log::warn!("Reverse geocoding failed, using the ocean placeholder: {err}");
            OCEAN_PLACEHOLDER.to_string()
        }
    }
}

/// Answer of the Nominatim `reverse` endpoint, either a match or an `error` member.
#[derive(Debug, Deserialize)]
struct NominatimReverse {
    display_name: Option<String>,
}

/// Client of a Nominatim compatible `reverse` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    env_state: TrackerEnv,
    url: String,
    user_agent: String,
    language: String,
}

impl NominatimClient {
    pub fn new(
        url: impl Into<String>,
        user_agent: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        NominatimClient {
            env_state: TrackerEnv::new(timeout),
            url: url.into(),
            user_agent: user_agent.into(),
            language: language.into(),
        }
    }
}

impl GeoLookup for NominatimClient {
    fn reverse(
        &self,
        latitude: Degree,
        longitude: Degree,
        zoom: u8,
    ) -> Result<Option<String>, GeoLookupError> {
        let body = self.env_state.get_with_query(
            &self.url,
            &self.user_agent,
            &[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("zoom", zoom.to_string()),
                ("accept-language", self.language.clone()),
            ],
        )?;
        parse_reverse_response(&body)
    }
}

fn parse_reverse_response(body: &str) -> Result<Option<String>, GeoLookupError> {
    let answer: NominatimReverse = serde_json::from_str(body)?;
    Ok(answer.display_name)
}

#[cfg(test)]
mod geocoding_test {
    use super::*;

    struct Fixed(Result<Option<String>, ()>);

    impl GeoLookup for Fixed {
        fn reverse(&self, _: Degree, _: Degree, _: u8) -> Result<Option<String>, GeoLookupError> {
            self.0
                .clone()
                .map_err(|_| GeoLookupError::Unavailable("timed out".into()))
        }
    }

    const POSITION: GeodeticPosition = GeodeticPosition {
        latitude: 48.85,
        longitude: 2.35,
        altitude: 420.0,
    };

    #[test]
    fn test_place_name() {
        let geocoder = Fixed(Ok(Some("Paris, France".into())));
        assert_eq!(place_name_or_ocean(&geocoder, &POSITION, 10), "Paris, France");
    }

    #[test]
    fn test_no_match_is_ocean() {
        let geocoder = Fixed(Ok(None));
        assert_eq!(place_name_or_ocean(&geocoder, &POSITION, 10), OCEAN_PLACEHOLDER);
    }

    #[test]
    fn test_failure_is_ocean() {
        let geocoder = Fixed(Err(()));
        assert_eq!(place_name_or_ocean(&geocoder, &POSITION, 5), OCEAN_PLACEHOLDER);
    }

    #[test]
    fn test_parse_reverse_response() {
        let found = r#"{"place_id":1,"lat":"48.85","lon":"2.35","display_name":"Paris, Île-de-France, France"}"#;
        assert_eq!(
            parse_reverse_response(found).unwrap().as_deref(),
            Some("Paris, Île-de-France, France")
        );

        let ocean = r#"{"error":"Unable to geocode"}"#;
        assert_eq!(parse_reverse_response(ocean).unwrap(), None);

        assert!(matches!(
            parse_reverse_response("<html>"),
            Err(GeoLookupError::JsonError(_))
        ));
    }

    #[test]
    fn test_unreachable_service_is_ocean() {
        let client = NominatimClient::new(
            "http://127.0.0.1:9/reverse",
            "iss_tracker_test",
            "en",
            Duration::from_secs(1),
        );
        assert_eq!(place_name_or_ocean(&client, &POSITION, 10), OCEAN_PLACEHOLDER);
    }
}
