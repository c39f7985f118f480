//! Serializable answers of the [`IssTracker`](crate::tracker::IssTracker) queries.
//!
//! Field names follow the JSON keys served to clients (`EPOCH`, `X`, `Latitude`,
//! `Geographic Location`, …).

use serde::Serialize;

use crate::{
    constants::{Degree, Kilometer, KmPerSec, Seconds},
    oem::StateVector,
    orbital_math::GeodeticPosition,
};

/// A value with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Units")]
    pub units: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StateVectorRecord {
    pub epoch: String,
    pub x: Kilometer,
    pub y: Kilometer,
    pub z: Kilometer,
    pub x_dot: KmPerSec,
    pub y_dot: KmPerSec,
    pub z_dot: KmPerSec,
}

impl From<&StateVector> for StateVectorRecord {
    fn from(state: &StateVector) -> Self {
        let (p, v) = (state.position(), state.velocity());
        StateVectorRecord {
            epoch: state.epoch().to_string(),
            x: p.x,
            y: p.y,
            z: p.z,
            x_dot: v.x,
            y_dot: v.y,
            z_dot: v.z,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochPosition {
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "X")]
    pub x: Kilometer,
    #[serde(rename = "Y")]
    pub y: Kilometer,
    #[serde(rename = "Z")]
    pub z: Kilometer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochSpeed {
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "Speed")]
    pub speed: KmPerSec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochLocation {
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "Latitude")]
    pub latitude: Degree,
    #[serde(rename = "Longitude")]
    pub longitude: Degree,
    #[serde(rename = "Altitude")]
    pub altitude: Kilometer,
    #[serde(rename = "Geographic Location")]
    pub geographic_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(rename = "Latitude")]
    pub latitude: Degree,
    #[serde(rename = "Longitude")]
    pub longitude: Degree,
    #[serde(rename = "Altitude")]
    pub altitude: Measure,
}

impl From<GeodeticPosition> for Location {
    fn from(geo: GeodeticPosition) -> Self {
        Location {
            latitude: geo.latitude,
            longitude: geo.longitude,
            altitude: Measure {
                value: geo.altitude,
                units: "km",
            },
        }
    }
}

/// State of the ISS at the epoch closest to the current time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentState {
    #[serde(rename = "Closest Epoch")]
    pub closest_epoch: String,
    /// `now − epoch`, in seconds
    #[serde(rename = "Time from now")]
    pub time_from_now: Seconds,
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "Geographic Location")]
    pub geographic_location: String,
    #[serde(rename = "Speed")]
    pub speed: Measure,
}

/// Confirmation of a load or an unload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifecycleReport {
    pub message: &'static str,
    pub state_vectors: usize,
}
