//! # Orbital math
//!
//! Stateless conversions from the raw state vector to derived quantities:
//!
//! - [`speed`]: magnitude of the velocity vector,
//! - [`geodetic`]: ECI position → latitude / longitude / altitude on a spherical Earth.
//!
//! ## Earth rotation
//!
//! The inertial frame does not rotate with the Earth, so the inertial longitude
//! `atan2(Y, X)` is shifted by the time of day of the sample:
//!
//! ```text
//! longitude = atan2(Y, X) − ((hours − 12) + minutes / 60) · 15 + 32
//! ```
//!
//! where `hours` and `minutes` come from the epoch text and `32°` is an empirical offset tying the
//! frame to Earth-fixed longitude at the feed's reference instant. Only the hour and minute take
//! part in the correction, neither the day nor the seconds.

use nalgebra::Vector3;
use serde::Serialize;

use crate::{
    constants::{
        Degree, Kilometer, KmPerSec, DEG_PER_HOUR, MEAN_EARTH_RADIUS, REFERENCE_LONGITUDE_OFFSET,
        ROTATION_REFERENCE_HOUR,
    },
    time::epoch_hour_minute,
    tracker_errors::TrackerError,
};

/// Latitude, longitude and altitude of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    pub latitude: Degree,
    pub longitude: Degree,
    pub altitude: Kilometer,
}

/// Euclidean norm of a velocity vector.
pub fn speed(velocity: &Vector3<KmPerSec>) -> KmPerSec {
    velocity.norm()
}

/// Bring a longitude back into `[-180, 180]` with a single reflection.
///
/// Values outside the interval are remapped once as `-180 + (longitude - 180)`. This is exact for
/// inputs in `(180, 540]`; inputs below `-180` are outside the domain of the formula and come out
/// further below `-180`.
pub fn normalize_longitude(longitude: Degree) -> Degree {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        -180.0 + (longitude - 180.0)
    }
}

/// Convert an ECI position to geodetic coordinates.
///
/// Arguments
/// ---------
/// * `position`: ECI position in kilometers
/// * `epoch`: epoch text of the sample (`YYYY-DDDTHH:MM:SS.sssZ`), used for the Earth-rotation
///   correction
///
/// Return
/// ------
/// * The [`GeodeticPosition`], with the longitude normalized by [`normalize_longitude`]
/// * [`TrackerError::InvalidParameter`] if the hour or minute cannot be read from `epoch`
pub fn geodetic(
    position: &Vector3<Kilometer>,
    epoch: &str,
) -> Result<GeodeticPosition, TrackerError> {
    let (hours, minutes) = epoch_hour_minute(epoch)?;
    let (x, y, z) = (position.x, position.y, position.z);

    let latitude = z.atan2(x.hypot(y)).to_degrees();

    let rotation = ((hours - ROTATION_REFERENCE_HOUR) + minutes / 60.0) * DEG_PER_HOUR;
    let longitude = y.atan2(x).to_degrees() - rotation + REFERENCE_LONGITUDE_OFFSET;

    let altitude = position.norm() - MEAN_EARTH_RADIUS;

    Ok(GeodeticPosition {
        latitude,
        longitude: normalize_longitude(longitude),
        altitude,
    })
}
