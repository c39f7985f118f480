//! # Constants and type definitions for the ISS tracker
//!
//! This module centralizes the **geophysical constants**, the **default endpoints** of the
//! external collaborators, and the **type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Spherical Earth model and Earth-rotation correction factors
//! - Default feed and geocoding endpoints
//! - Unit-carrying type aliases (degrees, kilometers, seconds)

// -------------------------------------------------------------------------------------------------
// Geophysical constants
// -------------------------------------------------------------------------------------------------

/// Mean Earth radius in kilometers (spherical model, flattening ignored)
pub const MEAN_EARTH_RADIUS: f64 = 6371.0;

/// Earth rotation in degrees per hour of UTC time
pub const DEG_PER_HOUR: f64 = 360.0 / 24.0;

/// Empirical offset (degrees) tying the inertial frame to Earth-fixed longitude
/// at the feed's reference instant
pub const REFERENCE_LONGITUDE_OFFSET: f64 = 32.0;

/// Hour of the day around which the Earth-rotation correction is centered
pub const ROTATION_REFERENCE_HOUR: f64 = 12.0;

// -------------------------------------------------------------------------------------------------
// External collaborators
// -------------------------------------------------------------------------------------------------

/// Public ISS ephemeris published by NASA (CCSDS OEM, J2000 frame)
pub const ISS_OEM_URL: &str =
    "https://nasa-public-data.s3.amazonaws.com/iss-coords/current/ISS_OEM/ISS.OEM_J2K_EPH.xml";

/// Nominatim reverse geocoding endpoint
pub const NOMINATIM_REVERSE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// User agent sent to the geocoding service
pub const DEFAULT_USER_AGENT: &str = "iss_tracker";

/// Placeholder returned whenever no place name can be resolved
pub const OCEAN_PLACEHOLDER: &str = "ISS was/is over the ocean.";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Speed in kilometers per second
pub type KmPerSec = f64;
/// Time span in seconds
pub type Seconds = f64;
