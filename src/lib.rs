//! # ISS tracker
//!
//! In-memory store and query engine for the ISS ephemeris (CCSDS OEM) published by NASA.
//!
//! - [`store`]: load / reload / unload of the ephemeris with atomic replacement
//! - [`epoch_index`]: epoch slicing and lookup by position
//! - [`orbital_math`]: speed and ECI → geodetic conversion
//! - [`nearest`]: epoch closest to the current time
//! - [`geocoding`]: fail-open reverse geocoding
//! - [`tracker`]: the [`IssTracker`](tracker::IssTracker) façade serving every query

pub mod capabilities;
pub mod config;
pub mod constants;
pub mod env_state;
pub mod epoch_index;
pub mod geocoding;
pub mod nearest;
pub mod oem;
pub mod orbital_math;
pub mod responses;
pub mod store;
pub mod time;
pub mod tracker;
pub mod tracker_errors;
