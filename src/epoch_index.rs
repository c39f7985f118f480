//! # Epoch index
//!
//! Read-only, position-based access to the state vectors of one [`EphemerisSet`] snapshot.
//!
//! Positions are 0-based for [`EpochIndex::at`], while [`EpochIndex::range`] numbers its results
//! from 1 (`offset + 1 ..= offset + limit`), matching the numbering clients of the tracker have
//! always received.
//!
//! ## Bounds
//!
//! - `range`: `offset <= length`, `limit <= length`, `offset + limit <= length`.
//! - `at`: `position <= length`. The upper bound is inclusive of `length` itself, a historical
//!   quirk kept for compatibility; the slot at `length` holds no vector and is reported as
//!   [`TrackerError::OutOfRange`] once the bound check has passed.

use std::collections::BTreeMap;

use crate::{
    oem::{EphemerisSet, StateVector},
    tracker_errors::TrackerError,
};

/// Parse a raw query parameter as a non-negative integer.
///
/// Arguments
/// ---------
/// * `name`: parameter name, reported in the error
/// * `raw`: the text supplied by the caller, surrounding whitespace is ignored
///
/// Return
/// ------
/// * The parsed value, or [`TrackerError::InvalidParameter`] for non-integer or negative input.
pub fn parse_index_param(name: &str, raw: &str) -> Result<usize, TrackerError> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        TrackerError::invalid_parameter(name, format!("\"{raw}\" is not an integer value"))
    })?;

    usize::try_from(value).map_err(|_| {
        TrackerError::invalid_parameter(name, format!("{value} must be 0 or larger"))
    })
}

#[derive(Debug, Clone, Copy)]
pub struct EpochIndex<'a> {
    vectors: &'a [StateVector],
}

impl<'a> EpochIndex<'a> {
    pub fn new(set: &'a EphemerisSet) -> Self {
        EpochIndex {
            vectors: set.vectors(),
        }
    }

    pub fn from_vectors(vectors: &'a [StateVector]) -> Self {
        EpochIndex { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Epoch strings only, in feed order.
    pub fn list_epoch_timestamps(&self) -> Vec<&'a str> {
        let vectors: &'a [StateVector] = self.vectors;
        vectors.iter().map(StateVector::epoch).collect()
    }

    /// Slice the epochs by offset and limit.
    ///
    /// Arguments
    /// ---------
    /// * `offset`: number of leading epochs to skip, defaults to 0
    /// * `limit`: number of epochs to return, defaults to `length - offset`
    ///
    /// Return
    /// ------
    /// * A map from 1-based position (`offset + 1 ..= offset + limit`) to epoch string
    /// * [`TrackerError::OutOfRange`] if the requested window exceeds the data set
    pub fn range(
        &self,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<BTreeMap<usize, &'a str>, TrackerError> {
        let length = self.len();
        let offset = offset.unwrap_or(0);

        if offset > length {
            return Err(TrackerError::OutOfRange(format!(
                "offset {offset} is greater than the size of the data set ({length})"
            )));
        }

        let limit = limit.unwrap_or(length - offset);
        if limit > length || offset + limit > length {
            return Err(TrackerError::OutOfRange(format!(
                "offset {offset} + limit {limit} is greater than the size of the data set ({length})"
            )));
        }

        let vectors: &'a [StateVector] = self.vectors;
        Ok(vectors[offset..offset + limit]
            .iter()
            .enumerate()
            .map(|(i, sv)| (offset + i + 1, sv.epoch()))
            .collect())
    }

    /// Full state vector at a 0-based position.
    ///
    /// Return
    /// ------
    /// * The [`StateVector`], or [`TrackerError::OutOfRange`] when `position > length` or when
    ///   `position == length` (accepted by the bound check, but holding no vector).
    pub fn at(&self, position: usize) -> Result<&'a StateVector, TrackerError> {
        let length = self.len();
        if position > length {
            return Err(TrackerError::OutOfRange(format!(
                "position {position} is outside the data set, it must be between 0 and {length}"
            )));
        }

        let vectors: &'a [StateVector] = self.vectors;
        vectors.get(position).ok_or_else(|| {
            TrackerError::OutOfRange(format!(
                "position {position} is the end of the data set and holds no state vector"
            ))
        })
    }
}
