//! # Orbit Ephemeris Message data model
//!
//! In-memory representation of one ingested ephemeris: the ordered [`StateVector`] samples and
//! the auxiliary blocks (header, metadata, comments) carried verbatim from the feed.
//!
//! ```text
//! EphemerisSet
//! ├── header    (OemBlock)
//! ├── metadata  (OemBlock)
//! ├── comments  (Vec<String>)
//! └── vectors   (Vec<StateVector>, feed order)
//! ```
//!
//! An [`EphemerisSet`] is never edited once built: reloading the feed produces a brand new set
//! which replaces the previous one as a unit (see [`crate::store::EphemerisStore`]).

use std::fmt;

use itertools::Itertools;
use nalgebra::Vector3;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::constants::{Kilometer, KmPerSec};

pub mod feed;
pub mod oem_reader;

/// One timestamped orbital sample.
///
/// The epoch is kept as the exact text found in the feed (`YYYY-DDDTHH:MM:SS.sssZ`), since the
/// hour and minute used by the geodetic conversion are read from fixed character positions.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    epoch: String,
    position: Vector3<Kilometer>,
    velocity: Vector3<KmPerSec>,
}

impl StateVector {
    /// Build a new state vector.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: the epoch text, not validated here
    /// * `position`: ECI position (X, Y, Z) in kilometers
    /// * `velocity`: ECI velocity (X_DOT, Y_DOT, Z_DOT) in kilometers per second
    pub fn new(
        epoch: impl Into<String>,
        position: Vector3<Kilometer>,
        velocity: Vector3<KmPerSec>,
    ) -> Self {
        StateVector {
            epoch: epoch.into(),
            position,
            velocity,
        }
    }

    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn position(&self) -> &Vector3<Kilometer> {
        &self.position
    }

    pub fn velocity(&self) -> &Vector3<KmPerSec> {
        &self.velocity
    }
}

/// A flat XML block of named text elements, such as the OEM `header` or `metadata`.
///
/// Every child element is kept, in document order and with repetitions (a header may carry
/// several `COMMENT` lines). Serializes to a JSON object where a repeated name maps to the array
/// of its values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OemBlock {
    entries: Vec<(String, String)>,
}

/// Header block of an OEM document (`CREATION_DATE`, `ORIGINATOR`, ...).
pub type OemHeader = OemBlock;

/// Metadata block of the OEM segment (`OBJECT_NAME`, `REF_FRAME`, `START_TIME`, ...).
pub type OemMetadata = OemBlock;

impl OemBlock {
    /// First value of the element `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values of the element `name`, in document order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `(element name, text)` pairs in document order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OemBlock {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        OemBlock {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for OemBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlockVisitor;

        impl<'de> Visitor<'de> for BlockVisitor {
            type Value = OemBlock;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a block of named text elements")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OemBlock, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(OemBlock { entries })
            }
        }

        deserializer.deserialize_map(BlockVisitor)
    }
}

impl Serialize for OemBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<&str> = self
            .entries
            .iter()
            .map(|(key, _)| key.as_str())
            .unique()
            .collect();

        let mut map = serializer.serialize_map(Some(names.len()))?;
        for name in names {
            let values: Vec<&str> = self.get_all(name).collect();
            match values.as_slice() {
                [single] => map.serialize_entry(name, single)?,
                _ => map.serialize_entry(name, &values)?,
            }
        }
        map.end()
    }
}

/// A complete ephemeris as ingested from one fetch of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSet {
    header: OemHeader,
    metadata: OemMetadata,
    comments: Vec<String>,
    vectors: Vec<StateVector>,
}

impl EphemerisSet {
    pub fn new(
        header: OemHeader,
        metadata: OemMetadata,
        comments: Vec<String>,
        vectors: Vec<StateVector>,
    ) -> Self {
        EphemerisSet {
            header,
            metadata,
            comments,
            vectors,
        }
    }

    pub fn header(&self) -> &OemHeader {
        &self.header
    }

    pub fn metadata(&self) -> &OemMetadata {
        &self.metadata
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// State vectors in feed order; index 0 is the first sample.
    pub fn vectors(&self) -> &[StateVector] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
