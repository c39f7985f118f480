use nalgebra::Vector3;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::tracker_errors::IngestionError;

use super::{EphemerisSet, OemHeader, OemMetadata, StateVector};

/// Root `<ndm>` element of the NASA ISS ephemeris.
#[derive(Debug, Deserialize)]
struct Ndm {
    oem: Oem,
}

#[derive(Debug, Deserialize)]
struct Oem {
    header: OemHeader,
    body: OemBody,
}

#[derive(Debug, Deserialize)]
struct OemBody {
    segment: OemSegment,
}

#[derive(Debug, Deserialize)]
struct OemSegment {
    metadata: OemMetadata,
    data: OemData,
}

#[derive(Debug, Deserialize)]
struct OemData {
    #[serde(rename = "COMMENT", default)]
    comments: Vec<String>,

    #[serde(rename = "stateVector")]
    state_vectors: Vec<OemStateVector>,
}

/// A numeric value stored as element text, e.g. `<X units="km">-4945.4</X>`.
#[derive(Debug, Deserialize)]
struct TextValue {
    #[serde(rename = "$text")]
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct OemStateVector {
    epoch: String,
    x: TextValue,
    y: TextValue,
    z: TextValue,
    x_dot: TextValue,
    y_dot: TextValue,
    z_dot: TextValue,
}

impl OemStateVector {
    fn into_state_vector(self) -> StateVector {
        StateVector::new(
            self.epoch,
            Vector3::new(self.x.value, self.y.value, self.z.value),
            Vector3::new(self.x_dot.value, self.y_dot.value, self.z_dot.value),
        )
    }
}

/// Decode an OEM XML document into an [`EphemerisSet`].
///
/// Arguments
/// ---------
/// * `xml`: the whole document, as returned by the feed
///
/// Return
/// ------
/// * The [`EphemerisSet`] with state vectors in document order
/// * [`IngestionError::XmlError`] if a required block (`header`, `metadata`, `data`,
///   `stateVector`) is missing or a numeric field cannot be read
/// * [`IngestionError::EmptyFeed`] if the document holds no state vector
pub fn parse_oem(xml: &str) -> Result<EphemerisSet, IngestionError> {
    let ndm: Ndm = from_str(xml)?;
    let segment = ndm.oem.body.segment;

    if segment.data.state_vectors.is_empty() {
        return Err(IngestionError::EmptyFeed);
    }

    let vectors = segment
        .data
        .state_vectors
        .into_iter()
        .map(OemStateVector::into_state_vector)
        .collect();

    Ok(EphemerisSet::new(
        ndm.oem.header,
        segment.metadata,
        segment.data.comments,
        vectors,
    ))
}
