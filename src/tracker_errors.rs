use thiserror::Error;

/// Failures raised while fetching or decoding the ephemeris feed.
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to read the ephemeris file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed OEM document: {0}")]
    XmlError(#[from] quick_xml::DeError),

    #[error("The OEM document does not contain any state vector")]
    EmptyFeed,
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Ephemeris data is not loaded. Please reload the data before querying it.")]
    NotLoaded,

    #[error("Unable to ingest the ephemeris feed: {0}")]
    Ingestion(#[from] IngestionError),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Unable to read the system clock: {0}")]
    Clock(#[from] hifitime::HifitimeError),
}

impl TrackerError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        TrackerError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl PartialEq for TrackerError {
    fn eq(&self, other: &Self) -> bool {
        use TrackerError::*;
        match (self, other) {
            (NotLoaded, NotLoaded) => true,
            (
                InvalidParameter { name: a, reason: r },
                InvalidParameter { name: b, reason: s },
            ) => a == b && r == s,
            (OutOfRange(a), OutOfRange(b)) => a == b,

            // transport and clock errors are not comparable: same variant is enough
            (Ingestion(_), Ingestion(_)) => true,
            (Clock(_), Clock(_)) => true,

            _ => false,
        }
    }
}
