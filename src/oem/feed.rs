use camino::{Utf8Path, Utf8PathBuf};
use std::time::Duration;

use crate::{env_state::TrackerEnv, tracker_errors::IngestionError};

use super::{oem_reader::parse_oem, EphemerisSet};

/// Any source of OEM documents should implement [EphemerisFeed] to be loaded into the
/// [`EphemerisStore`](crate::store::EphemerisStore).
///
/// A fetch is a single synchronous read of the whole document. It must be bounded in time:
/// an implementation reaching the network has to fail with an [IngestionError] once its timeout
/// is exceeded rather than block the store lifecycle indefinitely.
pub trait EphemerisFeed: Send + Sync {
    fn fetch(&self) -> Result<EphemerisSet, IngestionError>;
}

/// Feed served over HTTP, such as the public NASA ISS ephemeris.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    env_state: TrackerEnv,
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        HttpFeed {
            env_state: TrackerEnv::new(timeout),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl EphemerisFeed for HttpFeed {
    fn fetch(&self) -> Result<EphemerisSet, IngestionError> {
        log::debug!("Fetching ephemeris from {}", self.url);
        let xml = self.env_state.get_from_url(&self.url)?;
        parse_oem(&xml)
    }
}

/// Feed read from a local OEM file, for offline use.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: Utf8PathBuf,
}

impl FileFeed {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        FileFeed {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EphemerisFeed for FileFeed {
    fn fetch(&self) -> Result<EphemerisSet, IngestionError> {
        log::debug!("Reading ephemeris from {}", self.path);
        let xml = std::fs::read_to_string(&self.path)?;
        parse_oem(&xml)
    }
}

#[cfg(test)]
mod feed_test {
    use super::*;

    #[test]
    fn test_file_feed_missing_file() {
        let feed = FileFeed::new("tests/data/does_not_exist.xml");
        assert!(matches!(feed.fetch(), Err(IngestionError::IoError(_))));
    }

    #[test]
    fn test_file_feed() {
        let feed = FileFeed::new("tests/data/iss_oem_sample.xml");
        let set = feed.fetch().unwrap();
        assert_eq!(set.len(), 10);
        assert_eq!(set.metadata().get("OBJECT_NAME"), Some("ISS"));
    }

    #[test]
    fn test_http_feed_unreachable() {
        // nothing listens on the discard port of the loopback interface
        let feed = HttpFeed::new("http://127.0.0.1:9/ISS.OEM_J2K_EPH.xml", Duration::from_secs(2));
        assert_eq!(feed.url(), "http://127.0.0.1:9/ISS.OEM_J2K_EPH.xml");
        assert!(matches!(
            feed.fetch(),
            Err(IngestionError::UreqHttpError(_))
        ));
    }
}
