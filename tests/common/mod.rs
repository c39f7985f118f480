#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Once,
};

use iss_tracker::{
    config::TrackerConfig,
    constants::Degree,
    geocoding::{GeoLookup, GeoLookupError},
    oem::{
        feed::{EphemerisFeed, FileFeed},
        oem_reader::parse_oem,
        EphemerisSet, OemHeader, OemMetadata, StateVector,
    },
    tracker::IssTracker,
};
use log::LevelFilter;
use nalgebra::Vector3;

pub const SAMPLE_OEM: &str = "tests/data/iss_oem_sample.xml";
pub const SAMPLE_LEN: usize = 10;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Geocoder answering the same place everywhere.
pub struct FixedGeocoder(pub Option<&'static str>);

impl GeoLookup for FixedGeocoder {
    fn reverse(&self, _: Degree, _: Degree, _: u8) -> Result<Option<String>, GeoLookupError> {
        Ok(self.0.map(str::to_string))
    }
}

/// Geocoder that always times out.
pub struct TimeoutGeocoder;

impl GeoLookup for TimeoutGeocoder {
    fn reverse(&self, _: Degree, _: Degree, _: u8) -> Result<Option<String>, GeoLookupError> {
        Err(GeoLookupError::Unavailable("request timed out".into()))
    }
}

/// Feed reading the sample file, which can be switched to fail.
pub struct FlakyFeed {
    inner: FileFeed,
    pub failing: AtomicBool,
    pub fetches: AtomicUsize,
}

impl FlakyFeed {
    pub fn new() -> Self {
        FlakyFeed {
            inner: FileFeed::new(SAMPLE_OEM),
            failing: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }
}

impl EphemerisFeed for &'static FlakyFeed {
    fn fetch(&self) -> Result<EphemerisSet, iss_tracker::tracker_errors::IngestionError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            // a truncated document, as after a dropped connection
            return parse_oem("<ndm><oem><header>");
        }
        self.inner.fetch()
    }
}

/// Feed whose n-th fetch (from 0) holds `n + 1` vectors and the comment `generation n`, so that a
/// reader can check that the blocks of a snapshot belong together.
#[derive(Default)]
pub struct GenerationFeed {
    generation: AtomicUsize,
}

impl EphemerisFeed for GenerationFeed {
    fn fetch(&self) -> Result<EphemerisSet, iss_tracker::tracker_errors::IngestionError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        let vectors = (0..=generation)
            .map(|i| {
                StateVector::new(
                    format!("2023-048T12:{:02}:00.000Z", i % 60),
                    Vector3::new(6771.0, i as f64, 0.0),
                    Vector3::new(0.0, 7.66, 0.0),
                )
            })
            .collect();
        Ok(EphemerisSet::new(
            [("ORIGINATOR", generation.to_string())]
                .into_iter()
                .collect::<OemHeader>(),
            OemMetadata::default(),
            vec![format!("generation {generation}")],
            vectors,
        ))
    }
}

/// Tracker over the sample file, not loaded yet.
pub fn sample_tracker(geocoder: Box<dyn GeoLookup>) -> IssTracker {
    init_logger();
    IssTracker::with_collaborators(
        TrackerConfig::default(),
        Box::new(FileFeed::new(SAMPLE_OEM)),
        geocoder,
    )
}

/// Tracker over the sample file, loaded.
pub fn loaded_sample_tracker(geocoder: Box<dyn GeoLookup>) -> IssTracker {
    let tracker = sample_tracker(geocoder);
    tracker.load().expect("the sample ephemeris should load");
    tracker
}
