mod common;

use std::{sync::Arc, thread};

use common::{init_logger, FixedGeocoder, GenerationFeed};
use iss_tracker::{config::TrackerConfig, tracker::IssTracker, tracker_errors::TrackerError};

#[test]
fn test_readers_never_see_a_torn_set() {
    init_logger();
    let tracker = Arc::new(IssTracker::with_collaborators(
        TrackerConfig::default(),
        Box::new(GenerationFeed::default()),
        Box::new(FixedGeocoder(Some("Somewhere"))),
    ));
    tracker.load().unwrap();

    let writer = {
        let tracker = Arc::clone(&tracker);
        thread::spawn(move || {
            for i in 0..200 {
                if i % 7 == 0 {
                    // the readers may observe the unloaded state in between
                    let _ = tracker.unload();
                }
                tracker.load().unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                for _ in 0..500 {
                    match tracker.snapshot() {
                        Ok(set) => {
                            let generation = set.len() - 1;
                            assert_eq!(set.comments(), &[format!("generation {generation}")]);
                            assert_eq!(
                                set.header().get("ORIGINATOR"),
                                Some(generation.to_string().as_str())
                            );
                        }
                        Err(err) => assert_eq!(err, TrackerError::NotLoaded),
                    }

                    match tracker.epoch_location("0") {
                        Ok(location) => assert_eq!(location.geographic_location, "Somewhere"),
                        Err(err) => assert_eq!(err, TrackerError::NotLoaded),
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert!(tracker.is_loaded());
    assert_eq!(tracker.all_data().unwrap().len(), 201);
}
