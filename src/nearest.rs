use hifitime::Epoch;

use crate::{
    constants::Seconds, oem::StateVector, time::parse_oem_epoch, tracker_errors::TrackerError,
};

/// The sample closest to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestEpoch<'a> {
    pub state: &'a StateVector,
    /// `now − epoch` in seconds: positive when the sample lies in the past
    pub time_difference: Seconds,
}

/// Find the state vector whose epoch is closest to `now`.
///
/// Every vector is visited, the feed order relative to `now` is never used to stop early.
/// Candidates are ranked by the absolute value of `now − epoch`; a strictly smaller distance is
/// required to replace the current best, so ties keep the earliest vector of the scan.
///
/// Arguments
/// ---------
/// * `vectors`: the state vectors of one ephemeris snapshot
/// * `now`: the reference instant
///
/// Return
/// ------
/// * The [`ClosestEpoch`] with its signed time difference
/// * [`TrackerError::NotLoaded`] if `vectors` is empty
/// * [`TrackerError::InvalidParameter`] if any epoch cannot be parsed, malformed entries are
///   never skipped
pub fn find_closest_to_now(
    vectors: &[StateVector],
    now: Epoch,
) -> Result<ClosestEpoch<'_>, TrackerError> {
    let now_unix = now.to_unix_seconds();
    let mut closest: Option<ClosestEpoch<'_>> = None;

    for state in vectors {
        let epoch_unix = parse_oem_epoch(state.epoch())?.to_unix_seconds();
        let time_difference = now_unix - epoch_unix;

        let is_closer = closest
            .map_or(true, |best| time_difference.abs() < best.time_difference.abs());
        if is_closer {
            closest = Some(ClosestEpoch {
                state,
                time_difference,
            });
        }
    }

    let closest = closest.ok_or(TrackerError::NotLoaded)?;
    log::debug!(
        "Closest epoch to now: {} ({:.0} s away)",
        closest.state.epoch(),
        closest.time_difference
    );
    Ok(closest)
}

#[cfg(test)]
mod nearest_test {
    use nalgebra::Vector3;

    use super::*;

    fn sv(epoch: &str, x: f64) -> StateVector {
        StateVector::new(epoch, Vector3::new(x, 0., 0.), Vector3::zeros())
    }

    fn at(epoch: &str) -> Epoch {
        parse_oem_epoch(epoch).unwrap()
    }

    #[test]
    fn test_closest_in_the_middle() {
        let vectors = vec![
            sv("2023-048T12:00:00.000Z", 1.),
            sv("2023-048T12:04:00.000Z", 2.),
            sv("2023-048T12:08:00.000Z", 3.),
        ];

        let closest = find_closest_to_now(&vectors, at("2023-048T12:05:00.000Z")).unwrap();
        assert_eq!(closest.state, &vectors[1]);
        assert_eq!(closest.time_difference, 60.0);

        let closest = find_closest_to_now(&vectors, at("2023-048T12:07:00.000Z")).unwrap();
        assert_eq!(closest.state, &vectors[2]);
        assert_eq!(closest.time_difference, -60.0);
    }

    #[test]
    fn test_closest_outside_the_span() {
        let vectors = vec![
            sv("2023-048T12:00:00.000Z", 1.),
            sv("2023-048T12:04:00.000Z", 2.),
            sv("2023-048T12:08:00.000Z", 3.),
        ];

        let closest = find_closest_to_now(&vectors, at("2023-050T00:00:00.000Z")).unwrap();
        assert_eq!(closest.state, &vectors[2]);

        let closest = find_closest_to_now(&vectors, at("2023-001T00:00:00.000Z")).unwrap();
        assert_eq!(closest.state, &vectors[0]);
        assert!(closest.time_difference < 0.0);
    }

    #[test]
    fn test_ties_keep_earliest() {
        let vectors = vec![
            sv("2023-048T12:00:00.000Z", 1.),
            sv("2023-048T12:04:00.000Z", 2.),
            sv("2023-048T12:04:00.000Z", 3.),
        ];

        // equidistant from the first two samples
        let closest = find_closest_to_now(&vectors, at("2023-048T12:02:00.000Z")).unwrap();
        assert_eq!(closest.state.position().x, 1.);

        // duplicated epochs
        let closest = find_closest_to_now(&vectors, at("2023-048T12:04:00.000Z")).unwrap();
        assert_eq!(closest.state.position().x, 2.);
        assert_eq!(closest.time_difference, 0.0);
    }

    #[test]
    fn test_unsorted_input_is_fully_scanned() {
        let vectors = vec![
            sv("2023-048T12:08:00.000Z", 3.),
            sv("2023-048T12:00:00.000Z", 1.),
            sv("2023-048T12:04:00.000Z", 2.),
        ];
        let closest = find_closest_to_now(&vectors, at("2023-048T12:03:00.000Z")).unwrap();
        assert_eq!(closest.state.position().x, 2.);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            find_closest_to_now(&[], at("2023-048T12:00:00.000Z")).unwrap_err(),
            TrackerError::NotLoaded
        );
    }

    #[test]
    fn test_malformed_epoch_is_reported() {
        let vectors = vec![
            sv("2023-048T12:00:00.000Z", 1.),
            sv("not an epoch", 2.),
            sv("2023-048T12:08:00.000Z", 3.),
        ];
        assert!(matches!(
            find_closest_to_now(&vectors, at("2023-048T12:08:00.000Z")),
            Err(TrackerError::InvalidParameter { .. })
        ));
    }
}
