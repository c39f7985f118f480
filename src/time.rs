//! Parsing of the OEM epoch encoding `YYYY-DDDTHH:MM:SS.sssZ` (day of year, UTC).

use hifitime::{Epoch, TimeScale, Unit};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::tracker_errors::TrackerError;

static OEM_EPOCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{3})T(\d{2}):(\d{2}):(\d{2})(?:\.\d+)?Z?$")
        .expect("OEM epoch pattern is a valid regex")
});

/// Byte range of the hour field inside an OEM epoch string
const HOUR_FIELD: std::ops::Range<usize> = 9..11;
/// Byte range of the minute field inside an OEM epoch string
const MINUTE_FIELD: std::ops::Range<usize> = 12..14;

/// Parse an OEM epoch (`YYYY-DDDTHH:MM:SS.sssZ`) into a UTC [`Epoch`].
///
/// The fractional seconds are ignored, only whole seconds contribute to the instant.
///
/// Arguments
/// ---------
/// * `epoch`: the epoch text as found in the feed
///
/// Return
/// ------
/// * The UTC [`Epoch`], or [`TrackerError::InvalidParameter`] if the text does not follow the layout
///   or names a day, hour, minute or second that does not exist.
pub fn parse_oem_epoch(epoch: &str) -> Result<Epoch, TrackerError> {
    let invalid = |reason: &str| {
        TrackerError::invalid_parameter("epoch", format!("{reason} in \"{epoch}\""))
    };

    let caps = OEM_EPOCH
        .captures(epoch)
        .ok_or_else(|| invalid("expected the YYYY-DDDTHH:MM:SS.sssZ layout"))?;

    // every group is made of ASCII digits only, parsing cannot overflow these widths
    let field = |i: usize| caps[i].parse::<u16>().map_err(|_| invalid("unreadable field"));
    let year = field(1)? as i32;
    let day_of_year = field(2)?;
    let hour = field(3)?;
    let minute = field(4)?;
    let second = field(5)?;

    if day_of_year == 0 {
        return Err(invalid("no such day of year"));
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err(invalid("no such time of day"));
    }

    let instant = Epoch::from_day_of_year(year, f64::from(day_of_year), TimeScale::UTC)
        + i64::from(hour) * Unit::Hour
        + i64::from(minute) * Unit::Minute
        + i64::from(second) * Unit::Second;

    // day 366 of a common year rolls over into the next one
    if instant.to_gregorian_utc().0 != year {
        return Err(invalid("no such day of year"));
    }

    Ok(instant)
}

/// Extract the hour and minute of an OEM epoch from their fixed character positions.
///
/// Return
/// ------
/// * `(hours, minutes)` as floats, or [`TrackerError::InvalidParameter`] if either field is
///   missing or not numeric.
pub fn epoch_hour_minute(epoch: &str) -> Result<(f64, f64), TrackerError> {
    let read = |range: std::ops::Range<usize>, what: &str| {
        epoch
            .get(range)
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| {
                TrackerError::invalid_parameter("epoch", format!("no {what} field in \"{epoch}\""))
            })
    };

    Ok((read(HOUR_FIELD, "hour")?, read(MINUTE_FIELD, "minute")?))
}
