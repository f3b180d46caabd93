use log::debug;

use crate::models::Session;

/// Fixed UTC offset per zone name. Deliberately no DST handling: historical
/// session labels were produced with these constants and have to stay
/// reproducible across reimports.
const ZONE_OFFSETS: &[(&str, f64)] = &[
    ("UTC", 0.0),
    ("America/New_York", -4.0),
    ("America/Chicago", -5.0),
    ("America/Denver", -6.0),
    ("America/Los_Angeles", -7.0),
    ("Europe/London", 1.0),
    ("Europe/Berlin", 2.0),
    ("Europe/Paris", 2.0),
    ("Europe/Zurich", 2.0),
    ("Europe/Moscow", 3.0),
    ("Asia/Dubai", 4.0),
    ("Asia/Kolkata", 5.5),
    ("Asia/Singapore", 8.0),
    ("Asia/Hong_Kong", 8.0),
    ("Asia/Shanghai", 8.0),
    ("Asia/Tokyo", 9.0),
    ("Australia/Sydney", 10.0),
    ("Pacific/Auckland", 12.0),
];

fn zone_offset(name: &str) -> Option<f64> {
    ZONE_OFFSETS
        .iter()
        .find(|(zone, _)| *zone == name)
        .map(|(_, offset)| *offset)
}

/// Parse an "HH:MM" clock string into a fractional hour.
fn parse_clock(s: &str) -> Option<f64> {
    let (h, m) = s.trim().split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h >= 24 || m >= 60 {
        return None;
    }
    Some(h as f64 + m as f64 / 60.0)
}

/// Bucket a UTC hour into a session. Half-open intervals: the boundary hour
/// belongs to the later bucket.
pub fn session_for_utc_hour(utc_hour: f64) -> Session {
    if utc_hour < 8.0 {
        Session::Asia
    } else if utc_hour < 12.0 {
        Session::London
    } else if utc_hour < 16.0 {
        Session::Overlap
    } else if utc_hour < 20.0 {
        Session::Ny
    } else {
        Session::LateNy
    }
}

/// Map a local "HH:MM" entry time plus a named timezone to a session bucket.
/// Anything missing or unparseable falls back to `Unknown` rather than erroring.
pub fn classify_session(local_time: Option<&str>, timezone: Option<&str>) -> Session {
    let Some(time) = local_time else {
        return Session::Unknown;
    };
    let Some(local_hour) = parse_clock(time) else {
        debug!("unparseable entry time {:?}, session set to Unknown", time);
        return Session::Unknown;
    };
    let Some(offset) = timezone.and_then(zone_offset) else {
        debug!("unknown timezone {:?}, session set to Unknown", timezone);
        return Session::Unknown;
    };

    let utc_hour = (local_hour - offset).rem_euclid(24.0);
    session_for_utc_hour(utc_hour)
}
