//! # Timestamp Conversion
//!
//! Moves between epoch seconds and Kubernetes `Time` values, and renders
//! condition transition times.

use chrono::{DateTime, SecondsFormat, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::jiff::Timestamp;
use tracing::warn;

/// Kubernetes `Time` for the given epoch seconds
///
/// Returns `None` when `secs` lies outside the range `Time` can represent.
pub fn time_from_epoch_secs(secs: i64) -> Option<Time> {
    match Timestamp::from_second(secs) {
        Ok(instant) => Some(Time(instant)),
        Err(e) => {
            warn!(secs, error = %e, "Creation instant outside the representable range, leaving it unset");
            None
        }
    }
}

/// Epoch seconds of a Kubernetes `Time`, dropping sub-second precision
pub fn epoch_secs_from_time(time: &Time) -> i64 {
    time.0.as_second()
}

/// Smallest epoch second a `Time` can hold
pub fn min_epoch_secs() -> i64 {
    Timestamp::MIN.as_second()
}

/// Largest epoch second a `Time` can hold
pub fn max_epoch_secs() -> i64 {
    Timestamp::MAX.as_second()
}

/// RFC3339 rendering used for condition transition times
pub fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
