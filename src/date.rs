//! This module contains the [`AbsoluteTime`] type used for a cookie's
//! creation and expiration dates.

use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Seconds between the Unix epoch and Apple's reference date.
const UNIX_TO_REFERENCE: i128 = 978_307_200;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// A point in time as Apple stores it: floating-point seconds relative to
/// 2001-01-01T00:00:00Z.
///
/// The raw `f64` is kept as-is so timestamps round-trip bit for bit. Use
/// [`AbsoluteTime::to_datetime()`] for a calendar view.
///
/// # Example
///
/// ```rust
/// use binarycookies::AbsoluteTime;
/// use binarycookies::time::macros::datetime;
///
/// let t = AbsoluteTime::from_secs(86_400.0);
/// assert_eq!(t.to_datetime(), Some(datetime!(2001-01-02 0:00 UTC)));
/// assert_eq!(AbsoluteTime::from(datetime!(2001-01-02 0:00 UTC)), t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct AbsoluteTime(f64);

impl AbsoluteTime {
    /// The reference date, 2001-01-01T00:00:00Z.
    pub const REFERENCE: OffsetDateTime = time::macros::datetime!(2001-01-01 0:00 UTC);

    /// The reference date itself.
    pub const ZERO: Self = AbsoluteTime(0.0);

    /// Creates an `AbsoluteTime` `secs` seconds after the reference date.
    #[inline]
    pub const fn from_secs(secs: f64) -> Self {
        AbsoluteTime(secs)
    }

    /// Returns the seconds relative to the reference date.
    #[inline]
    pub const fn as_secs(self) -> f64 {
        self.0
    }

    /// The current time.
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    /// Converts `self` to a UTC date-time, or `None` if the value is not
    /// finite or lies outside the range `time` can represent.
    pub fn to_datetime(self) -> Option<OffsetDateTime> {
        if !self.0.is_finite() {
            return None;
        }

        let nanos = (self.0 * NANOS_PER_SEC).round() as i128;
        let unix = nanos.checked_add(UNIX_TO_REFERENCE * NANOS_PER_SEC as i128)?;
        OffsetDateTime::from_unix_timestamp_nanos(unix).ok()
    }
}

impl From<OffsetDateTime> for AbsoluteTime {
    fn from(datetime: OffsetDateTime) -> Self {
        AbsoluteTime((datetime - AbsoluteTime::REFERENCE).as_seconds_f64())
    }
}

impl From<f64> for AbsoluteTime {
    fn from(secs: f64) -> Self {
        AbsoluteTime(secs)
    }
}

impl fmt::Display for AbsoluteTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime().and_then(|dt| dt.format(&Rfc3339).ok()) {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{}s since 2001-01-01T00:00:00Z", self.0),
        }
    }
}
