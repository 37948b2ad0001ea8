//! Timestamp values with nanosecond resolution.

use tabula_common::{Result, verify_arg};

pub const NANOS_PER_MILLISECOND: i64 = 1_000_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// A point in time, stored as milliseconds since the Unix epoch plus the
/// nanoseconds within that millisecond.
///
/// The split keeps millisecond timestamps (the common case) cheap while still
/// representing nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TimestampRepr"))]
pub struct TimestampData {
    millisecond: i64,
    nano_of_millisecond: u32,
}

impl TimestampData {
    pub fn from_epoch_millis(millisecond: i64) -> TimestampData {
        TimestampData {
            millisecond,
            nano_of_millisecond: 0,
        }
    }

    /// # Errors
    ///
    /// Returns an error if `nano_of_millisecond` is not below one million.
    pub fn from_epoch_millis_and_nanos(
        millisecond: i64,
        nano_of_millisecond: u32,
    ) -> Result<TimestampData> {
        verify_arg!(
            nano_of_millisecond,
            (nano_of_millisecond as i64) < NANOS_PER_MILLISECOND
        );
        Ok(TimestampData {
            millisecond,
            nano_of_millisecond,
        })
    }

    pub fn from_epoch_nanos(nanos: i64) -> TimestampData {
        TimestampData {
            millisecond: nanos.div_euclid(NANOS_PER_MILLISECOND),
            nano_of_millisecond: nanos.rem_euclid(NANOS_PER_MILLISECOND) as u32,
        }
    }

    #[inline]
    pub fn millisecond(&self) -> i64 {
        self.millisecond
    }

    #[inline]
    pub fn nano_of_millisecond(&self) -> u32 {
        self.nano_of_millisecond
    }

    pub fn to_epoch_nanos(&self) -> i128 {
        self.millisecond as i128 * NANOS_PER_MILLISECOND as i128 + self.nano_of_millisecond as i128
    }

    pub fn to_epoch_seconds(&self) -> i64 {
        self.millisecond.div_euclid(MILLIS_PER_SECOND)
    }

    /// Returns `true` if the value can be stored as plain epoch milliseconds.
    pub fn is_compact(&self) -> bool {
        self.nano_of_millisecond == 0
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TimestampRepr {
    millisecond: i64,
    nano_of_millisecond: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<TimestampRepr> for TimestampData {
    type Error = tabula_common::error::Error;

    fn try_from(repr: TimestampRepr) -> Result<TimestampData> {
        TimestampData::from_epoch_millis_and_nanos(repr.millisecond, repr.nano_of_millisecond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_epoch_nanos() {
        let ts = TimestampData::from_epoch_nanos(1_500_000_123);
        assert_eq!(ts.millisecond(), 1_500);
        assert_eq!(ts.nano_of_millisecond(), 123);
        assert_eq!(ts.to_epoch_nanos(), 1_500_000_123);

        let ts = TimestampData::from_epoch_nanos(-1);
        assert_eq!(ts.millisecond(), -1);
        assert_eq!(ts.nano_of_millisecond(), 999_999);
        assert_eq!(ts.to_epoch_nanos(), -1);
        assert_eq!(ts.to_epoch_seconds(), -1);
    }

    #[test]
    fn test_nanos_range() {
        assert!(TimestampData::from_epoch_millis_and_nanos(0, 999_999).is_ok());
        assert!(TimestampData::from_epoch_millis_and_nanos(0, 1_000_000).is_err());
    }

    #[test]
    fn test_ordering() {
        let a = TimestampData::from_epoch_millis_and_nanos(10, 5).unwrap();
        let b = TimestampData::from_epoch_millis(11);
        assert!(a < b);
        assert!(b.is_compact());
        assert!(!a.is_compact());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let ts = TimestampData::from_epoch_nanos(-1_234_567);
        let json = serde_json::to_string(&ts).unwrap();
        let back: TimestampData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
        assert_eq!(back.to_epoch_nanos(), -1_234_567);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_unnormalized_nanos() {
        let json = r#"{"millisecond":0,"nano_of_millisecond":5000000}"#;
        assert!(serde_json::from_str::<TimestampData>(json).is_err());

        // The same instant is only reachable in normalized form.
        let json = r#"{"millisecond":5,"nano_of_millisecond":0}"#;
        let ts: TimestampData = serde_json::from_str(json).unwrap();
        assert_eq!(ts, TimestampData::from_epoch_millis(5));
    }
}
