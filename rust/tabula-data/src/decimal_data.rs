//! Fixed-precision decimal values.

use std::fmt;

use tabula_common::{Result, verify_arg};

/// Maximum number of decimal digits a [`DecimalData`] can hold.
pub const MAX_PRECISION: u8 = 38;

/// Maximum precision whose unscaled values fit in an `i64`.
pub const MAX_COMPACT_PRECISION: u8 = 18;

/// A decimal number with a fixed precision and scale.
///
/// The value is `unscaled * 10^-scale`. `precision` is the total number of
/// decimal digits, `scale` the number of digits after the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DecimalRepr"))]
pub struct DecimalData {
    unscaled: i128,
    precision: u8,
    scale: u8,
}

impl DecimalData {
    /// Creates a decimal from its unscaled value.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not in `1..=38`, if `scale` exceeds
    /// `precision`, or if `unscaled` has more than `precision` digits.
    pub fn from_unscaled(unscaled: i128, precision: u8, scale: u8) -> Result<DecimalData> {
        verify_arg!(precision, (1..=MAX_PRECISION).contains(&precision));
        verify_arg!(scale, scale <= precision);
        verify_arg!(
            unscaled,
            unscaled.unsigned_abs() < 10u128.pow(precision as u32)
        );
        Ok(DecimalData {
            unscaled,
            precision,
            scale,
        })
    }

    /// Creates a decimal from an `i64` unscaled value.
    pub fn from_unscaled_long(unscaled: i64, precision: u8, scale: u8) -> Result<DecimalData> {
        Self::from_unscaled(unscaled as i128, precision, scale)
    }

    /// Creates a zero with the given precision and scale.
    pub fn zero(precision: u8, scale: u8) -> Result<DecimalData> {
        Self::from_unscaled(0, precision, scale)
    }

    #[inline]
    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    /// Returns the unscaled value as an `i64` when the precision is compact.
    pub fn unscaled_long(&self) -> Option<i64> {
        self.is_compact().then_some(self.unscaled as i64)
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[inline]
    pub fn scale(&self) -> u8 {
        self.scale
    }

    #[inline]
    pub fn is_compact(&self) -> bool {
        self.precision <= MAX_COMPACT_PRECISION
    }

    pub fn signum(&self) -> i32 {
        self.unscaled.signum() as i32
    }

    /// Converts to the nearest `f64`. May lose precision.
    pub fn to_f64(&self) -> f64 {
        self.unscaled as f64 / 10f64.powi(self.scale as i32)
    }
}

/// Unvalidated wire form, checked by [`DecimalData::from_unscaled`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DecimalRepr {
    unscaled: i128,
    precision: u8,
    scale: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<DecimalRepr> for DecimalData {
    type Error = tabula_common::error::Error;

    fn try_from(repr: DecimalRepr) -> Result<DecimalData> {
        DecimalData::from_unscaled(repr.unscaled, repr.precision, repr.scale)
    }
}

impl fmt::Display for DecimalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if self.unscaled < 0 {
            f.write_str("-")?;
        }
        if scale == 0 {
            f.write_str(&digits)
        } else if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        } else {
            write!(f, "0.{digits:0>scale$}")
        }
    }
}

#[cfg(test)]
mod tests {
    use tabula_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_display() {
        let d = DecimalData::from_unscaled(-12345, 10, 2).unwrap();
        assert_eq!(d.to_string(), "-123.45");
        let d = DecimalData::from_unscaled(5, 5, 3).unwrap();
        assert_eq!(d.to_string(), "0.005");
        let d = DecimalData::from_unscaled(-5, 5, 1).unwrap();
        assert_eq!(d.to_string(), "-0.5");
        let d = DecimalData::from_unscaled(42, 2, 0).unwrap();
        assert_eq!(d.to_string(), "42");
        let d = DecimalData::zero(3, 2).unwrap();
        assert_eq!(d.to_string(), "0.00");
    }

    #[test]
    fn test_precision_bounds() {
        assert!(DecimalData::from_unscaled(99999, 5, 0).is_ok());
        assert!(DecimalData::from_unscaled(-99999, 5, 0).is_ok());
        assert!(DecimalData::from_unscaled(100000, 5, 0).is_err());
        assert!(DecimalData::from_unscaled(10i128.pow(38) - 1, 38, 10).is_ok());
        assert!(DecimalData::from_unscaled(0, 39, 0).is_err());
        assert!(DecimalData::from_unscaled(0, 0, 0).is_err());

        let err = DecimalData::from_unscaled(1, 4, 5).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidArgument { name, .. } if name == "scale"
        ));
    }

    #[test]
    fn test_compact() {
        let d = DecimalData::from_unscaled_long(i64::MAX / 10, 18, 4).unwrap();
        assert!(d.is_compact());
        assert_eq!(d.unscaled_long(), Some(i64::MAX / 10));

        let d = DecimalData::from_unscaled(1, 19, 0).unwrap();
        assert!(!d.is_compact());
        assert_eq!(d.unscaled_long(), None);
    }

    #[test]
    fn test_to_f64() {
        let d = DecimalData::from_unscaled(31415, 5, 4).unwrap();
        assert!((d.to_f64() - 3.1415).abs() < 1e-12);
        assert_eq!(d.signum(), 1);
        assert_eq!(DecimalData::zero(1, 0).unwrap().signum(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let d = DecimalData::from_unscaled(-12345, 10, 2).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let back: DecimalData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid() {
        for json in [
            r#"{"unscaled":123456789,"precision":0,"scale":200}"#,
            r#"{"unscaled":1,"precision":39,"scale":0}"#,
            r#"{"unscaled":1,"precision":4,"scale":5}"#,
            r#"{"unscaled":100000,"precision":5,"scale":0}"#,
        ] {
            let res = serde_json::from_str::<DecimalData>(json);
            assert!(res.is_err(), "accepted {json}");
        }
        let d: DecimalData =
            serde_json::from_str(r#"{"unscaled":99999,"precision":5,"scale":5}"#).unwrap();
        assert_eq!(d.to_string(), "0.99999");
    }
}
