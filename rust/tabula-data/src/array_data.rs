//! The positional access contract for array values.
//!
//! [`ArrayData`] is implemented by every physical representation of an array
//! value. Consumers (operators, converters, comparators) only ever talk to this
//! trait, so a packed representation and an adapter over boxed elements are
//! interchangeable.

use std::{any::Any, fmt::Debug, sync::Arc};

use tabula_common::{Result, error::Error};

use crate::{
    BinaryData, DecimalData, ElementKind, MapRef, RawValueData, RowRef, StringData, TimestampData,
};

/// A shared, type-erased array value.
pub type ArrayRef = Arc<dyn ArrayData>;

/// Positional access to the elements of an array value.
///
/// All positions are 0-based. Only [`is_null_at`](ArrayData::is_null_at)
/// accepts any position; every typed accessor returns a contract violation
/// error (see [`Error::is_contract_violation`]) when the position is out of
/// range, the element is null, or the stored element is not of the requested
/// kind. No accessor substitutes a default value.
///
/// Implementations are immutable once constructed, so an [`ArrayRef`] may be
/// read from multiple threads without synchronization.
pub trait ArrayData: Debug + Send + Sync + 'static {
    /// Returns a reference to this array as a type-erased `Any` trait object.
    ///
    /// Enables dynamic downcasting to the concrete representation.
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);

    /// Returns the number of elements, including nulls.
    fn size(&self) -> usize;

    /// Returns `true` if the array has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if `pos` is out of range or the element at `pos` is null.
    fn is_null_at(&self, pos: usize) -> bool;

    fn get_boolean(&self, pos: usize) -> Result<bool>;

    fn get_byte(&self, pos: usize) -> Result<i8>;

    fn get_short(&self, pos: usize) -> Result<i16>;

    fn get_int(&self, pos: usize) -> Result<i32>;

    fn get_long(&self, pos: usize) -> Result<i64>;

    fn get_float(&self, pos: usize) -> Result<f32>;

    fn get_double(&self, pos: usize) -> Result<f64>;

    fn get_string(&self, pos: usize) -> Result<StringData>;

    /// Returns the decimal at `pos`.
    ///
    /// `precision` and `scale` describe the declared element type. They are
    /// not validated against the stored value.
    fn get_decimal(&self, pos: usize, precision: u8, scale: u8) -> Result<DecimalData>;

    /// Returns the timestamp at `pos`. `precision` is advisory, as in
    /// [`get_decimal`](ArrayData::get_decimal).
    fn get_timestamp(&self, pos: usize, precision: u8) -> Result<TimestampData>;

    fn get_binary(&self, pos: usize) -> Result<BinaryData>;

    fn get_raw_value(&self, pos: usize) -> Result<RawValueData>;

    fn get_array(&self, pos: usize) -> Result<ArrayRef>;

    fn get_map(&self, pos: usize) -> Result<MapRef>;

    /// Returns the row at `pos`. `num_fields` is advisory.
    fn get_row(&self, pos: usize, num_fields: usize) -> Result<RowRef>;

    // Bulk conversions. Each one is the matching single-element accessor applied
    // at every position in ascending order, failing at the first bad position.
    // Implementations may override them with a faster path that yields the same
    // values and errors.

    fn to_boolean_array(&self) -> Result<Vec<bool>> {
        collect_positions(self.size(), |pos| self.get_boolean(pos))
    }

    fn to_byte_array(&self) -> Result<Vec<i8>> {
        collect_positions(self.size(), |pos| self.get_byte(pos))
    }

    fn to_short_array(&self) -> Result<Vec<i16>> {
        collect_positions(self.size(), |pos| self.get_short(pos))
    }

    fn to_int_array(&self) -> Result<Vec<i32>> {
        collect_positions(self.size(), |pos| self.get_int(pos))
    }

    fn to_long_array(&self) -> Result<Vec<i64>> {
        collect_positions(self.size(), |pos| self.get_long(pos))
    }

    fn to_float_array(&self) -> Result<Vec<f32>> {
        collect_positions(self.size(), |pos| self.get_float(pos))
    }

    fn to_double_array(&self) -> Result<Vec<f64>> {
        collect_positions(self.size(), |pos| self.get_double(pos))
    }
}

/// Builds a `Vec` of `len` values by calling `get` for each position in
/// ascending order, stopping at the first error.
pub(crate) fn collect_positions<T>(
    len: usize,
    mut get: impl FnMut(usize) -> Result<T>,
) -> Result<Vec<T>> {
    let mut res = Vec::with_capacity(len);
    for pos in 0..len {
        res.push(get(pos)?);
    }
    Ok(res)
}

#[cold]
pub(crate) fn null_element(position: usize) -> Error {
    log::debug!("typed array access at position {position} found a null element");
    Error::null_element(position)
}

#[cold]
pub(crate) fn type_mismatch(position: usize, expected: ElementKind, actual: ElementKind) -> Error {
    log::debug!("array access at position {position} requested {expected}, found {actual}");
    Error::type_mismatch(position, expected.name(), actual.name())
}

#[cfg(test)]
mod tests {
    use tabula_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_collect_positions() {
        let res = collect_positions(4, |pos| Ok(pos as i32 * 2)).unwrap();
        assert_eq!(res, vec![0, 2, 4, 6]);
        assert!(collect_positions(0, |_| -> Result<i32> { unreachable!() })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_collect_positions_fails_fast() {
        let mut visited = Vec::new();
        let err = collect_positions(5, |pos| {
            visited.push(pos);
            if pos == 2 {
                Err(null_element(pos))
            } else {
                Ok(pos)
            }
        })
        .unwrap_err();
        assert_eq!(visited, vec![0, 1, 2]);
        assert!(matches!(err.kind(), ErrorKind::NullElement { position: 2 }));
    }

    #[test]
    fn test_violation_helpers() {
        assert!(null_element(3).is_contract_violation());
        let err = type_mismatch(0, ElementKind::Int, ElementKind::String);
        assert_eq!(
            err.to_string(),
            "element at position 0 is String, requested Int"
        );
    }
}
