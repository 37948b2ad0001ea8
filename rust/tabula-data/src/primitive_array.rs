//! A non-null array value backed by a single primitive slice.

use std::{any::Any, sync::Arc};

use tabula_common::{Result, verify_position};

use crate::{
    ArrayData, ArrayRef, BinaryData, DecimalData, ElementKind, ElementValue, MapRef, RawValueData,
    RowRef, StringData, TimestampData,
    array_data::type_mismatch,
};

/// The backing slice of a [`PrimitiveArrayData`].
#[derive(Debug, Clone)]
pub enum PrimitiveValues {
    Boolean(Arc<[bool]>),
    Byte(Arc<[i8]>),
    Short(Arc<[i16]>),
    Int(Arc<[i32]>),
    Long(Arc<[i64]>),
    Float(Arc<[f32]>),
    Double(Arc<[f64]>),
}

impl PrimitiveValues {
    pub fn len(&self) -> usize {
        match self {
            PrimitiveValues::Boolean(v) => v.len(),
            PrimitiveValues::Byte(v) => v.len(),
            PrimitiveValues::Short(v) => v.len(),
            PrimitiveValues::Int(v) => v.len(),
            PrimitiveValues::Long(v) => v.len(),
            PrimitiveValues::Float(v) => v.len(),
            PrimitiveValues::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind of every element in the slice.
    pub fn kind(&self) -> ElementKind {
        match self {
            PrimitiveValues::Boolean(_) => ElementKind::Boolean,
            PrimitiveValues::Byte(_) => ElementKind::Byte,
            PrimitiveValues::Short(_) => ElementKind::Short,
            PrimitiveValues::Int(_) => ElementKind::Int,
            PrimitiveValues::Long(_) => ElementKind::Long,
            PrimitiveValues::Float(_) => ElementKind::Float,
            PrimitiveValues::Double(_) => ElementKind::Double,
        }
    }
}

/// A primitive element type that can back a [`PrimitiveArrayData`].
pub trait PrimitiveElement: ElementValue + Copy {
    fn as_slice(values: &PrimitiveValues) -> Option<&[Self]>;

    fn into_values(values: Arc<[Self]>) -> PrimitiveValues;
}

macro_rules! impl_primitive_element {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl PrimitiveElement for $ty {
                #[inline]
                fn as_slice(values: &PrimitiveValues) -> Option<&[Self]> {
                    match values {
                        PrimitiveValues::$variant(v) => Some(&v[..]),
                        _ => None,
                    }
                }

                #[inline]
                fn into_values(values: Arc<[Self]>) -> PrimitiveValues {
                    PrimitiveValues::$variant(values)
                }
            }
        )*
    };
}

impl_primitive_element! {
    Boolean => bool,
    Byte => i8,
    Short => i16,
    Int => i32,
    Long => i64,
    Float => f32,
    Double => f64,
}

/// An [`ArrayData`] over a shared slice of one primitive type.
///
/// Elements are never null; only positions past the end report
/// `is_null_at() == true`. The accessor matching the stored primitive succeeds,
/// all others are type mismatches. The matching bulk conversion is a single
/// slice copy.
#[derive(Debug, Clone)]
pub struct PrimitiveArrayData {
    values: PrimitiveValues,
}

impl PrimitiveArrayData {
    pub fn new(values: PrimitiveValues) -> PrimitiveArrayData {
        log::trace!(
            "primitive array over {} {} elements",
            values.len(),
            values.kind()
        );
        PrimitiveArrayData { values }
    }

    /// Creates an array over the given slice, e.g. `from_slice(vec![1i32, 2, 3])`.
    pub fn from_slice<T: PrimitiveElement>(values: impl Into<Arc<[T]>>) -> PrimitiveArrayData {
        Self::new(T::into_values(values.into()))
    }

    pub fn values(&self) -> &PrimitiveValues {
        &self.values
    }

    pub fn into_array_ref(self) -> ArrayRef {
        Arc::new(self)
    }

    fn get_primitive<T: PrimitiveElement>(&self, pos: usize) -> Result<T> {
        match T::as_slice(&self.values) {
            Some(slice) => {
                verify_position!(pos, slice.len());
                Ok(slice[pos])
            }
            None => self.mismatch(pos, T::KIND),
        }
    }

    fn to_primitive_vec<T: PrimitiveElement>(&self) -> Result<Vec<T>> {
        match T::as_slice(&self.values) {
            Some(slice) => Ok(slice.to_vec()),
            None if self.values.is_empty() => Ok(Vec::new()),
            None => self.mismatch(0, T::KIND),
        }
    }

    fn mismatch<T>(&self, pos: usize, expected: ElementKind) -> Result<T> {
        verify_position!(pos, self.values.len());
        Err(type_mismatch(pos, expected, self.values.kind()))
    }
}

impl ArrayData for PrimitiveArrayData {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
        self
    }

    fn size(&self) -> usize {
        self.values.len()
    }

    fn is_null_at(&self, pos: usize) -> bool {
        pos >= self.values.len()
    }

    fn get_boolean(&self, pos: usize) -> Result<bool> {
        self.get_primitive(pos)
    }

    fn get_byte(&self, pos: usize) -> Result<i8> {
        self.get_primitive(pos)
    }

    fn get_short(&self, pos: usize) -> Result<i16> {
        self.get_primitive(pos)
    }

    fn get_int(&self, pos: usize) -> Result<i32> {
        self.get_primitive(pos)
    }

    fn get_long(&self, pos: usize) -> Result<i64> {
        self.get_primitive(pos)
    }

    fn get_float(&self, pos: usize) -> Result<f32> {
        self.get_primitive(pos)
    }

    fn get_double(&self, pos: usize) -> Result<f64> {
        self.get_primitive(pos)
    }

    fn get_string(&self, pos: usize) -> Result<StringData> {
        self.mismatch(pos, ElementKind::String)
    }

    fn get_decimal(&self, pos: usize, _precision: u8, _scale: u8) -> Result<DecimalData> {
        self.mismatch(pos, ElementKind::Decimal)
    }

    fn get_timestamp(&self, pos: usize, _precision: u8) -> Result<TimestampData> {
        self.mismatch(pos, ElementKind::Timestamp)
    }

    fn get_binary(&self, pos: usize) -> Result<BinaryData> {
        self.mismatch(pos, ElementKind::Binary)
    }

    fn get_raw_value(&self, pos: usize) -> Result<RawValueData> {
        self.mismatch(pos, ElementKind::RawValue)
    }

    fn get_array(&self, pos: usize) -> Result<ArrayRef> {
        self.mismatch(pos, ElementKind::Array)
    }

    fn get_map(&self, pos: usize) -> Result<MapRef> {
        self.mismatch(pos, ElementKind::Map)
    }

    fn get_row(&self, pos: usize, _num_fields: usize) -> Result<RowRef> {
        self.mismatch(pos, ElementKind::Row)
    }

    fn to_boolean_array(&self) -> Result<Vec<bool>> {
        self.to_primitive_vec()
    }

    fn to_byte_array(&self) -> Result<Vec<i8>> {
        self.to_primitive_vec()
    }

    fn to_short_array(&self) -> Result<Vec<i16>> {
        self.to_primitive_vec()
    }

    fn to_int_array(&self) -> Result<Vec<i32>> {
        self.to_primitive_vec()
    }

    fn to_long_array(&self) -> Result<Vec<i64>> {
        self.to_primitive_vec()
    }

    fn to_float_array(&self) -> Result<Vec<f32>> {
        self.to_primitive_vec()
    }

    fn to_double_array(&self) -> Result<Vec<f64>> {
        self.to_primitive_vec()
    }
}

#[cfg(test)]
mod tests {
    use tabula_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_int_array() {
        let array = PrimitiveArrayData::from_slice(vec![3i32, -1, 7]);
        assert_eq!(array.size(), 3);
        assert_eq!(array.values().kind(), ElementKind::Int);
        assert!(!array.is_null_at(2));
        assert!(array.is_null_at(3));
        assert_eq!(array.get_int(1).unwrap(), -1);
        assert_eq!(array.to_int_array().unwrap(), vec![3, -1, 7]);
    }

    #[test]
    fn test_mismatch_and_range() {
        let array = PrimitiveArrayData::from_slice(vec![1.0f64, 2.0]);
        let err = array.get_float(0).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::TypeMismatch { position: 0, .. }
        ));
        let err = array.get_string(1).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::TypeMismatch { expected, actual, .. }
                if expected == "String" && actual == "Double"
        ));
        let err = array.get_double(2).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::PositionOutOfRange { position: 2, len: 2 }
        ));
        let err = array.get_row(5, 1).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::PositionOutOfRange { .. }));
    }

    #[test]
    fn test_bulk_conversion_matches_element_wise() {
        let array = PrimitiveArrayData::from_slice(vec![true, false, true]);
        let fast = array.to_boolean_array().unwrap();
        let slow: Vec<bool> = (0..array.size())
            .map(|pos| array.get_boolean(pos).unwrap())
            .collect();
        assert_eq!(fast, slow);

        let err = array.to_long_array().unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::TypeMismatch { position: 0, .. }
        ));

        let empty = PrimitiveArrayData::from_slice(Vec::<bool>::new());
        assert!(empty.to_long_array().unwrap().is_empty());
    }

    #[test]
    fn test_shares_slice() {
        let values: Arc<[i64]> = vec![1, 2, 3].into();
        let array = PrimitiveArrayData::from_slice(values.clone());
        match array.values() {
            PrimitiveValues::Long(v) => assert!(Arc::ptr_eq(v, &values)),
            other => panic!("unexpected values: {other:?}"),
        }
    }
}
