//! An array value over an externally produced sequence of boxed elements.

use std::{any::Any, sync::Arc};

use tabula_common::{Result, error::Error, verify_position};

use crate::{
    ArrayData, ArrayRef, BinaryData, DecimalData, Element, ElementValue, MapRef, RawValueData,
    RowRef, StringData, TimestampData,
    array_data::{null_element, type_mismatch},
};

/// An [`ArrayData`] adapter over a shared sequence of already-boxed elements.
///
/// `ShadowArrayData` lets values produced outside of the packed representation
/// (e.g. by user code or a converter) take part in the array contract without
/// being copied or re-encoded. The sequence is held through an `Arc`, so the
/// producer may keep its own reference; the slice cannot be mutated while
/// either of them is alive.
///
/// There is no separate null mask: a position is null if it is out of range or
/// holds `None`.
///
/// The adapter is read-only. Elements are reachable only through the typed
/// accessors of [`ArrayData`], each of which resolves the element and matches
/// its variant against the requested kind.
#[derive(Debug, Clone)]
pub struct ShadowArrayData {
    data: Arc<[Option<Element>]>,
}

impl ShadowArrayData {
    /// Wraps `data` without copying the elements.
    pub fn new(data: impl Into<Arc<[Option<Element>]>>) -> ShadowArrayData {
        let data = data.into();
        log::trace!("shadow array over {} elements", data.len());
        ShadowArrayData { data }
    }

    /// Wraps `data`, rejecting a missing sequence.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `data` is `None`.
    pub fn try_new<D>(data: Option<D>) -> Result<ShadowArrayData>
    where
        D: Into<Arc<[Option<Element>]>>,
    {
        let data = data.ok_or_else(|| Error::invalid_arg("data", "element sequence is missing"))?;
        Ok(Self::new(data))
    }

    /// Creates an empty array.
    pub fn empty() -> ShadowArrayData {
        Self::new(Vec::new())
    }

    pub fn into_array_ref(self) -> ArrayRef {
        Arc::new(self)
    }

    /// Resolves the non-null element at `pos`.
    ///
    /// Every typed accessor goes through here.
    fn element(&self, pos: usize) -> Result<&Element> {
        verify_position!(pos, self.data.len());
        self.data[pos].as_ref().ok_or_else(|| null_element(pos))
    }

    #[inline]
    fn get_typed<T: ElementValue>(&self, pos: usize) -> Result<T> {
        let element = self.element(pos)?;
        T::from_element(element).ok_or_else(|| type_mismatch(pos, T::KIND, element.kind()))
    }
}

impl From<Vec<Option<Element>>> for ShadowArrayData {
    fn from(data: Vec<Option<Element>>) -> Self {
        ShadowArrayData::new(data)
    }
}

impl From<Arc<[Option<Element>]>> for ShadowArrayData {
    fn from(data: Arc<[Option<Element>]>) -> Self {
        ShadowArrayData::new(data)
    }
}

impl FromIterator<Option<Element>> for ShadowArrayData {
    fn from_iter<I: IntoIterator<Item = Option<Element>>>(iter: I) -> Self {
        ShadowArrayData::new(iter.into_iter().collect::<Arc<[_]>>())
    }
}

impl ArrayData for ShadowArrayData {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
        self
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn is_null_at(&self, pos: usize) -> bool {
        !matches!(self.data.get(pos), Some(Some(_)))
    }

    fn get_boolean(&self, pos: usize) -> Result<bool> {
        self.get_typed(pos)
    }

    fn get_byte(&self, pos: usize) -> Result<i8> {
        self.get_typed(pos)
    }

    fn get_short(&self, pos: usize) -> Result<i16> {
        self.get_typed(pos)
    }

    fn get_int(&self, pos: usize) -> Result<i32> {
        self.get_typed(pos)
    }

    fn get_long(&self, pos: usize) -> Result<i64> {
        self.get_typed(pos)
    }

    fn get_float(&self, pos: usize) -> Result<f32> {
        self.get_typed(pos)
    }

    fn get_double(&self, pos: usize) -> Result<f64> {
        self.get_typed(pos)
    }

    fn get_string(&self, pos: usize) -> Result<StringData> {
        self.get_typed(pos)
    }

    fn get_decimal(&self, pos: usize, _precision: u8, _scale: u8) -> Result<DecimalData> {
        self.get_typed(pos)
    }

    fn get_timestamp(&self, pos: usize, _precision: u8) -> Result<TimestampData> {
        self.get_typed(pos)
    }

    fn get_binary(&self, pos: usize) -> Result<BinaryData> {
        self.get_typed(pos)
    }

    fn get_raw_value(&self, pos: usize) -> Result<RawValueData> {
        self.get_typed(pos)
    }

    fn get_array(&self, pos: usize) -> Result<ArrayRef> {
        self.get_typed(pos)
    }

    fn get_map(&self, pos: usize) -> Result<MapRef> {
        self.get_typed(pos)
    }

    fn get_row(&self, pos: usize, _num_fields: usize) -> Result<RowRef> {
        self.get_typed(pos)
    }
}
