//! Generic, nullable element access driven by an element type.

use tabula_common::Result;

use crate::{ArrayData, Element, ElementType};

/// Reads nullable elements of a fixed [`ElementType`] out of any [`ArrayData`].
///
/// The getter resolves the typed accessor once, from the element type, and
/// boxes each value it reads back into an [`Element`]. Null positions yield
/// `None`. The type's precision, scale and field count are passed through to
/// the accessors unchanged.
///
/// ```
/// use tabula_data::{ElementGetter, ElementType, PrimitiveArrayData};
///
/// let array = PrimitiveArrayData::from_slice(vec![10i64, 20]);
/// let getter = ElementGetter::new(ElementType::Long);
/// let element = getter.get(&array, 1).unwrap().unwrap();
/// assert_eq!(element.get::<i64>(), Some(20));
/// assert!(getter.get(&array, 2).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementGetter {
    element_type: ElementType,
}

impl ElementGetter {
    pub fn new(element_type: ElementType) -> ElementGetter {
        ElementGetter { element_type }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns the element at `pos`, or `None` if it is null or out of range.
    ///
    /// # Errors
    ///
    /// Returns a contract violation if the element is present but is not of
    /// this getter's element type.
    pub fn get(&self, array: &dyn ArrayData, pos: usize) -> Result<Option<Element>> {
        if array.is_null_at(pos) {
            return Ok(None);
        }
        let element: Element = match self.element_type {
            ElementType::Boolean => array.get_boolean(pos)?.into(),
            ElementType::Byte => array.get_byte(pos)?.into(),
            ElementType::Short => array.get_short(pos)?.into(),
            ElementType::Int => array.get_int(pos)?.into(),
            ElementType::Long => array.get_long(pos)?.into(),
            ElementType::Float => array.get_float(pos)?.into(),
            ElementType::Double => array.get_double(pos)?.into(),
            ElementType::String => array.get_string(pos)?.into(),
            ElementType::Decimal { precision, scale } => {
                array.get_decimal(pos, precision, scale)?.into()
            }
            ElementType::Timestamp { precision } => array.get_timestamp(pos, precision)?.into(),
            ElementType::Binary => array.get_binary(pos)?.into(),
            ElementType::RawValue => array.get_raw_value(pos)?.into(),
            ElementType::Array => array.get_array(pos)?.into(),
            ElementType::Map => array.get_map(pos)?.into(),
            ElementType::Row { num_fields } => array.get_row(pos, num_fields)?.into(),
        };
        Ok(Some(element))
    }

    /// Reads every position of `array` in ascending order.
    ///
    /// The result can be wrapped in a [`ShadowArrayData`](crate::ShadowArrayData)
    /// to move an array value into the boxed representation.
    pub fn collect(&self, array: &dyn ArrayData) -> Result<Vec<Option<Element>>> {
        crate::array_data::collect_positions(array.size(), |pos| self.get(array, pos))
    }
}
