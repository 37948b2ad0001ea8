//! Boxed element values and their kinds.
//!
//! An [`Element`] is one non-null value stored at a position of an array, map or
//! row. Null is represented outside of the element, as `Option<Element>::None`.

use std::fmt;

use crate::{
    ArrayRef, BinaryData, DecimalData, MapRef, RawValueData, RowRef, StringData, TimestampData,
};

/// A single boxed value of any supported kind.
#[derive(Debug, Clone)]
pub enum Element {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(StringData),
    Decimal(DecimalData),
    Timestamp(TimestampData),
    Binary(BinaryData),
    RawValue(RawValueData),
    Array(ArrayRef),
    Map(MapRef),
    Row(RowRef),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Boolean(_) => ElementKind::Boolean,
            Element::Byte(_) => ElementKind::Byte,
            Element::Short(_) => ElementKind::Short,
            Element::Int(_) => ElementKind::Int,
            Element::Long(_) => ElementKind::Long,
            Element::Float(_) => ElementKind::Float,
            Element::Double(_) => ElementKind::Double,
            Element::String(_) => ElementKind::String,
            Element::Decimal(_) => ElementKind::Decimal,
            Element::Timestamp(_) => ElementKind::Timestamp,
            Element::Binary(_) => ElementKind::Binary,
            Element::RawValue(_) => ElementKind::RawValue,
            Element::Array(_) => ElementKind::Array,
            Element::Map(_) => ElementKind::Map,
            Element::Row(_) => ElementKind::Row,
        }
    }

    /// Extracts the payload as `T`, or `None` if the element has another kind.
    #[inline]
    pub fn get<T: ElementValue>(&self) -> Option<T> {
        T::from_element(self)
    }
}

/// The kind of an [`Element`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Decimal,
    Timestamp,
    Binary,
    RawValue,
    Array,
    Map,
    Row,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Boolean => "Boolean",
            ElementKind::Byte => "Byte",
            ElementKind::Short => "Short",
            ElementKind::Int => "Int",
            ElementKind::Long => "Long",
            ElementKind::Float => "Float",
            ElementKind::Double => "Double",
            ElementKind::String => "String",
            ElementKind::Decimal => "Decimal",
            ElementKind::Timestamp => "Timestamp",
            ElementKind::Binary => "Binary",
            ElementKind::RawValue => "RawValue",
            ElementKind::Array => "Array",
            ElementKind::Map => "Map",
            ElementKind::Row => "Row",
        }
    }

    /// Returns `true` for the kinds that have a bulk `to_*_array` conversion.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            ElementKind::Boolean
                | ElementKind::Byte
                | ElementKind::Short
                | ElementKind::Int
                | ElementKind::Long
                | ElementKind::Float
                | ElementKind::Double
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element type descriptor, as supplied by the logical type layer.
///
/// Decimal precision/scale, timestamp precision and row field count are
/// advisory: they are forwarded to the typed accessors but never checked
/// against the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Decimal { precision: u8, scale: u8 },
    Timestamp { precision: u8 },
    Binary,
    RawValue,
    Array,
    Map,
    Row { num_fields: usize },
}

impl ElementType {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementType::Boolean => ElementKind::Boolean,
            ElementType::Byte => ElementKind::Byte,
            ElementType::Short => ElementKind::Short,
            ElementType::Int => ElementKind::Int,
            ElementType::Long => ElementKind::Long,
            ElementType::Float => ElementKind::Float,
            ElementType::Double => ElementKind::Double,
            ElementType::String => ElementKind::String,
            ElementType::Decimal { .. } => ElementKind::Decimal,
            ElementType::Timestamp { .. } => ElementKind::Timestamp,
            ElementType::Binary => ElementKind::Binary,
            ElementType::RawValue => ElementKind::RawValue,
            ElementType::Array => ElementKind::Array,
            ElementType::Map => ElementKind::Map,
            ElementType::Row { .. } => ElementKind::Row,
        }
    }
}

/// A Rust type that is the payload of exactly one [`Element`] variant.
///
/// Extraction clones the payload. For the shared value boxes this only bumps a
/// reference count: the extracted value refers to the same allocation as the
/// stored element.
pub trait ElementValue: Sized {
    const KIND: ElementKind;

    fn from_element(element: &Element) -> Option<Self>;

    fn into_element(self) -> Element;
}

macro_rules! impl_element_value {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl ElementValue for $ty {
                const KIND: ElementKind = ElementKind::$variant;

                #[inline]
                fn from_element(element: &Element) -> Option<Self> {
                    match element {
                        Element::$variant(value) => Some(value.clone()),
                        _ => None,
                    }
                }

                #[inline]
                fn into_element(self) -> Element {
                    Element::$variant(self)
                }
            }

            impl From<$ty> for Element {
                fn from(value: $ty) -> Element {
                    Element::$variant(value)
                }
            }
        )*
    };
}

impl_element_value! {
    Boolean => bool,
    Byte => i8,
    Short => i16,
    Int => i32,
    Long => i64,
    Float => f32,
    Double => f64,
    String => StringData,
    Decimal => DecimalData,
    Timestamp => TimestampData,
    Binary => BinaryData,
    RawValue => RawValueData,
    Array => ArrayRef,
    Map => MapRef,
    Row => RowRef,
}

impl From<&str> for Element {
    fn from(value: &str) -> Element {
        Element::String(value.into())
    }
}
