//! Typed array values for the Tabula tabular data model.
//!
//! An array value is a single array-typed column value. It may be nested inside
//! rows, maps and other arrays, and it may be physically stored in different
//! ways. This crate defines the contract every array representation satisfies,
//! so that operators, serializers and comparators can read any array value
//! without knowing how it is stored.
//!
//! # Main Components
//!
//! - [`ArrayData`]: the positional access contract. It answers size and
//!   null-at-position queries, returns typed elements, and converts the whole
//!   array into a primitive `Vec`.
//! - [`ShadowArrayData`]: an adapter over an externally produced, shared
//!   sequence of already-boxed [`Element`]s. It never copies or re-encodes the
//!   sequence.
//! - [`PrimitiveArrayData`]: a non-null array backed by a single primitive
//!   slice.
//! - [`ElementGetter`]: reads nullable elements of a given [`ElementType`] out
//!   of any array.
//! - Value boxes returned by typed accessors: [`StringData`], [`BinaryData`],
//!   [`DecimalData`], [`TimestampData`], [`RawValueData`], and the nested
//!   [`ArrayRef`], [`MapRef`] and [`RowRef`] containers.
//!
//! # Errors
//!
//! Using a typed accessor on a position that is out of range, null, or holds an
//! element of a different kind is a contract violation. It is reported as an
//! error (see [`tabula_common::error::Error::is_contract_violation`]) and is
//! never replaced by a default value. The only query that tolerates such
//! positions is [`ArrayData::is_null_at`].

pub mod array_data;
pub mod binary_data;
pub mod decimal_data;
pub mod element;
pub mod element_getter;
pub mod map_data;
pub mod primitive_array;
pub mod raw_value_data;
pub mod row_data;
pub mod shadow_array;
pub mod string_data;
pub mod timestamp_data;


pub use array_data::{ArrayData, ArrayRef};
pub use binary_data::BinaryData;
pub use decimal_data::DecimalData;
pub use element::{Element, ElementKind, ElementType, ElementValue};
pub use element_getter::ElementGetter;
pub use map_data::{GenericMapData, MapData, MapRef};
pub use primitive_array::{PrimitiveArrayData, PrimitiveElement, PrimitiveValues};
pub use raw_value_data::RawValueData;
pub use row_data::{GenericRowData, RowData, RowRef};
pub use shadow_array::ShadowArrayData;
pub use string_data::StringData;
pub use timestamp_data::TimestampData;
