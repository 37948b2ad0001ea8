//! Row values, as consumed by the array contract.

use std::{any::Any, fmt::Debug, sync::Arc};

use crate::Element;

/// A shared, type-erased row value.
pub type RowRef = Arc<dyn RowData>;

/// A row value: a fixed number of nullable fields.
pub trait RowData: Debug + Send + Sync + 'static {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);

    /// Returns the number of fields.
    fn arity(&self) -> usize;

    /// Returns `true` if `pos` is out of range or the field is null.
    fn is_null_at(&self, pos: usize) -> bool;

    /// Returns the field at `pos`, or `None` if it is null or out of range.
    fn field(&self, pos: usize) -> Option<&Element>;
}

/// A row over a shared sequence of boxed fields.
#[derive(Debug, Clone)]
pub struct GenericRowData {
    fields: Arc<[Option<Element>]>,
}

impl GenericRowData {
    pub fn new(fields: impl Into<Arc<[Option<Element>]>>) -> GenericRowData {
        GenericRowData {
            fields: fields.into(),
        }
    }

    pub fn into_row_ref(self) -> RowRef {
        Arc::new(self)
    }
}

impl RowData for GenericRowData {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
        self
    }

    fn arity(&self) -> usize {
        self.fields.len()
    }

    fn is_null_at(&self, pos: usize) -> bool {
        self.field(pos).is_none()
    }

    fn field(&self, pos: usize) -> Option<&Element> {
        self.fields.get(pos).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use crate::StringData;

    use super::*;

    #[test]
    fn test_generic_row() {
        let row = GenericRowData::new(vec![Some(Element::Long(7)), None, Some("x".into())]);
        assert_eq!(row.arity(), 3);
        assert!(!row.is_null_at(0));
        assert!(row.is_null_at(1));
        assert!(row.is_null_at(3));
        assert_eq!(row.field(0).and_then(Element::get::<i64>), Some(7));
        assert_eq!(
            row.field(2).and_then(Element::get::<StringData>).unwrap().as_str(),
            "x"
        );
    }
}
