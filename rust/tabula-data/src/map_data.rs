//! Map values, as consumed by the array contract.

use std::{any::Any, fmt::Debug, sync::Arc};

use tabula_common::{Result, verify_arg};

use crate::ArrayRef;

/// A shared, type-erased map value.
pub type MapRef = Arc<dyn MapData>;

/// A map value: two arrays of equal size holding the keys and the values.
///
/// The entry at position `i` is `(key_array()[i], value_array()[i])`.
pub trait MapData: Debug + Send + Sync + 'static {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);

    /// Returns the number of entries.
    fn size(&self) -> usize;

    fn key_array(&self) -> ArrayRef;

    fn value_array(&self) -> ArrayRef;
}

/// A map over two existing array values.
#[derive(Debug, Clone)]
pub struct GenericMapData {
    keys: ArrayRef,
    values: ArrayRef,
}

impl GenericMapData {
    /// # Errors
    ///
    /// Returns an error if `keys` and `values` differ in size.
    pub fn try_new(keys: ArrayRef, values: ArrayRef) -> Result<GenericMapData> {
        verify_arg!(values, keys.size() == values.size());
        log::trace!("map over {} entries", keys.size());
        Ok(GenericMapData { keys, values })
    }

    pub fn into_map_ref(self) -> MapRef {
        Arc::new(self)
    }
}

impl MapData for GenericMapData {
    fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
        self
    }

    fn size(&self) -> usize {
        self.keys.size()
    }

    fn key_array(&self) -> ArrayRef {
        self.keys.clone()
    }

    fn value_array(&self) -> ArrayRef {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{Element, ShadowArrayData};

    use super::*;

    #[test]
    fn test_generic_map() {
        let keys = ShadowArrayData::from(vec![Some(Element::from("a")), Some(Element::from("b"))])
            .into_array_ref();
        let values = ShadowArrayData::from(vec![Some(Element::Int(1)), None]).into_array_ref();
        let map = GenericMapData::try_new(keys.clone(), values.clone()).unwrap();
        assert_eq!(map.size(), 2);
        assert!(Arc::ptr_eq(&map.key_array(), &keys));
        assert_eq!(map.key_array().get_string(1).unwrap().as_str(), "b");
        assert_eq!(map.value_array().get_int(0).unwrap(), 1);
        assert!(map.value_array().is_null_at(1));
    }

    #[test]
    fn test_mismatched_sizes() {
        let keys = ShadowArrayData::from(vec![Some(Element::Int(1))]).into_array_ref();
        let values = ShadowArrayData::from(Vec::new()).into_array_ref();
        assert!(GenericMapData::try_new(keys, values).is_err());
    }
}
