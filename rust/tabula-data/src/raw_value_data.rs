//! Opaque values of externally defined types.

use std::{any::Any, fmt, sync::Arc};

/// A value of a type that is unknown to the data model.
///
/// The object is shared, not copied, when the value is cloned. Consumers that
/// know the concrete type recover it with [`RawValueData::downcast_ref`].
#[derive(Clone)]
pub struct RawValueData {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl RawValueData {
    pub fn new<T: Any + Send + Sync>(value: T) -> RawValueData {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> RawValueData {
        RawValueData {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Name of the wrapped object's type, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if both values wrap the same object.
    pub fn ptr_eq(this: &RawValueData, other: &RawValueData) -> bool {
        Arc::ptr_eq(&this.value, &other.value)
    }
}

impl fmt::Debug for RawValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValueData")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
