//! Shared UTF-8 string values.

use std::{fmt, ops::Deref, sync::Arc};

/// An immutable UTF-8 string value.
///
/// Clones share the same allocation, so handing a `StringData` out of an array
/// never copies the text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringData(Arc<str>);

impl StringData {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if both values point to the same allocation.
    #[inline]
    pub fn ptr_eq(this: &StringData, other: &StringData) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl Deref for StringData {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StringData {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringData {
    fn from(value: &str) -> Self {
        StringData(value.into())
    }
}

impl From<String> for StringData {
    fn from(value: String) -> Self {
        StringData(value.into())
    }
}

impl From<Arc<str>> for StringData {
    fn from(value: Arc<str>) -> Self {
        StringData(value)
    }
}

impl fmt::Display for StringData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for StringData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
