//! Shared binary values.

use std::{fmt, ops::Deref, sync::Arc};

/// An immutable byte string value.
///
/// Like [`StringData`](crate::StringData), clones share the same allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BinaryData(Arc<[u8]>);

impl BinaryData {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns `true` if both values point to the same allocation.
    #[inline]
    pub fn ptr_eq(this: &BinaryData, other: &BinaryData) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl Deref for BinaryData {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for BinaryData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for BinaryData {
    fn from(value: &[u8]) -> Self {
        BinaryData(value.into())
    }
}

impl From<Vec<u8>> for BinaryData {
    fn from(value: Vec<u8>) -> Self {
        BinaryData(value.into())
    }
}

impl From<Arc<[u8]>> for BinaryData {
    fn from(value: Arc<[u8]>) -> Self {
        BinaryData(value)
    }
}

impl fmt::Debug for BinaryData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryData(")?;
        for b in self.0.iter() {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryData;

    #[test]
    fn test_binary_data() {
        let b = BinaryData::from(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(b.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(b.len(), 4);
        assert_eq!(format!("{b:?}"), "BinaryData(deadbeef)");
        assert!(BinaryData::ptr_eq(&b, &b.clone()));
    }

    #[test]
    fn test_empty_binary_data() {
        let b = BinaryData::from(Vec::<u8>::new());
        assert!(b.is_empty());
        assert_eq!(format!("{b:?}"), "BinaryData()");
    }
}
