//! The trailing property list of a binarycookies file.
//!
//! The codec never looks inside the metadata. It hands the bytes after the
//! file footer to a [`PropertyList`] bridge on decode and writes whatever the
//! bridge produces on encode.

use std::collections::BTreeMap;

use time::OffsetDateTime;

use crate::error::BoxError;

/// A property-list value.
///
/// # Example
///
/// ```rust
/// use binarycookies::Metadata;
///
/// let mut metadata = Metadata::default();
/// metadata.insert("NSHTTPCookieAcceptPolicy", 2);
/// assert_eq!(metadata.get("NSHTTPCookieAcceptPolicy"), Some(&Metadata::Integer(2)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metadata {
    /// A string-keyed dictionary, kept in key order.
    Dictionary(BTreeMap<String, Metadata>),
    Array(Vec<Metadata>),
    String(String),
    /// A signed integer. Unsigned values above `i64::MAX` have no
    /// representation.
    Integer(i64),
    Real(f64),
    /// A date, always in UTC once decoded.
    Date(OffsetDateTime),
    /// A raw byte blob.
    Data(#[cfg_attr(feature = "serde", serde(with = "serde_bytes"))] Vec<u8>),
    Boolean(bool),
    /// No value. Property lists cannot store it, so bridges that write real
    /// property lists reject it.
    Null,
}

impl Default for Metadata {
    /// An empty dictionary.
    fn default() -> Self {
        Metadata::Dictionary(BTreeMap::new())
    }
}

impl Metadata {
    /// Looks `key` up if `self` is a dictionary.
    pub fn get(&self, key: &str) -> Option<&Metadata> {
        match self {
            Metadata::Dictionary(dict) => dict.get(key),
            _ => None,
        }
    }

    /// Inserts into `self` if it is a dictionary, returning the previous
    /// value. Does nothing for any other kind of value.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Metadata>
        where K: Into<String>, V: Into<Metadata>
    {
        match self {
            Metadata::Dictionary(dict) => dict.insert(key.into(), value.into()),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&BTreeMap<String, Metadata>> {
        match self {
            Metadata::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Metadata::Data(data) => Some(data),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => ($(
        impl From<$ty> for Metadata {
            fn from(value: $ty) -> Self {
                Metadata::$variant(value.into())
            }
        }
    )*)
}

impl_from! {
    BTreeMap<String, Metadata> => Dictionary,
    Vec<Metadata> => Array,
    String => String,
    &str => String,
    i64 => Integer,
    i32 => Integer,
    f64 => Real,
    OffsetDateTime => Date,
    Vec<u8> => Data,
    bool => Boolean,
}

/// Converts between binary property-list bytes and [`Metadata`].
///
/// [`BinaryPlist`](crate::BinaryPlist) is the bundled implementation.
/// [`Opaque`] keeps the bytes without parsing them.
pub trait PropertyList {
    /// Parses the bytes that follow the file footer. `bytes` may be empty.
    fn decode(&self, bytes: &[u8]) -> Result<Metadata, BoxError>;

    /// Serializes `metadata` into the bytes written after the file footer.
    fn encode(&self, metadata: &Metadata) -> Result<Vec<u8>, BoxError>;
}

impl<P: PropertyList + ?Sized> PropertyList for &P {
    fn decode(&self, bytes: &[u8]) -> Result<Metadata, BoxError> {
        (**self).decode(bytes)
    }

    fn encode(&self, metadata: &Metadata) -> Result<Vec<u8>, BoxError> {
        (**self).encode(metadata)
    }
}

/// A bridge that does not parse: the trailing bytes become
/// [`Metadata::Data`] and are written back verbatim.
///
/// # Example
///
/// ```rust
/// use binarycookies::{Metadata, Opaque, PropertyList};
///
/// let metadata = Opaque.decode(b"bplist00").unwrap();
/// assert_eq!(metadata, Metadata::Data(b"bplist00".to_vec()));
/// assert_eq!(Opaque.encode(&metadata).unwrap(), b"bplist00");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Opaque;

#[derive(Debug, thiserror::Error)]
#[error("the opaque bridge can only encode `Metadata::Data`")]
struct NotData;

impl PropertyList for Opaque {
    fn decode(&self, bytes: &[u8]) -> Result<Metadata, BoxError> {
        Ok(Metadata::Data(bytes.to_vec()))
    }

    fn encode(&self, metadata: &Metadata) -> Result<Vec<u8>, BoxError> {
        metadata.as_data().map(<[u8]>::to_vec).ok_or_else(|| NotData.into())
    }
}
