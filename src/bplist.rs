use std::collections::BTreeMap;
use std::io::Cursor;
use std::time::SystemTime;

use plist::Value;

use crate::error::BoxError;
use crate::metadata::{Metadata, PropertyList};

/// The bundled [`PropertyList`] bridge, backed by the `plist` crate.
///
/// Decoding accepts binary and XML property lists; encoding always writes the
/// binary format. Values [`Metadata`] has no variant for (UIDs and unsigned
/// integers above `i64::MAX`) fail to decode, and [`Metadata::Null`] fails to
/// encode.
///
/// This type is only available when the `plist` feature is enabled.
///
/// # Example
///
/// ```rust
/// use binarycookies::{BinaryPlist, Metadata, PropertyList};
///
/// let mut metadata = Metadata::default();
/// metadata.insert("NSHTTPCookieAcceptPolicy", 2);
///
/// let bytes = BinaryPlist.encode(&metadata).unwrap();
/// assert!(bytes.starts_with(b"bplist00"));
/// assert_eq!(BinaryPlist.decode(&bytes).unwrap(), metadata);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryPlist;

#[derive(Debug, thiserror::Error)]
#[error("{0} cannot be represented")]
struct Unsupported(&'static str);

impl PropertyList for BinaryPlist {
    fn decode(&self, bytes: &[u8]) -> Result<Metadata, BoxError> {
        from_value(Value::from_reader(Cursor::new(bytes))?)
    }

    fn encode(&self, metadata: &Metadata) -> Result<Vec<u8>, BoxError> {
        let mut bytes = Vec::new();
        to_value(metadata)?.to_writer_binary(&mut bytes)?;
        Ok(bytes)
    }
}

fn from_value(value: Value) -> Result<Metadata, BoxError> {
    Ok(match value {
        Value::Dictionary(dict) => {
            let mut map = BTreeMap::new();
            for (key, value) in dict {
                map.insert(key, from_value(value)?);
            }

            Metadata::Dictionary(map)
        }
        Value::Array(items) => {
            Metadata::Array(items.into_iter().map(from_value).collect::<Result<_, _>>()?)
        }
        Value::String(string) => Metadata::String(string),
        Value::Integer(int) => match int.as_signed() {
            Some(int) => Metadata::Integer(int),
            None => return Err(Unsupported("unsigned integer above i64::MAX").into()),
        },
        Value::Real(real) => Metadata::Real(real),
        Value::Date(date) => Metadata::Date(SystemTime::from(date).into()),
        Value::Data(data) => Metadata::Data(data),
        Value::Boolean(boolean) => Metadata::Boolean(boolean),
        Value::Uid(_) => return Err(Unsupported("UID").into()),
        _ => return Err(Unsupported("unknown property list value").into()),
    })
}

fn to_value(metadata: &Metadata) -> Result<Value, BoxError> {
    Ok(match metadata {
        Metadata::Dictionary(map) => {
            let mut dict = plist::Dictionary::new();
            for (key, value) in map {
                dict.insert(key.clone(), to_value(value)?);
            }

            Value::Dictionary(dict)
        }
        Metadata::Array(items) => {
            Value::Array(items.iter().map(to_value).collect::<Result<_, _>>()?)
        }
        Metadata::String(string) => Value::String(string.clone()),
        Metadata::Integer(int) => Value::Integer((*int).into()),
        Metadata::Real(real) => Value::Real(*real),
        Metadata::Date(date) => Value::Date(SystemTime::from(*date).into()),
        Metadata::Data(data) => Value::Data(data.clone()),
        Metadata::Boolean(boolean) => Value::Boolean(*boolean),
        Metadata::Null => return Err(Unsupported("null").into()),
    })
}
