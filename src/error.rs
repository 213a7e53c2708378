use std::error::Error as StdError;
use std::str::Utf8Error;

/// A boxed error as returned by a [`PropertyList`](crate::PropertyList)
/// bridge.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A `Result` whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way decoding or encoding a binarycookies file can fail.
///
/// All errors are terminal: the file, page, or cookie being processed is
/// abandoned and nothing partially decoded is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A declared field or window needs more bytes than remain.
    #[error("truncated input: needed {needed} bytes, {remaining} remain")]
    TruncatedInput {
        /// Bytes the field or window declared.
        needed: usize,
        /// Bytes left in the enclosing window.
        remaining: usize,
    },

    /// The file does not start with `cook`.
    #[error("invalid magic {0:02x?}, expected \"cook\"")]
    InvalidMagic([u8; 4]),

    /// A file, page, or cookie constant has an unexpected value.
    #[error("invalid constant: expected {expected:#x}, found {found:#x}")]
    InvalidFooter {
        /// The constant the format requires.
        expected: u64,
        /// The value actually read.
        found: u64,
    },

    /// A cookie's string offsets do not partition its record.
    #[error("malformed offset table: {0}")]
    MalformedOffsetTable(&'static str),

    /// A length to be encoded does not fit in a 32-bit size field.
    #[error("{0} is too large for a 32-bit length")]
    TooLarge(&'static str),

    /// A string field is not valid UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidEncoding(#[source] Utf8Error),

    /// The property-list bridge failed to decode or encode the metadata.
    #[error("property list bridge failed: {0}")]
    PropertyList(#[source] BoxError),
}

impl Error {
    /// Returns `true` if `self` is [`Error::TruncatedInput`].
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::TruncatedInput { .. })
    }
}

impl From<Utf8Error> for Error {
    fn from(error: Utf8Error) -> Self {
        Error::InvalidEncoding(error)
    }
}
