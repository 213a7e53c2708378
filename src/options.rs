/// The layout of the two offset slots following a cookie's `value` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Schema {
    /// The slots hold the `comment` and `commentURL` offsets, `0` meaning
    /// absent. This is the only layout the encoder writes.
    #[default]
    Canonical,
    /// The slots hold an 8-byte zero footer, as in older, read-only
    /// implementations of the format. Decoding verifies the footer and never
    /// yields a comment.
    Legacy,
}

/// Options controlling how a file is decoded.
///
/// The defaults decode every string byte-for-byte using the canonical schema.
///
/// # Example
///
/// ```rust
/// use binarycookies::{Options, Schema};
///
/// let mut options = Options::default();
/// options.strip_trailing_nul = true;
/// assert_eq!(options.schema, Schema::Canonical);
///
/// assert_eq!(Options::legacy().schema, Schema::Legacy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub struct Options {
    /// Strip trailing NUL bytes from decoded strings.
    ///
    /// Apple's writer terminates every string with a NUL that lies inside the
    /// field's byte range. It is kept by default so that re-encoding
    /// reproduces the original bytes.
    pub strip_trailing_nul: bool,
    /// The record schema to expect.
    pub schema: Schema,
}

impl Options {
    /// Default options with the [`Schema::Legacy`] layout.
    pub fn legacy() -> Self {
        Options { schema: Schema::Legacy, ..Options::default() }
    }
}
