//! Apple `.binarycookies` decoding and encoding.
//!
//! This crate provides the [`CookieFile`] type, which maps directly to the
//! cookie store Apple platforms persist as `Cookies.binarycookies`, along with
//! the [`Page`] and [`Cookie`] records it is made of. Files decode from bytes
//! and encode back into files of the same shape:
//!
//! ```rust
//! use binarycookies::{Cookie, CookieFile, Page};
//!
//! let mut file = CookieFile::default();
//! file.push_page(vec![
//!     Cookie::build(".example.com", "session", "/", "abc").secure(true).build(),
//! ]);
//!
//! let bytes = file.encode().unwrap();
//! let decoded = CookieFile::decode(&bytes).unwrap();
//! assert_eq!(decoded, file);
//!
//! for cookie in decoded.cookies() {
//!     assert_eq!(cookie.name(), "session");
//! }
//! ```
//!
//! Decoding never seeks: every file, page, and cookie is read front to back
//! inside a window bounded by its declared size. Offset tables stored in the
//! file are treated as untrusted and only used where the record layout needs
//! them.
//!
//! # Usage
//!
//! Add the following to the `[dependencies]` section of your `Cargo.toml`:
//!
//! ```toml
//! binarycookies = "0.1"
//! ```
//!
//! # Features
//!
//! This crate can be configured at compile-time through the following Cargo
//! features:
//!
//! * **plist** (enabled by default)
//!
//!   Enables [`BinaryPlist`], a [`PropertyList`] bridge backed by the `plist`
//!   crate, along with [`CookieFile::decode()`] and [`CookieFile::encode()`],
//!   which use it. Without it, use [`CookieFile::decode_with()`] and
//!   [`CookieFile::encode_with()`] with your own bridge or with [`Opaque`].
//!
//! * **serde** (disabled by default)
//!
//!   Implements `Serialize` and `Deserialize` for the data model.
//!
//! You can enable features via `Cargo.toml`:
//!
//! ```toml
//! [dependencies.binarycookies]
//! features = ["serde"]
//! ```
//!
//! # Logging
//!
//! Decoding emits [`tracing`](https://docs.rs/tracing) events: `debug` per
//! file, `trace` per page and cookie, and `warn` when a page's offset table
//! disagrees with its layout. No subscriber is installed.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

pub use time;

mod builder;
mod cookie;
mod cursor;
mod date;
mod error;
mod flags;
mod iter;
mod metadata;
mod options;
mod page;

#[cfg(feature = "plist")]
#[cfg_attr(docsrs, doc(cfg(feature = "plist")))]
mod bplist;

#[cfg(feature = "serde")]
mod serde_impl;

pub use crate::builder::CookieBuilder;
pub use crate::cookie::Cookie;
pub use crate::date::AbsoluteTime;
pub use crate::error::{BoxError, Error, Result};
pub use crate::flags::Flags;
pub use crate::iter::Cookies;
pub use crate::metadata::{Metadata, Opaque, PropertyList};
pub use crate::options::{Options, Schema};
pub use crate::page::{checksum, Page};

#[cfg(feature = "plist")]
pub use crate::bplist::BinaryPlist;

use crate::cursor::{u32_len, Reader, Writer};

const MAGIC: &[u8; 4] = b"cook";
const FOOTER: u64 = 0x0717_2005_0000_004b;

/// A decoded `.binarycookies` file: pages of cookies plus a trailing property
/// list.
///
/// # Example
///
/// ```rust
/// use binarycookies::{Cookie, CookieFile, Metadata, Opaque, Options};
///
/// let mut file = CookieFile::new(Metadata::Data(vec![]));
/// file.push_page(vec![Cookie::new("example.com", "a", "/", "b")]);
///
/// // `Opaque` keeps the property list as raw bytes.
/// let bytes = file.encode_with(&Opaque).unwrap();
/// assert_eq!(&bytes[..4], b"cook");
///
/// let decoded = CookieFile::decode_with(&bytes, &Options::default(), &Opaque).unwrap();
/// assert_eq!(decoded.cookie_count(), 1);
/// assert_eq!(decoded, file);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct CookieFile {
    pages: Vec<Page>,
    metadata: Metadata,
}

impl CookieFile {
    /// An empty file carrying `metadata`.
    pub fn new(metadata: Metadata) -> CookieFile {
        CookieFile { pages: Vec::new(), metadata }
    }

    /// Decodes a file, parsing its metadata with [`BinaryPlist`].
    ///
    /// This method is only available when the `plist` feature is enabled.
    #[cfg(feature = "plist")]
    #[cfg_attr(docsrs, doc(cfg(feature = "plist")))]
    pub fn decode(bytes: &[u8]) -> Result<CookieFile> {
        CookieFile::decode_with(bytes, &Options::default(), &BinaryPlist)
    }

    /// Encodes `self`, writing its metadata with [`BinaryPlist`].
    ///
    /// This method is only available when the `plist` feature is enabled.
    #[cfg(feature = "plist")]
    #[cfg_attr(docsrs, doc(cfg(feature = "plist")))]
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.encode_with(&BinaryPlist)
    }

    /// Decodes a file with explicit [`Options`], handing the trailing
    /// property list to `plist`.
    ///
    /// Fails on the first error; no partially decoded file is returned.
    pub fn decode_with<P>(bytes: &[u8], options: &Options, plist: &P) -> Result<CookieFile>
        where P: PropertyList + ?Sized
    {
        let mut reader = Reader::new(bytes);

        let mut magic = [0u8; 4];
        magic.copy_from_slice(reader.read(4)?);
        if &magic != MAGIC {
            return Err(Error::InvalidMagic(magic));
        }

        let count = reader.u32_be()? as usize;
        let mut sizes = Vec::with_capacity(count.min(reader.remaining() / 4));
        for _ in 0..count {
            sizes.push(reader.u32_be()? as usize);
        }

        tracing::debug!(pages = count, len = bytes.len(), "decoding binarycookies file");

        let mut pages = Vec::with_capacity(count);
        for size in sizes {
            let mut window = reader.nested(size)?;
            pages.push(Page::read_from(&mut window, options)?);
        }

        // The stored checksum is not verified.
        reader.read(4)?;

        let footer = reader.u64_be()?;
        if footer != FOOTER {
            return Err(Error::InvalidFooter { expected: FOOTER, found: footer });
        }

        let metadata = plist.decode(reader.read_rest()).map_err(Error::PropertyList)?;
        Ok(CookieFile { pages, metadata })
    }

    /// Encodes `self`, writing the metadata with `plist`.
    pub fn encode_with<P>(&self, plist: &P) -> Result<Vec<u8>>
        where P: PropertyList + ?Sized
    {
        let count = u32_len(self.pages.len(), "page table")?;

        let pages = self.pages.iter().map(Page::encode).collect::<Result<Vec<_>>>()?;
        let sum = sum_checksums(pages.iter().map(|page| checksum(page)));

        let metadata = plist.encode(&self.metadata).map_err(Error::PropertyList)?;

        let body: usize = pages.iter().map(Vec::len).sum();
        let len = 8 + 4 * pages.len() + body + 12 + metadata.len();
        let mut writer = Writer::with_capacity(len);
        writer.bytes(MAGIC);
        writer.u32_be(count);
        for page in &pages {
            writer.u32_be(u32_len(page.len(), "page")?);
        }

        for page in &pages {
            writer.bytes(page);
        }

        writer.i32_be(sum);
        writer.u64_be(FOOTER);
        writer.bytes(&metadata);
        debug_assert_eq!(writer.len(), len);
        Ok(writer.into_inner())
    }

    /// The file-level checksum: the wrapping sum of every page's
    /// [`checksum`](Page::checksum()).
    pub fn checksum(&self) -> Result<i32> {
        let sums = self.pages.iter().map(Page::checksum).collect::<Result<Vec<_>>>()?;
        Ok(sum_checksums(sums))
    }

    /// The pages of the file, in file order.
    #[inline]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[inline]
    pub fn pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.pages
    }

    /// Appends a page to the end of the file.
    pub fn push_page<P: Into<Page>>(&mut self, page: P) {
        self.pages.push(page.into());
    }

    /// Iterates over every cookie in every page.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::{Cookie, CookieFile};
    ///
    /// let mut file = CookieFile::default();
    /// file.push_page(vec![Cookie::new("a.com", "1", "/", "")]);
    /// file.push_page(vec![Cookie::new("b.com", "2", "/", "")]);
    ///
    /// let urls: Vec<_> = file.cookies().map(|c| c.url()).collect();
    /// assert_eq!(urls, ["a.com", "b.com"]);
    /// ```
    pub fn cookies(&self) -> Cookies<'_> {
        Cookies::new(&self.pages)
    }

    /// The number of cookies across all pages.
    pub fn cookie_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// The trailing property list.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    /// Splits `self` into its pages and metadata.
    pub fn into_parts(self) -> (Vec<Page>, Metadata) {
        (self.pages, self.metadata)
    }
}

/// Folds per-page checksums into the file checksum. Overflow wraps.
fn sum_checksums<I: IntoIterator<Item = i32>>(sums: I) -> i32 {
    sums.into_iter().fold(0i32, i32::wrapping_add)
}

impl<'a> IntoIterator for &'a CookieFile {
    type Item = &'a Cookie;
    type IntoIter = Cookies<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies()
    }
}
