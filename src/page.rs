use crate::cursor::{u32_len, Reader, Writer};
use crate::error::{Error, Result};
use crate::{Cookie, Options};

const HEADER: u32 = 0x0000_0100;
const FOOTER: u32 = 0x0000_0000;

/// Header, cookie count and footer.
const FRAME_LEN: usize = 12;
const OFFSET_LEN: usize = 4;

/// A page: a bounded run of cookie records.
///
/// Apple groups cookies into pages as it writes them, and page order is
/// preserved on both decode and encode.
///
/// # Example
///
/// ```rust
/// use binarycookies::{Cookie, Page};
///
/// let page: Page = vec![
///     Cookie::new("example.com", "a", "/", "1"),
///     Cookie::new("example.com", "b", "/", "2"),
/// ].into_iter().collect();
///
/// let bytes = page.encode().unwrap();
/// assert_eq!(bytes.len(), page.encoded_len());
/// assert_eq!(Page::decode(&bytes).unwrap(), page);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub(crate) cookies: Vec<Cookie>,
}

impl Page {
    /// An empty page.
    pub fn new() -> Page {
        Page::default()
    }

    /// Decodes a page from the start of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Page> {
        Page::decode_with(bytes, &Options::default())
    }

    /// Like [`Page::decode()`], with explicit [`Options`].
    pub fn decode_with(bytes: &[u8], options: &Options) -> Result<Page> {
        Page::read_from(&mut Reader::new(bytes), options)
    }

    /// Encodes `self` into a new buffer of [`encoded_len()`] bytes.
    ///
    /// [`encoded_len()`]: Page::encoded_len()
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(self.encoded_len());
        self.write_to(&mut writer)?;
        Ok(writer.into_inner())
    }

    /// The number of bytes [`encode()`](Page::encode()) produces.
    pub fn encoded_len(&self) -> usize {
        self.cookies_offset() + self.cookies.iter().map(Cookie::encoded_len).sum::<usize>()
    }

    fn cookies_offset(&self) -> usize {
        FRAME_LEN + OFFSET_LEN * self.cookies.len()
    }

    /// The page's integrity value: the sum of every fourth byte of its
    /// encoding. See [`checksum()`].
    pub fn checksum(&self) -> Result<i32> {
        Ok(checksum(&self.encode()?))
    }

    pub(crate) fn read_from(reader: &mut Reader<'_>, options: &Options) -> Result<Page> {
        let header = reader.u32_be()?;
        if header != HEADER {
            return Err(Error::InvalidFooter { expected: HEADER.into(), found: header.into() });
        }

        let count = reader.u32_le()? as usize;

        // The table says where each cookie starts. Cookies are read back to
        // back instead, so it is only compared against, never followed.
        let mut offsets = Vec::with_capacity(count.min(reader.remaining() / OFFSET_LEN));
        for _ in 0..count {
            offsets.push(reader.u32_le()?);
        }

        let footer = reader.u32_be()?;
        if footer != FOOTER {
            return Err(Error::InvalidFooter { expected: FOOTER.into(), found: footer.into() });
        }

        let mut cookies = Vec::with_capacity(count);
        for (i, &recorded) in offsets.iter().enumerate() {
            let position = reader.position();
            if recorded as usize != position {
                tracing::warn!(cookie = i, recorded, position, "cookie offset table disagrees with layout");
            }

            cookies.push(Cookie::read_record(reader, options)?);
        }

        if !reader.is_at_end() {
            tracing::debug!(unread = reader.remaining(), "page has trailing bytes");
        }

        tracing::trace!(cookies = cookies.len(), "decoded page");
        Ok(Page { cookies })
    }

    pub(crate) fn write_to(&self, writer: &mut Writer) -> Result<()> {
        let count = u32_len(self.cookies.len(), "page cookie count")?;
        u32_len(self.encoded_len(), "page")?;

        writer.u32_be(HEADER);
        writer.u32_le(count);

        let mut offset = self.cookies_offset();
        for cookie in &self.cookies {
            writer.u32_le(offset as u32);
            offset += cookie.encoded_len();
        }

        writer.u32_be(FOOTER);
        for cookie in &self.cookies {
            cookie.write_to(writer)?;
        }

        Ok(())
    }

    /// The cookies in this page, in file order.
    #[inline]
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    #[inline]
    pub fn cookies_mut(&mut self) -> &mut Vec<Cookie> {
        &mut self.cookies
    }

    /// Appends a cookie to the end of the page.
    pub fn push<C: Into<Cookie>>(&mut self, cookie: C) {
        self.cookies.push(cookie.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn into_cookies(self) -> Vec<Cookie> {
        self.cookies
    }
}

impl From<Vec<Cookie>> for Page {
    fn from(cookies: Vec<Cookie>) -> Self {
        Page { cookies }
    }
}

impl<C: Into<Cookie>> std::iter::FromIterator<C> for Page {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Page { cookies: iter.into_iter().map(Into::into).collect() }
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Cookie;
    type IntoIter = std::slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}

/// Sums the byte at every fourth index of `bytes`, starting at index 0.
///
/// This is one byte out of every 4-byte stride, not a sum of 4-byte words.
/// Overflow wraps.
///
/// # Example
///
/// ```rust
/// assert_eq!(binarycookies::checksum(&[1, 2, 3, 4, 5, 6]), 1 + 5);
/// assert_eq!(binarycookies::checksum(&[]), 0);
/// ```
pub fn checksum(bytes: &[u8]) -> i32 {
    bytes.iter().step_by(4).fold(0i32, |sum, &byte| sum.wrapping_add(i32::from(byte)))
}
