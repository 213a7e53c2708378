use time::OffsetDateTime;

use crate::builder::CookieBuilder;
use crate::cursor::{u32_len, Reader, Writer};
use crate::error::{Error, Result};
use crate::{AbsoluteTime, Flags, Options, Schema};

/// Size, version, flags, has-port, six offsets and two dates.
pub(crate) const FIXED_HEADER_LEN: usize = 56;

const PORT_LEN: usize = 2;

/// The string fields of a record, in the order their offsets are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Url,
    Name,
    Path,
    Value,
    Comment,
    CommentUrl,
}

impl Field {
    /// The order the encoder lays the strings out in. Offsets that tie are
    /// resolved in this order, which makes empty strings decode as empty.
    const LAYOUT: [Field; 6] = [
        Field::Comment,
        Field::CommentUrl,
        Field::Url,
        Field::Name,
        Field::Path,
        Field::Value,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    fn is_optional(self) -> bool {
        matches!(self, Field::Comment | Field::CommentUrl)
    }
}

/// One cookie record of a binarycookies file.
///
/// Build one with [`Cookie::new()`] or [`Cookie::build()`], or get one out of
/// a decoded [`CookieFile`](crate::CookieFile).
///
/// # Example
///
/// ```rust
/// use binarycookies::Cookie;
///
/// let cookie = Cookie::build(".example.com", "session", "/", "abc")
///     .secure(true)
///     .port(8443)
///     .build();
///
/// let bytes = cookie.encode().unwrap();
/// assert_eq!(bytes.len(), cookie.encoded_len());
/// assert_eq!(Cookie::decode(&bytes).unwrap(), cookie);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cookie {
    pub(crate) version: i32,
    pub(crate) flags: Flags,
    pub(crate) port: Option<u16>,
    pub(crate) url: String,
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) value: String,
    pub(crate) comment: Option<String>,
    pub(crate) comment_url: Option<String>,
    pub(crate) expiration: AbsoluteTime,
    pub(crate) creation: AbsoluteTime,
}

impl Cookie {
    /// Creates a cookie with the four required strings. Every other field is
    /// zero, empty, or absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::new("example.com", "name", "/", "value");
    /// assert_eq!(c.name(), "name");
    /// assert_eq!(c.port(), None);
    /// assert!(!c.is_secure());
    /// ```
    pub fn new<U, N, P, V>(url: U, name: N, path: P, value: V) -> Cookie
        where U: Into<String>, N: Into<String>, P: Into<String>, V: Into<String>
    {
        Cookie {
            version: 0,
            flags: Flags::empty(),
            port: None,
            url: url.into(),
            name: name.into(),
            path: path.into(),
            value: value.into(),
            comment: None,
            comment_url: None,
            expiration: AbsoluteTime::ZERO,
            creation: AbsoluteTime::ZERO,
        }
    }

    /// Starts building a cookie with the four required strings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::build("example.com", "name", "/", "value")
    ///     .http_only(true)
    ///     .build();
    ///
    /// assert!(c.is_http_only());
    /// ```
    #[inline]
    pub fn build<U, N, P, V>(url: U, name: N, path: P, value: V) -> CookieBuilder
        where U: Into<String>, N: Into<String>, P: Into<String>, V: Into<String>
    {
        CookieBuilder::new(url, name, path, value)
    }

    /// Decodes one self-sized cookie record from the start of `bytes`.
    ///
    /// Bytes past the record's declared size are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Cookie> {
        Cookie::decode_with(bytes, &Options::default())
    }

    /// Like [`Cookie::decode()`], with explicit [`Options`].
    pub fn decode_with(bytes: &[u8], options: &Options) -> Result<Cookie> {
        Cookie::read_record(&mut Reader::new(bytes), options)
    }

    /// Encodes `self` into a new buffer of [`encoded_len()`] bytes.
    ///
    /// [`encoded_len()`]: Cookie::encoded_len()
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(self.encoded_len());
        self.write_to(&mut writer)?;
        Ok(writer.into_inner())
    }

    /// The number of bytes [`encode()`](Cookie::encode()) produces.
    pub fn encoded_len(&self) -> usize {
        self.header_len()
            + self.comment.as_ref().map_or(0, String::len)
            + self.comment_url.as_ref().map_or(0, String::len)
            + self.url.len()
            + self.name.len()
            + self.path.len()
            + self.value.len()
    }

    fn header_len(&self) -> usize {
        FIXED_HEADER_LEN + if self.port.is_some() { PORT_LEN } else { 0 }
    }

    /// Bounds a window by the record's leading size field, then decodes the
    /// record inside it.
    pub(crate) fn read_record(reader: &mut Reader<'_>, options: &Options) -> Result<Cookie> {
        let size = reader.peek_u32_le()? as usize;
        let mut window = reader.nested(size)?;
        Cookie::read_from(&mut window, options)
    }

    fn read_from(reader: &mut Reader<'_>, options: &Options) -> Result<Cookie> {
        let size = reader.u32_le()? as usize;
        if size < FIXED_HEADER_LEN {
            return Err(Error::MalformedOffsetTable("record size is smaller than its header"));
        }

        let version = reader.i32_le()?;
        let flags = Flags::from_bits_retain(reader.u32_le()?);
        let has_port = reader.u32_le()?;

        let mut offsets = [0u32; 6];
        for offset in offsets.iter_mut() {
            *offset = reader.u32_le()?;
        }

        if options.schema == Schema::Legacy {
            let footer = u64::from(offsets[4]) | u64::from(offsets[5]) << 32;
            if footer != 0 {
                return Err(Error::InvalidFooter { expected: 0, found: footer });
            }
        }

        let expiration = AbsoluteTime::from_secs(reader.f64_le()?);
        let creation = AbsoluteTime::from_secs(reader.f64_le()?);
        let port = match has_port {
            0 => None,
            _ => Some(reader.u16_le()?),
        };

        let header_end = reader.position();
        let mut table = Vec::with_capacity(Field::LAYOUT.len());
        for &field in Field::LAYOUT.iter() {
            let offset = offsets[field.slot()] as usize;
            if offset != 0 {
                table.push((offset, field));
            } else if !field.is_optional() {
                return Err(Error::MalformedOffsetTable("required field has a zero offset"));
            }
        }

        // Stable, so tied offsets keep their layout order.
        table.sort_by_key(|&(offset, _)| offset);

        match (table.first(), table.last()) {
            (Some(&(first, _)), _) if first != header_end => {
                return Err(Error::MalformedOffsetTable("strings do not start right after the header"));
            }
            (_, Some(&(last, _))) if last > size => {
                return Err(Error::MalformedOffsetTable("field offset lies past the record's end"));
            }
            _ => {}
        }

        let mut strings: [Option<String>; 6] = Default::default();
        for (i, &(offset, field)) in table.iter().enumerate() {
            let end = table.get(i + 1).map_or(size, |&(next, _)| next);
            let bytes = reader.read(end - offset)?;
            strings[field.slot()] = Some(decode_str(bytes, options)?);
        }

        let [url, name, path, value, comment, comment_url] = strings;
        let cookie = Cookie {
            version,
            flags,
            port,
            url: url.unwrap_or_default(),
            name: name.unwrap_or_default(),
            path: path.unwrap_or_default(),
            value: value.unwrap_or_default(),
            comment,
            comment_url,
            expiration,
            creation,
        };

        tracing::trace!(url = %cookie.url, name = %cookie.name, size, "decoded cookie");
        Ok(cookie)
    }

    pub(crate) fn write_to(&self, writer: &mut Writer) -> Result<()> {
        let size = u32_len(self.encoded_len(), "cookie record")?;

        // Every offset is below `size`, so none of these can overflow.
        let len = |s: &str| s.len() as u32;
        let comment_offset = self.header_len() as u32;
        let comment_url_offset = comment_offset + self.comment.as_deref().map_or(0, len);
        let url_offset = comment_url_offset + self.comment_url.as_deref().map_or(0, len);
        let name_offset = url_offset + len(&self.url);
        let path_offset = name_offset + len(&self.name);
        let value_offset = path_offset + len(&self.path);

        writer.u32_le(size);
        writer.i32_le(self.version);
        writer.u32_le(self.flags.bits());
        writer.u32_le(self.port.is_some() as u32);
        writer.u32_le(url_offset);
        writer.u32_le(name_offset);
        writer.u32_le(path_offset);
        writer.u32_le(value_offset);
        writer.u32_le(if self.comment.is_some() { comment_offset } else { 0 });
        writer.u32_le(if self.comment_url.is_some() { comment_url_offset } else { 0 });
        writer.f64_le(self.expiration.as_secs());
        writer.f64_le(self.creation.as_secs());

        if let Some(port) = self.port {
            writer.u16_le(port);
        }

        if let Some(ref comment) = self.comment {
            writer.bytes(comment.as_bytes());
        }

        if let Some(ref comment_url) = self.comment_url {
            writer.bytes(comment_url.as_bytes());
        }

        writer.bytes(self.url.as_bytes());
        writer.bytes(self.name.as_bytes());
        writer.bytes(self.path.as_bytes());
        writer.bytes(self.value.as_bytes());
        Ok(())
    }

    /// The record format revision.
    #[inline]
    pub fn version(&self) -> i32 {
        self.version
    }

    /// The raw flag word, unknown bits included.
    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether the `Secure` flag is set.
    #[inline]
    pub fn is_secure(&self) -> bool {
        self.flags.contains(Flags::SECURE)
    }

    /// Whether the `HttpOnly` flag is set.
    #[inline]
    pub fn is_http_only(&self) -> bool {
        self.flags.contains(Flags::HTTP_ONLY)
    }

    /// The port the cookie is restricted to, if any.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The domain or URL the cookie belongs to.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The cookie's name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::new("example.com", "name", "/", "value");
    /// assert_eq!(c.name(), "name");
    /// ```
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path the cookie is scoped to.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The cookie's value, byte for byte as stored.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The comment, if the record carries one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::new("example.com", "name", "/", "value");
    /// assert_eq!(c.comment(), None);
    ///
    /// let c = Cookie::build("example.com", "name", "/", "value").comment("").build();
    /// assert_eq!(c.comment(), Some(""));
    /// ```
    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The comment URL, if the record carries one.
    #[inline]
    pub fn comment_url(&self) -> Option<&str> {
        self.comment_url.as_deref()
    }

    /// The raw expiration date.
    #[inline]
    pub fn expiration(&self) -> AbsoluteTime {
        self.expiration
    }

    /// The raw creation date.
    #[inline]
    pub fn creation(&self) -> AbsoluteTime {
        self.creation
    }

    /// The expiration date as a UTC date-time, if representable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::{AbsoluteTime, Cookie};
    /// use binarycookies::time::macros::datetime;
    ///
    /// let c = Cookie::build("example.com", "a", "/", "b")
    ///     .expiration(datetime!(2030-01-01 0:00 UTC))
    ///     .build();
    ///
    /// assert_eq!(c.expires(), Some(datetime!(2030-01-01 0:00 UTC)));
    /// ```
    pub fn expires(&self) -> Option<OffsetDateTime> {
        self.expiration.to_datetime()
    }

    /// The creation date as a UTC date-time, if representable.
    pub fn created(&self) -> Option<OffsetDateTime> {
        self.creation.to_datetime()
    }

    /// Sets the record format revision.
    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    /// Replaces the whole flag word.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Sets or clears the `Secure` flag, leaving every other bit alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::{Cookie, Flags};
    ///
    /// let mut c = Cookie::new("example.com", "a", "/", "b");
    /// c.set_flags(Flags::from_bits_retain(1 << 20));
    /// c.set_secure(true);
    /// assert_eq!(c.flags().bits(), 1 << 20 | 1);
    /// ```
    pub fn set_secure(&mut self, value: bool) {
        self.flags.set(Flags::SECURE, value);
    }

    /// Sets or clears the `HttpOnly` flag, leaving every other bit alone.
    pub fn set_http_only(&mut self, value: bool) {
        self.flags.set(Flags::HTTP_ONLY, value);
    }

    /// Sets the port. `None` removes it, shrinking the record by two bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let mut c = Cookie::new("example.com", "a", "/", "b");
    /// let len = c.encoded_len();
    ///
    /// c.set_port(443);
    /// assert_eq!(c.port(), Some(443));
    /// assert_eq!(c.encoded_len(), len + 2);
    ///
    /// c.set_port(None);
    /// assert_eq!(c.encoded_len(), len);
    /// ```
    pub fn set_port<P: Into<Option<u16>>>(&mut self, port: P) {
        self.port = port.into();
    }

    /// Sets the domain or URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let mut c = Cookie::new("example.com", "a", "/", "b");
    /// c.set_url(".apple.com");
    /// assert_eq!(c.url(), ".apple.com");
    /// ```
    pub fn set_url<U: Into<String>>(&mut self, url: U) {
        self.url = url.into();
    }

    /// Sets the name.
    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Sets the path.
    pub fn set_path<P: Into<String>>(&mut self, path: P) {
        self.path = path.into();
    }

    /// Sets the value.
    pub fn set_value<V: Into<String>>(&mut self, value: V) {
        self.value = value.into();
    }

    /// Sets the comment. `None` removes it, which is distinct from an empty
    /// comment.
    pub fn set_comment<C: Into<Option<String>>>(&mut self, comment: C) {
        self.comment = comment.into();
    }

    /// Sets the comment URL. `None` removes it.
    pub fn set_comment_url<C: Into<Option<String>>>(&mut self, comment_url: C) {
        self.comment_url = comment_url.into();
    }

    /// Sets the expiration date from an [`AbsoluteTime`] or an
    /// `OffsetDateTime`.
    pub fn set_expiration<T: Into<AbsoluteTime>>(&mut self, when: T) {
        self.expiration = when.into();
    }

    /// Sets the creation date.
    pub fn set_creation<T: Into<AbsoluteTime>>(&mut self, when: T) {
        self.creation = when.into();
    }
}

fn decode_str(bytes: &[u8], options: &Options) -> Result<String> {
    let string = std::str::from_utf8(bytes)?;
    if options.strip_trailing_nul {
        Ok(string.trim_end_matches('\0').to_owned())
    } else {
        Ok(string.to_owned())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{Cookie, FIXED_HEADER_LEN};
    use crate::{AbsoluteTime, Error, Flags, Options};

    pub const EXPIRATION: f64 = 700_000_000.0;
    pub const CREATION: f64 = 600_000_000.25;

    /// The record for `url="http://example.com" name="a" path="/" value="b"`,
    /// secure, no port, no comment, written out field by field.
    pub fn example_record() -> Vec<u8> {
        let mut bytes = Vec::new();
        let words: [u32; 10] = [77, 0, 1, 0, 56, 74, 75, 76, 0, 0];
        for word in words.iter() {
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        bytes.extend_from_slice(&EXPIRATION.to_le_bytes());
        bytes.extend_from_slice(&CREATION.to_le_bytes());
        bytes.extend_from_slice(b"http://example.com");
        bytes.extend_from_slice(b"a/b");
        assert_eq!(bytes.len(), 77);
        bytes
    }

    pub fn example_cookie() -> Cookie {
        Cookie::build("http://example.com", "a", "/", "b")
            .secure(true)
            .expiration(AbsoluteTime::from_secs(EXPIRATION))
            .creation(AbsoluteTime::from_secs(CREATION))
            .build()
    }

    fn full_cookie() -> Cookie {
        Cookie::build(".apple.com", "dssid2", "/account", "0f1e-2d3c")
            .version(1)
            .flags(Flags::from_bits_retain(0x15 | 1 << 12))
            .port(443)
            .comment("tracking")
            .comment_url("https://apple.com/privacy")
            .expiration(AbsoluteTime::from_secs(EXPIRATION))
            .creation(AbsoluteTime::from_secs(-12.5))
            .build()
    }

    fn set_word(bytes: &mut [u8], index: usize, word: u32) {
        bytes[index * 4..index * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }

    #[test]
    fn decode_example() {
        let cookie = Cookie::decode(&example_record()).unwrap();
        assert_eq!(cookie.url(), "http://example.com");
        assert_eq!(cookie.name(), "a");
        assert_eq!(cookie.path(), "/");
        assert_eq!(cookie.value(), "b");
        assert_eq!(cookie.comment(), None);
        assert_eq!(cookie.comment_url(), None);
        assert_eq!(cookie.port(), None);
        assert!(cookie.is_secure());
        assert!(!cookie.is_http_only());
        assert_eq!(cookie.expiration().as_secs(), EXPIRATION);
        assert_eq!(cookie.creation().as_secs(), CREATION);
        assert_eq!(cookie, example_cookie());
    }

    #[test]
    fn encode_example() {
        let cookie = example_cookie();
        assert_eq!(cookie.encoded_len(), 77);
        assert_eq!(cookie.encode().unwrap(), example_record());
    }

    #[test]
    fn roundtrip() {
        let cookies = vec![
            example_cookie(),
            full_cookie(),
            Cookie::new("", "", "", ""),
            Cookie::build("example.com", "", "/", "").comment("").build(),
            Cookie::build("例え.jp", "名前", "/パス", "値 ✓").comment_url("").port(0).build(),
        ];

        for cookie in cookies {
            let bytes = cookie.encode().unwrap();
            assert_eq!(bytes.len(), cookie.encoded_len());

            let decoded = Cookie::decode(&bytes).unwrap();
            assert_eq!(decoded, cookie);
            assert_eq!(decoded.encoded_len(), bytes.len());
            assert_eq!(decoded.encode().unwrap(), bytes);
        }
    }

    #[test]
    fn full_cookie_layout() {
        let cookie = full_cookie();
        let bytes = cookie.encode().unwrap();
        let header = FIXED_HEADER_LEN + 2;

        assert_eq!(&bytes[56..58], &443u16.to_le_bytes());
        assert_eq!(&bytes[header..header + 8], b"tracking");
        assert_eq!(&bytes[bytes.len() - 9..], b"0f1e-2d3c");
        assert_eq!(Cookie::decode(&bytes).unwrap().flags().bits(), 0x15 | 1 << 12);
    }

    #[test]
    fn any_nonzero_has_port_reads_a_port() {
        let cookie = Cookie::build("example.com", "a", "/", "b").port(8080).build();
        let mut bytes = cookie.encode().unwrap();
        assert_eq!(&bytes[12..16], &1u32.to_le_bytes());
        set_word(&mut bytes, 3, 7);

        let decoded = Cookie::decode(&bytes).unwrap();
        assert_eq!(decoded.port(), Some(8080));
        assert_eq!(decoded.url(), "example.com");
        assert_eq!(decoded.value(), "b");

        let reencoded = decoded.encode().unwrap();
        assert_eq!(&reencoded[12..16], &1u32.to_le_bytes());
        set_word(&mut bytes, 3, 1);
        assert_eq!(reencoded, bytes);
    }

    #[test]
    fn offsets_partition_the_record() {
        for cookie in vec![example_cookie(), full_cookie()] {
            let bytes = cookie.encode().unwrap();
            let word = |i: usize| {
                let mut w = [0u8; 4];
                w.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
                u32::from_le_bytes(w) as usize
            };

            let size = word(0);
            let mut offsets: Vec<usize> = (4..10).map(word).filter(|&o| o != 0).collect();
            offsets.sort();
            offsets.push(size);

            let header = FIXED_HEADER_LEN + if cookie.port().is_some() { 2 } else { 0 };
            assert_eq!(offsets[0], header);
            let covered: usize = offsets.windows(2).map(|w| w[1] - w[0]).sum();
            assert_eq!(header + covered, size);
            assert_eq!(size, bytes.len());
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = example_record();
        bytes.extend_from_slice(b"garbage");
        assert_eq!(Cookie::decode(&bytes).unwrap(), example_cookie());
    }

    #[test]
    fn trailing_nul() {
        let cookie = Cookie::new("example.com\0", "a\0", "/\0", "b\0\0");
        let bytes = cookie.encode().unwrap();

        let literal = Cookie::decode(&bytes).unwrap();
        assert_eq!(literal.url(), "example.com\0");
        assert_eq!(literal.value(), "b\0\0");
        assert_eq!(literal.encode().unwrap(), bytes);

        let mut options = Options::default();
        options.strip_trailing_nul = true;
        let stripped = Cookie::decode_with(&bytes, &options).unwrap();
        assert_eq!(stripped.url(), "example.com");
        assert_eq!(stripped.name(), "a");
        assert_eq!(stripped.path(), "/");
        assert_eq!(stripped.value(), "b");
    }

    #[test]
    fn legacy_schema() {
        let options = Options::legacy();
        let cookie = Cookie::decode_with(&example_record(), &options).unwrap();
        assert_eq!(cookie, example_cookie());

        let bytes = full_cookie().encode().unwrap();
        match Cookie::decode_with(&bytes, &options) {
            Err(Error::InvalidFooter { expected: 0, .. }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn truncated() {
        let bytes = full_cookie().encode().unwrap();
        for len in 0..bytes.len() {
            let error = Cookie::decode(&bytes[..len]).unwrap_err();
            assert!(error.is_truncated(), "{} bytes: {:?}", len, error);
        }

        let mut bytes = example_record();
        set_word(&mut bytes, 0, 200);
        assert!(Cookie::decode(&bytes).unwrap_err().is_truncated());
    }

    #[test]
    fn malformed_offsets() {
        let cases: [(usize, u32); 5] = [
            // url leaves a gap after the header
            (4, 60),
            // name is required
            (5, 0),
            // value past the end
            (7, 78),
            // comment overlaps the header
            (8, 20),
            // record smaller than its header
            (0, 40),
        ];

        for &(index, word) in cases.iter() {
            let mut bytes = example_record();
            set_word(&mut bytes, index, word);
            if index == 0 {
                bytes.truncate(word as usize);
            }

            match Cookie::decode(&bytes) {
                Err(Error::MalformedOffsetTable(_)) => {}
                other => panic!("word {} = {}: {:?}", index, word, other),
            }
        }
    }

    #[test]
    fn invalid_utf8() {
        let mut bytes = example_record();
        bytes[56] = 0xff;
        match Cookie::decode(&bytes) {
            Err(Error::InvalidEncoding(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn setters() {
        let mut cookie = example_cookie();
        cookie.set_secure(false);
        cookie.set_http_only(true);
        cookie.set_port(80);
        cookie.set_comment(Some("note".to_string()));
        cookie.set_value("c");
        assert!(!cookie.is_secure());
        assert!(cookie.is_http_only());
        assert_eq!(cookie.port(), Some(80));
        assert_eq!(cookie.encoded_len(), 77 + 2 + 4);

        cookie.set_port(None);
        cookie.set_comment(None);
        assert_eq!(cookie.encoded_len(), 77);
        assert_eq!(Cookie::decode(&cookie.encode().unwrap()).unwrap(), cookie);
    }
}
