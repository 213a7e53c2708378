use std::borrow::{Borrow, BorrowMut};

use crate::{AbsoluteTime, Cookie, Flags};

/// Structure that follows the builder pattern for building `Cookie` structs.
///
/// To construct a cookie:
///
///   1. Call [`Cookie::build()`] to start building.
///   2. Use any of the builder methods to set fields in the cookie.
///
/// The resulting `CookieBuilder` can be passed directly into methods expecting
/// a `T: Into<Cookie>`:
///
/// ```rust
/// use binarycookies::{Cookie, Page};
///
/// let mut page = Page::new();
/// page.push(Cookie::build(".rust-lang.org", "key", "/", "value").secure(true));
/// assert_eq!(page.len(), 1);
/// ```
///
/// You can also call [`CookieBuilder::build()`] directly to get a `Cookie`:
///
/// ```rust
/// use binarycookies::Cookie;
/// use binarycookies::time::{Duration, OffsetDateTime};
///
/// let now = OffsetDateTime::now_utc();
/// let cookie: Cookie = Cookie::build("www.rust-lang.org", "name", "/", "value")
///     .secure(true)
///     .http_only(true)
///     .creation(now)
///     .expiration(now + Duration::days(1))
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CookieBuilder {
    /// The cookie being built.
    cookie: Cookie,
}

impl CookieBuilder {
    /// Creates a new `CookieBuilder` instance from the four required strings.
    ///
    /// This method is typically called indirectly via [`Cookie::build()`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// // These two snippets are equivalent:
    ///
    /// let c = Cookie::build("example.com", "foo", "/", "bar");
    /// assert_eq!(c.inner().name(), "foo");
    ///
    /// let c = Cookie::new("example.com", "foo", "/", "bar");
    /// assert_eq!(c.name(), "foo");
    /// ```
    pub fn new<U, N, P, V>(url: U, name: N, path: P, value: V) -> Self
        where U: Into<String>, N: Into<String>, P: Into<String>, V: Into<String>
    {
        CookieBuilder { cookie: Cookie::new(url, name, path, value) }
    }

    /// Sets the record's format revision.
    #[inline]
    pub fn version(mut self, version: i32) -> Self {
        self.cookie.set_version(version);
        self
    }

    /// Replaces the whole flag word, unknown bits included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::{Cookie, Flags};
    ///
    /// let c = Cookie::build("example.com", "foo", "/", "bar")
    ///     .flags(Flags::SECURE | Flags::UNKNOWN_2);
    /// assert!(c.inner().is_secure());
    /// ```
    #[inline]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.cookie.set_flags(flags);
        self
    }

    /// Sets the `Secure` flag in the cookie being built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::build("example.com", "foo", "/", "bar").secure(true);
    /// assert!(c.inner().is_secure());
    /// ```
    #[inline]
    pub fn secure(mut self, value: bool) -> Self {
        self.cookie.set_secure(value);
        self
    }

    /// Sets the `HttpOnly` flag in the cookie being built.
    #[inline]
    pub fn http_only(mut self, value: bool) -> Self {
        self.cookie.set_http_only(value);
        self
    }

    /// Restricts the cookie being built to `port`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::build("example.com", "foo", "/", "bar").port(8080);
    /// assert_eq!(c.inner().port(), Some(8080));
    /// ```
    #[inline]
    pub fn port(mut self, port: u16) -> Self {
        self.cookie.set_port(port);
        self
    }

    /// Sets the comment of the cookie being built.
    #[inline]
    pub fn comment<C: Into<String>>(mut self, comment: C) -> Self {
        self.cookie.set_comment(comment.into());
        self
    }

    /// Sets the comment URL of the cookie being built.
    #[inline]
    pub fn comment_url<C: Into<String>>(mut self, comment_url: C) -> Self {
        self.cookie.set_comment_url(comment_url.into());
        self
    }

    /// Sets the expiration date of the cookie being built.
    ///
    /// Accepts an [`AbsoluteTime`], raw seconds since the reference date, or
    /// an `OffsetDateTime`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let c = Cookie::build("example.com", "foo", "/", "bar").expiration(3600.0);
    /// assert_eq!(c.inner().expiration().as_secs(), 3600.0);
    /// ```
    #[inline]
    pub fn expiration<T: Into<AbsoluteTime>>(mut self, when: T) -> Self {
        self.cookie.set_expiration(when);
        self
    }

    /// Sets the creation date of the cookie being built.
    #[inline]
    pub fn creation<T: Into<AbsoluteTime>>(mut self, when: T) -> Self {
        self.cookie.set_creation(when);
        self
    }

    /// Returns a borrow to the cookie currently being built.
    #[inline]
    pub fn inner(&self) -> &Cookie {
        &self.cookie
    }

    /// Returns a mutable borrow to the cookie currently being built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binarycookies::Cookie;
    ///
    /// let mut builder = Cookie::build("example.com", "foo", "/", "bar").secure(true);
    /// builder.inner_mut().set_secure(false);
    /// assert!(!builder.inner().is_secure());
    /// ```
    #[inline]
    pub fn inner_mut(&mut self) -> &mut Cookie {
        &mut self.cookie
    }

    /// Finishes building and returns the built `Cookie`.
    #[inline]
    pub fn build(self) -> Cookie {
        self.cookie
    }
}

impl Borrow<Cookie> for CookieBuilder {
    fn borrow(&self) -> &Cookie {
        &self.cookie
    }
}

impl BorrowMut<Cookie> for CookieBuilder {
    fn borrow_mut(&mut self) -> &mut Cookie {
        &mut self.cookie
    }
}

impl AsRef<Cookie> for CookieBuilder {
    fn as_ref(&self) -> &Cookie {
        &self.cookie
    }
}

impl AsMut<Cookie> for CookieBuilder {
    fn as_mut(&mut self) -> &mut Cookie {
        &mut self.cookie
    }
}

impl PartialEq<Cookie> for CookieBuilder {
    fn eq(&self, other: &Cookie) -> bool {
        &self.cookie == other
    }
}

impl PartialEq<CookieBuilder> for Cookie {
    fn eq(&self, other: &CookieBuilder) -> bool {
        self == &other.cookie
    }
}

impl From<Cookie> for CookieBuilder {
    fn from(cookie: Cookie) -> Self {
        CookieBuilder { cookie }
    }
}

impl From<CookieBuilder> for Cookie {
    #[inline]
    fn from(builder: CookieBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AbsoluteTime, Cookie, Flags};

    #[test]
    fn builder_sets_every_field() {
        let cookie = Cookie::build("example.com", "n", "/p", "v")
            .version(2)
            .flags(Flags::UNKNOWN_1)
            .secure(true)
            .http_only(true)
            .port(8080)
            .comment("c")
            .comment_url("https://example.com/c")
            .expiration(10.0)
            .creation(AbsoluteTime::from_secs(5.0))
            .build();

        assert_eq!(cookie.version(), 2);
        assert_eq!(cookie.flags(), Flags::UNKNOWN_1 | Flags::SECURE | Flags::HTTP_ONLY);
        assert_eq!(cookie.port(), Some(8080));
        assert_eq!(cookie.comment(), Some("c"));
        assert_eq!(cookie.comment_url(), Some("https://example.com/c"));
        assert_eq!(cookie.expiration().as_secs(), 10.0);
        assert_eq!(cookie.creation().as_secs(), 5.0);
    }

    #[test]
    fn builder_conversions() {
        let builder = Cookie::build("example.com", "n", "/", "v").secure(true);
        let cookie: Cookie = builder.clone().into();
        assert_eq!(builder, cookie);
        assert_eq!(cookie, builder);
        assert_eq!(builder.inner(), &cookie);
    }
}
