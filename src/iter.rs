use std::slice;

use crate::{Cookie, Page};

/// Iterator over every cookie of a [`CookieFile`](crate::CookieFile), page by
/// page, in file order.
///
/// Returned by [`CookieFile::cookies()`](crate::CookieFile::cookies()).
#[derive(Debug, Clone)]
pub struct Cookies<'a> {
    pub(crate) pages: slice::Iter<'a, Page>,
    pub(crate) current: slice::Iter<'a, Cookie>,
}

impl<'a> Cookies<'a> {
    pub(crate) fn new(pages: &'a [Page]) -> Self {
        let none: &'a [Cookie] = &[];
        Cookies { pages: pages.iter(), current: none.iter() }
    }
}

impl<'a> Iterator for Cookies<'a> {
    type Item = &'a Cookie;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cookie) = self.current.next() {
                return Some(cookie);
            }

            self.current = self.pages.next()?.cookies().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest: usize = self.pages.clone().map(Page::len).sum();
        let len = self.current.len() + rest;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Cookies<'_> {}

impl std::iter::FusedIterator for Cookies<'_> {}

#[cfg(test)]
mod test {
    use super::Cookies;
    use crate::{Cookie, Page};

    #[test]
    fn test_iter() {
        let pages = vec![
            Page::new(),
            vec![Cookie::new("a", "1", "/", ""), Cookie::new("a", "2", "/", "")].into(),
            Page::new(),
            vec![Cookie::new("b", "3", "/", "")].into(),
        ];

        let mut cookies = Cookies::new(&pages);
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies.next().map(Cookie::name), Some("1"));
        assert_eq!(cookies.len(), 2);

        let names: Vec<_> = cookies.map(Cookie::name).collect();
        assert_eq!(names, ["2", "3"]);
        assert_eq!(Cookies::new(&[]).next(), None);
    }
}
