//! Type guard for the raw `Cookie` header value.

use std::borrow::Cow;

/// A value that may hold the text of a `Cookie` header.
///
/// Returns `None` when the value is absent or is not UTF-8 text, in which
/// case [parse](crate::parse) fails with [Error::InvalidArgument](crate::Error::InvalidArgument)
/// before looking at a single byte.
///
/// Byte inputs are checked with `simdutf8`, so a header taken straight from a
/// request buffer can be passed without a prior `from_utf8`.
///
/// # Examples
/// ```
/// use maker_cookie::CookieInput;
///
/// assert_eq!("a=1".as_cookie_str(), Some("a=1"));
/// assert_eq!(b"a=1".as_cookie_str(), Some("a=1"));
/// assert_eq!(b"a=\xFF".as_cookie_str(), None);
/// assert_eq!(None::<&str>.as_cookie_str(), None);
/// ```
pub trait CookieInput {
    /// Returns the input as text, or `None` if it is absent or not text.
    fn as_cookie_str(&self) -> Option<&str>;
}

impl CookieInput for str {
    #[inline(always)]
    fn as_cookie_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl CookieInput for String {
    #[inline(always)]
    fn as_cookie_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CookieInput for Cow<'_, str> {
    #[inline(always)]
    fn as_cookie_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl CookieInput for [u8] {
    #[inline]
    fn as_cookie_str(&self) -> Option<&str> {
        simdutf8::basic::from_utf8(self).ok()
    }
}

impl<const N: usize> CookieInput for [u8; N] {
    #[inline]
    fn as_cookie_str(&self) -> Option<&str> {
        self.as_slice().as_cookie_str()
    }
}

impl CookieInput for Vec<u8> {
    #[inline]
    fn as_cookie_str(&self) -> Option<&str> {
        self.as_slice().as_cookie_str()
    }
}

impl<T: CookieInput + ?Sized> CookieInput for &T {
    #[inline(always)]
    fn as_cookie_str(&self) -> Option<&str> {
        (**self).as_cookie_str()
    }
}

impl<T: CookieInput> CookieInput for Option<T> {
    #[inline]
    fn as_cookie_str(&self) -> Option<&str> {
        self.as_ref()?.as_cookie_str()
    }
}
