//! Cookie value decoders.
//!
//! Every value pulled out of a `Cookie` header goes through a [Decode]
//! implementation before it is stored. The default, [PercentDecoder], undoes
//! `%XX` escapes and falls back to the raw value when they are malformed.
//!
//! # Examples
//! ```rust
//! use maker_cookie::decode::{Decode, PercentDecoder};
//!
//! assert_eq!(PercentDecoder.decode("a%20b"), "a b");
//! assert_eq!(PercentDecoder.decode("100%"), "100%"); // malformed, kept as is
//!
//! // Any `Fn(&str) -> String` is a decoder
//! let upper = |value: &str| value.to_uppercase();
//! assert_eq!(upper.decode("abc"), "ABC");
//! ```

use log::trace;

/// Turns a raw cookie value into the value stored in the result.
///
/// The decoder must not fail: if the value cannot be decoded, return
/// something sensible (the default returns the input unchanged).
pub trait Decode {
    /// Decodes a single cookie value.
    ///
    /// # Arguments
    /// - `value`: raw value, already trimmed and unquoted
    fn decode(&self, value: &str) -> String;
}

impl<F> Decode for F
where
    F: Fn(&str) -> String,
{
    #[inline(always)]
    fn decode(&self, value: &str) -> String {
        self(value)
    }
}

/// Permissive percent decoder, used when no other decoder is configured.
///
/// - No `%` in the value: returned unchanged.
/// - Valid escapes: decoded with [percent::decode].
/// - Anything [percent::decode] rejects: returned unchanged.
///
/// `+` is left as is, so `Magic+Mouse` stays `Magic+Mouse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentDecoder;

impl Decode for PercentDecoder {
    #[inline]
    fn decode(&self, value: &str) -> String {
        match percent::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                trace!("Keeping raw cookie value {:?}: {}", value, err);
                value.to_owned()
            }
        }
    }
}

/// Strict percent decoding with URI-component semantics.
pub mod percent {
    use crate::errors::DecodeError;
    use memchr::memchr_iter;
    use percent_encoding::percent_decode_str;
    use std::borrow::Cow;

    /// Decodes every `%XX` escape in `value`.
    ///
    /// Hex digits may be upper or lower case. All other characters,
    /// `+` included, are copied through. The decoded bytes must form valid UTF-8.
    ///
    /// Returns a borrowed value when there is nothing to decode.
    ///
    /// # Errors
    /// - [DecodeError::MalformedEscape]: `%` not followed by two hex digits
    /// - [DecodeError::InvalidUtf8]: decoded bytes are not UTF-8
    ///
    /// # Examples
    /// ```
    /// use maker_cookie::{decode::percent, DecodeError};
    ///
    /// assert_eq!(percent::decode("%20%22%2c%3b%2f").unwrap(), " \",;/");
    /// assert_eq!(percent::decode("%D0%BA").unwrap(), "к");
    /// assert_eq!(percent::decode("a+b").unwrap(), "a+b");
    ///
    /// assert_eq!(
    ///     percent::decode("%1"),
    ///     Err(DecodeError::MalformedEscape { position: 0 })
    /// );
    /// assert_eq!(percent::decode("%FF"), Err(DecodeError::InvalidUtf8));
    /// ```
    pub fn decode(value: &str) -> Result<Cow<'_, str>, DecodeError> {
        check_escapes(value.as_bytes())?;

        percent_decode_str(value)
            .decode_utf8()
            .map_err(|_| DecodeError::InvalidUtf8)
    }

    // `percent_decode_str` copies malformed escapes through, reject them first
    #[inline]
    fn check_escapes(src: &[u8]) -> Result<(), DecodeError> {
        for position in memchr_iter(b'%', src) {
            match src.get(position + 1..position + 3) {
                Some(&[high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() => {}
                _ => return Err(DecodeError::MalformedEscape { position }),
            }
        }

        Ok(())
    }
}
