//! Parser configuration
//!
//! # Examples
//!
//! ```
//! use maker_cookie::{options::ParseOptions, parse_with};
//!
//! // Default: permissive percent decoding
//! let cookies = parse_with("a=%3D", &ParseOptions::new()).unwrap();
//! assert_eq!(cookies.get("a"), Some("="));
//!
//! // Keep values exactly as sent
//! let raw = ParseOptions::with_decoder(|value: &str| value.to_owned());
//! let cookies = parse_with("a=%3D", &raw).unwrap();
//! assert_eq!(cookies.get("a"), Some("%3D"));
//! ```

use crate::decode::{Decode, PercentDecoder};

/// Options for [parse_with](crate::parse_with).
///
/// # Value decoding
///
/// Each raw value is trimmed and unquoted first, then passed to `decode`:
///
/// ```text
///  name = "va%20lue"
///         |--------|   trim OWS
///          |------|    strip quotes
///          va%20lue -> decode -> "va lue"
/// ```
///
/// The decoder runs once per **stored** cookie: values of duplicate names
/// are dropped before decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions<D = PercentDecoder> {
    /// Value decoder.
    ///
    /// Default: [PercentDecoder], which undoes `%XX` escapes and keeps the
    /// raw value if they are malformed.
    pub decode: D,
}

impl ParseOptions {
    /// Options with the default [PercentDecoder].
    #[inline]
    pub const fn new() -> Self {
        Self {
            decode: PercentDecoder,
        }
    }
}

impl<D: Decode> ParseOptions<D> {
    /// Options with a custom value decoder.
    ///
    /// # Examples
    /// ```
    /// use maker_cookie::{parse_with, ParseOptions};
    ///
    /// let options = ParseOptions::with_decoder(|value: &str| value.to_lowercase());
    /// assert_eq!(parse_with("k=ABC", &options).unwrap().get("k"), Some("abc"));
    /// ```
    #[inline]
    pub const fn with_decoder(decode: D) -> Self {
        Self { decode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_decoder() {
        assert_eq!(ParseOptions::new(), ParseOptions::<PercentDecoder>::default());
        assert_eq!(ParseOptions::new().decode.decode("%41%42"), "AB");
    }

    #[test]
    fn custom_decoder() {
        let options = ParseOptions::with_decoder(|value: &str| format!("<{value}>"));
        assert_eq!(options.decode.decode("x"), "<x>");
    }
}
