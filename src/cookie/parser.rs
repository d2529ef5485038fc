use crate::{
    cookie::{cookies::CookieCollector, decode::Decode, input::CookieInput, pairs::pairs},
    errors::Error,
    options::ParseOptions,
    Cookies,
};
use log::{debug, trace};

/// `Cookie` header parser.
///
/// Runs the header through [pairs](crate::pairs), decodes each value with a
/// [Decode] implementation and stores the first occurrence of every name in a
/// [CookieCollector]. Malformed parts of the header never fail the parse:
///
/// | Input                 | Result                   |
/// |-----------------------|--------------------------|
/// | `foo=bar;fizz  ;buzz` | `foo=bar`, rest dropped  |
/// | `foo=%1`              | `foo=%1` (decode failed) |
/// | `a=1;a=2`             | `a=1` (first wins)       |
/// | `foo="bar"`           | `foo=bar`                |
///
/// Most callers want [parse](crate::parse) instead, which also checks
/// that the input is text.
pub struct CookieParser;

impl CookieParser {
    /// Parses a `Cookie` header into a new collection.
    ///
    /// # Type Parameters
    /// - `C`: Collection type implementing [CookieCollector]
    /// - `D`: Value decoder
    ///
    /// # Examples
    /// ```
    /// use maker_cookie::{CookieParser, decode::PercentDecoder};
    /// use std::collections::BTreeMap;
    ///
    /// let cookies: BTreeMap<String, String> =
    ///     CookieParser::parse("b=%20x; a=1; b=2", &PercentDecoder);
    ///
    /// assert_eq!(
    ///     cookies.into_iter().collect::<Vec<_>>(),
    ///     [("a".to_owned(), "1".to_owned()), ("b".to_owned(), " x".to_owned())]
    /// );
    /// ```
    #[inline]
    pub fn parse<C: CookieCollector, D: Decode + ?Sized>(input: &str, decoder: &D) -> C {
        let mut result = C::with_capacity(estimate_pairs(input));
        Self::parse_into(&mut result, input, decoder);
        result
    }

    /// Parses a `Cookie` header into an existing collection.
    ///
    /// Names already in `result` are treated as seen, so their values are
    /// not replaced. This makes it possible to merge several `Cookie`
    /// headers with the first header taking precedence.
    ///
    /// # Examples
    /// ```
    /// use maker_cookie::{CookieParser, Cookies, decode::PercentDecoder};
    ///
    /// let mut cookies = Cookies::new();
    ///
    /// CookieParser::parse_into(&mut cookies, "a=1; b=2", &PercentDecoder);
    /// CookieParser::parse_into(&mut cookies, "b=3; c=4", &PercentDecoder);
    ///
    /// assert_eq!(cookies.len(), 3);
    /// assert_eq!(cookies.get("b"), Some("2"));
    /// ```
    pub fn parse_into<C: CookieCollector, D: Decode + ?Sized>(
        result: &mut C,
        input: &str,
        decoder: &D,
    ) {
        for pair in pairs(input) {
            if result.contains_cookie(pair.name) {
                trace!("Ignoring duplicate cookie {:?}", pair.name);
                continue;
            }

            result.add_cookie(pair.name, decoder.decode(pair.value));
        }
    }
}

/// Parses a `Cookie` header with the default [PercentDecoder](crate::decode::PercentDecoder).
///
/// # Errors
/// [Error::InvalidArgument] if `input` is `None` or bytes that are not UTF-8.
/// Malformed cookie text is never an error.
///
/// # Examples
/// ```
/// use maker_cookie::{parse, Error};
///
/// let cookies = parse("FOO    = bar;   baz  =   raz").unwrap();
/// assert_eq!(cookies.get("FOO"), Some("bar"));
/// assert_eq!(cookies.get("baz"), Some("raz"));
///
/// // Raw header bytes are accepted too
/// let cookies = parse(b"email=%20%22%2c%3b%2f").unwrap();
/// assert_eq!(cookies.get("email"), Some(" \",;/"));
///
/// assert_eq!(parse(None::<&str>), Err(Error::InvalidArgument));
/// assert_eq!(parse(b"a=\xFF"), Err(Error::InvalidArgument));
/// ```
#[inline]
pub fn parse<I: CookieInput>(input: I) -> Result<Cookies, Error> {
    parse_with(input, &ParseOptions::new())
}

/// Parses a `Cookie` header with the given options.
///
/// # Errors
/// [Error::InvalidArgument] if `input` is `None` or bytes that are not UTF-8.
///
/// # Examples
/// ```
/// use maker_cookie::{parse_with, ParseOptions};
///
/// let options = ParseOptions::with_decoder(|value: &str| value.replace('+', " "));
/// let cookies = parse_with("name=Magic+Mouse", &options).unwrap();
///
/// assert_eq!(cookies.get("name"), Some("Magic Mouse"));
/// ```
pub fn parse_with<I: CookieInput, D: Decode>(
    input: I,
    options: &ParseOptions<D>,
) -> Result<Cookies, Error> {
    let input = match input.as_cookie_str() {
        Some(input) => input,
        None => {
            debug!("Rejecting cookie header: {}", Error::InvalidArgument);
            return Err(Error::InvalidArgument);
        }
    };

    Ok(CookieParser::parse(input, &options.decode))
}

// One pair per `;` plus one, capped so a hostile header can't force a huge allocation
#[inline]
fn estimate_pairs(input: &str) -> usize {
    memchr::memchr_iter(b';', input.as_bytes())
        .count()
        .saturating_add(1)
        .min(64)
}
