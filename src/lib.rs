//! maker_cookie - Zero-copy parser for the HTTP `Cookie` request header
//!
//! Turns the value of a `Cookie` header into a name → value mapping.
//! Tolerant of what real clients send: a single malformed cookie-pair
//! never prevents the other pairs from being read.
//!
//! # Parsing rules
//!
//! - Pairs are separated by `;`, name and value by the first `=`
//! - Spaces and tabs around names and values are ignored
//! - One pair of surrounding double quotes is removed from values
//! - Values are percent-decoded; undecodable values are kept as sent
//! - Segments without `=` are skipped
//! - For duplicate names, the **first** pair wins
//!
//! # Performance Characteristics
//!
//! - **Zero-copy tokenizer** - [pairs] borrows names and values from the header
//! - **SIMD scanning** - separators found with `memchr`, UTF-8 checked with `simdutf8`
//! - **Linear time** - every byte of the header is scanned a bounded number of times
//! - **No shared state** - safe to call from any number of threads at once
//!
//! # Examples
//!
//! Quick start:
//! ```
//! let cookies = maker_cookie::parse("sid=38afes7a8; theme=dark").unwrap();
//!
//! assert_eq!(cookies.get("sid"), Some("38afes7a8"));
//! assert_eq!(cookies.get("theme"), Some("dark"));
//! ```
//! Custom decoder:
//! ```
//! use maker_cookie::{parse_with, ParseOptions};
//!
//! let options = ParseOptions::with_decoder(|value: &str| value.chars().rev().collect::<String>());
//! let cookies = parse_with(r#"foo="rab""#, &options).unwrap();
//!
//! assert_eq!(cookies.get("foo"), Some("bar"));
//! ```
//! Zero-copy access to the raw pairs:
//! ```
//! use maker_cookie::pairs;
//!
//! for pair in pairs("a=1; a=%20; b") {
//!     println!("{} => {}", pair.name, pair.value); // "a => 1", "a => %20"
//! }
//! ```
//! Raw header bytes, e.g. straight from a request buffer:
//! ```
//! use maker_cookie::{parse, Error};
//!
//! assert!(parse(b"lang=en".as_slice()).is_ok());
//! assert_eq!(parse(b"lang=\xFF".as_slice()), Err(Error::InvalidArgument));
//! ```
//!
//! # Logging
//!
//! Dropped segments, ignored duplicates and decode fallbacks are reported
//! through the [`log`](https://docs.rs/log) facade at `trace` level.
//! Rejected inputs are reported at `debug` level.

pub(crate) mod cookie {
    pub mod cookies;
    pub mod decode;
    pub(crate) mod input;
    pub(crate) mod pairs;
    pub(crate) mod parser;
}
pub(crate) mod errors;
pub mod options;

pub use crate::{
    cookie::{
        cookies::{CookieCollector, Cookies, Iter},
        decode,
        input::CookieInput,
        pairs::{pairs, Pair, Pairs},
        parser::{parse, parse_with, CookieParser},
    },
    errors::{DecodeError, Error},
    options::ParseOptions,
};

#[cfg(test)]
pub mod tools {
    use crate::Cookies;

    #[inline]
    pub fn sorted(cookies: &Cookies) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = cookies.iter().collect();
        pairs.sort_unstable();
        pairs
    }
}
