//! Zero-copy tokenizer for `Cookie` header values.

use log::trace;
use memchr::{memchr, memrchr};
use std::iter::FusedIterator;

/// A single `name=value` cookie-pair, borrowed from the header.
///
/// Both sides are trimmed of optional whitespace (space and tab), and one
/// layer of surrounding double quotes is removed from the value.
/// The value is **not** percent-decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<'a> {
    /// Cookie name, may be empty (` = bar` has the name `""`)
    pub name: &'a str,
    /// Raw cookie value, may be empty (`foo=` has the value `""`)
    pub value: &'a str,
}

/// Iterator over the cookie-pairs of a `Cookie` header.
///
/// Created by [pairs]. Yields every pair in order, including duplicates;
/// deduplication happens in [CookieParser](crate::CookieParser).
///
/// # Scanning rules
/// - Pairs are separated by `;`, the name ends at the first `=`.
///   Any further `=` belongs to the value.
/// - A segment without `=` (`fizz  ` in `foo=bar;fizz  ;x=y`) is skipped.
/// - Once no `=` remains in the rest of the header, iteration ends.
///
/// # Examples
/// ```
/// use maker_cookie::{pairs, Pair};
///
/// let mut iter = pairs(r#" a = 1 ;flag; b="x=y" "#);
///
/// assert_eq!(iter.next(), Some(Pair { name: "a", value: "1" }));
/// assert_eq!(iter.next(), Some(Pair { name: "b", value: "x=y" }));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    input: &'a str,
    index: usize,
}

/// Splits a `Cookie` header into its cookie-pairs without allocating.
#[inline]
pub fn pairs(input: &str) -> Pairs<'_> {
    Pairs { input, index: 0 }
}

impl<'a> Pairs<'a> {
    /// Returns the part of the header that has not been scanned yet.
    #[inline]
    pub fn remainder(&self) -> &'a str {
        self.input.get(self.index..).unwrap_or("")
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Every delimiter is ASCII, so all slice bounds below
        // land on `char` boundaries.
        let input = self.input;
        let bytes = input.as_bytes();

        while self.index < bytes.len() {
            let rest = &bytes[self.index..];

            let eq_idx = match memchr(b'=', rest) {
                Some(pos) => self.index + pos,
                None => {
                    trace!("No '=' left in cookie header, dropping {:?}", self.remainder());
                    self.index = bytes.len();
                    return None;
                }
            };
            let end_idx = memchr(b';', rest)
                .map(|pos| self.index + pos)
                .unwrap_or(bytes.len());

            if end_idx < eq_idx {
                // Jump to the last `;` before `=`, every segment in between has no value
                let last = memrchr(b';', &bytes[end_idx..eq_idx]).unwrap_or(0);
                trace!(
                    "Skipping cookie segments without value: {:?}",
                    &input[self.index..end_idx + last]
                );
                self.index = end_idx + last + 1;
                continue;
            }

            let name = trim_ows(&input[self.index..eq_idx]);
            let value = unquote(trim_ows(&input[eq_idx + 1..end_idx]));
            self.index = end_idx + 1;

            return Some(Pair { name, value });
        }

        None
    }
}

impl FusedIterator for Pairs<'_> {}

#[inline(always)]
fn trim_ows(src: &str) -> &str {
    src.trim_matches(|c: char| c == ' ' || c == '\t')
}

#[inline(always)]
fn unquote(value: &str) -> &str {
    match value.as_bytes() {
        [b'"', .., b'"'] => &value[1..value.len() - 1],
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, &str)> {
        pairs(input).map(|pair| (pair.name, pair.value)).collect()
    }

    #[test]
    fn basic() {
        assert_eq!(collect("foo=bar"), [("foo", "bar")]);
        assert_eq!(collect("a=1;b=2"), [("a", "1"), ("b", "2")]);
        assert_eq!(collect("f=;b="), [("f", ""), ("b", "")]);
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(
            collect("foo=1;bar=2;foo=3"),
            [("foo", "1"), ("bar", "2"), ("foo", "3")]
        );
    }

    #[test]
    fn no_separator() {
        assert!(collect("").is_empty());
        assert!(collect("foo").is_empty());
        assert!(collect(";;;").is_empty());
        assert!(collect("foo; bar; baz").is_empty());
        assert_eq!(collect("a=1;trailing"), [("a", "1")]);
    }

    #[test]
    fn skips_segments_without_value() {
        assert_eq!(collect("foo=bar;fizz  ;  buzz"), [("foo", "bar")]);
        assert_eq!(collect("  fizz; foo=  bar"), [("foo", "bar")]);
        assert_eq!(collect("a;b;c;d=e;f"), [("d", "e")]);
        assert_eq!(collect(";;x=1;;y=2;"), [("x", "1"), ("y", "2")]);
    }

    #[test]
    fn ows() {
        assert_eq!(collect("\tfoo\t=\tbar\t"), [("foo", "bar")]);
        assert_eq!(collect("   =   "), [("", "")]);
        assert_eq!(collect(" = bar "), [("", "bar")]);
        // Only space and tab are optional whitespace
        assert_eq!(collect("\nfoo=bar\r"), [("\nfoo", "bar\r")]);
    }

    #[test]
    fn quotes() {
        assert_eq!(collect(r#"foo="bar""#), [("foo", "bar")]);
        assert_eq!(collect(r#"foo=" a b c ""#), [("foo", " a b c ")]);
        assert_eq!(collect(r#"foo="""#), [("foo", "")]);
        assert_eq!(collect(r#"foo="""""#), [("foo", r#""""#)]);
        assert_eq!(collect(r#"foo=""#), [("foo", r#"""#)]);
        assert_eq!(collect(r#"foo="bar"#), [("foo", r#""bar"#)]);
        assert_eq!(collect(r#"foo=bar""#), [("foo", r#"bar""#)]);
        assert_eq!(collect(r#""foo"=bar"#), [(r#""foo""#, "bar")]);
    }

    #[test]
    fn equals_in_value() {
        assert_eq!(
            collect(r#"foo="bar=123456789&name=Magic+Mouse""#),
            [("foo", "bar=123456789&name=Magic+Mouse")]
        );
        assert_eq!(collect("a==b="), [("a", "=b=")]);
    }

    #[test]
    fn multibyte() {
        assert_eq!(collect("ключ = значение ; b=ü"), [("ключ", "значение"), ("b", "ü")]);
    }

    #[test]
    fn remainder_and_fused() {
        let mut iter = pairs("a=1; b=2");
        assert_eq!(iter.next(), Some(Pair { name: "a", value: "1" }));
        assert_eq!(iter.remainder(), " b=2");
        assert!(iter.next().is_some());
        assert_eq!(iter.remainder(), "");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
