//! Parsed cookie storage.

use std::{
    borrow::Borrow,
    collections::{hash_map, BTreeMap, HashMap},
    ops::Index,
};

/// Cookies parsed from a single `Cookie` header.
///
/// A plain name → value association backed by a [HashMap]. Names are
/// arbitrary text, so `toString`, `__proto__` or an empty name are ordinary
/// entries like any other.
///
/// Only the **first** occurrence of a name is kept; see [CookieCollector].
///
/// # Examples
/// ```
/// let cookies = maker_cookie::parse("sid=abc; theme=dark; sid=zzz").unwrap();
///
/// assert_eq!(cookies.len(), 2);
/// assert_eq!(cookies.get("sid"), Some("abc"));
/// assert_eq!(&cookies["theme"], "dark");
/// assert!(!cookies.contains("lang"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    inner: HashMap<String, String>,
}

impl Cookies {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `capacity` cookies.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the value of the cookie `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Returns `true` if a cookie named `name` is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of distinct cookie names.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(name, value)` in arbitrary order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Iterates over cookie names in arbitrary order.
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    /// Inserts a cookie unless the name is already taken.
    ///
    /// Returns `false` (and drops `value`) if `name` was already present.
    #[inline]
    pub fn insert_first(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        match self.inner.entry(name.into()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
        }
    }

    /// Returns the underlying map.
    #[inline]
    pub fn into_inner(self) -> HashMap<String, String> {
        self.inner
    }
}

/// Borrowing iterator over [Cookies], created by [Cookies::iter].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Cookies {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Cookies {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

// First occurrence wins, same as parsing
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Cookies {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cookies = Cookies::new();
        for (name, value) in iter {
            cookies.insert_first(name, value);
        }
        cookies
    }
}

impl From<Cookies> for HashMap<String, String> {
    #[inline]
    fn from(cookies: Cookies) -> Self {
        cookies.inner
    }
}

impl<Q> Index<&Q> for Cookies
where
    String: Borrow<Q>,
    Q: std::hash::Hash + Eq + ?Sized,
{
    type Output = str;

    /// # Panics
    /// Panics if the cookie is not present, use [Cookies::get] otherwise.
    #[inline]
    fn index(&self, name: &Q) -> &str {
        &self.inner[name]
    }
}

/// A collection that can receive parsed cookies.
///
/// Counterpart of a query collector for `Cookie` headers: the parser asks
/// [contains_cookie](CookieCollector::contains_cookie) first and only decodes
/// and adds values for names that are not present yet, so the first
/// occurrence of a name always wins.
///
/// # Examples
/// ```rust
/// use maker_cookie::{CookieCollector, CookieParser, decode::PercentDecoder};
///
/// // Keeps only the names, in header order
/// struct Names(Vec<String>);
///
/// impl CookieCollector for Names {
///     fn contains_cookie(&self, name: &str) -> bool {
///         self.0.iter().any(|n| n == name)
///     }
///
///     fn add_cookie(&mut self, name: &str, _: String) {
///         self.0.push(name.to_owned());
///     }
///
///     fn with_capacity(capacity: usize) -> Self {
///         Names(Vec::with_capacity(capacity))
///     }
/// }
///
/// let names: Names = CookieParser::parse("b=1; a=2; b=3", &PercentDecoder);
/// assert_eq!(names.0, ["b", "a"]);
/// ```
pub trait CookieCollector
where
    Self: Sized,
{
    /// Returns `true` if a cookie named `name` was already collected.
    fn contains_cookie(&self, name: &str) -> bool;

    /// Adds a decoded cookie. Only called for names not collected yet.
    ///
    /// # Arguments
    /// - `name`: The cookie name, trimmed
    /// - `value`: The decoded cookie value
    fn add_cookie(&mut self, name: &str, value: String);

    /// Creates a new collection with the specified capacity.
    fn with_capacity(capacity: usize) -> Self;
}

impl CookieCollector for Cookies {
    #[inline(always)]
    fn contains_cookie(&self, name: &str) -> bool {
        self.contains(name)
    }

    #[inline(always)]
    fn add_cookie(&mut self, name: &str, value: String) {
        self.insert_first(name, value);
    }

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Cookies::with_capacity(capacity)
    }
}

impl CookieCollector for HashMap<String, String> {
    #[inline(always)]
    fn contains_cookie(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    #[inline(always)]
    fn add_cookie(&mut self, name: &str, value: String) {
        self.entry(name.to_owned()).or_insert(value);
    }

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity(capacity)
    }
}

// Sorted by name
impl CookieCollector for BTreeMap<String, String> {
    #[inline(always)]
    fn contains_cookie(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    #[inline(always)]
    fn add_cookie(&mut self, name: &str, value: String) {
        self.entry(name.to_owned()).or_insert(value);
    }

    #[inline(always)]
    fn with_capacity(_: usize) -> Self {
        BTreeMap::new()
    }
}

// Header order; lookups are linear, fine for the handful of cookies a request carries
impl CookieCollector for Vec<(String, String)> {
    #[inline(always)]
    fn contains_cookie(&self, name: &str) -> bool {
        self.iter().any(|(n, _)| n == name)
    }

    #[inline(always)]
    fn add_cookie(&mut self, name: &str, value: String) {
        self.push((name.to_owned(), value));
    }

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }
}
