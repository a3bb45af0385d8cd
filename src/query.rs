//! Ordered query-parameter list with first-match-wins lookup and upsert.

use std::fmt;

/// An ordered sequence of query (key, value) pairs.
///
/// Duplicate keys may coexist; order is parse/insertion order. Lookup is a
/// linear scan, so when duplicates exist the first match wins. [`set`]
/// follows the same rule: it replaces the value of the first pair whose key
/// matches, and only appends a new pair when no key matches, so an upsert
/// never creates a duplicate for an existing key.
///
/// [`set`]: QueryPairs::set
///
/// # Examples
///
/// ```
/// use uri_value::QueryPairs;
///
/// let mut params = QueryPairs::parse("a=1&b=2");
/// assert_eq!(params.get("a"), Some("1"));
///
/// params.set("a", "9");
/// params.set("c", "3");
/// assert_eq!(params.pairs(), [
///     ("a".to_string(), "9".to_string()),
///     ("b".to_string(), "2".to_string()),
///     ("c".to_string(), "3".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty pair list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (without the leading `?`).
    ///
    /// The input splits on `&`; each token splits on its first `=` into a
    /// key and a value, both kept verbatim (use [`decode`](crate::decode)
    /// to percent-decode a looked-up value). A token with no `=` is
    /// silently dropped, a deliberate lossy policy rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::QueryPairs;
    ///
    /// let params = QueryPairs::parse("a=1&bad&c=3");
    /// assert_eq!(params.get("a"), Some("1"));
    /// assert_eq!(params.get("bad"), None);
    /// assert_eq!(params.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let pairs = input
            .split('&')
            .filter_map(|token| token.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { pairs }
    }

    /// Returns the value of the first pair whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of the first pair whose key equals `key`, or
    /// `default` when no pair matches.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns the full ordered pair sequence, including duplicates.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Upserts by first match: replaces the value of the first pair whose
    /// key equals `key`, or appends a new pair when no key matches.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            pair.1 = value.into();
        } else {
            self.pairs.push((key.to_owned(), value.into()));
        }
    }

    /// Like [`set`](Self::set), but a no-op when `key` already looks up to
    /// a non-empty value.
    pub fn set_if_unset(&mut self, key: &str, value: impl Into<String>) {
        if self.get(key).is_none_or(str::is_empty) {
            self.set(key, value);
        }
    }

    /// Applies [`set`](Self::set) for each pair in order. Later entries may
    /// overwrite values set by earlier entries in the same call when they
    /// share a key.
    pub fn set_many<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.set(key.as_ref(), value);
        }
    }

    /// Applies [`set_if_unset`](Self::set_if_unset) for each pair in order.
    pub fn set_many_if_unset<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.set_if_unset(key.as_ref(), value);
        }
    }

    /// Unconditionally replaces the entire pair sequence.
    pub fn replace_all<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.pairs = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
    }

    /// Renders the pairs as `?key=value&key=value...`, trimming whitespace
    /// from each key and value before joining. Returns an empty string (not
    /// a bare `?`) when the rendered body is empty.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let body = self.to_string();
        if body.is_empty() {
            body
        } else {
            format!("?{body}")
        }
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no pairs are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryPairs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k.trim(), v.trim()))
            .collect();
        write!(f, "{}", tokens.join("&"))
    }
}

impl From<&str> for QueryPairs {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a QueryPairs {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
