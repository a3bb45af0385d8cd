//! Percent-encoding codec for URI components and query strings.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left untouched when encoding a URI component: the RFC 3986
/// unreserved set (alphanumerics plus `-`, `_`, `.`, `~`).
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes characters unsafe for a URI component.
///
/// When `use_plus` is true, spaces are rendered as `+` rather than `%20`
/// (query-string convention). The flag is explicit because the two
/// encodings do not round-trip interchangeably: a `+` written for a space
/// only decodes back to a space when the decoder knows to expect it.
///
/// # Examples
///
/// ```
/// use uri_value::encode;
///
/// assert_eq!(encode("a b&c", true), "a+b%26c");
/// assert_eq!(encode("a b&c", false), "a%20b%26c");
/// ```
#[must_use]
pub fn encode(text: &str, use_plus: bool) -> String {
    let encoded = utf8_percent_encode(text, COMPONENT_SET).to_string();
    if use_plus {
        encoded.replace("%20", "+")
    } else {
        encoded
    }
}

/// Percent-decodes a URI component; inverse of [`encode`].
///
/// When `decode_plus` is true, `+` decodes to a space. Literal plus signs
/// that were percent-encoded as `%2B` are unaffected either way.
///
/// # Examples
///
/// ```
/// use uri_value::decode;
///
/// assert_eq!(decode("a+b%26c", true), "a b&c");
/// assert_eq!(decode("a+b", false), "a+b");
/// assert_eq!(decode("1%2B1", true), "1+1");
/// ```
#[must_use]
pub fn decode(text: &str, decode_plus: bool) -> String {
    let text = if decode_plus {
        Cow::Owned(text.replace('+', " "))
    } else {
        Cow::Borrowed(text)
    };
    percent_decode_str(&text).decode_utf8_lossy().into_owned()
}

/// Encodes and joins query pairs as `key=value` tokens separated by `&`.
///
/// When `omit_equals_on_empty` is true, a pair with an empty value is
/// rendered as a bare `key` instead of `key=`, the way browsers commonly
/// render flag-like parameters.
///
/// # Examples
///
/// ```
/// use uri_value::encode_query_pairs;
///
/// let pairs = [("q", "a b"), ("flag", "")];
/// assert_eq!(encode_query_pairs(&pairs, true, true), "q=a+b&flag");
/// assert_eq!(encode_query_pairs(&pairs, false, false), "q=a%20b&flag=");
/// ```
#[must_use]
pub fn encode_query_pairs<K, V>(pairs: &[(K, V)], use_plus: bool, omit_equals_on_empty: bool) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let tokens: Vec<String> = pairs
        .iter()
        .map(|(key, value)| {
            let key = encode(key.as_ref(), use_plus);
            let value = value.as_ref();
            if value.is_empty() && omit_equals_on_empty {
                key
            } else {
                format!("{key}={}", encode(value, use_plus))
            }
        })
        .collect();
    tokens.join("&")
}
