//! Query parameters type for URL values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Query parameters of a [`Url`](crate::Url).
///
/// Stores key-value pairs in insertion order. Keys are unique: inserting an
/// existing key replaces its value in place, keeping the key's original
/// position. Ordering is significant for equality and for the encoded query
/// string; use [`QueryParams::sorted`] for an order-insensitive form.
///
/// # Examples
///
/// ```
/// use sugarurl::QueryParams;
///
/// let params: QueryParams = [("b", 2), ("a", 1)].into_iter().collect();
/// assert_eq!(params.encode(), "b=2&a=1");
/// assert_eq!(params.sorted().encode(), "a=1&b=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a query string (without leading '?').
    ///
    /// Uses `application/x-www-form-urlencoded` rules: `+` decodes to a space
    /// and percent escapes are decoded. Pairs with a blank value are
    /// dropped. When a key repeats, the last value wins and the key keeps its
    /// first position.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        form_urlencoded::parse(input.as_bytes())
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
        let name = name.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.pairs.push((name, value));
                None
            }
        }
    }

    /// Removes a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| k == name)?;
        Some(self.pairs.remove(idx).1)
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a copy with the parameters sorted by key.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self { pairs }
    }

    /// Encodes the parameters as a query string (without leading '?').
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

/// Percent-decodes a string, replacing invalid UTF-8 sequences.
///
/// Unlike [`QueryParams::parse`], `+` is left as is.
#[must_use]
pub fn percent_decode(input: &str) -> String {
    percent_encoding::percent_decode_str(input)
        .decode_utf8_lossy()
        .into_owned()
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for QueryParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for QueryParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let as_strs: fn(&'a (String, String)) -> (&'a str, &'a str) =
            |(k, v)| (k.as_str(), v.as_str());
        self.pairs.iter().map(as_strs)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (k, v) in &self.pairs {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ParamsVisitor;

        impl<'de> serde::de::Visitor<'de> for ParamsVisitor {
            type Value = QueryParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of query parameters")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut params = QueryParams::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    params.insert(k, v);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        let params = QueryParams::parse("");
        assert!(params.is_empty());
    }

    #[test]
    fn parse_multiple_params() {
        let params = QueryParams::parse("timeout=3000&limit=100");
        assert_eq!(params.get("timeout"), Some("3000"));
        assert_eq!(params.get("limit"), Some("100"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_keeps_insertion_order() {
        let params = QueryParams::parse("z=1&a=2");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn parse_duplicate_last_value_wins_first_position() {
        let params = QueryParams::parse("a=1&b=2&a=3");
        assert_eq!(params.encode(), "a=3&b=2");
    }

    #[test]
    fn parse_decodes_plus_and_percent() {
        let params = QueryParams::parse("q=hello+world&name=%41%42");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("name"), Some("AB"));
    }

    #[test]
    fn parse_drops_blank_values() {
        let params = QueryParams::parse("flag&empty=&a=1");
        assert!(!params.contains_key("flag"));
        assert!(!params.contains_key("empty"));
        assert_eq!(params.encode(), "a=1");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = QueryParams::from([("a", 1), ("b", 2)]);
        assert_eq!(params.insert("a", 5), Some("1".to_string()));
        assert_eq!(params.encode(), "a=5&b=2");
    }

    #[test]
    fn remove_returns_value() {
        let mut params = QueryParams::from([("a", 1), ("b", 2)]);
        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.encode(), "b=2");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let params = QueryParams::from([("q", "{job=\"test\"}")]);
        assert_eq!(params.encode(), "q=%7Bjob%3D%22test%22%7D");
    }

    #[test]
    fn encode_space_as_plus() {
        let params = QueryParams::from([("q", "a b")]);
        assert_eq!(params.to_string(), "q=a+b");
    }

    #[test]
    fn sorted_orders_by_key() {
        let params = QueryParams::from([("b", 2), ("a", 1)]);
        assert_eq!(params.sorted().encode(), "a=1&b=2");
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = QueryParams::from([("a", 1), ("b", 2)]);
        let b = QueryParams::from([("b", 2), ("a", 1)]);
        assert_ne!(a, b);
        assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn percent_decode_leaves_plus() {
        assert_eq!(percent_decode("q=%7Bjob%7D+x"), "q={job}+x");
    }
}
