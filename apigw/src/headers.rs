use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Case-insensitive, multi-valued header map.
///
/// Names compare ASCII case-insensitively; the casing of the first insertion
/// is the one kept for the wire. Distinct names keep their insertion order,
/// and the values under one name keep theirs. A name with no values is the
/// same as a name that was never inserted.
///
/// Deserializes from the gateway's `multiValueHeaders` shape (name to list of
/// values). Serializes to the gateway's flat response shape, one string value
/// per name, with the last value winning when a name holds several.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a name-to-ordered-values mapping.
    pub fn from_multi_value<I, N, V>(map: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<V>)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut headers = Headers::new();
        for (name, values) in map {
            let name = name.into();
            for value in values {
                headers.add(name.clone(), value);
            }
        }
        headers
    }

    /// Appends a value under a name, merging case-insensitively with any
    /// existing entry for that name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.values_mut(&name) {
            Some(values) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// First value under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// All values under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .flat_map(|(_, values)| values.iter().map(String::as_str))
    }

    /// One `(name, value)` pair per value, so a name holding N values yields
    /// N pairs. Restartable: the map is never mutated after construction, so
    /// re-iterating yields the same sequence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }

    /// Total number of `(name, value)` pairs.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn values_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, values)| values)
    }
}

impl Serialize for Headers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The outbound headers object holds one value per name; later values
        // overwrite earlier ones, which for an ordered value list means the
        // last value wins. Names with no values are dropped.
        let flat: Vec<(&str, &str)> = self
            .entries
            .iter()
            .filter_map(|(name, values)| values.last().map(|v| (name.as_str(), v.as_str())))
            .collect();
        let mut map = serializer.serialize_map(Some(flat.len()))?;
        for (name, value) in flat {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MultiValueVisitor;

        impl<'de> Visitor<'de> for MultiValueVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of header name to list of values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Headers, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut headers = Headers::new();
                while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
                    for value in values {
                        headers.add(name.clone(), value);
                    }
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(MultiValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yields_one_pair_per_value() {
        let headers = Headers::from_multi_value([("X-Test", vec!["a", "b"])]);
        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(pairs, vec![("X-Test", "a"), ("X-Test", "b")]);
        // restartable
        assert_eq!(headers.iter().count(), 2);
    }

    #[test]
    fn add_merges_case_insensitively() {
        let mut headers = Headers::new();
        headers.add("X-Test", "a");
        headers.add("x-test", "b");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-TEST"), Some("a"));
        assert_eq!(headers.get_all("x-Test").collect::<Vec<_>>(), vec!["a", "b"]);
        // first-seen casing survives
        assert_eq!(headers.iter().next(), Some(("X-Test", "a")));
    }

    #[test]
    fn empty_value_list_is_absent() {
        let headers = Headers::from_multi_value([("X-Empty", Vec::<String>::new())]);
        assert!(headers.is_empty());
        assert_eq!(headers.get("X-Empty"), None);
        assert_eq!(serde_json::to_value(&headers).unwrap(), json!({}));
    }

    #[test]
    fn deserializes_from_multi_value_wire_shape() {
        let headers: Headers =
            serde_json::from_value(json!({"Host": ["example.com"], "X-Test": ["a", "b"]})).unwrap();
        assert_eq!(headers.get("host"), Some("example.com"));
        assert_eq!(headers.get_all("X-Test").collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn serializes_flat_with_last_value_winning() {
        let mut headers = Headers::new();
        headers.add("X-A", "1");
        headers.add("X-A", "2");
        headers.add("X-B", "only");
        assert_eq!(
            serde_json::to_value(&headers).unwrap(),
            json!({"X-A": "2", "X-B": "only"})
        );
    }
}
