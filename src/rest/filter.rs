//! Read filters.
//!
//! An [`ApiFilter`] names the resource path to read and the query filters to
//! apply. A key can hold several values; each value becomes its own
//! `key=value` pair, so `type=sensor&type=meter` asks for both types.

use crate::clients::encode_query;
use crate::rest::errors::PathError;
use crate::rest::object::ObjectType;

/// The target path and query filters of a read.
///
/// Keys keep their first-insertion order and values keep insertion order.
///
/// # Example
///
/// ```rust
/// use opisense_client::rest::ApiFilter;
///
/// let filter = ApiFilter::new("sources")
///     .with("siteId", "12")
///     .with_all("type", ["sensor", "meter"]);
///
/// assert_eq!(
///     filter.to_path_and_query(),
///     "sources?siteId=12&type=sensor&type=meter"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiFilter {
    path: String,
    filters: Vec<(String, Vec<String>)>,
}

impl ApiFilter {
    /// Creates a filter for `path` with no query filters.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filters: Vec::new(),
        }
    }

    /// Creates a filter reading the default path of `object_type`.
    #[must_use]
    pub fn for_type(object_type: ObjectType) -> Self {
        Self::new(object_type.default_path())
    }

    /// Adds a value for `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Adds several values for `key`.
    #[must_use]
    pub fn with_all<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        for value in values {
            self.add(key.clone(), value);
        }
        self
    }

    /// Adds a value for `key` in place.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.filters.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.filters.push((key, vec![value])),
        }
    }

    /// Returns the resource path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the values recorded for `key`.
    #[must_use]
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Checks that the path names a resource and carries no query string.
    ///
    /// # Errors
    ///
    /// - [`PathError::EmptyReadPath`] if the path is blank
    /// - [`PathError::QueryInReadPath`] if the path contains `?`
    pub fn validate(&self) -> Result<(), PathError> {
        if self.path.trim().trim_matches('/').is_empty() {
            return Err(PathError::EmptyReadPath);
        }
        if self.path.contains('?') {
            return Err(PathError::QueryInReadPath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Returns `true` if no query filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Flattens the filters into ordered `(key, value)` pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.filters
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.clone(), v.clone())))
            .collect()
    }

    /// Returns the percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        encode_query(&self.query_pairs())
    }

    /// Returns the path followed by `?` and the query, or the path alone.
    #[must_use]
    pub fn to_path_and_query(&self) -> String {
        if self.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_key_emits_one_pair_per_value() {
        let filter = ApiFilter::new("sources").with_all("type", ["sensor", "meter"]);
        assert_eq!(filter.query_string(), "type=sensor&type=meter");
    }

    #[test]
    fn test_key_occurs_once_per_value() {
        let values = ["a", "b", "c", "d"];
        let filter = ApiFilter::new("sites").with_all("tag", values);
        let query = filter.query_string();

        assert_eq!(query.matches("tag=").count(), values.len());
    }

    #[test]
    fn test_keys_keep_first_insertion_order() {
        let filter = ApiFilter::new("variables")
            .with("sourceId", "1")
            .with("unitId", "8")
            .with("sourceId", "2");

        assert_eq!(filter.query_string(), "sourceId=1&sourceId=2&unitId=8");
        assert_eq!(
            filter.values("sourceId"),
            Some(&["1".to_string(), "2".to_string()][..])
        );
        assert_eq!(filter.values("missing"), None);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let filter = ApiFilter::new("sites").with("name", "Plant & Co");
        assert_eq!(filter.query_string(), "name=Plant%20%26%20Co");
    }

    #[test]
    fn test_empty_filter_has_no_query() {
        let filter = ApiFilter::new("sites");
        assert!(filter.is_empty());
        assert_eq!(filter.to_path_and_query(), "sites");
    }

    #[test]
    fn test_validate_rejects_query_in_path() {
        let filter = ApiFilter::new("sources?siteId=1").with("type", "x");
        assert!(matches!(
            filter.validate(),
            Err(PathError::QueryInReadPath { ref path }) if path == "sources?siteId=1"
        ));
    }

    #[test]
    fn test_validate_rejects_blank_path() {
        assert_eq!(ApiFilter::new(" / ").validate(), Err(PathError::EmptyReadPath));
        assert_eq!(ApiFilter::new("sites").validate(), Ok(()));
    }

    #[test]
    fn test_for_type_uses_default_path() {
        assert_eq!(ApiFilter::for_type(ObjectType::Account).path(), "account");
    }
}
