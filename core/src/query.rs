//! Ordered query-string builder used by listing operations.
//!
//! Pairs are kept in insertion order and encoded as
//! `application/x-www-form-urlencoded`. Optional filters only produce a key
//! when they are present; a present `false`, `0` or empty string is still sent.

use std::fmt::Display;

use crate::types::DateRange;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Add `key` only when `value` is `Some`.
    pub fn opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Expand a range filter into `field[ge]` / `field[le]`. Each bound is
    /// added independently; no bare `field` key is ever produced.
    pub fn range(&mut self, field: &str, range: Option<&DateRange>) -> &mut Self {
        if let Some(range) = range {
            self.opt(&format!("{field}[ge]"), range.ge.as_deref());
            self.opt(&format!("{field}[le]"), range.le.as_deref());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
