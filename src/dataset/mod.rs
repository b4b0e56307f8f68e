//! Keyed datasets.
//!
//! A [`Dataset`] is an ordered list of [`Entry`] values. It can be built in
//! two ways, which differ only in how duplicate keys are treated:
//!
//! - [`Dataset::from_pairs`]: mapping semantics. A repeated key keeps the
//!   position of its first occurrence and takes the last value.
//! - [`Dataset::from_keys`]: list semantics. Every key is kept, duplicates
//!   included.
//!
//! Keys are byte strings. Datasets read from JSON always hold valid UTF-8;
//! line-oriented files are taken as raw bytes, so a kernel that needs text
//! may later reject a key.
//!
//! # Examples
//!
//! ```
//! use hashscope::dataset::Dataset;
//!
//! let mapping = Dataset::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
//! assert_eq!(mapping.len(), 2);
//! assert_eq!(mapping.entries()[0].value(), Some("3"));
//!
//! let list = Dataset::from_keys(["a", "b", "a"]);
//! assert_eq!(list.len(), 3);
//! ```

pub mod generate;
pub mod load;

pub use generate::{generate, GeneratorConfig};
pub use load::{load, DatasetFormat};

use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;

/// One dataset record: a key and an optional value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    #[serde(serialize_with = "serialize_lossy")]
    key: Vec<u8>,
    value: Option<String>,
}

#[allow(clippy::ptr_arg)]
fn serialize_lossy<S: serde::Serializer>(key: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(key))
}

impl Entry {
    /// Create an entry with a value.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Create a key-only entry.
    pub fn key_only(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Raw key bytes.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Key as text, if it is valid UTF-8.
    #[must_use]
    pub fn key_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.key).ok()
    }

    /// Key as text, with invalid sequences replaced by U+FFFD.
    #[must_use]
    pub fn key_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.key)
    }

    /// Associated value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Ordered collection of entries analyzed by the collision engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Create an empty dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a dataset with mapping semantics.
    ///
    /// Duplicate keys collapse: the entry stays at its first position and the
    /// last value wins.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<Vec<u8>>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map: IndexMap<Vec<u8>, String> = IndexMap::new();
        for (key, value) in pairs {
            map.insert(key.into(), value.into());
        }
        Self::from(map)
    }

    /// Build a dataset with list semantics; duplicates are retained.
    pub fn from_keys<K, I>(keys: I) -> Self
    where
        K: Into<Vec<u8>>,
        I: IntoIterator<Item = K>,
    {
        Self {
            entries: keys.into_iter().map(Entry::key_only).collect(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in dataset order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over entries in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Iterate over keys in dataset order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Entry::key)
    }
}

impl From<IndexMap<Vec<u8>, String>> for Dataset {
    fn from(map: IndexMap<Vec<u8>, String>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| Entry {
                    key,
                    value: Some(value),
                })
                .collect(),
        }
    }
}

impl From<IndexMap<String, String>> for Dataset {
    fn from(map: IndexMap<String, String>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| Entry::new(key, value))
                .collect(),
        }
    }
}

impl From<Vec<Entry>> for Dataset {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
