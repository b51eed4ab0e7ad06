//! Name-to-ID listings.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// An ordered `name -> id` listing, as returned by `deckNamesAndIds` and
/// `modelNamesAndIds`.
///
/// AnkiConnect sends these as a JSON object. Entries keep the order they
/// appear in on the wire, which a `HashMap` would lose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedIds(pub Vec<(String, i64)>);

impl NamedIds {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, id)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Look up the ID of an exact name.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, id)| id)
    }
}

impl IntoIterator for NamedIds {
    type Item = (String, i64);
    type IntoIter = std::vec::IntoIter<(String, i64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for NamedIds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamedIdsVisitor;

        impl<'de> Visitor<'de> for NamedIdsVisitor {
            type Value = NamedIds;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of names to integer ids")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, id)) = access.next_entry::<String, i64>()? {
                    entries.push((name, id));
                }
                Ok(NamedIds(entries))
            }

            // AnkiConnect answers `null` for some empty collections.
            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(NamedIds::default())
            }
        }

        deserializer.deserialize_any(NamedIdsVisitor)
    }
}
