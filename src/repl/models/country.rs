//! Country record model
//!
//! Mirrors the record shape returned by the REST Countries provider.
//! Only the fields the directory displays, sorts or filters on are kept;
//! unknown fields are ignored during deserialization.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// Key/value mapping that keeps the provider's key order
///
/// Languages and currencies are JSON objects whose order matters for
/// display, so they are collected into a vector instead of a hash map.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new(entries: Vec<(String, V)>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Common and official country names
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// A currency entry keyed by its ISO code in [`CountryRecord::currencies`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Maps {
    #[serde(rename = "googleMaps", default)]
    pub google_maps: String,
}

/// One country as delivered by the data provider
///
/// Records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub cca2: String,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub languages: Option<OrderedMap<String>>,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub currencies: Option<OrderedMap<Currency>>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub maps: Maps,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Capitals joined for display, `None` when the provider lists none
    pub fn capital_text(&self) -> Option<String> {
        self.capital
            .as_ref()
            .filter(|capitals| !capitals.is_empty())
            .map(|capitals| capitals.join(", "))
    }

    pub fn region_name(&self) -> Option<&str> {
        Some(self.region.as_str()).filter(|r| !r.is_empty())
    }

    pub fn subregion_name(&self) -> Option<&str> {
        self.subregion.as_deref().filter(|s| !s.is_empty())
    }

    /// Language names in provider order
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .flat_map(|languages| languages.values().map(String::as_str))
    }
}
