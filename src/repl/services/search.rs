//! # Search Resolver
//!
//! Turns free text into country records by trying the provider's lookups
//! in a fixed order until one succeeds.

use super::countries::{CountrySource, Lookup, ResourcePath};
use super::error::DirectoryError;
use crate::repl::models::CountryRecord;
use anyhow::Result;

/// Lookup order for free-text searches
pub const SEARCH_ORDER: [Lookup; 7] = [
    Lookup::Name,
    Lookup::Translation,
    Lookup::Capital,
    Lookup::Language,
    Lookup::Demonym,
    Lookup::Region,
    Lookup::Subregion,
];

#[derive(Debug, Clone)]
pub struct SearchResolver<S: CountrySource> {
    source: S,
}

impl<S: CountrySource> SearchResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve a search query
    ///
    /// An empty query returns the full dataset. Only request failures fall
    /// through to the next lookup; any other error is returned as is.
    pub async fn resolve(&self, query: &str) -> Result<Vec<CountryRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return self.source.fetch(&ResourcePath::All).await;
        }

        for lookup in SEARCH_ORDER {
            let path = ResourcePath::lookup(lookup, query);
            match self.source.fetch(&path).await {
                Ok(records) => {
                    tracing::debug!("Search '{}' resolved by {}", query, lookup.segment());
                    if lookup == Lookup::Name {
                        return Ok(prefer_common_name_matches(records, query));
                    }
                    return Ok(records);
                }
                Err(e) if DirectoryError::is_request(&e) => {
                    tracing::debug!("Lookup {} missed: {}", lookup.segment(), e);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!("No lookup matched '{}'", query);
        Err(DirectoryError::NoResults {
            query: query.to_string(),
        }
        .into())
    }

}

/// Keep the records whose common name starts with `letter`
pub fn starting_with(records: Vec<CountryRecord>, letter: char) -> Vec<CountryRecord> {
    records
        .into_iter()
        .filter(|record| record.common_name().starts_with(letter))
        .collect()
}

/// Prefer records whose common name contains the query
///
/// The name lookup also matches official and native names; when some
/// common names contain the text those are kept, otherwise all records are.
pub fn prefer_common_name_matches(records: Vec<CountryRecord>, query: &str) -> Vec<CountryRecord> {
    let needle = query.to_lowercase();
    let (matching, others): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.common_name().to_lowercase().contains(&needle));

    if matching.is_empty() {
        others
    } else {
        matching
    }
}
