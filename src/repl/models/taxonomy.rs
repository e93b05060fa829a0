//! # Filter Taxonomy
//!
//! The selectable filter values per dimension, derived once from the full
//! unfiltered dataset so the options stay stable whatever is displayed.

use super::country::CountryRecord;
use super::filter::FilterDimension;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterTaxonomy {
    languages: Vec<String>,
    continents: Vec<String>,
    regions: Vec<String>,
}

impl FilterTaxonomy {
    /// Build the taxonomy from the full dataset in a single pass
    ///
    /// Regions include both region and subregion names. Values are
    /// deduplicated and ordered byte-wise (case-sensitive).
    pub fn build(records: &[CountryRecord]) -> Self {
        let mut languages = BTreeSet::new();
        let mut continents = BTreeSet::new();
        let mut regions = BTreeSet::new();

        for record in records {
            languages.extend(record.language_names().filter(|l| !l.is_empty()));
            continents.extend(
                record
                    .continents
                    .iter()
                    .map(String::as_str)
                    .filter(|c| !c.is_empty()),
            );
            regions.extend(record.region_name());
            regions.extend(record.subregion_name());
        }

        let taxonomy = Self {
            languages: languages.into_iter().map(str::to_string).collect(),
            continents: continents.into_iter().map(str::to_string).collect(),
            regions: regions.into_iter().map(str::to_string).collect(),
        };

        tracing::debug!(
            "Filter taxonomy built: {} languages, {} continents, {} regions",
            taxonomy.languages.len(),
            taxonomy.continents.len(),
            taxonomy.regions.len()
        );

        taxonomy
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Language => &self.languages,
            FilterDimension::Continent => &self.continents,
            FilterDimension::Region => &self.regions,
        }
    }
}
