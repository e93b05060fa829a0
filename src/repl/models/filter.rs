//! # Filter Engine
//!
//! Narrows a dataset to the records matching one active filter dimension.

use super::country::CountryRecord;
use super::taxonomy::FilterTaxonomy;
use std::fmt;
use std::str::FromStr;

/// A filter dimension; only one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterDimension {
    #[default]
    Language,
    Continent,
    Region,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Language,
        FilterDimension::Continent,
        FilterDimension::Region,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Language => "language",
            FilterDimension::Continent => "continent",
            FilterDimension::Region => "region",
        }
    }

    fn index(&self) -> usize {
        match self {
            FilterDimension::Language => 0,
            FilterDimension::Continent => 1,
            FilterDimension::Region => 2,
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterDimension {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "language" | "languages" | "lang" => Ok(FilterDimension::Language),
            "continent" | "continents" => Ok(FilterDimension::Continent),
            "region" | "regions" | "subregion" => Ok(FilterDimension::Region),
            other => Err(anyhow::anyhow!(
                "Unknown filter dimension '{other}'. Use: language, continent, region"
            )),
        }
    }
}

/// Keep the records matching `value` on `dimension`
///
/// The output preserves input order and never contains a record that was
/// not in `records`.
pub fn apply(
    records: &[CountryRecord],
    dimension: FilterDimension,
    value: &str,
) -> Vec<CountryRecord> {
    records
        .iter()
        .filter(|record| matches(record, dimension, value))
        .cloned()
        .collect()
}

fn matches(record: &CountryRecord, dimension: FilterDimension, value: &str) -> bool {
    match dimension {
        FilterDimension::Language => record.language_names().any(|name| name == value),
        FilterDimension::Continent => record.continents.iter().any(|c| c == value),
        FilterDimension::Region => {
            record.region == value || record.subregion.as_deref() == Some(value)
        }
    }
}

/// The user's filter settings
///
/// Holds the enable toggle, the single active dimension and the value
/// chosen for each dimension (each value selector keeps its own choice).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    enabled: bool,
    dimension: FilterDimension,
    values: [Option<String>; 3],
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn dimension(&self) -> FilterDimension {
        self.dimension
    }

    pub fn set_dimension(&mut self, dimension: FilterDimension) {
        self.dimension = dimension;
    }

    pub fn selected_value(&self, dimension: FilterDimension) -> Option<&str> {
        self.values[dimension.index()].as_deref()
    }

    pub fn select_value(&mut self, dimension: FilterDimension, value: String) {
        self.values[dimension.index()] = Some(value);
    }

    /// The value in effect for the active dimension
    ///
    /// Falls back to the first taxonomy value when nothing was chosen yet,
    /// the same way a freshly populated selector shows its first option.
    pub fn effective_value<'a>(&'a self, taxonomy: &'a FilterTaxonomy) -> Option<&'a str> {
        self.selected_value(self.dimension).or_else(|| {
            taxonomy
                .values(self.dimension)
                .first()
                .map(String::as_str)
        })
    }

    /// Run the filter engine if enabled, otherwise pass records through
    pub fn narrow(
        &self,
        records: Vec<CountryRecord>,
        taxonomy: Option<&FilterTaxonomy>,
    ) -> Vec<CountryRecord> {
        if !self.enabled {
            return records;
        }

        let value = match taxonomy {
            Some(taxonomy) => self.effective_value(taxonomy),
            None => self.selected_value(self.dimension),
        };

        match value {
            Some(value) => {
                let narrowed = apply(&records, self.dimension, value);
                tracing::debug!(
                    "Filter {}='{}' kept {} of {} records",
                    self.dimension,
                    value,
                    narrowed.len(),
                    records.len()
                );
                narrowed
            }
            None => {
                tracing::debug!("Filter enabled without a value for {}", self.dimension);
                records
            }
        }
    }
}
