//! # Card Renderer
//!
//! Maps one country record to its display-ready card. Rendering is pure;
//! the card keeps its source record so sorting never has to read back the
//! rendered text.

use super::country::{CountryRecord, Currency};

/// Placeholder shown for absent optional fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Label of the map link
pub const MAP_LINK_LABEL: &str = "View on Google Maps";

/// Display-ready fields of one country
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub official_name: String,
    pub capital: String,
    pub languages: String,
    pub continents: String,
    pub region: String,
    pub area: String,
    pub population: String,
    pub currencies: String,
    pub flag: String,
    pub flag_alt: String,
    pub map_link: String,
    record: CountryRecord,
}

impl Card {
    pub fn render(record: &CountryRecord) -> Self {
        Self {
            title: format!("{} - {}", record.name.common, record.cca2),
            official_name: format!("Officially known as: {}", record.name.official),
            capital: format!(
                "Capital: {}",
                record
                    .capital_text()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            ),
            languages: language_summary(record),
            continents: continent_summary(record),
            region: region_summary(record),
            area: format!("Area: {} km\u{00B2}", format_area(record.area)),
            population: format!("Population: {}", record.population),
            currencies: currency_summary(record),
            flag: record.flags.png.clone(),
            flag_alt: record
                .flags
                .alt
                .clone()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| format!("Flag of {}", record.name.common)),
            map_link: record.maps.google_maps.clone(),
            record: record.clone(),
        }
    }

    /// Render a whole dataset, preserving order
    pub fn render_all(records: &[CountryRecord]) -> Vec<Self> {
        records.iter().map(Self::render).collect()
    }

    pub fn record(&self) -> &CountryRecord {
        &self.record
    }

    /// Detail lines in display order (everything below the title)
    pub fn detail_lines(&self) -> [&str; 8] {
        [
            &self.official_name,
            &self.capital,
            &self.languages,
            &self.continents,
            &self.region,
            &self.area,
            &self.population,
            &self.currencies,
        ]
    }
}

fn labelled_list<'a>(
    singular: &str,
    plural: &str,
    items: impl Iterator<Item = &'a str>,
) -> String {
    let items: Vec<&str> = items.collect();
    match items.as_slice() {
        [] => format!("{singular}: {NOT_AVAILABLE}"),
        [one] => format!("{singular}: {one}"),
        many => format!("{plural}: {}", many.join(", ")),
    }
}

fn language_summary(record: &CountryRecord) -> String {
    labelled_list(
        "Official Language",
        "Official Languages",
        record.language_names(),
    )
}

fn continent_summary(record: &CountryRecord) -> String {
    labelled_list(
        "Continent",
        "Continents",
        record.continents.iter().map(String::as_str),
    )
}

fn region_summary(record: &CountryRecord) -> String {
    match (record.region_name(), record.subregion_name()) {
        (Some(region), Some(subregion)) => format!("Region: {region} ({subregion})"),
        (Some(region), None) => format!("Region: {region}"),
        (None, _) => format!("Region: {NOT_AVAILABLE}"),
    }
}

fn format_currency(code: &str, currency: &Currency) -> String {
    match currency.symbol.as_deref().filter(|s| !s.is_empty()) {
        Some(symbol) => format!("{} ({code}) - {symbol}", currency.name),
        None => format!("{} ({code})", currency.name),
    }
}

/// Every currency is listed; a multi-currency country shows all of them.
fn currency_summary(record: &CountryRecord) -> String {
    let entries: Vec<String> = record
        .currencies
        .iter()
        .flat_map(|currencies| currencies.iter())
        .map(|(code, currency)| format_currency(code, currency))
        .collect();

    match entries.as_slice() {
        [] => format!("Currencies: {NOT_AVAILABLE}"),
        [one] => format!("Currency: {one}"),
        many => format!("Currencies: {}", many.join(", ")),
    }
}

fn format_area(area: f64) -> String {
    if area.fract() == 0.0 && area.abs() < 1e15 {
        format!("{}", area as i64)
    } else {
        format!("{area}")
    }
}
