//! # Sort Engine
//!
//! Orders cards by a field. The comparator is always ascending; descending
//! order is the reversal of the ascending result.

use super::card::{Card, NOT_AVAILABLE};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Capital,
    Area,
    Population,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Capital => "capital",
            SortField::Area => "area",
            SortField::Population => "population",
        }
    }

    /// Ascending comparison of two cards on this field
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        let (a, b) = (a.record(), b.record());
        match self {
            SortField::Name => text_key(&a.name.common).cmp(&text_key(&b.name.common)),
            SortField::Capital => {
                let a = a.capital_text().unwrap_or_else(|| NOT_AVAILABLE.to_string());
                let b = b.capital_text().unwrap_or_else(|| NOT_AVAILABLE.to_string());
                text_key(&a).cmp(&text_key(&b))
            }
            SortField::Area => a.area.total_cmp(&b.area),
            SortField::Population => a.population.cmp(&b.population),
        }
    }
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "capital" => Ok(SortField::Capital),
            "area" => Ok(SortField::Area),
            "population" | "pop" => Ok(SortField::Population),
            other => Err(anyhow::anyhow!(
                "Unknown sort field '{other}'. Use: name, capital, area, population"
            )),
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(anyhow::anyhow!(
                "Unknown sort direction '{other}'. Use: asc, desc"
            )),
        }
    }
}

fn text_key(text: &str) -> String {
    text.to_lowercase()
}

/// Sort cards in place
///
/// The stable ascending comparator always runs first; descending reverses
/// its result, so a direction toggle is an exact reversal.
pub fn sort(cards: &mut [Card], field: SortField, direction: SortDirection) {
    cards.sort_by(|a, b| field.compare(a, b));
    if direction == SortDirection::Descending {
        cards.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::models::country::fixtures::country;

    fn card(name: &str, capital: &str, population: u64) -> Card {
        let mut record = country(name, &name[..2].to_uppercase());
        record.capital = Some(vec![capital.to_string()]);
        record.population = population;
        record.area = population as f64 / 100.0;
        Card::render(&record)
    }

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.record().common_name()).collect()
    }

    #[test]
    fn population_sort_should_order_numerically() {
        let mut cards = vec![
            card("Canada", "Ottawa", 38_000_000),
            card("Belgium", "Brussels", 11_500_000),
        ];

        sort(&mut cards, SortField::Population, SortDirection::Ascending);
        assert_eq!(names(&cards), vec!["Belgium", "Canada"]);

        cards.reverse();
        assert_eq!(names(&cards), vec!["Canada", "Belgium"]);
    }

    #[test]
    fn name_sort_should_ignore_case() {
        let mut cards = vec![
            card("belize", "Belmopan", 1),
            card("Austria", "Vienna", 1),
            card("Chad", "N'Djamena", 1),
        ];

        sort(&mut cards, SortField::Name, SortDirection::Ascending);
        assert_eq!(names(&cards), vec!["Austria", "belize", "Chad"]);
    }

    #[test]
    fn capital_sort_should_place_missing_capital_by_placeholder() {
        let mut cards = vec![
            card("Chad", "N'Djamena", 1),
            Card::render(&country("Antarctica", "AQ")),
            card("Austria", "Vienna", 1),
        ];

        sort(&mut cards, SortField::Capital, SortDirection::Ascending);
        assert_eq!(names(&cards), vec!["Chad", "Antarctica", "Austria"]);
    }

    #[test]
    fn area_sort_should_compare_fractional_values() {
        let mut small = country("Monaco", "MC");
        small.area = 2.02;
        let mut smaller = country("Vatican City", "VA");
        smaller.area = 0.49;
        let mut cards = vec![Card::render(&small), Card::render(&smaller)];

        sort(&mut cards, SortField::Area, SortDirection::Ascending);
        assert_eq!(names(&cards), vec!["Vatican City", "Monaco"]);
    }

    #[test]
    fn sort_should_be_stable_for_equal_keys() {
        let mut cards = vec![
            card("Alpha", "Same", 5),
            card("Bravo", "Same", 5),
            card("Charlie", "Same", 5),
        ];

        sort(&mut cards, SortField::Population, SortDirection::Ascending);
        assert_eq!(names(&cards), vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn ascending_sort_should_be_idempotent() {
        let mut cards = vec![
            card("Chad", "N'Djamena", 3),
            card("Austria", "Vienna", 9),
            card("Belize", "Belmopan", 3),
        ];

        for field in [
            SortField::Name,
            SortField::Capital,
            SortField::Area,
            SortField::Population,
        ] {
            sort(&mut cards, field, SortDirection::Ascending);
            let once = cards.clone();
            sort(&mut cards, field, SortDirection::Ascending);
            assert_eq!(cards, once, "{field}");
        }
    }

    #[test]
    fn descending_should_be_exact_reverse_of_ascending() {
        let base = vec![
            card("Chad", "N'Djamena", 3),
            card("Austria", "Vienna", 9),
            card("Belize", "Belmopan", 4),
        ];

        let mut ascending = base.clone();
        sort(&mut ascending, SortField::Population, SortDirection::Ascending);
        let mut descending = base;
        sort(&mut descending, SortField::Population, SortDirection::Descending);

        ascending.reverse();
        assert_eq!(names(&ascending), names(&descending));
    }

    #[test]
    fn descending_should_reverse_stable_ascending_ties() {
        let mut cards = vec![
            card("Alpha", "Same", 5),
            card("Bravo", "Same", 9),
            card("Charlie", "Same", 5),
        ];

        sort(&mut cards, SortField::Population, SortDirection::Descending);
        assert_eq!(names(&cards), vec!["Bravo", "Charlie", "Alpha"]);
    }

    #[test]
    fn field_and_direction_should_parse() {
        assert_eq!("Population".parse::<SortField>().unwrap(), SortField::Population);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("height".parse::<SortField>().is_err());
    }
}
