//! # Models
//!
//! Domain data for the directory: provider records, the cards rendered from
//! them, and the filter and sort engines that operate on both.

pub mod card;
pub mod country;
pub mod displayed_set;
pub mod filter;
pub mod sort;
pub mod taxonomy;

pub use card::Card;
pub use country::{CountryName, CountryRecord, Currency, Flags, Maps, OrderedMap};
pub use displayed_set::DisplayedSet;
pub use filter::{FilterDimension, FilterSelection};
pub use sort::{SortDirection, SortField};
pub use taxonomy::FilterTaxonomy;
