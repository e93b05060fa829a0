//! # Services Layer
//!
//! Operations that reach outside the process: the country data provider,
//! the search strategy chain built on it, and link opening.
//!
//! Services should only exist when they add real value by:
//! - Abstracting external resources
//! - Providing logic that spans several provider calls

pub mod countries;
pub mod error;
pub mod link;
pub mod search;

// Re-export service types
pub use countries::{CountriesClient, CountrySource, Lookup, ResourcePath};
pub use error::DirectoryError;
pub use link::{LinkOpener, RecordingLinkOpener, SystemLinkOpener};
pub use search::SearchResolver;
