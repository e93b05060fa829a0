//! # Countries Service
//!
//! Fetches country records from the REST Countries provider.

use super::error::DirectoryError;
use crate::repl::models::CountryRecord;
use anyhow::Result;
use reqwest::Url;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Provider lookup kinds, in the order the search resolver tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Name,
    Translation,
    Capital,
    Language,
    Demonym,
    Region,
    Subregion,
}

impl Lookup {
    pub fn segment(&self) -> &'static str {
        match self {
            Lookup::Name => "name",
            Lookup::Translation => "translation",
            Lookup::Capital => "capital",
            Lookup::Language => "lang",
            Lookup::Demonym => "demonym",
            Lookup::Region => "region",
            Lookup::Subregion => "subregion",
        }
    }
}

/// Provider resource path identifying what to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePath {
    All,
    Lookup { lookup: Lookup, text: String },
}

impl ResourcePath {
    pub fn lookup(lookup: Lookup, text: impl Into<String>) -> Self {
        ResourcePath::Lookup {
            lookup,
            text: text.into(),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourcePath::All => f.write_str("all"),
            ResourcePath::Lookup { lookup, text } => write!(f, "{}/{}", lookup.segment(), text),
        }
    }
}

/// Source of country records
///
/// Implemented over HTTP by [`CountriesClient`]; tests substitute their own.
pub trait CountrySource: Clone + Send + Sync + 'static {
    /// Fetch the records behind `path`
    ///
    /// Fails with [`DirectoryError::Request`] when the provider cannot
    /// deliver. An empty vector is a successful, empty answer.
    fn fetch(
        &self,
        path: &ResourcePath,
    ) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send;
}

/// HTTP client for the REST Countries API
#[derive(Debug, Clone)]
pub struct CountriesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CountriesClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL '{base_url}': {e}"))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        tracing::debug!("CountriesClient created for {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Full request URL for `path`; user text is percent-encoded as one segment
    pub fn url_for(&self, path: &ResourcePath) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("Base URL cannot carry a path: {}", self.base_url))?;
            segments.pop_if_empty();
            match path {
                ResourcePath::All => {
                    segments.push("all");
                }
                ResourcePath::Lookup { lookup, text } => {
                    segments.push(lookup.segment()).push(text);
                }
            }
        }
        Ok(url)
    }
}

impl CountrySource for CountriesClient {
    async fn fetch(&self, path: &ResourcePath) -> Result<Vec<CountryRecord>> {
        let url = self.url_for(path)?;
        tracing::debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request for '{}' failed: {}", path, e);
                return Err(DirectoryError::request(path.to_string(), None, e.to_string()).into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Provider answered {} for '{}'", status.as_u16(), path);
            return Err(DirectoryError::request(
                path.to_string(),
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or(""),
            )
            .into());
        }

        match response.json::<Vec<CountryRecord>>().await {
            Ok(records) => {
                tracing::debug!("Fetched {} records for '{}'", records.len(), path);
                Ok(records)
            }
            Err(e) => {
                tracing::warn!("Malformed response for '{}': {}", path, e);
                Err(DirectoryError::request(
                    path.to_string(),
                    None,
                    format!("Failed to decode response: {e}"),
                )
                .into())
            }
        }
    }
}
