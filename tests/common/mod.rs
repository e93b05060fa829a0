//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Provider records in the REST Countries response shape
//! - A mock provider built on wiremock
//! - A controller wired to mock I/O streams

#![allow(dead_code)]

use countryline::cmd_args::CommandLineArgs;
use countryline::{
    AppController, CountriesClient, MockEventStream, MockRenderStream, RecordingLinkOpener,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Versioned path prefix served by the mock provider
pub const API_PREFIX: &str = "/v3.1";

pub type TestController = AppController<CountriesClient, MockEventStream, MockRenderStream>;

/// Controller plus handles onto everything it writes or opens
pub struct Harness {
    pub app: TestController,
    pub output: MockRenderStream,
    pub opener: RecordingLinkOpener,
}

impl Harness {
    /// Build a controller against the mock server, with extra CLI flags
    pub fn new(server: &MockServer, flags: &[&str]) -> Self {
        let base_url = format!("{}{}/", server.uri(), API_PREFIX);
        let client = CountriesClient::new(&base_url, Duration::from_secs(5))
            .expect("mock server URL should be valid");
        let args =
            CommandLineArgs::parse_from(std::iter::once("countryline").chain(flags.iter().copied()));
        let output = MockRenderStream::new();
        let opener = RecordingLinkOpener::new();

        let app = AppController::with_io_streams(
            &args,
            client,
            MockEventStream::empty(),
            output.clone(),
            Box::new(opener.clone()),
        );

        Self {
            app,
            output,
            opener,
        }
    }

    /// Start the controller and wait for the startup fetch
    pub async fn started(server: &MockServer) -> Self {
        let mut harness = Self::new(server, &[]);
        harness.app.start().expect("startup should render");
        harness.app.settle().await.expect("startup fetch should finish");
        harness
    }

    /// Enter a line and wait for any fetch it dispatched
    pub async fn enter(&mut self, line: &str) {
        self.app.handle_line(line).expect("line should be handled");
        self.app.settle().await.expect("fetches should finish");
    }

    /// Common names of the displayed cards, in display order
    pub fn names(&self) -> Vec<String> {
        self.app
            .view_model()
            .cards()
            .iter()
            .map(|card| card.record().common_name().to_string())
            .collect()
    }
}

/// Serve `records` for GET `<prefix>/<resource>`
pub async fn mount_records(server: &MockServer, resource: &str, records: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(records)))
        .mount(server)
        .await;
}

/// Serve `records` for GET `<prefix>/<resource>` after a delay
pub async fn mount_delayed_records(
    server: &MockServer,
    resource: &str,
    records: Vec<Value>,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/{resource}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(Value::Array(records))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Mock provider whose `all` resource returns the full dataset
pub async fn provider_with_dataset() -> MockServer {
    let server = MockServer::start().await;
    mount_records(&server, "all", dataset()).await;
    server
}

pub fn dataset() -> Vec<Value> {
    vec![
        peru(),
        belgium(),
        canada(),
        chad(),
        austria(),
        georgia(),
        antarctica(),
    ]
}

pub fn belgium() -> Value {
    json!({
        "name": {"common": "Belgium", "official": "Kingdom of Belgium", "nativeName": {}},
        "cca2": "BE",
        "capital": ["Brussels"],
        "region": "Europe",
        "subregion": "Western Europe",
        "continents": ["Europe"],
        "languages": {"deu": "German", "fra": "French", "nld": "Dutch"},
        "area": 30528.0,
        "population": 11555997,
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "flags": {"png": "https://flagcdn.com/w320/be.png", "alt": "The flag of Belgium"},
        "maps": {"googleMaps": "https://goo.gl/maps/UQQzat85TCtPRXAL8"}
    })
}

pub fn canada() -> Value {
    json!({
        "name": {"common": "Canada", "official": "Canada"},
        "cca2": "CA",
        "capital": ["Ottawa"],
        "region": "Americas",
        "subregion": "North America",
        "continents": ["North America"],
        "languages": {"eng": "English", "fra": "French"},
        "area": 9984670.0,
        "population": 38005238,
        "currencies": {"CAD": {"name": "Canadian dollar", "symbol": "$"}},
        "flags": {"png": "https://flagcdn.com/w320/ca.png"},
        "maps": {"googleMaps": "https://goo.gl/maps/jmEVLugreeqiZXxbA"}
    })
}

pub fn peru() -> Value {
    json!({
        "name": {"common": "Peru", "official": "Republic of Peru"},
        "cca2": "PE",
        "capital": ["Lima"],
        "region": "Americas",
        "subregion": "South America",
        "continents": ["South America"],
        "languages": {"aym": "Aymara", "que": "Quechua", "spa": "Spanish"},
        "area": 1285216.0,
        "population": 32971846,
        "currencies": {"PEN": {"name": "Peruvian sol", "symbol": "S/ "}},
        "flags": {"png": "https://flagcdn.com/w320/pe.png"},
        "maps": {"googleMaps": "https://goo.gl/maps/uDWEUaXNcZTng1fP6"}
    })
}

pub fn chad() -> Value {
    json!({
        "name": {"common": "Chad", "official": "Republic of Chad"},
        "cca2": "TD",
        "capital": ["N'Djamena"],
        "region": "Africa",
        "subregion": "Middle Africa",
        "continents": ["Africa"],
        "languages": {"ara": "Arabic", "fra": "French"},
        "area": 1284000.0,
        "population": 16425859,
        "currencies": {"XAF": {"name": "Central African CFA franc", "symbol": "Fr"}},
        "flags": {"png": "https://flagcdn.com/w320/td.png"},
        "maps": {"googleMaps": "https://goo.gl/maps/ziUdAZ8skuNfx5Hx7"}
    })
}

pub fn austria() -> Value {
    json!({
        "name": {"common": "Austria", "official": "Republic of Austria"},
        "cca2": "AT",
        "capital": ["Vienna"],
        "region": "Europe",
        "subregion": "Central Europe",
        "continents": ["Europe"],
        "languages": {"bar": "Austro-Bavarian German"},
        "area": 83871.0,
        "population": 8917205,
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "flags": {"png": "https://flagcdn.com/w320/at.png"},
        "maps": {"googleMaps": "https://goo.gl/maps/pCWpWQhznHyRzQcu9"}
    })
}

/// Synthetic record whose subregion, not region, is "Europe"
pub fn georgia() -> Value {
    json!({
        "name": {"common": "Georgia", "official": "Georgia"},
        "cca2": "GE",
        "capital": ["Tbilisi"],
        "region": "Asia",
        "subregion": "Europe",
        "continents": ["Asia"],
        "languages": {"kat": "Georgian"},
        "area": 69700.0,
        "population": 3714000,
        "currencies": {"GEL": {"name": "lari", "symbol": "₾"}},
        "flags": {"png": "https://flagcdn.com/w320/ge.png"},
        "maps": {"googleMaps": "https://goo.gl/maps/bvCaGBePR1ZEDK5cA"}
    })
}

/// Record without capital, languages or currencies
pub fn antarctica() -> Value {
    json!({
        "name": {"common": "Antarctica", "official": "Antarctica"},
        "cca2": "AQ",
        "region": "Antarctic",
        "continents": ["Antarctica"],
        "area": 14000000.0,
        "population": 1000,
        "flags": {"png": "https://flagcdn.com/w320/aq.png"},
        "maps": {"googleMaps": "https://goo.gl/maps/kyBuJriu4itiXank7"}
    })
}
