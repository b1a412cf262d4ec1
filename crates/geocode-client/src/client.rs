//! Nominatim HTTP client.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::error::GeocodeError;
use crate::place::{Place, SearchOutcome};

/// Public Nominatim instance.
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = "wayfare/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Candidates requested per forward search.
const SEARCH_LIMIT: usize = 8;

/// Queries shorter than this (trimmed) are answered with an empty outcome
/// without hitting the service.
const MIN_QUERY_LEN: usize = 2;

/// Async geocoding client.
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Client against the public Nominatim instance.
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_BASE_URL).expect("default base URL is valid")
    }

    /// Client against a custom instance (tests, self-hosted deployments).
    pub fn with_base_url(base_url: &str) -> Result<Self, GeocodeError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| GeocodeError::InvalidUrl(base_url.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");
        Ok(Self { http, base_url })
    }

    /// Forward lookup: free-text query to ranked candidate locations.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, GeocodeError> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            return Ok(SearchOutcome {
                query: query.to_string(),
                places: Vec::new(),
            });
        }

        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("q", trimmed)
            .append_pair("format", "json")
            .append_pair("limit", &SEARCH_LIMIT.to_string())
            .append_pair("addressdetails", "1");

        let body = self.get(url).await?;
        Ok(SearchOutcome {
            query: query.to_string(),
            places: parse_search_body(&body)?,
        })
    }

    /// Reverse lookup: coordinates to a display address. `None` when the
    /// service has no answer for the position.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, GeocodeError> {
        let mut url = self.endpoint("reverse")?;
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("format", "json")
            .append_pair("addressdetails", "1");

        let body = self.get(url).await?;
        parse_reverse_body(&body)
    }

    /// [`search`](Self::search) on a runtime owned by the call, for
    /// non-async callers.
    pub fn search_blocking(&self, query: &str) -> Result<SearchOutcome, GeocodeError> {
        block_on(self.search(query))
    }

    /// [`reverse`](Self::reverse) on a runtime owned by the call.
    pub fn reverse_blocking(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, GeocodeError> {
        block_on(self.reverse(latitude, longitude))
    }

    fn endpoint(&self, path: &str) -> Result<Url, GeocodeError> {
        self.base_url
            .join(path)
            .map_err(|_| GeocodeError::InvalidUrl(format!("{}/{path}", self.base_url)))
    }

    async fn get(&self, url: Url) -> Result<String, GeocodeError> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|err| GeocodeError::Request(err.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            warn!("geocoding service rate limit hit");
            return Err(GeocodeError::RateLimited);
        }
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| GeocodeError::Request(err.to_string()))
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

fn block_on<T>(
    future: impl std::future::Future<Output = Result<T, GeocodeError>>,
) -> Result<T, GeocodeError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| GeocodeError::Request(err.to_string()))?
        .block_on(future)
}

// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResultWire {
    #[serde(default)]
    display_name: String,
    lat: String,
    lon: String,
    #[serde(default)]
    class: Option<String>,
    #[serde(default, rename = "type")]
    place_type: Option<String>,
    #[serde(default)]
    place_rank: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ReverseWire {
    #[serde(default)]
    display_name: Option<String>,
    // The service reports "unable to geocode" as an error field with a
    // 200 status.
    #[serde(default)]
    error: Option<String>,
}

fn parse_search_body(body: &str) -> Result<Vec<Place>, GeocodeError> {
    let results: Vec<SearchResultWire> =
        serde_json::from_str(body).map_err(|err| GeocodeError::Parse(err.to_string()))?;

    Ok(results
        .into_iter()
        .filter_map(|wire| match (wire.lat.parse::<f64>(), wire.lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => Some(Place {
                name: leading_segment(&wire.display_name),
                display_name: wire.display_name,
                latitude,
                longitude,
                class: wire.class,
                place_type: wire.place_type,
                place_rank: wire.place_rank,
            }),
            _ => {
                warn!(lat = %wire.lat, lon = %wire.lon, "skipping candidate with unparseable coordinates");
                None
            }
        })
        .collect())
}

fn parse_reverse_body(body: &str) -> Result<Option<String>, GeocodeError> {
    let wire: ReverseWire =
        serde_json::from_str(body).map_err(|err| GeocodeError::Parse(err.to_string()))?;
    if wire.error.is_some() {
        return Ok(None);
    }
    Ok(wire.display_name)
}

fn leading_segment(display_name: &str) -> String {
    display_name
        .split(',')
        .next()
        .unwrap_or(display_name)
        .trim()
        .to_string()
}
