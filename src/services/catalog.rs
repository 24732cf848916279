use crate::models::{
    Dog, Location, LocationSearchRequest, LocationSearchResponse, LoginRequest, Match,
    SearchResponse,
};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: session missing or expired")]
    Unauthorized,
}

/// Catalog API client
///
/// Handles all communication with the remote adoption catalog:
/// - Session login/logout
/// - Breed list, dog search and batch fetch
/// - Location lookup and city autocomplete
/// - Match generation from a favorites set
///
/// The session credential is a cookie set by the login call; the
/// underlying cookie store attaches it to every subsequent request.
/// Every call is a fresh round trip: no retries, no caching.
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client against the given base URL
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success status to an error, keeping the operation name
    /// in the message for the diagnostic log
    fn ensure_success(op: &str, response: Response) -> Result<Response, CatalogError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }
        if !status.is_success() {
            return Err(CatalogError::ApiError(format!("{} failed: {}", op, status)));
        }
        Ok(response)
    }

    /// Establish a session for the given user
    ///
    /// On success the service sets a session cookie which rides on all
    /// later calls. The response body is empty and discarded.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), CatalogError> {
        tracing::debug!("Logging in as {}", request.name);

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;

        Self::ensure_success("login", response)?;
        Ok(())
    }

    /// Invalidate the server-side session
    ///
    /// Best-effort from the caller's perspective: navigation away should
    /// not block on this call failing.
    pub async fn logout(&self) -> Result<(), CatalogError> {
        let response = self.client.post(self.url("/auth/logout")).send().await?;
        Self::ensure_success("logout", response)?;
        Ok(())
    }

    /// Fetch the full list of known breeds
    pub async fn get_breeds(&self) -> Result<Vec<String>, CatalogError> {
        let response = self.client.get(self.url("/dogs/breeds")).send().await?;
        let response = Self::ensure_success("get_breeds", response)?;
        Ok(response.json().await?)
    }

    /// Search for dogs using a caller-constructed query string
    ///
    /// The query is appended verbatim; pagination cursors from a previous
    /// `SearchResponse` are passed back through here unmodified.
    pub async fn search_dogs(&self, query: &str) -> Result<SearchResponse, CatalogError> {
        let url = format!("{}?{}", self.url("/dogs/search"), query);
        tracing::debug!("Searching dogs: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success("search_dogs", response)?;
        Ok(response.json().await?)
    }

    /// Fetch full dog records for the given identifiers
    ///
    /// Response order is not guaranteed to match `ids`. An empty input
    /// short-circuits to an empty result without a network call.
    pub async fn get_dogs(&self, ids: &[String]) -> Result<Vec<Dog>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.url("/dogs"))
            .json(&ids)
            .send()
            .await?;

        let response = Self::ensure_success("get_dogs", response)?;
        Ok(response.json().await?)
    }

    /// Fetch location records for the given zip codes
    ///
    /// Same empty-input short-circuit as `get_dogs`.
    pub async fn get_locations(&self, zip_codes: &[String]) -> Result<Vec<Location>, CatalogError> {
        if zip_codes.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.url("/locations"))
            .json(&zip_codes)
            .send()
            .await?;

        let response = Self::ensure_success("get_locations", response)?;
        Ok(response.json().await?)
    }

    /// Search locations, typically by partial city name for autocomplete
    pub async fn search_locations(
        &self,
        request: &LocationSearchRequest,
    ) -> Result<LocationSearchResponse, CatalogError> {
        let response = self
            .client
            .post(self.url("/locations/search"))
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success("search_locations", response)?;
        Ok(response.json().await?)
    }

    /// Ask the service to pick a match from the given favorites
    ///
    /// The service rejects an empty list; callers guard against that case
    /// before invoking this.
    pub async fn generate_match(&self, favorite_ids: &[String]) -> Result<Match, CatalogError> {
        tracing::debug!("Generating match from {} favorites", favorite_ids.len());

        let response = self
            .client
            .post(self.url("/dogs/match"))
            .json(&favorite_ids)
            .send()
            .await?;

        let response = Self::ensure_success("generate_match", response)?;
        Ok(response.json().await?)
    }
}
