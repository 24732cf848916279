use crate::core::favorites::FavoritesSet;
use crate::core::filters::FilterState;
use crate::models::{Dog, Location, LocationSearchRequest, SearchResponse};
use crate::services::{CatalogClient, CatalogError};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How many autocomplete suggestions to request per lookup
const SUGGEST_SIZE: u32 = 10;

/// Gate for autocomplete lookups: minimum input length plus a debounce
/// interval, so network calls stay bounded relative to keystrokes
#[derive(Debug)]
pub struct SuggestGate {
    min_len: usize,
    debounce: Duration,
    last_allowed: Option<Instant>,
}

impl SuggestGate {
    pub fn new(min_len: usize, debounce: Duration) -> Self {
        Self {
            min_len,
            debounce,
            last_allowed: None,
        }
    }

    /// Whether a lookup for this input may go out now
    ///
    /// Allowed lookups start a new debounce window; rejected ones do not.
    fn allows(&mut self, input: &str) -> bool {
        if input.chars().count() < self.min_len {
            return false;
        }
        if let Some(last) = self.last_allowed {
            if last.elapsed() < self.debounce {
                return false;
            }
        }
        self.last_allowed = Some(Instant::now());
        true
    }
}

impl Default for SuggestGate {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(300))
    }
}

/// Whether a completed fetch was applied to the view or discarded as stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied,
    Superseded,
}

/// A fully fetched result page, not yet applied to the view state
///
/// Produced by [`SearchWorkflow::fetch_page`] and applied (or discarded)
/// by [`SearchWorkflow::apply_page`], so overlapping searches can be
/// resolved by generation instead of by completion order.
#[derive(Debug)]
pub struct FetchedPage {
    response: SearchResponse,
    dogs: Vec<Dog>,
    locations: HashMap<String, Location>,
}

/// The search-and-selection workflow
///
/// Owns all view state: the breed list, editable filters, favorites, the
/// current result page with its zip-code lookup, pagination cursors, the
/// matched dog, and the loading flag. Each search runs the dependent
/// sequence search → dogs → locations; any step failing leaves the
/// previously displayed results in place.
pub struct SearchWorkflow {
    client: Arc<CatalogClient>,
    pub filters: FilterState,
    favorites: FavoritesSet,
    breeds: Vec<String>,
    dogs: Vec<Dog>,
    locations: HashMap<String, Location>,
    page: Option<SearchResponse>,
    matched: Option<Dog>,
    zip_suggestions: Vec<String>,
    suggest_gate: SuggestGate,
    loading: bool,
    generation: u64,
}

impl SearchWorkflow {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self::with_suggest_gate(client, SuggestGate::default())
    }

    pub fn with_suggest_gate(client: Arc<CatalogClient>, suggest_gate: SuggestGate) -> Self {
        Self {
            client,
            filters: FilterState::new(),
            favorites: FavoritesSet::new(),
            breeds: Vec::new(),
            dogs: Vec::new(),
            locations: HashMap::new(),
            page: None,
            matched: None,
            zip_suggestions: Vec::new(),
            suggest_gate,
            loading: false,
            generation: 0,
        }
    }

    /// Fetch the breed list once, for filter selection
    ///
    /// Failure is non-fatal: the error is logged and the breed options
    /// stay empty.
    pub async fn init(&mut self) {
        match self.client.get_breeds().await {
            Ok(breeds) => self.breeds = breeds,
            Err(e) => tracing::warn!("Failed to fetch breed list: {}", e),
        }
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    /// Resolve a dog's location by zip code; a miss renders as absent,
    /// not an error
    pub fn location_for(&self, zip_code: &str) -> Option<&Location> {
        self.locations.get(zip_code)
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn matched_dog(&self) -> Option<&Dog> {
        self.matched.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_results(&self) -> Option<u64> {
        self.page.as_ref().map(|p| p.total)
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.page.as_ref().and_then(|p| p.next.as_deref())
    }

    pub fn prev_cursor(&self) -> Option<&str> {
        self.page.as_ref().and_then(|p| p.prev.as_deref())
    }

    pub fn zip_suggestions(&self) -> &[String] {
        &self.zip_suggestions
    }

    /// Run a fresh search from the current filters
    pub async fn search(&mut self) -> Result<SearchOutcome, CatalogError> {
        let query = self.filters.to_query();
        self.run_query(&query).await
    }

    /// Re-enter the fetch sequence with the next-page cursor, verbatim
    ///
    /// Returns `None` without a network call when there is no next page.
    pub async fn next_page(&mut self) -> Result<Option<SearchOutcome>, CatalogError> {
        match self.next_cursor().map(str::to_owned) {
            Some(cursor) => Ok(Some(self.run_query(&cursor).await?)),
            None => Ok(None),
        }
    }

    /// Previous-page counterpart of [`next_page`](Self::next_page)
    pub async fn prev_page(&mut self) -> Result<Option<SearchOutcome>, CatalogError> {
        match self.prev_cursor().map(str::to_owned) {
            Some(cursor) => Ok(Some(self.run_query(&cursor).await?)),
            None => Ok(None),
        }
    }

    /// Execute the three-step fetch sequence for an opaque query string
    ///
    /// The loading flag is cleared whether the sequence succeeds or not;
    /// on failure the previously displayed results are left untouched and
    /// the error is returned for the caller to log or surface.
    pub async fn run_query(&mut self, query: &str) -> Result<SearchOutcome, CatalogError> {
        let generation = self.begin_search();
        let fetched = Self::fetch_page(&self.client, query).await;
        self.loading = false;

        match fetched {
            Ok(page) => Ok(self.apply_page(generation, page)),
            Err(e) => {
                tracing::error!("Dog search failed: {}", e);
                Err(e)
            }
        }
    }

    /// Start a new search generation and raise the loading flag
    ///
    /// Any fetch still in flight from an earlier generation becomes stale
    /// the moment this returns.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// The dependent fetch sequence: search ids, then dog records, then
    /// locations for the distinct zip codes of those dogs
    pub async fn fetch_page(
        client: &CatalogClient,
        query: &str,
    ) -> Result<FetchedPage, CatalogError> {
        let response = client.search_dogs(query).await?;

        // get_dogs short-circuits when the result page is empty
        let dogs = client.get_dogs(&response.result_ids).await?;

        let mut zip_codes: Vec<String> = dogs.iter().map(|d| d.zip_code.clone()).collect();
        zip_codes.sort();
        zip_codes.dedup();

        let locations = client
            .get_locations(&zip_codes)
            .await?
            .into_iter()
            .map(|loc| (loc.zip_code.clone(), loc))
            .collect();

        Ok(FetchedPage {
            response,
            dogs,
            locations,
        })
    }

    /// Apply a fetched page if its generation is still current
    ///
    /// A page from a superseded generation is discarded so that whichever
    /// search was issued last wins, regardless of completion order.
    pub fn apply_page(&mut self, generation: u64, page: FetchedPage) -> SearchOutcome {
        if generation != self.generation {
            tracing::debug!(
                "Discarding stale search result (generation {} < {})",
                generation,
                self.generation
            );
            return SearchOutcome::Superseded;
        }

        self.dogs = page.dogs;
        self.locations = page.locations;
        self.page = Some(page.response);
        SearchOutcome::Applied
    }

    /// Look up zip-code suggestions by partial city name
    ///
    /// Gated on input length and debounce interval; a gated or failed
    /// lookup leaves the previous suggestions in place. Failures are
    /// logged, never surfaced.
    pub async fn suggest_zip_codes(&mut self, input: &str) -> &[String] {
        if !self.suggest_gate.allows(input) {
            return &self.zip_suggestions;
        }

        let request = LocationSearchRequest::by_city(input, SUGGEST_SIZE);
        match self.client.search_locations(&request).await {
            Ok(response) => {
                self.zip_suggestions = response
                    .results
                    .into_iter()
                    .map(|loc| loc.zip_code)
                    .collect();
            }
            Err(e) => tracing::warn!("Zip code search failed: {}", e),
        }

        &self.zip_suggestions
    }

    /// Toggle a dog in or out of the favorites set; local, no network
    pub fn toggle_favorite(&mut self, id: impl Into<String>) {
        self.favorites.toggle(id);
    }

    /// Request a match from the current favorites
    ///
    /// Returns `None` without a network call when favorites are empty.
    /// On success the matched id is resolved to a full dog record and
    /// retained until [`dismiss_match`](Self::dismiss_match).
    pub async fn request_match(&mut self) -> Result<Option<&Dog>, CatalogError> {
        if self.favorites.is_empty() {
            return Ok(None);
        }

        let matched = self.client.generate_match(self.favorites.ids()).await?;
        let dogs = self
            .client
            .get_dogs(std::slice::from_ref(&matched.match_id))
            .await?;

        self.matched = dogs.into_iter().next();
        Ok(self.matched.as_ref())
    }

    /// Dismiss the match dialog: clears the matched dog, keeps favorites
    pub fn dismiss_match(&mut self) {
        self.matched = None;
    }
}
