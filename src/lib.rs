//! Pupfinder - terminal client for a remote dog-adoption catalog
//!
//! This library provides the catalog API client and the search-and-selection
//! workflow: filter editing, the dependent search/fetch/location sequence,
//! favorites, and match generation.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use core::{FavoritesSet, FilterState, SearchOutcome, SearchWorkflow, SortDirection, SortField};
pub use models::{Dog, Location, Match, SearchResponse};
pub use services::{CatalogClient, CatalogError, SessionStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let filters = FilterState::new();
        assert!(filters.to_query().ends_with("size=25&from=0"));
    }
}
