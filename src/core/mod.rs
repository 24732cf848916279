// Core workflow exports
pub mod favorites;
pub mod filters;
pub mod workflow;

pub use favorites::FavoritesSet;
pub use filters::{FilterState, SortDirection, SortField};
pub use workflow::{SearchOutcome, SearchWorkflow, SuggestGate};
