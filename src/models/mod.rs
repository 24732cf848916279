pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dog, Location, Match};
pub use requests::{LocationSearchRequest, LoginRequest};
pub use responses::{LocationSearchResponse, SearchResponse};
