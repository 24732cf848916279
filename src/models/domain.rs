use serde::{Deserialize, Serialize};

/// An adoptable dog as returned by the catalog service
///
/// Immutable once fetched; records are held only for the duration of the
/// result page they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u8,
    pub zip_code: String,
    pub breed: String,
}

/// Geographic record keyed by zip code
///
/// Many dogs may share one location; the zip code is the join key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub county: String,
}

/// Result of the remote matching call: a single dog identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "match")]
    pub match_id: String,
}
