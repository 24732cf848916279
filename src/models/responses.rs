use crate::models::domain::Location;
use serde::{Deserialize, Serialize};

/// Response for GET /dogs/search
///
/// `result_ids` order defines display order. `next`/`prev` are opaque
/// query strings; the client round-trips them verbatim and never parses
/// or constructs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "resultIds")]
    pub result_ids: Vec<String>,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Response for POST /locations/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSearchResponse {
    pub results: Vec<Location>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_cursors_optional() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"resultIds":["d1","d2"],"total":2}"#).unwrap();
        assert_eq!(resp.result_ids, vec!["d1", "d2"]);
        assert_eq!(resp.total, 2);
        assert!(resp.next.is_none());
        assert!(resp.prev.is_none());
    }

    #[test]
    fn test_search_response_with_cursors() {
        let resp: SearchResponse = serde_json::from_str(
            r#"{"resultIds":[],"total":100,"next":"size=25&from=25","prev":"size=25&from=0"}"#,
        )
        .unwrap();
        assert_eq!(resp.next.as_deref(), Some("size=25&from=25"));
        assert_eq!(resp.prev.as_deref(), Some("size=25&from=0"));
    }
}
