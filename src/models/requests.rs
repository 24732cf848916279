use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login credentials submitted to /auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// Query for /locations/search, used by the zip-code autocomplete
///
/// All fields are optional on the wire; absent fields are omitted rather
/// than sent as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl LocationSearchRequest {
    /// Autocomplete query by partial city name
    pub fn by_city(city: impl Into<String>, size: u32) -> Self {
        Self {
            city: Some(city.into()),
            states: None,
            size: Some(size),
        }
    }
}
