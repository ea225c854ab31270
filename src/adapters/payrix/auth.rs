//! Authentication headers.
//!
//! The REST API authenticates with the raw private key in an `APIKEY` header.
//! The risk API on the versioned host expects the same key as a bearer token,
//! plus two legacy headers it still requires.

use crate::ports::Headers;

/// Header carrying the private key on the REST API.
pub const API_KEY_HEADER: &str = "APIKEY";

/// Header carrying search filters for collection queries.
pub const SEARCH_HEADER: &str = "search";

/// Headers for standard REST calls.
pub fn token_headers(private_token: &str) -> Headers {
    Headers::new()
        .with("Content-Type", "application/json")
        .with(API_KEY_HEADER, private_token)
}

/// Token headers plus the `search` filter header.
///
/// Filters are joined with `&`; no header is added for an empty filter list.
pub fn search_headers(private_token: &str, search: &[String]) -> Headers {
    let headers = token_headers(private_token);
    if search.is_empty() {
        return headers;
    }
    headers.with(SEARCH_HEADER, search.join("&"))
}

/// Headers for the risk decision API.
pub fn bearer_headers(private_token: &str) -> Headers {
    Headers::new()
        .with("Authorization", format!("Bearer {}", private_token))
        .with("login", "required-but-not-used")
        .with("legacy-auth-header-name", API_KEY_HEADER)
}
