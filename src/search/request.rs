//! Outbound search request.
//!
//! One [`SearchRequest`] is built per fetch and turned into a single HTTP GET.
//! The request carries its generation number so the response can be matched
//! against the latest fetch when it comes back.

use crate::domain::error::{Result, WallgridError};
use url::Url;

/// Fixed page size; the gallery never paginates.
pub const PAGE_SIZE: u32 = 30;

/// Context-map key under which the generation travels through the host.
pub const GENERATION_KEY: &str = "generation";

/// Provider endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://pixabay.com/api/";

/// Where searches go and which key authenticates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    pub api_url: String,
    pub api_key: String,
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl SearchEndpoint {
    /// Full GET URL for `request` against this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WallgridError::Request`] if the configured URL is invalid.
    pub fn url_for(&self, request: &SearchRequest) -> Result<String> {
        request.to_url(&self.api_url, &self.api_key)
    }
}

/// Parameters of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query, empty for "anything".
    pub query: String,

    /// Monotonic fetch generation this request belongs to.
    pub generation: u64,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, generation: u64) -> Self {
        Self {
            query: query.into(),
            generation,
        }
    }

    /// Builds the GET URL with every query parameter the provider expects.
    ///
    /// # Errors
    ///
    /// Returns [`WallgridError::Request`] if `api_url` is not a valid URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use wallgrid::search::SearchRequest;
    ///
    /// let request = SearchRequest::new("space galaxy", 1);
    /// let url = request.to_url("https://pixabay.com/api/", "secret")?;
    /// assert!(url.contains("q=space+galaxy"));
    /// assert!(url.contains("per_page=30"));
    /// # Ok::<(), wallgrid::WallgridError>(())
    /// ```
    pub fn to_url(&self, api_url: &str, api_key: &str) -> Result<String> {
        let per_page = PAGE_SIZE.to_string();
        let params = [
            ("key", api_key),
            ("q", self.query.as_str()),
            ("image_type", "photo"),
            ("orientation", "horizontal"),
            ("per_page", per_page.as_str()),
            ("safesearch", "true"),
        ];

        Url::parse_with_params(api_url, &params)
            .map(String::from)
            .map_err(|e| WallgridError::Request(format!("invalid api url {api_url}: {e}")))
    }
}
