//! Search response decoding.
//!
//! The provider answers with a JSON object holding a `hits` array. Each hit is
//! mapped to a [`Wallpaper`]; a missing `hits` key is a zero-result answer, not
//! an error.

use crate::domain::error::{Result, WallgridError};
use crate::domain::{resolve_category, Wallpaper};
use crate::domain::wallpaper::title_from_tags;
use serde::Deserialize;

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Option<Vec<SearchHit>>,
}

/// One search hit as delivered by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub favorites: u64,
}

impl From<SearchHit> for Wallpaper {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            title: title_from_tags(&hit.tags),
            category: resolve_category(&hit.tags),
            image_url: hit.large_image_url,
            alt_text: hit.tags,
            author: hit.user,
            downloads: hit.downloads,
            favorites: hit.favorites,
            page_url: hit.page_url,
        }
    }
}

/// Decoded outcome of a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one hit.
    Found(Vec<Wallpaper>),
    /// Empty or absent `hits`.
    NoResults,
}

/// Decodes a raw host response into a [`SearchOutcome`].
///
/// # Errors
///
/// - [`WallgridError::Request`] for non-2xx status codes
/// - [`WallgridError::Json`] when the body is not a valid response object
pub fn parse_response(status: u16, body: &[u8]) -> Result<SearchOutcome> {
    if !(200..300).contains(&status) {
        let detail = String::from_utf8_lossy(body);
        return Err(WallgridError::Request(format!(
            "search provider returned status {status}: {}",
            detail.trim()
        )));
    }

    let response: SearchResponse = serde_json::from_slice(body)?;

    match response.hits {
        Some(hits) if !hits.is_empty() => Ok(SearchOutcome::Found(
            hits.into_iter().map(Wallpaper::from).collect(),
        )),
        _ => Ok(SearchOutcome::NoResults),
    }
}
