//! Wire protocol for the photo-search provider.
//!
//! The plugin never performs HTTP itself: the runtime hands the URL built here
//! to the Zellij host, and the host's answer comes back as raw status and body
//! bytes that [`parse_response`] decodes.
//!
//! - `request`: Query parameters and URL construction
//! - `response`: Response body types and hit-to-wallpaper mapping

pub mod request;
pub mod response;

pub use request::{SearchEndpoint, SearchRequest, DEFAULT_API_URL, GENERATION_KEY, PAGE_SIZE};
pub use response::{parse_response, SearchHit, SearchOutcome, SearchResponse};
