//! Fetch lifecycle: request construction and response application.
//!
//! A fetch is split in two halves because the HTTP call itself is made by the
//! Zellij host. [`start`] prepares state and returns the request; [`finish`]
//! runs when the host delivers the answer. The in-flight guard lives in the
//! event handler, not here.

use crate::app::AppState;
use crate::domain::error::WallgridError;
use crate::search::{parse_response, SearchOutcome, SearchRequest};

/// Shown when the provider answers with zero hits.
pub const NO_RESULTS_MESSAGE: &str = "No wallpapers found. Try a different search term.";

/// Shown for transport, status and decoding failures.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load wallpapers. Please try again later.";

/// Marks a fetch as started and returns the request to send.
///
/// The query is the trimmed `search_term` when non-empty, otherwise the
/// default query of the active category.
pub fn start(state: &mut AppState, search_term: Option<&str>) -> SearchRequest {
    state.in_flight = true;
    state.generation += 1;
    state.grid.show_loading();

    let query = search_term
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map_or_else(|| state.filter.default_query(), ToString::to_string);

    tracing::info!(
        generation = state.generation,
        query = %query,
        filter = state.filter.label(),
        "fetch started"
    );

    SearchRequest::new(query, state.generation)
}

/// Applies the host's answer for fetch `generation`.
///
/// Answers for anything but the latest generation are dropped. Returns whether
/// the state changed.
pub fn finish(state: &mut AppState, generation: u64, status: u16, body: &[u8]) -> bool {
    if generation != state.generation {
        tracing::debug!(
            generation,
            latest = state.generation,
            "discarding stale search response"
        );
        return false;
    }

    match parse_response(status, body) {
        Ok(SearchOutcome::Found(wallpapers)) => {
            state.in_flight = false;
            state.grid.hide_loading();

            tracing::info!(generation, count = wallpapers.len(), "fetch completed");
            state.wallpapers = wallpapers;
            state.selected_index = 0;
            state.refresh_grid();
        }
        Ok(SearchOutcome::NoResults) => {
            state.in_flight = false;
            state.grid.hide_loading();

            tracing::info!(generation, "fetch returned no results");
            state.grid.show_message(NO_RESULTS_MESSAGE);
        }
        Err(e) => fail(state, generation, &e),
    }

    true
}

/// Ends fetch `generation` with a failure.
///
/// Logs the cause and shows the generic error message. There is no retry.
pub fn fail(state: &mut AppState, generation: u64, error: &WallgridError) {
    if generation != state.generation {
        return;
    }

    state.in_flight = false;
    state.grid.hide_loading();

    tracing::error!(generation, error = %error, "fetch failed");
    state.grid.show_error(FETCH_ERROR_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::GridContent;
    use crate::domain::{Category, CategoryFilter};
    use crate::search::SearchEndpoint;
    use crate::storage::{share, MemoryStore};
    use crate::ui::theme::ThemePair;

    fn new_state() -> AppState {
        AppState::new(
            share(MemoryStore::default()),
            SearchEndpoint::default(),
            ThemePair::default(),
            true,
        )
    }

    #[test]
    fn start_prefers_trimmed_term_over_category_query() {
        let mut state = new_state();
        state.filter = CategoryFilter::Only(Category::Space);

        let request = start(&mut state, Some("  nebula "));
        assert_eq!(request.query, "nebula");
        assert_eq!(request.generation, 1);
        assert!(state.in_flight);
        assert_eq!(state.grid.content(), &GridContent::Loading);

        let request = start(&mut state, Some("   "));
        assert_eq!(request.query, "space galaxy");
        assert_eq!(request.generation, 2);
    }

    #[test]
    fn stale_failure_leaves_current_fetch_alone() {
        let mut state = new_state();
        start(&mut state, None);
        start(&mut state, None);

        fail(&mut state, 1, &WallgridError::Request("timeout".to_string()));

        assert!(state.in_flight);
        assert_eq!(state.grid.content(), &GridContent::Loading);
    }

    #[test]
    fn undecodable_body_is_a_failure() {
        let mut state = new_state();
        let generation = start(&mut state, None).generation;

        assert!(finish(&mut state, generation, 200, b"<html>"));

        assert!(!state.in_flight);
        assert!(matches!(
            state.grid.content(),
            GridContent::Message { text, .. } if text == FETCH_ERROR_MESSAGE
        ));
    }
}
