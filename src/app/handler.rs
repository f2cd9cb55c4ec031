//! Event handling and state transition logic.
//!
//! This module implements the interaction controller: it processes user input
//! and host events, mutates [`AppState`], and returns the actions the plugin
//! shim must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp` (suspended while the lightbox is open)
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`, `ExitSearch`
//! - **Filtering**: `SelectCategory`, `NextCategory`, `PreviousCategory`, `ShowFavorites`
//! - **Grid**: `GridClick`, `OpenSelected`, `ToggleSelectedFavorite`
//! - **Lightbox**: `CloseLightbox`, `Download`, `LightboxFavorite`, `Escape`
//! - **Host**: `PermissionsGranted`, `SearchCompleted`
//!
//! # Fetch Guard
//!
//! Category selects and search submits are dropped while a fetch is in
//! flight, so at most one request is ever outstanding.
//!
//! # Example
//!
//! ```rust
//! use wallgrid::app::{handle_event, Action, AppState, Event};
//! use wallgrid::domain::{Category, CategoryFilter};
//! use wallgrid::search::SearchEndpoint;
//! use wallgrid::storage::{share, MemoryStore};
//! use wallgrid::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(
//!     share(MemoryStore::default()),
//!     SearchEndpoint::default(),
//!     ThemePair::default(),
//!     true,
//! );
//! let event = Event::SelectCategory(CategoryFilter::Only(Category::Space));
//! let (_render, actions) = handle_event(&mut state, &event)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchWallpapers { .. }]));
//! # Ok::<(), wallgrid::WallgridError>(())
//! ```

use super::fetcher;
use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CategoryFilter, WallpaperId};

/// Part of a card that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card body; opens the lightbox.
    Card,
    /// The favorite glyph; toggles the favorite in place.
    FavoriteGlyph,
}

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one card (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one card (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode, pre-filled with the active search term.
    SearchMode,
    /// Leaves search mode without searching.
    ExitSearch,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character from the search text.
    Backspace,
    /// Submits the search text.
    SubmitSearch,

    /// Activates a category filter and fetches its default query.
    SelectCategory(CategoryFilter),
    /// Selects the category after the active one.
    NextCategory,
    /// Selects the category before the active one.
    PreviousCategory,
    /// Shows favorited wallpapers of the current collection.
    ShowFavorites,
    /// Flips dark mode and persists the choice.
    ToggleDarkMode,

    /// Click on a rendered card.
    GridClick {
        id: WallpaperId,
        target: ClickTarget,
    },
    /// Opens the lightbox on the selected card.
    OpenSelected,
    /// Toggles the favorite state of the selected card.
    ToggleSelectedFavorite,

    /// Closes the lightbox if open, otherwise leaves search mode.
    Escape,
    /// Closes the lightbox; leaves search mode alone.
    CloseLightbox,
    /// Opens the lightbox image externally.
    Download,
    /// Toggles the favorite state of the lightbox item.
    LightboxFavorite,

    /// Host permissions were granted; runs the initial fetch.
    PermissionsGranted,

    /// The host answered a search request.
    SearchCompleted {
        generation: u64,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render along with the actions, in order.
///
/// # Errors
///
/// Currently every failure is absorbed into state (an error message, a
/// logged warning); the `Result` keeps the shim's error path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventName(event)).entered();

    match event {
        Event::KeyDown => {
            if state.lightbox.scroll_locked() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.lightbox.scroll_locked() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.search_input.clone_from(&state.search_term);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_input, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            tracing::trace!(query = %state.search_input, "search text updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.pop();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => Ok(submit_search(state)),
        Event::SelectCategory(filter) => Ok(select_category(state, *filter)),
        Event::NextCategory => {
            let next = state.filter.next();
            Ok(select_category(state, next))
        }
        Event::PreviousCategory => {
            let previous = state.filter.previous();
            Ok(select_category(state, previous))
        }
        Event::ShowFavorites => {
            state.showing_favorites = true;
            state.selected_index = 0;
            state.refresh_grid();
            tracing::debug!(favorite_count = state.favorites.len(), "showing favorites");
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            if let Err(e) = state.preferences.set_dark_mode(state.dark_mode) {
                tracing::warn!(error = %e, "failed to persist dark mode preference");
            }
            Ok((true, vec![]))
        }
        Event::GridClick { id, target } => Ok(click(state, *id, *target)),
        Event::OpenSelected => match state.selected_card().map(|card| card.id) {
            Some(id) => Ok(click(state, id, ClickTarget::Card)),
            None => Ok((false, vec![])),
        },
        Event::ToggleSelectedFavorite => match state.selected_card().map(|card| card.id) {
            Some(id) => Ok(click(state, id, ClickTarget::FavoriteGlyph)),
            None => Ok((false, vec![])),
        },
        Event::Escape => {
            if state.lightbox.close() {
                return Ok((true, vec![]));
            }
            if state.input_mode == InputMode::Search {
                state.input_mode = InputMode::Normal;
                state.search_input.clear();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::CloseLightbox => Ok((state.lightbox.close(), vec![])),
        Event::Download => match state.lightbox.download() {
            Some(url) => {
                tracing::info!(url = %url, "opening full-resolution image");
                Ok((false, vec![Action::OpenUrl { url }]))
            }
            None => Ok((false, vec![])),
        },
        Event::LightboxFavorite => match state.lightbox.current().map(|wallpaper| wallpaper.id) {
            Some(id) => Ok((toggle_favorite(state, id), vec![])),
            None => Ok((false, vec![])),
        },
        Event::PermissionsGranted => {
            if state.in_flight {
                return Ok((false, vec![]));
            }
            tracing::debug!("permissions granted, running initial fetch");
            Ok((true, fetch(state, None)))
        }
        Event::SearchCompleted {
            generation,
            status,
            body,
        } => Ok((fetcher::finish(state, *generation, *status, body), vec![])),
    }
}

/// Submits the edited search text as a new fetch.
///
/// A non-empty term resets the category to `All`; an empty one fetches the
/// active category's default query.
fn submit_search(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.input_mode != InputMode::Search {
        return (false, vec![]);
    }
    if state.in_flight {
        tracing::debug!("search ignored, fetch in flight");
        return (false, vec![]);
    }

    let term = state.search_input.trim().to_string();
    state.input_mode = InputMode::Normal;
    state.search_input.clear();
    state.showing_favorites = false;
    state.lightbox.close();
    if !term.is_empty() {
        state.filter = CategoryFilter::All;
    }
    state.search_term.clone_from(&term);

    (true, fetch(state, Some(&term)))
}

fn select_category(state: &mut AppState, filter: CategoryFilter) -> (bool, Vec<Action>) {
    if state.in_flight {
        tracing::debug!(filter = filter.label(), "category ignored, fetch in flight");
        return (false, vec![]);
    }

    state.filter = filter;
    state.showing_favorites = false;
    state.search_term.clear();
    state.lightbox.close();

    (true, fetch(state, None))
}

/// Starts a fetch and returns the request action.
///
/// An unusable endpoint fails the fetch immediately instead of sending.
fn fetch(state: &mut AppState, search_term: Option<&str>) -> Vec<Action> {
    let request = fetcher::start(state, search_term);

    match state.endpoint.url_for(&request) {
        Ok(url) => vec![Action::FetchWallpapers {
            url,
            generation: request.generation,
        }],
        Err(e) => {
            fetcher::fail(state, request.generation, &e);
            vec![]
        }
    }
}

fn click(state: &mut AppState, id: WallpaperId, target: ClickTarget) -> (bool, Vec<Action>) {
    let Some(wallpaper) = state.wallpaper(id).cloned() else {
        tracing::debug!(wallpaper_id = id, "click on stale card ignored");
        return (false, vec![]);
    };

    match target {
        ClickTarget::FavoriteGlyph => (toggle_favorite(state, id), vec![]),
        ClickTarget::Card => {
            let is_favorite = state.favorites.is_favorite(id);
            state.lightbox.open(wallpaper, is_favorite);
            (true, vec![])
        }
    }
}

/// Flips the favorite state of `id` everywhere it is shown.
///
/// The store, the grid card and the lightbox glyph end up agreeing. In the
/// favorites view a removal re-renders the grid so the card disappears.
fn toggle_favorite(state: &mut AppState, id: WallpaperId) -> bool {
    let now_favorite = match state.favorites.toggle(id) {
        Ok(now_favorite) => now_favorite,
        Err(e) => {
            tracing::warn!(wallpaper_id = id, error = %e, "failed to persist favorite");
            return false;
        }
    };

    state.lightbox.set_favorite_glyph(id, now_favorite);
    if state.showing_favorites && !now_favorite {
        state.refresh_grid();
    } else {
        state.grid.set_card_favorite(id, now_favorite);
    }

    true
}

/// Debug view of an event that leaves out response bodies.
struct EventName<'a>(&'a Event);

impl std::fmt::Debug for EventName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::SearchCompleted {
                generation,
                status,
                body,
            } => f
                .debug_struct("SearchCompleted")
                .field("generation", generation)
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::grid::{GridContent, MessageKind, NO_RESULTS_PLACEHOLDER};
    use crate::app::fetcher::{FETCH_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
    use crate::app::state::EMPTY_FAVORITES_MESSAGE;
    use crate::domain::Category;
    use crate::search::SearchEndpoint;
    use crate::storage::{share, MemoryStore};
    use crate::ui::theme::ThemePair;

    const HITS: &str = r#"{"hits": [
        {"id": 1, "tags": "mountains, snow", "largeImageURL": "https://img/1.jpg"},
        {"id": 2, "tags": "abstract, pattern", "largeImageURL": "https://img/2.jpg"},
        {"id": 3, "tags": "forest, fog", "largeImageURL": "https://img/3.jpg"}
    ]}"#;

    fn new_state() -> AppState {
        AppState::new(
            share(MemoryStore::default()),
            SearchEndpoint::default(),
            ThemePair::default(),
            true,
        )
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn complete(state: &mut AppState, body: &str) {
        let generation = state.generation;
        send(
            state,
            Event::SearchCompleted {
                generation,
                status: 200,
                body: body.as_bytes().to_vec(),
            },
        );
    }

    fn loaded_state() -> AppState {
        let mut state = new_state();
        send(&mut state, Event::PermissionsGranted);
        complete(&mut state, HITS);
        state
    }

    fn card_ids(state: &AppState) -> Vec<WallpaperId> {
        state.grid.cards().iter().map(|card| card.id).collect()
    }

    #[test]
    fn category_select_fetches_its_default_query() {
        let mut state = new_state();
        let (_, actions) = send(
            &mut state,
            Event::SelectCategory(CategoryFilter::Only(Category::Space)),
        );

        let [Action::FetchWallpapers { url, generation }] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        assert!(url.contains("q=space+galaxy"));
        assert_eq!(*generation, 1);
        assert!(state.in_flight);
        assert_eq!(state.grid.content(), &GridContent::Loading);
    }

    #[test]
    fn events_during_fetch_are_dropped() {
        let mut state = new_state();
        send(&mut state, Event::SelectCategory(CategoryFilter::All));

        let (_, actions) = send(
            &mut state,
            Event::SelectCategory(CategoryFilter::Only(Category::Food)),
        );
        assert!(actions.is_empty());
        assert_eq!(state.filter, CategoryFilter::All);

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('x'));
        let (_, actions) = send(&mut state, Event::SubmitSearch);
        assert!(actions.is_empty());
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn successful_fetch_renders_cards() {
        let state = loaded_state();
        assert!(!state.in_flight);
        assert_eq!(card_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn zero_results_keep_collection_and_show_message() {
        let mut state = loaded_state();
        send(&mut state, Event::SelectCategory(CategoryFilter::Only(Category::Food)));
        complete(&mut state, r#"{"hits": []}"#);

        assert_eq!(state.wallpapers.len(), 3);
        assert_eq!(
            state.grid.content(),
            &GridContent::Message {
                kind: MessageKind::Info,
                text: NO_RESULTS_MESSAGE.to_string(),
            }
        );
        assert!(!state.in_flight);
    }

    #[test]
    fn failed_fetch_shows_error_and_clears_flag() {
        let mut state = new_state();
        send(&mut state, Event::PermissionsGranted);
        let generation = state.generation;
        send(
            &mut state,
            Event::SearchCompleted {
                generation,
                status: 429,
                body: b"rate limited".to_vec(),
            },
        );

        assert!(!state.in_flight);
        assert_eq!(
            state.grid.content(),
            &GridContent::Message {
                kind: MessageKind::Error,
                text: FETCH_ERROR_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn invalid_endpoint_fails_without_request() {
        let mut state = new_state();
        state.endpoint.api_url = "not a url".to_string();

        let (_, actions) = send(&mut state, Event::PermissionsGranted);
        assert!(actions.is_empty());
        assert!(!state.in_flight);
        assert!(matches!(
            state.grid.content(),
            GridContent::Message { kind: MessageKind::Error, .. }
        ));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = new_state();
        send(&mut state, Event::PermissionsGranted);
        let (render, _) = send(
            &mut state,
            Event::SearchCompleted {
                generation: 0,
                status: 200,
                body: HITS.as_bytes().to_vec(),
            },
        );

        assert!(!render);
        assert!(state.in_flight);
        assert!(state.wallpapers.is_empty());
    }

    #[test]
    fn non_empty_search_resets_category() {
        let mut state = loaded_state();
        state.filter = CategoryFilter::Only(Category::Nature);
        send(&mut state, Event::SearchMode);
        for c in "  sunset ".chars() {
            send(&mut state, Event::Char(c));
        }

        let (_, actions) = send(&mut state, Event::SubmitSearch);
        let [Action::FetchWallpapers { url, .. }] = actions.as_slice() else {
            panic!("expected one fetch");
        };
        assert!(url.contains("q=sunset&"));
        assert_eq!(state.filter, CategoryFilter::All);
        assert_eq!(state.search_term, "sunset");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn empty_search_uses_category_query() {
        let mut state = loaded_state();
        state.filter = CategoryFilter::Only(Category::Cars);
        send(&mut state, Event::SearchMode);

        let (_, actions) = send(&mut state, Event::SubmitSearch);
        let [Action::FetchWallpapers { url, .. }] = actions.as_slice() else {
            panic!("expected one fetch");
        };
        assert!(url.contains("q=cars+vehicles"));
        assert_eq!(state.filter, CategoryFilter::Only(Category::Cars));
    }

    #[test]
    fn typing_outside_search_mode_is_ignored() {
        let mut state = new_state();
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn glyph_click_toggles_in_place() {
        let mut state = loaded_state();
        send(
            &mut state,
            Event::GridClick {
                id: 2,
                target: ClickTarget::FavoriteGlyph,
            },
        );

        assert!(state.favorites.is_favorite(2));
        assert!(state.grid.cards()[1].is_favorite);
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn stale_click_is_a_no_op() {
        let mut state = loaded_state();
        let (render, actions) = send(
            &mut state,
            Event::GridClick {
                id: 404,
                target: ClickTarget::Card,
            },
        );
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn lightbox_favorite_syncs_card_and_store() {
        let mut state = loaded_state();
        send(&mut state, Event::GridClick { id: 3, target: ClickTarget::Card });
        assert_eq!(state.lightbox.is_favorite(), Some(false));

        send(&mut state, Event::LightboxFavorite);
        assert_eq!(state.lightbox.is_favorite(), Some(true));
        assert!(state.grid.cards()[2].is_favorite);
        assert!(state.favorites.is_favorite(3));
    }

    #[test]
    fn navigation_is_suspended_while_lightbox_open() {
        let mut state = loaded_state();
        send(&mut state, Event::OpenSelected);
        assert!(state.lightbox.is_open());

        let (render, _) = send(&mut state, Event::KeyDown);
        assert!(!render);
        assert_eq!(state.selected_index, 0);

        send(&mut state, Event::Escape);
        send(&mut state, Event::KeyDown);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn close_lightbox_only_closes_the_overlay() {
        let mut state = loaded_state();

        let (render, _) = send(&mut state, Event::CloseLightbox);
        assert!(!render);

        send(&mut state, Event::OpenSelected);
        assert!(state.lightbox.is_open());
        assert!(state.compute_viewmodel(24, 80).footer.keybindings.contains("x: close"));

        let (render, actions) = send(&mut state, Event::CloseLightbox);
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.lightbox.is_open());
        assert!(state.compute_viewmodel(24, 80).lightbox.is_none());
    }

    #[test]
    fn escape_without_lightbox_does_nothing_in_normal_mode() {
        let mut state = loaded_state();
        let (render, _) = send(&mut state, Event::Escape);
        assert!(!render);
    }

    #[test]
    fn download_opens_image_url_only_when_open() {
        let mut state = loaded_state();
        let (_, actions) = send(&mut state, Event::Download);
        assert!(actions.is_empty());

        send(&mut state, Event::GridClick { id: 1, target: ClickTarget::Card });
        let (_, actions) = send(&mut state, Event::Download);
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                url: "https://img/1.jpg".to_string()
            }]
        );
    }

    #[test]
    fn empty_favorites_view_has_dedicated_message() {
        let mut state = loaded_state();
        send(&mut state, Event::ShowFavorites);
        assert_eq!(
            state.grid.content(),
            &GridContent::Message {
                kind: MessageKind::Info,
                text: EMPTY_FAVORITES_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn favorites_outside_collection_show_placeholder() {
        let mut state = loaded_state();
        state.favorites.toggle(99).unwrap();
        send(&mut state, Event::ShowFavorites);
        assert_eq!(
            state.grid.content(),
            &GridContent::Message {
                kind: MessageKind::Placeholder,
                text: NO_RESULTS_PLACEHOLDER.to_string(),
            }
        );
    }

    #[test]
    fn unfavoriting_in_favorites_view_removes_card() {
        let mut state = loaded_state();
        state.favorites.toggle(1).unwrap();
        state.favorites.toggle(3).unwrap();
        send(&mut state, Event::ShowFavorites);
        assert_eq!(card_ids(&state), vec![1, 3]);

        send(&mut state, Event::ToggleSelectedFavorite);
        assert_eq!(card_ids(&state), vec![3]);
    }

    #[test]
    fn category_select_leaves_favorites_view() {
        let mut state = loaded_state();
        send(&mut state, Event::ShowFavorites);
        send(&mut state, Event::NextCategory);

        assert!(!state.showing_favorites);
        assert_eq!(state.filter, CategoryFilter::Only(Category::Nature));
    }

    #[test]
    fn dark_mode_toggle_persists() {
        let mut state = new_state();
        send(&mut state, Event::ToggleDarkMode);
        assert!(!state.dark_mode);
        assert_eq!(state.preferences.dark_mode(), Some(false));
    }

    #[test]
    fn close_focus_hides_plugin() {
        let mut state = new_state();
        assert_eq!(send(&mut state, Event::CloseFocus).1, vec![Action::CloseFocus]);
    }
}
