//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single session state owned by the
//! plugin shim. It holds the current wallpaper collection, the active filter
//! and search term, the fetch bookkeeping, the persisted favorites and
//! preference handles, and the two rendered surfaces (grid and lightbox).
//!
//! # State Components
//!
//! - **Collection**: Wallpapers from the latest successful fetch
//! - **Filter**: Active category, search term, favorites-view flag
//! - **Fetch**: In-flight flag and the request generation counter
//! - **Surfaces**: [`GalleryView`] grid and [`LightboxController`] overlay
//! - **Input**: Selection cursor, input mode, search text being edited
//! - **Appearance**: Dark-mode flag and the dark/light theme pair
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, search match highlighting, and the
//! lightbox overlay.
//!
//! # Example
//!
//! ```rust
//! use wallgrid::app::AppState;
//! use wallgrid::search::SearchEndpoint;
//! use wallgrid::storage::{share, MemoryStore};
//! use wallgrid::ui::theme::ThemePair;
//!
//! let state = AppState::new(
//!     share(MemoryStore::default()),
//!     SearchEndpoint::default(),
//!     ThemePair::default(),
//!     true,
//! );
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.lightbox.is_none());
//! ```

use super::grid::{Card, GalleryView, GridContent, Visibility};
use super::lightbox::LightboxController;
use super::modes::InputMode;
use crate::domain::{CategoryFilter, Wallpaper, WallpaperId};
use crate::search::SearchEndpoint;
use crate::storage::{PersistedFavorites, Preferences, SharedStore};
use crate::ui::theme::{Theme, ThemePair};
use crate::ui::viewmodel::{
    BodyView, CategoryBarInfo, CategoryChip, DisplayCard, FooterInfo, HeaderInfo, LightboxInfo,
    SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Shown in the favorites view when no favorite exists at all.
pub const EMPTY_FAVORITES_MESSAGE: &str = "You haven't added any favorites yet.";

/// Width of the title column in characters.
const TITLE_WIDTH: usize = 40;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on-demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Collection from the latest successful fetch.
    ///
    /// Replaced wholesale on every fetch with results; never edited in place.
    pub wallpapers: Vec<Wallpaper>,

    /// Active category filter.
    pub filter: CategoryFilter,

    /// Search term of the latest submitted search, empty if none.
    pub search_term: String,

    /// Whether the grid shows favorites instead of the category subset.
    pub showing_favorites: bool,

    /// Whether a fetch is outstanding.
    ///
    /// Category selects and search submits are dropped while set.
    pub in_flight: bool,

    /// Generation of the latest fetch; responses for older ones are dropped.
    pub generation: u64,

    /// Zero-based index of the selected card within the rendered grid.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Search text being edited in search mode.
    pub search_input: String,

    pub dark_mode: bool,

    pub themes: ThemePair,

    pub endpoint: SearchEndpoint,

    pub favorites: PersistedFavorites,

    pub preferences: Preferences,

    pub grid: GalleryView,

    pub lightbox: LightboxController,
}

impl AppState {
    /// Creates a session over `store`.
    ///
    /// Favorites and the dark-mode preference are loaded from the store right
    /// away. A stored dark-mode preference wins over `default_dark_mode`.
    #[must_use]
    pub fn new(
        store: SharedStore,
        endpoint: SearchEndpoint,
        themes: ThemePair,
        default_dark_mode: bool,
    ) -> Self {
        let favorites = PersistedFavorites::load(store.clone());
        let preferences = Preferences::new(store);
        let dark_mode = preferences.dark_mode().unwrap_or(default_dark_mode);

        tracing::debug!(
            favorite_count = favorites.len(),
            dark_mode,
            "session state created"
        );

        Self {
            wallpapers: Vec::new(),
            filter: CategoryFilter::All,
            search_term: String::new(),
            showing_favorites: false,
            in_flight: false,
            generation: 0,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            dark_mode,
            themes,
            endpoint,
            favorites,
            preferences,
            grid: GalleryView::default(),
            lightbox: LightboxController::default(),
        }
    }

    /// Theme for the current dark-mode setting.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.select(self.dark_mode)
    }

    /// Subset rule the grid currently applies.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        if self.showing_favorites {
            Visibility::Favorites
        } else {
            Visibility::Category(self.filter)
        }
    }

    /// Re-renders the grid from the in-memory collection.
    ///
    /// In the favorites view with no favorites at all, the dedicated empty
    /// favorites message replaces the generic placeholder.
    pub fn refresh_grid(&mut self) {
        if self.showing_favorites && self.favorites.is_empty() {
            self.grid.show_message(EMPTY_FAVORITES_MESSAGE);
        } else {
            self.grid
                .render(&self.wallpapers, self.visibility(), &self.favorites);
        }
        self.clamp_selection();
    }

    /// Moves selection cursor down by one card, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let count = self.grid.cards().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection cursor up by one card, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let count = self.grid.cards().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.grid.cards().get(self.selected_index)
    }

    /// Looks up a wallpaper of the current collection by id.
    #[must_use]
    pub fn wallpaper(&self, id: WallpaperId) -> Option<&Wallpaper> {
        self.wallpapers.iter().find(|wallpaper| wallpaper.id == id)
    }

    fn clamp_selection(&mut self) {
        let count = self.grid.cards().len();
        self.selected_index = if count == 0 {
            0
        } else {
            self.selected_index.min(count - 1)
        };
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near the end to maximize visible cards
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let body = match self.grid.content() {
            GridContent::Blank => BodyView::Blank,
            GridContent::Loading => BodyView::Loading,
            GridContent::Message { kind, text } => BodyView::Message {
                kind: *kind,
                text: text.clone(),
            },
            GridContent::Cards(cards) => self.compute_cards(cards, rows),
        };

        UIViewModel {
            header: self.compute_header(),
            categories: self.compute_category_bar(),
            search_bar: self.compute_search_bar(),
            body,
            lightbox: self.compute_lightbox(),
            footer: self.compute_footer(),
        }
    }

    fn compute_cards(&self, cards: &[Card], rows: usize) -> BodyView {
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(cards.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && cards.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = if self.search_term.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let items = cards[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, card)| {
                let is_selected = visible_start + relative_idx == self.selected_index;
                self.compute_display_card(card, is_selected, matcher.as_ref())
            })
            .collect();

        BodyView::Cards {
            items,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    fn compute_display_card(
        &self,
        card: &Card,
        is_selected: bool,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayCard {
        let title = if card.title.chars().count() > TITLE_WIDTH {
            let kept: String = card.title.chars().take(TITLE_WIDTH - 3).collect();
            format!("{kept}...")
        } else {
            card.title.clone()
        };

        let highlight_ranges =
            matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&title, m));

        DisplayCard {
            id: card.id,
            title,
            category: card.category.to_string(),
            is_favorite: card.is_favorite,
            is_selected,
            highlight_ranges,
        }
    }

    /// Character ranges of `text` matched by the active search term.
    ///
    /// Consecutive matched indices are coalesced into `(start, end)` ranges
    /// with an exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.search_term) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let view_name = if self.showing_favorites {
            "Favorites".to_string()
        } else if !self.search_term.is_empty() {
            format!("Search \"{}\"", self.search_term)
        } else {
            match self.filter {
                CategoryFilter::All => "All Wallpapers".to_string(),
                CategoryFilter::Only(category) => capitalize(category.selector()),
            }
        };

        let count = self.grid.cards().len();
        HeaderInfo {
            title: format!(" Wallgrid: {view_name} ({count}) "),
        }
    }

    fn compute_category_bar(&self) -> CategoryBarInfo {
        let chips = CategoryFilter::choices()
            .into_iter()
            .map(|choice| CategoryChip {
                label: choice.label().to_string(),
                is_active: !self.showing_favorites && choice == self.filter,
            })
            .collect();

        CategoryBarInfo {
            chips,
            favorites_active: self.showing_favorites,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.lightbox.is_open() {
            "ESC/x: close  f: favorite  o: open image  t: theme  q: quit"
        } else {
            match self.input_mode {
                InputMode::Search => "ESC: cancel  Enter: search  Type to edit query",
                InputMode::Normal => {
                    "j/k: navigate  Enter: preview  f: favorite  F: favorites  [/]: category  a: all  /: search  t: theme  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        matches!(self.input_mode, InputMode::Search).then(|| SearchBarInfo {
            query: self.search_input.clone(),
        })
    }

    fn compute_lightbox(&self) -> Option<LightboxInfo> {
        let wallpaper = self.lightbox.current()?;
        Some(LightboxInfo {
            title: wallpaper.title.clone(),
            tags: wallpaper.alt_text.clone(),
            category: wallpaper.category.to_string(),
            author: wallpaper.author.clone(),
            downloads: wallpaper.downloads,
            favorites: wallpaper.favorites,
            image_url: wallpaper.image_url.clone(),
            page_url: wallpaper.page_url.clone(),
            is_favorite: self.lightbox.is_favorite().unwrap_or(false),
        })
    }

    /// Calculates available rows for cards after subtracting UI chrome.
    ///
    /// Accounts for the top blank line, header, category bar, two borders,
    /// footer, and the search bar (3 rows if active).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search => total_rows.saturating_sub(9),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
