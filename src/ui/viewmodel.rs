//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: windowed cards, pre-computed
//! highlight ranges, resolved labels.

use crate::app::grid::MessageKind;
use crate::domain::WallpaperId;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (view name, result count).
    pub header: HeaderInfo,

    /// Category filter chips plus the favorites toggle.
    pub categories: CategoryBarInfo,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Grid area contents.
    pub body: BodyView,

    /// Lightbox overlay, drawn over the grid when present.
    pub lightbox: Option<LightboxInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Grid area contents.
#[derive(Debug, Clone)]
pub enum BodyView {
    Blank,
    Loading,
    Cards {
        /// Cards inside the visible window.
        items: Vec<DisplayCard>,
        /// Index of the selected card within `items`.
        selected_index: usize,
    },
    Message {
        kind: MessageKind,
        text: String,
    },
}

/// Display information for a single wallpaper card.
///
/// Represents one row in the grid. Contains pre-computed highlight ranges
/// for search term matches.
#[derive(Debug, Clone)]
pub struct DisplayCard {
    pub id: WallpaperId,

    /// Title, truncated to the title column.
    pub title: String,

    /// Category label.
    pub category: String,

    pub is_favorite: bool,

    pub is_selected: bool,

    /// Character ranges of `title` to highlight.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// One chip in the category bar.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    pub label: String,
    pub is_active: bool,
}

/// Category bar display information.
///
/// While the favorites view is shown no category chip is active.
#[derive(Debug, Clone)]
pub struct CategoryBarInfo {
    pub chips: Vec<CategoryChip>,
    pub favorites_active: bool,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Search text being edited.
    pub query: String,
}

/// Lightbox overlay contents.
#[derive(Debug, Clone)]
pub struct LightboxInfo {
    pub title: String,
    pub tags: String,
    pub category: String,
    pub author: String,
    pub downloads: u64,
    pub favorites: u64,
    pub image_url: String,
    pub page_url: String,
    pub is_favorite: bool,
}
