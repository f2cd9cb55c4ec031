//! Gallery grid model.
//!
//! [`GalleryView`] holds what the grid area currently shows: a list of cards,
//! a status message, or the loading indicator. It is the render target of the
//! controller; the UI layer only turns it into ANSI output.
//!
//! Cards are rebuilt from scratch on every [`GalleryView::render`] call, so the
//! grid always equals the current collection intersected with the active filter.

use crate::domain::{Category, CategoryFilter, Wallpaper, WallpaperId};
use crate::storage::PersistedFavorites;

/// Placeholder shown when the visible subset is empty.
pub const NO_RESULTS_PLACEHOLDER: &str = "No wallpapers found. Try a different filter or search term.";

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: WallpaperId,
    pub title: String,
    pub category: Category,
    pub is_favorite: bool,
}

/// Kind of a status message, which decides its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Empty visible subset.
    Placeholder,
    /// Informational state, e.g. a search with zero results.
    Info,
    /// Fetch failure.
    Error,
}

/// What the grid area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GridContent {
    /// Nothing rendered yet.
    #[default]
    Blank,
    Loading,
    Cards(Vec<Card>),
    Message { kind: MessageKind, text: String },
}

/// Which subset of the collection the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Items passing the category filter.
    Category(CategoryFilter),
    /// Favorited items; the category filter is ignored.
    Favorites,
}

impl Visibility {
    fn admits(self, wallpaper: &Wallpaper, favorites: &PersistedFavorites) -> bool {
        match self {
            Self::Category(filter) => filter.matches(wallpaper.category),
            Self::Favorites => favorites.is_favorite(wallpaper.id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GalleryView {
    content: GridContent,
}

impl GalleryView {
    #[must_use]
    pub const fn content(&self) -> &GridContent {
        &self.content
    }

    /// Rendered cards, empty unless the grid currently shows cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.content {
            GridContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Replaces the grid with one card per visible item.
    ///
    /// An empty visible subset yields exactly one placeholder message.
    pub fn render(&mut self, items: &[Wallpaper], visibility: Visibility, favorites: &PersistedFavorites) {
        let cards: Vec<Card> = items
            .iter()
            .filter(|wallpaper| visibility.admits(wallpaper, favorites))
            .map(|wallpaper| Card {
                id: wallpaper.id,
                title: wallpaper.title.clone(),
                category: wallpaper.category,
                is_favorite: favorites.is_favorite(wallpaper.id),
            })
            .collect();

        tracing::debug!(
            total = items.len(),
            visible = cards.len(),
            visibility = ?visibility,
            "grid rendered"
        );

        self.content = if cards.is_empty() {
            GridContent::Message {
                kind: MessageKind::Placeholder,
                text: NO_RESULTS_PLACEHOLDER.to_string(),
            }
        } else {
            GridContent::Cards(cards)
        };
    }

    /// Clears the grid and shows the loading indicator.
    pub fn show_loading(&mut self) {
        self.content = GridContent::Loading;
    }

    /// Removes the loading indicator. No-op if none is shown.
    pub fn hide_loading(&mut self) {
        if self.content == GridContent::Loading {
            self.content = GridContent::Blank;
        }
    }

    pub fn show_error(&mut self, message: &str) {
        self.content = GridContent::Message {
            kind: MessageKind::Error,
            text: message.to_string(),
        };
    }

    pub fn show_message(&mut self, message: &str) {
        self.content = GridContent::Message {
            kind: MessageKind::Info,
            text: message.to_string(),
        };
    }

    /// Updates the favorite glyph of one rendered card.
    ///
    /// Returns whether a card was updated; a card that is not rendered is a no-op.
    pub fn set_card_favorite(&mut self, id: WallpaperId, is_favorite: bool) -> bool {
        let GridContent::Cards(cards) = &mut self.content else {
            return false;
        };

        cards
            .iter_mut()
            .find(|card| card.id == id)
            .map(|card| card.is_favorite = is_favorite)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{share, MemoryStore, FAVORITES_KEY};

    fn collection() -> Vec<Wallpaper> {
        vec![
            Wallpaper::from_tags(1, "mountains, snow"),
            Wallpaper::from_tags(2, "abstract, pattern"),
            Wallpaper::from_tags(3, "forest, fog"),
        ]
    }

    fn favorites(raw: &str) -> PersistedFavorites {
        PersistedFavorites::load(share(MemoryStore::with_entries([(FAVORITES_KEY, raw)])))
    }

    fn ids(view: &GalleryView) -> Vec<WallpaperId> {
        view.cards().iter().map(|card| card.id).collect()
    }

    #[test]
    fn category_filter_selects_cards() {
        let mut view = GalleryView::default();
        view.render(
            &collection(),
            Visibility::Category(CategoryFilter::Only(Category::Nature)),
            &favorites("[]"),
        );
        assert_eq!(ids(&view), vec![1, 3]);
    }

    #[test]
    fn favorites_visibility_ignores_category() {
        let mut view = GalleryView::default();
        view.render(&collection(), Visibility::Favorites, &favorites("[2,3]"));
        assert_eq!(ids(&view), vec![2, 3]);
        assert!(view.cards().iter().all(|card| card.is_favorite));
    }

    #[test]
    fn empty_subset_yields_single_placeholder() {
        let mut view = GalleryView::default();
        view.render(
            &collection(),
            Visibility::Category(CategoryFilter::Only(Category::Food)),
            &favorites("[]"),
        );
        assert_eq!(
            view.content(),
            &GridContent::Message {
                kind: MessageKind::Placeholder,
                text: NO_RESULTS_PLACEHOLDER.to_string(),
            }
        );
        assert!(view.cards().is_empty());
    }

    #[test]
    fn render_replaces_previous_content() {
        let mut view = GalleryView::default();
        view.show_error("boom");
        view.render(&collection(), Visibility::Category(CategoryFilter::All), &favorites("[]"));
        assert_eq!(ids(&view), vec![1, 2, 3]);
    }

    #[test]
    fn hide_loading_only_clears_the_indicator() {
        let mut view = GalleryView::default();
        view.show_message("hello");
        view.hide_loading();
        assert!(matches!(view.content(), GridContent::Message { .. }));

        view.show_loading();
        view.hide_loading();
        assert_eq!(view.content(), &GridContent::Blank);
    }

    #[test]
    fn set_card_favorite_updates_rendered_card_only() {
        let mut view = GalleryView::default();
        view.render(&collection(), Visibility::Category(CategoryFilter::All), &favorites("[]"));

        assert!(view.set_card_favorite(2, true));
        assert!(view.cards()[1].is_favorite);
        assert!(!view.set_card_favorite(99, true));

        view.show_loading();
        assert!(!view.set_card_favorite(2, false));
    }
}
