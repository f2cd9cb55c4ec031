//! Full-screen single-wallpaper preview.

use crate::domain::{Wallpaper, WallpaperId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        wallpaper: Wallpaper,
        /// Glyph state shown on the favorite button.
        is_favorite: bool,
    },
}

/// Lightbox overlay state machine.
///
/// While open, background grid navigation is suspended; see
/// [`LightboxController::scroll_locked`].
#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    state: LightboxState,
}

impl LightboxController {
    /// Shows `wallpaper`. Opening while already open replaces the item.
    pub fn open(&mut self, wallpaper: Wallpaper, is_favorite: bool) {
        tracing::debug!(wallpaper_id = wallpaper.id, is_favorite, "lightbox opened");
        self.state = LightboxState::Open {
            wallpaper,
            is_favorite,
        };
    }

    /// Hides the overlay and restores grid navigation.
    ///
    /// Returns whether the lightbox was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        if was_open {
            tracing::debug!("lightbox closed");
        }
        was_open
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    #[must_use]
    pub const fn state(&self) -> &LightboxState {
        &self.state
    }

    /// The displayed wallpaper, if open.
    #[must_use]
    pub fn current(&self) -> Option<&Wallpaper> {
        match &self.state {
            LightboxState::Open { wallpaper, .. } => Some(wallpaper),
            LightboxState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_favorite(&self) -> Option<bool> {
        match self.state {
            LightboxState::Open { is_favorite, .. } => Some(is_favorite),
            LightboxState::Closed => None,
        }
    }

    /// Whether grid navigation is currently suspended.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Full-resolution URL of the displayed wallpaper. `None` when closed.
    #[must_use]
    pub fn download(&self) -> Option<String> {
        self.current().map(|wallpaper| wallpaper.image_url.clone())
    }

    /// Updates the favorite glyph if `id` is the displayed wallpaper.
    pub fn set_favorite_glyph(&mut self, id: WallpaperId, favorite: bool) {
        if let LightboxState::Open {
            wallpaper,
            is_favorite,
        } = &mut self.state
        {
            if wallpaper.id == id {
                *is_favorite = favorite;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallpaper(id: u64) -> Wallpaper {
        let mut wallpaper = Wallpaper::from_tags(id, "space, galaxy");
        wallpaper.image_url = format!("https://img/{id}.jpg");
        wallpaper
    }

    #[test]
    fn starts_closed() {
        let lightbox = LightboxController::default();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
        assert_eq!(lightbox.download(), None);
    }

    #[test]
    fn open_locks_scroll_and_close_restores_it() {
        let mut lightbox = LightboxController::default();
        lightbox.open(wallpaper(1), false);
        assert!(lightbox.scroll_locked());

        assert!(lightbox.close());
        assert!(!lightbox.scroll_locked());
        assert!(!lightbox.close());
    }

    #[test]
    fn reopening_replaces_the_item() {
        let mut lightbox = LightboxController::default();
        lightbox.open(wallpaper(1), false);
        lightbox.open(wallpaper(2), true);

        assert_eq!(lightbox.current().map(|w| w.id), Some(2));
        assert_eq!(lightbox.is_favorite(), Some(true));
    }

    #[test]
    fn download_yields_full_resolution_url() {
        let mut lightbox = LightboxController::default();
        lightbox.open(wallpaper(5), false);
        assert_eq!(lightbox.download().as_deref(), Some("https://img/5.jpg"));
    }

    #[test]
    fn glyph_updates_only_for_displayed_item() {
        let mut lightbox = LightboxController::default();
        lightbox.open(wallpaper(5), false);

        lightbox.set_favorite_glyph(6, true);
        assert_eq!(lightbox.is_favorite(), Some(false));

        lightbox.set_favorite_glyph(5, true);
        assert_eq!(lightbox.is_favorite(), Some(true));
    }
}
