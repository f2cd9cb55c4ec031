//! Wallpaper domain model.
//!
//! A [`Wallpaper`] is one gallery entry derived from one search hit. It is
//! read-only after creation; every fetch replaces the whole collection.

use super::category::{resolve_category, Category};

/// Provider-assigned wallpaper identifier.
pub type WallpaperId = u64;

/// One gallery entry.
///
/// # Fields
///
/// - `id`: Provider identifier, unique within a fetch result
/// - `title`: First comma-delimited token of the tag string
/// - `category`: Resolved from the tag string
/// - `image_url`: Full-resolution display source
/// - `alt_text`: Raw tag string
/// - `author`, `downloads`, `favorites`: Attribution shown in the lightbox
/// - `page_url`: Provider page for the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallpaper {
    pub id: WallpaperId,
    pub title: String,
    pub category: Category,
    pub image_url: String,
    pub alt_text: String,
    pub author: String,
    pub downloads: u64,
    pub favorites: u64,
    pub page_url: String,
}

impl Wallpaper {
    /// Builds a wallpaper from its tag string, deriving title and category.
    ///
    /// # Examples
    ///
    /// ```
    /// use wallgrid::domain::{Category, Wallpaper};
    ///
    /// let wallpaper = Wallpaper::from_tags(7, "mountains, nature, snow");
    /// assert_eq!(wallpaper.title, "mountains");
    /// assert_eq!(wallpaper.category, Category::Nature);
    /// ```
    #[must_use]
    pub fn from_tags(id: WallpaperId, tags: &str) -> Self {
        Self {
            id,
            title: title_from_tags(tags),
            category: resolve_category(tags),
            image_url: String::new(),
            alt_text: tags.to_string(),
            author: String::new(),
            downloads: 0,
            favorites: 0,
            page_url: String::new(),
        }
    }
}

/// First comma-delimited token of a tag string, trimmed.
#[must_use]
pub fn title_from_tags(tags: &str) -> String {
    tags.split(',').next().unwrap_or_default().trim().to_string()
}
