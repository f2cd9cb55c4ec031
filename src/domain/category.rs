//! Wallpaper categories and the tag-to-category resolver.
//!
//! Categories are derived from the free-text tag string the search provider
//! attaches to every hit. Resolution is a first-match scan over an ordered rule
//! table: an image tagged both "car" and "nature" lands in [`Category::Nature`]
//! because the nature rule comes first.
//!
//! The same module maps UI category selectors to the hand-tuned search queries
//! sent to the provider when no explicit search term is active.

use std::fmt;

/// One label from the fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nature,
    Abstract,
    Anime,
    Space,
    Minimal,
    Architecture,
    Cars,
    Animals,
    Food,
    Travel,
    Technology,
    /// Fallback when no rule matches.
    Other,
}

/// Ordered resolution rules. First match wins, so order is significant.
const RULES: &[(&[&str], Category)] = &[
    (&["nature", "landscape", "mountain", "forest"], Category::Nature),
    (&["abstract", "pattern"], Category::Abstract),
    (&["anime", "cartoon", "manga"], Category::Anime),
    (&["space", "galaxy", "universe", "cosmos"], Category::Space),
    (&["minimal", "simple", "minimalist"], Category::Minimal),
    (&["architecture", "building", "city"], Category::Architecture),
    (&["car", "vehicle", "automotive"], Category::Cars),
    (&["animal", "wildlife", "pet"], Category::Animals),
    (&["food", "cuisine", "meal"], Category::Food),
    (&["travel", "destination", "tourism"], Category::Travel),
    (&["technology", "gadget", "digital"], Category::Technology),
];

impl Category {
    /// Categories offered as filter selectors, in display order.
    pub const SELECTABLE: [Self; 11] = [
        Self::Nature,
        Self::Abstract,
        Self::Anime,
        Self::Space,
        Self::Minimal,
        Self::Architecture,
        Self::Cars,
        Self::Animals,
        Self::Food,
        Self::Travel,
        Self::Technology,
    ];

    /// Selector string used by the category bar and by [`query_for_category`].
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Abstract => "abstract",
            Self::Anime => "anime",
            Self::Space => "space",
            Self::Minimal => "minimal",
            Self::Architecture => "architecture",
            Self::Cars => "cars",
            Self::Animals => "animals",
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Technology => "technology",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Active category filter: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a wallpaper of `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Selector string shown in the category bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.selector(),
        }
    }

    /// Every filter the category bar offers, `All` first.
    #[must_use]
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::SELECTABLE.iter().copied().map(Self::Only))
            .collect()
    }

    /// The filter after this one in the category bar, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let choices = Self::choices();
        let index = choices.iter().position(|c| *c == self).unwrap_or(0);
        choices[(index + 1) % choices.len()]
    }

    /// The filter before this one in the category bar, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let choices = Self::choices();
        let index = choices.iter().position(|c| *c == self).unwrap_or(0);
        choices[(index + choices.len() - 1) % choices.len()]
    }

    /// Query sent to the provider when no explicit search term is given.
    ///
    /// `All` maps to the empty query, which the provider treats as "anything".
    #[must_use]
    pub fn default_query(self) -> String {
        match self {
            Self::All => String::new(),
            Self::Only(category) => query_for_category(category.selector()),
        }
    }
}

/// Resolves a comma-delimited tag string to a category.
///
/// Matching is case-insensitive substring containment, evaluated rule by rule.
///
/// # Examples
///
/// ```
/// use wallgrid::domain::{resolve_category, Category};
///
/// assert_eq!(resolve_category("Mountains, snow"), Category::Nature);
/// assert_eq!(resolve_category("red car, nature"), Category::Nature);
/// assert_eq!(resolve_category("portrait, woman"), Category::Other);
/// ```
#[must_use]
pub fn resolve_category(tags: &str) -> Category {
    let tags = tags.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| tags.contains(keyword)))
        .map_or(Category::Other, |(_, category)| *category)
}

/// Maps a UI category selector to the search query sent to the provider.
///
/// Unrecognized selectors pass through unchanged as the literal query.
#[must_use]
pub fn query_for_category(selector: &str) -> String {
    match selector {
        "nature" => "nature landscape",
        "abstract" => "abstract background",
        "anime" => "anime digital art",
        "space" => "space galaxy",
        "minimal" => "minimalist background",
        "architecture" => "architecture buildings",
        "cars" => "cars vehicles",
        "animals" => "animals wildlife",
        "food" => "food cuisine",
        "travel" => "travel destinations",
        "technology" => "technology gadgets",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(resolve_category("car, nature"), Category::Nature);
        assert_eq!(resolve_category("pattern, galaxy"), Category::Abstract);
        assert_eq!(resolve_category("city, food"), Category::Architecture);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(resolve_category("GALAXY, Stars"), Category::Space);
    }

    #[test]
    fn substring_matches_count() {
        // "carpet" contains "car" and "pet"; cars precedes animals.
        assert_eq!(resolve_category("carpet"), Category::Cars);
        assert_eq!(resolve_category("digital painting"), Category::Technology);
    }

    #[test]
    fn unmatched_tags_fall_back_to_other() {
        assert_eq!(resolve_category(""), Category::Other);
        assert_eq!(resolve_category("portrait, woman, smile"), Category::Other);
    }

    #[test]
    fn every_rule_resolves_to_its_own_category() {
        for (keywords, category) in RULES {
            for keyword in *keywords {
                let resolved = resolve_category(keyword);
                let earlier = RULES
                    .iter()
                    .take_while(|(_, c)| c != category)
                    .any(|(words, _)| words.iter().any(|w| keyword.contains(w)));
                if !earlier {
                    assert_eq!(resolved, *category, "keyword {keyword}");
                }
            }
        }
    }

    #[test]
    fn known_selectors_map_to_tuned_queries() {
        assert_eq!(query_for_category("nature"), "nature landscape");
        assert_eq!(query_for_category("anime"), "anime digital art");
        assert_eq!(query_for_category("technology"), "technology gadgets");
    }

    #[test]
    fn unknown_selectors_pass_through() {
        assert_eq!(query_for_category("sunsets"), "sunsets");
        assert_eq!(query_for_category(""), "");
    }

    #[test]
    fn filter_cycle_wraps_in_both_directions() {
        assert_eq!(CategoryFilter::All.next(), CategoryFilter::Only(Category::Nature));
        assert_eq!(CategoryFilter::All.previous(), CategoryFilter::Only(Category::Technology));
        assert_eq!(CategoryFilter::Only(Category::Technology).next(), CategoryFilter::All);
    }

    #[test]
    fn default_query_for_all_is_empty() {
        assert_eq!(CategoryFilter::All.default_query(), "");
        assert_eq!(
            CategoryFilter::Only(Category::Space).default_query(),
            "space galaxy"
        );
    }
}
