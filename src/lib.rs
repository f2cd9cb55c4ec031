//! Wallgrid: a Zellij plugin for browsing wallpapers from a photo-search API.
//!
//! Wallgrid shows search results as a list of wallpaper cards and provides:
//! - Category filter chips that fetch a category-specific query
//! - Free-text search with match highlighting on card titles
//! - Favorites that persist across restarts, with a favorites-only view
//! - A lightbox preview with download and favorite controls
//! - A dark/light theme toggle whose choice is remembered

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and the fetch guard               │
//! │  - Grid, lightbox and fetch controllers             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Search Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (search/)     │
//! │ - Rendering   │   │ - Key-value   │   │ - Query URLs  │
//! │ - Theming     │   │ - Favorites   │   │ - Responses   │
//! │ - Hit-testing │   │ - Preferences │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Wallpaper and category model (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - JSON log records in a rotating file              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/wallgrid.wasm" {
//!         api_key "your-pixabay-key"
//!         theme_dark "catppuccin-mocha"
//!         theme_light "catppuccin-latte"
//!         dark_mode "true"
//!         open_command "xdg-open"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build `AppState` over the persistent store, request permissions.
//! 2. **Permissions Granted**: the default query is fetched through the host's
//!    web request facility.
//! 3. **Web Request Result**: the response is matched to its fetch by the
//!    generation stored in the request context; stale responses are dropped.
//! 4. **Rendering**: a view model is computed from state and drawn by the
//!    UI components; card rows are kept for mouse hit-testing.
//!
//! # Example
//!
//! ```rust
//! use wallgrid::{handle_event, Action, AppState, Event};
//! use wallgrid::search::SearchEndpoint;
//! use wallgrid::storage::{share, MemoryStore};
//! use wallgrid::ui::ThemePair;
//!
//! let mut state = AppState::new(
//!     share(MemoryStore::default()),
//!     SearchEndpoint::default(),
//!     ThemePair::default(),
//!     true,
//! );
//!
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchWallpapers { .. }]));
//! # Ok::<(), wallgrid::WallgridError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with 24-bit color

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, ClickTarget, Event, InputMode};
pub use domain::{Category, CategoryFilter, Result, Wallpaper, WallgridError};
pub use ui::Theme;

use std::collections::BTreeMap;

use search::{SearchEndpoint, DEFAULT_API_URL};
use storage::{share, JsonFileStore, MemoryStore, SharedStore};
use ui::theme::{ThemePair, DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Opener used for downloads when none is configured.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/wallgrid.wasm" {
///     api_key "your-pixabay-key"
///     api_url "https://pixabay.com/api/"
///     theme_dark "catppuccin-macchiato"
///     theme_light "catppuccin-latte"
///     theme_file "~/.config/wallgrid/theme.toml"
///     dark_mode "false"
///     open_command "open"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API key sent with every search. Default: empty
    pub api_key: String,

    /// Search endpoint. Default: [`DEFAULT_API_URL`]
    pub api_url: String,

    /// Built-in theme used in dark mode.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`.
    pub theme_dark: String,

    /// Built-in theme used in light mode.
    pub theme_light: String,

    /// Path to a custom TOML theme file, used for both modes.
    ///
    /// Takes precedence over `theme_dark` and `theme_light`.
    pub theme_file: Option<String>,

    /// Dark mode at startup when no preference has been stored. Default: `true`
    pub dark_mode: bool,

    /// Command the download action runs with the image URL. Default: `xdg-open`
    pub open_command: String,

    /// `EnvFilter` directive for log records. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            theme_dark: DEFAULT_DARK_THEME.to_string(),
            theme_light: DEFAULT_LIGHT_THEME.to_string(),
            theme_file: None,
            dark_mode: true,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - Empty or whitespace-only values count as missing
    /// - `dark_mode`: `"true"` or `"false"`, anything else keeps the default
    /// - Every missing key falls back to [`Config::default`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use wallgrid::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abc123".to_string());
    /// map.insert("dark_mode".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key, "abc123");
    /// assert!(!config.dark_mode);
    /// assert_eq!(config.open_command, "xdg-open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let dark_mode = match value("dark_mode").as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => defaults.dark_mode,
        };

        Self {
            api_key: value("api_key").unwrap_or(defaults.api_key),
            api_url: value("api_url").unwrap_or(defaults.api_url),
            theme_dark: value("theme_dark").unwrap_or(defaults.theme_dark),
            theme_light: value("theme_light").unwrap_or(defaults.theme_light),
            theme_file: value("theme_file"),
            dark_mode,
            open_command: value("open_command").unwrap_or(defaults.open_command),
            trace_level: value("trace_level"),
        }
    }

    /// Search endpoint built from `api_url` and `api_key`.
    #[must_use]
    pub fn endpoint(&self) -> SearchEndpoint {
        SearchEndpoint {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
        }
    }

    /// Resolves the dark and light themes.
    ///
    /// A readable `theme_file` is used for both modes; otherwise the named
    /// built-in themes are loaded.
    #[must_use]
    pub fn themes(&self) -> ThemePair {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => {
                    return ThemePair {
                        dark: theme.clone(),
                        light: theme,
                    }
                }
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using built-in themes");
                }
            }
        }

        ThemePair {
            dark: Theme::builtin(&self.theme_dark),
            light: Theme::builtin(&self.theme_light),
        }
    }
}

/// Opens the persistent store, falling back to an in-memory one.
///
/// Favorites and preferences still work for the session when the data
/// directory is unusable; they are just not kept.
fn open_store() -> SharedStore {
    let path = infrastructure::store_path();
    match JsonFileStore::open(path.clone()) {
        Ok(store) => share(store),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to open store, favorites will not persist");
            share(MemoryStore::default())
        }
    }
}

/// Initializes the plugin state with configuration.
///
/// Opens the store under the plugin data directory and loads favorites, the
/// dark-mode preference and themes. Nothing is fetched until permissions are
/// granted.
///
/// # Example
///
/// ```rust,no_run
/// use wallgrid::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.wallpapers.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing wallgrid plugin");

    initialize_with_store(config, open_store())
}

/// Like [`initialize`], over an explicit store.
pub fn initialize_with_store(config: &Config, store: SharedStore) -> AppState {
    AppState::new(store, config.endpoint(), config.themes(), config.dark_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{GridContent, MessageKind, Visibility};
    use tempfile::tempdir;

    const MOUNTAINS: &str = r#"{"total": 2, "totalHits": 2, "hits": [
        {"id": 1, "tags": "mountains, nature, snow", "largeImageURL": "https://img/1.jpg",
         "pageURL": "https://pixabay.com/photos/1/", "user": "alice", "downloads": 10, "favorites": 3},
        {"id": 2, "tags": "abstract, pattern", "largeImageURL": "https://img/2.jpg",
         "pageURL": "https://pixabay.com/photos/2/", "user": "bob", "downloads": 4, "favorites": 1}
    ]}"#;

    fn state_over(store: SharedStore) -> AppState {
        initialize_with_store(&Config::default(), store)
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn complete(state: &mut AppState, status: u16, body: &str) -> bool {
        let generation = state.generation;
        send(
            state,
            Event::SearchCompleted {
                generation,
                status,
                body: body.as_bytes().to_vec(),
            },
        )
        .0
    }

    fn search(state: &mut AppState, term: &str) -> Vec<Action> {
        send(state, Event::SearchMode);
        for c in term.chars() {
            send(state, Event::Char(c));
        }
        send(state, Event::SubmitSearch).1
    }

    #[test]
    fn searching_mountains_categorizes_and_filters() {
        let mut state = state_over(share(MemoryStore::default()));

        let actions = search(&mut state, "mountains");
        let [Action::FetchWallpapers { url, .. }] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        assert!(url.contains("q=mountains"));
        assert!(state.in_flight);

        assert!(complete(&mut state, 200, MOUNTAINS));
        assert!(!state.in_flight);
        assert_eq!(state.wallpapers[0].category, Category::Nature);
        assert_eq!(state.wallpapers[1].category, Category::Abstract);
        assert_eq!(state.grid.cards().len(), 2);

        let only_abstract = Visibility::Category(CategoryFilter::Only(Category::Abstract));
        state.grid.render(&state.wallpapers, only_abstract, &state.favorites);
        let ids: Vec<_> = state.grid.cards().iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn only_one_fetch_is_outstanding() {
        let mut state = state_over(share(MemoryStore::default()));

        let (_, first) = send(&mut state, Event::SelectCategory(CategoryFilter::Only(Category::Space)));
        assert_eq!(first.len(), 1);

        let (_, second) = send(&mut state, Event::SelectCategory(CategoryFilter::Only(Category::Food)));
        assert!(second.is_empty());
        assert_eq!(state.filter, CategoryFilter::Only(Category::Space));

        complete(&mut state, 200, MOUNTAINS);
        let (_, third) = send(&mut state, Event::SelectCategory(CategoryFilter::Only(Category::Food)));
        assert_eq!(third.len(), 1);
    }

    #[test]
    fn server_error_shows_message_and_keeps_wallpapers() {
        let mut state = state_over(share(MemoryStore::default()));
        send(&mut state, Event::PermissionsGranted);
        complete(&mut state, 200, MOUNTAINS);

        send(&mut state, Event::NextCategory);
        complete(&mut state, 500, "oops");

        assert!(!state.in_flight);
        assert_eq!(state.wallpapers.len(), 2);
        assert!(matches!(
            state.grid.content(),
            GridContent::Message { kind: MessageKind::Error, .. }
        ));
    }

    #[test]
    fn favorites_view_without_favorites_explains_itself() {
        let mut state = state_over(share(MemoryStore::default()));
        send(&mut state, Event::PermissionsGranted);
        complete(&mut state, 200, MOUNTAINS);

        send(&mut state, Event::ShowFavorites);

        assert!(matches!(
            state.grid.content(),
            GridContent::Message { kind: MessageKind::Info, text } if text == "You haven't added any favorites yet."
        ));
    }

    #[test]
    fn lightbox_and_card_favorites_stay_in_sync() {
        let mut state = state_over(share(MemoryStore::default()));
        send(&mut state, Event::PermissionsGranted);
        complete(&mut state, 200, MOUNTAINS);

        send(&mut state, Event::GridClick { id: 2, target: ClickTarget::Card });
        assert!(state.lightbox.is_open());
        assert_eq!(state.lightbox.is_favorite(), Some(false));

        send(&mut state, Event::LightboxFavorite);
        assert_eq!(state.lightbox.is_favorite(), Some(true));
        assert!(state.favorites.is_favorite(2));
        let card = state.grid.cards().iter().find(|card| card.id == 2).unwrap();
        assert!(card.is_favorite);

        let (_, actions) = send(&mut state, Event::Download);
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                url: "https://img/2.jpg".to_string()
            }]
        );

        send(&mut state, Event::Escape);
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn favorites_and_dark_mode_survive_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallgrid.json");

        {
            let mut state = state_over(share(JsonFileStore::open(path.clone()).unwrap()));
            assert!(state.dark_mode);
            send(&mut state, Event::PermissionsGranted);
            complete(&mut state, 200, MOUNTAINS);

            send(&mut state, Event::GridClick { id: 1, target: ClickTarget::FavoriteGlyph });
            send(&mut state, Event::ToggleDarkMode);
        }

        let mut state = state_over(share(JsonFileStore::open(path).unwrap()));
        assert!(state.favorites.is_favorite(1));
        assert!(!state.favorites.is_favorite(2));
        assert!(!state.dark_mode);

        send(&mut state, Event::PermissionsGranted);
        complete(&mut state, 200, MOUNTAINS);
        send(&mut state, Event::ShowFavorites);
        let ids: Vec<_> = state.grid.cards().iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn config_from_zellij_applies_overrides_and_defaults() {
        let mut map = BTreeMap::new();
        map.insert("api_key".to_string(), "  secret ".to_string());
        map.insert("theme_dark".to_string(), "catppuccin-frappe".to_string());
        map.insert("dark_mode".to_string(), "maybe".to_string());
        map.insert("open_command".to_string(), String::new());

        let config = Config::from_zellij(&map);

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.theme_dark, "catppuccin-frappe");
        assert_eq!(config.theme_light, "catppuccin-latte");
        assert!(config.dark_mode);
        assert_eq!(config.open_command, "xdg-open");
        assert_eq!(config.theme_file, None);

        let themes = config.themes();
        assert_eq!(themes.dark.name, "catppuccin-frappe");
        assert_eq!(themes.light.name, "catppuccin-latte");
    }

    #[test]
    fn theme_file_is_used_for_both_modes() {
        let dir = tempdir().unwrap();
        let theme_path = dir.path().join("custom.toml");
        let source = std::fs::read_to_string(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("themes/catppuccin-macchiato.toml"),
        )
        .unwrap();
        std::fs::write(&theme_path, source).unwrap();

        let config = Config {
            theme_file: Some(theme_path.display().to_string()),
            ..Config::default()
        };
        let themes = config.themes();

        assert_eq!(themes.dark.name, "catppuccin-macchiato");
        assert_eq!(themes.light.name, "catppuccin-macchiato");
    }

    #[test]
    fn missing_theme_file_falls_back_to_builtins() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };

        assert_eq!(config.themes().dark.name, "catppuccin-mocha");
    }
}
