//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Wallgrid library and
//! the Zellij plugin system. It maps Zellij events to library events and
//! library actions to Zellij API calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, `WebRequestResult`,
//!    `PermissionRequestResult` events
//! 3. **Permissions Granted**: Fetch the default query
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Draw the UI and keep card rows for mouse hit-testing
//!
//! # Request Correlation
//!
//! Each search is sent with its generation in the web request context. The
//! result event carries the context back, so late answers to superseded
//! searches can be recognised and dropped.
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open the selected wallpaper in the lightbox
//! - `f`: Toggle favorite (selected card, or the lightbox wallpaper)
//! - `F`: Show favorites
//! - `]`/`Tab`, `[`: Next / previous category
//! - `a`: Show all categories
//! - `t`: Toggle dark mode
//! - `o`: Download the lightbox wallpaper
//! - `/`: Enter search mode
//! - `Esc`/`x`: Close the lightbox
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Type into the search box
//! - `Enter`: Search
//! - `Esc`: Exit search
//!
//! Mouse: click a card to open it, click its star to toggle the favorite,
//! scroll to move the selection, click the lightbox to close it.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use wallgrid::search::GENERATION_KEY;
use wallgrid::ui::RenderedLayout;
use wallgrid::{handle_event, Action, AppState, CategoryFilter, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the opener
/// command and the card positions from the last render.
struct State {
    /// Core application state from library layer.
    app: AppState,

    /// Command the download action runs.
    open_command: String,

    /// Card rows drawn by the previous render.
    layout: RenderedLayout,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: wallgrid::initialize_with_store(
                &config,
                wallgrid::storage::share(wallgrid::storage::MemoryStore::default()),
            ),
            open_command: config.open_command,
            layout: RenderedLayout::default(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Query the wallpaper API
    /// - `RunCommands`: Open image URLs with the configured opener
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        wallgrid::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_url = %config.api_url,
            has_api_key = !config.api_key.is_empty(),
            theme_dark = %config.theme_dark,
            theme_light = %config.theme_light,
            "parsed configuration"
        );
        self.app = wallgrid::initialize(&config);
        self.open_command = config.open_command;

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match Self::map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.layout = wallgrid::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.input_mode == InputMode::Search {
            return Some(match key.bare_key {
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        let lightbox_open = self.app.lightbox.is_open();
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter if !lightbox_open => Event::OpenSelected,
            BareKey::Char('x') if lightbox_open => Event::CloseLightbox,
            BareKey::Char('f') if lightbox_open => Event::LightboxFavorite,
            BareKey::Char('f') => Event::ToggleSelectedFavorite,
            BareKey::Char('F') => Event::ShowFavorites,
            BareKey::Char(']') | BareKey::Tab => Event::NextCategory,
            BareKey::Char('[') => Event::PreviousCategory,
            BareKey::Char('a') => Event::SelectCategory(CategoryFilter::All),
            BareKey::Char('t') => Event::ToggleDarkMode,
            BareKey::Char('o') => Event::Download,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    /// Maps mouse events to application events.
    ///
    /// Clicks are resolved against the card rows of the last render. A click
    /// anywhere while the lightbox covers the grid closes it.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(..) if self.layout.overlay => Some(Event::CloseLightbox),
            Mouse::LeftClick(line, col) => {
                let line = usize::try_from(line).ok()?;
                let (id, target) = self.layout.hit(line, col)?;
                tracing::debug!(id, target = ?target, "card clicked");
                Some(Event::GridClick { id, target })
            }
            Mouse::ScrollDown(_) => Some(Event::KeyDown),
            Mouse::ScrollUp(_) => Some(Event::KeyUp),
            _ => None,
        }
    }

    /// Maps a web request result to a search completion.
    ///
    /// Results without a readable generation were not sent by this plugin
    /// and are ignored.
    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let generation = context
            .get(GENERATION_KEY)
            .and_then(|g| g.parse::<u64>().ok());

        let Some(generation) = generation else {
            tracing::debug!(status, "web request result without generation, ignoring");
            return None;
        };

        tracing::debug!(status, generation, body_len = body.len(), "web request result");
        Some(Event::SearchCompleted {
            generation,
            status,
            body,
        })
    }

    /// Handles permission request results.
    fn map_permission_result(permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                Some(Event::PermissionsGranted)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - wallpapers cannot be fetched");
                None
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide plugin pane
    /// - `FetchWallpapers`: GET the search URL, tagging it with its generation
    /// - `OpenUrl`: Run the opener command on the URL
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchWallpapers {
                ref url,
                generation,
            } => {
                tracing::debug!(generation, "sending search request");
                let mut context = BTreeMap::new();
                context.insert(GENERATION_KEY.to_string(), generation.to_string());
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::OpenUrl { ref url } => {
                tracing::debug!(command = %self.open_command, "opening url");
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
            }
        }
    }
}
