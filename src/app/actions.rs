//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the Zellij host directly. It returns a
//! `Vec<Action>` after each event and the plugin shim executes them in order.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues one HTTP GET to the search provider through the host.
    ///
    /// The host answers with a `WebRequestResult` event; `generation` must be
    /// carried in the request context so the answer can be matched.
    FetchWallpapers {
        /// Fully built request URL, query parameters included.
        url: String,
        /// Fetch generation the answer belongs to.
        generation: u64,
    },

    /// Opens a URL with the configured external opener.
    ///
    /// Used by the lightbox download action for the full-resolution image.
    OpenUrl {
        url: String,
    },
}
