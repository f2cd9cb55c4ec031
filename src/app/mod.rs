//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/search/storage layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Host Web Responses ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`fetcher`]: Fetch start/finish halves around the host web request
//! - [`grid`]: Gallery grid model (cards, messages, loading)
//! - [`handler`]: Event processing and the fetch guard
//! - [`lightbox`]: Single-wallpaper preview overlay
//! - [`modes`]: Input mode type
//! - [`state`]: Session state container and view model computation

pub mod actions;
pub mod fetcher;
pub mod grid;
pub mod handler;
pub mod lightbox;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use grid::{Card, GalleryView, GridContent, MessageKind, Visibility};
pub use handler::{handle_event, ClickTarget, Event};
pub use lightbox::{LightboxController, LightboxState};
pub use modes::InputMode;
pub use state::AppState;
