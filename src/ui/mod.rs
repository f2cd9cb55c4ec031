//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled output through
//! composable rendering components, with light and dark themes and search
//! match highlighting.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator and click hit-testing
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, RenderedLayout};
pub use theme::{Theme, ThemePair};
pub use viewmodel::{
    BodyView, CategoryBarInfo, CategoryChip, DisplayCard, FooterInfo, HeaderInfo, LightboxInfo,
    SearchBarInfo, UIViewModel,
};
