//! Domain layer for the Wallgrid plugin.
//!
//! Core domain types independent of Zellij APIs and infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`category`]: Category labels, filters and the tag resolver
//! - [`wallpaper`]: Wallpaper item model

pub mod category;
pub mod error;
pub mod wallpaper;

pub use category::{query_for_category, resolve_category, Category, CategoryFilter};
pub use error::{Result, WallgridError};
pub use wallpaper::{Wallpaper, WallpaperId};
