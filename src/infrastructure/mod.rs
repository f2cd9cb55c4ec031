//! Infrastructure layer for filesystem and environment interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; these
//! helpers map user-facing paths onto it.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, store_path};
