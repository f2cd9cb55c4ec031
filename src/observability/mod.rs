//! Structured logging to a rotating JSON file.
//!
//! The plugin has no terminal of its own to log to, so `tracing` records are
//! formatted as JSON lines and appended to a file in the plugin's data
//! directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt::layer().json() → RotatingFileWriter
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/wallgrid/wallgrid.log.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: Each record carries the enclosing span's fields
//!
//! # Configuration
//!
//! Verbosity is controlled by the `trace_level` plugin option, an
//! `EnvFilter` directive such as `"debug"` or `"wallgrid=trace"`. Default:
//! `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
