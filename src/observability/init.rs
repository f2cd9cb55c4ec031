//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the structured log inside the data directory.
pub const LOG_FILE_NAME: &str = "wallgrid.log.json";

/// Initializes the tracing subscriber with JSON output to a rotating file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events and spans by the configured trace level
/// 2. Formats each record as one JSON line
/// 3. Writes to a rotating file with backups
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Records are written to `~/.local/share/zellij/wallgrid/wallgrid.log.json`,
/// seen from inside the sandbox as `/host/.local/share/zellij/wallgrid/`.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if that fails (logging is optional)
/// - Only the first call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use wallgrid::observability::init_tracing;
/// use wallgrid::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join(LOG_FILE_NAME));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(json_layer);

    let _ = subscriber.try_init();
}
