//! Path utilities for the Zellij sandbox environment.
//!
//! The host filesystem is mounted under `/host`, so user-facing paths such as
//! `~/themes/custom.toml` have to be rewritten before the plugin can open them.

use std::path::PathBuf;

/// File name of the key-value store holding favorites and preferences.
pub const STORE_FILE_NAME: &str = "wallgrid.json";

/// Returns the data directory for Wallgrid storage and logs.
///
/// The directory is located at `/host/.local/share/zellij/wallgrid` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started if that's not available, which usually
/// makes the real path `~/.local/share/zellij/wallgrid`.
///
/// # Examples
///
/// ```
/// use wallgrid::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/wallgrid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("wallgrid")
}

/// Returns the path of the persistent key-value store.
#[must_use]
pub fn store_path() -> PathBuf {
    get_data_dir().join(STORE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use wallgrid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_lives_in_data_dir() {
        assert_eq!(store_path(), get_data_dir().join("wallgrid.json"));
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }
}
