//! Platform path helpers.
//!
//! Resolves the per-user data directory where the favorites file and the log
//! live, and expands `~` in user-supplied paths.

use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "cinesearch";

/// Returns the default data directory for cinesearch storage.
///
/// This is the platform data directory (`~/.local/share` on Linux,
/// `~/Library/Application Support` on macOS, `%APPDATA%` on Windows) joined
/// with `cinesearch`. Falls back to a relative `.cinesearch` directory when the
/// platform reports none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and all paths when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use cinesearch::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/absolute/path")), Path::new("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_ends_with_app_name() {
        let dir = default_data_dir();
        assert!(dir.ends_with(APP_DIR_NAME) || dir.ends_with(".cinesearch"));
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("/tmp/data")), PathBuf::from("/tmp/data"));
        assert_eq!(expand_tilde(Path::new("relative/~")), PathBuf::from("relative/~"));
    }

    #[test]
    fn expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/movies")), home.join("movies"));
        }
    }
}
