//! Path utilities for locating the data directory.
//!
//! The data directory holds the slot files, exports default to it, and the
//! log file lives there. It is resolved once at startup:
//!
//! 1. `WANDERNOTES_DATA_DIR`, if set and non-empty
//! 2. `$HOME/.local/share/wandernotes`
//! 3. `./.wandernotes` when no home directory is known

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "WANDERNOTES_DATA_DIR";

/// Directory name used when no home directory is known.
const FALLBACK_DIR: &str = ".wandernotes";

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Resolves the data directory from explicit inputs.
///
/// # Parameters
///
/// * `override_dir` - Value of [`DATA_DIR_ENV`], if any
/// * `home` - The user's home directory, if known
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use wandernotes::infrastructure::resolve_data_dir;
///
/// let home = Path::new("/home/asha");
/// assert_eq!(
///     resolve_data_dir(None, Some(home)),
///     PathBuf::from("/home/asha/.local/share/wandernotes")
/// );
/// assert_eq!(
///     resolve_data_dir(Some("~/notes"), Some(home)),
///     PathBuf::from("/home/asha/notes")
/// );
/// ```
#[must_use]
pub fn resolve_data_dir(override_dir: Option<&str>, home: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir.map(str::trim).filter(|d| !d.is_empty()) {
        return expand_with_home(dir, home);
    }

    home.map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |home| home.join(".local").join("share").join("wandernotes"),
    )
}

/// Returns the data directory for this process.
///
/// Reads [`DATA_DIR_ENV`] and `HOME`; see the module docs for precedence.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    let override_dir = env::var(DATA_DIR_ENV).ok();
    resolve_data_dir(override_dir.as_deref(), home_dir().as_deref())
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~` are returned unchanged, as are `~` paths when
/// no home directory is known.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, home_dir().as_deref())
}

fn expand_with_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_blank_override_is_ignored() {
        let home = Path::new("/home/asha");
        assert_eq!(resolve_data_dir(Some("/srv/notes"), Some(home)), PathBuf::from("/srv/notes"));
        assert_eq!(
            resolve_data_dir(Some("   "), Some(home)),
            PathBuf::from("/home/asha/.local/share/wandernotes")
        );
    }

    #[test]
    fn no_home_falls_back_to_relative_dir() {
        assert_eq!(resolve_data_dir(None, None), PathBuf::from(".wandernotes"));
        assert_eq!(resolve_data_dir(Some("~/x"), None), PathBuf::from("~/x"));
    }

    #[test]
    fn tilde_expansion() {
        let home = Some(Path::new("/home/asha"));
        assert_eq!(expand_with_home("~", home), PathBuf::from("/home/asha"));
        assert_eq!(expand_with_home("~/a/b", home), PathBuf::from("/home/asha/a/b"));
        assert_eq!(expand_with_home("/abs", home), PathBuf::from("/abs"));
        assert_eq!(expand_with_home("~other", home), PathBuf::from("~other"));
    }
}
