//! Path resolution utilities.
//!
//! Directories follow the XDG base directory layout: `$XDG_DATA_HOME` and
//! `$XDG_CONFIG_HOME` when set, otherwise `~/.local/share` and `~/.config`.
//! When no home directory is known either, paths fall back to the current
//! directory.

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "fridgechef";

/// Returns the data directory for FridgeChef files (trace exports).
///
/// Resolves to `$XDG_DATA_HOME/fridgechef` or `~/.local/share/fridgechef`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_dir(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
        &[".local", "share"],
    )
}

/// Returns the config directory holding `config.toml`.
///
/// Resolves to `$XDG_CONFIG_HOME/fridgechef` or `~/.config/fridgechef`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    resolve_dir(
        env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
        &[".config"],
    )
}

fn resolve_dir(xdg: Option<PathBuf>, home: Option<PathBuf>, home_suffix: &[&str]) -> PathBuf {
    let base = xdg
        .filter(|dir| dir.is_absolute())
        .or_else(|| {
            home.map(|home| {
                home_suffix
                    .iter()
                    .fold(home, |path, component| path.join(component))
            })
        })
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or with no known home directory, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use fridgechef::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, env::var_os("HOME").as_deref().map(Path::new))
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => home.map_or_else(|| PathBuf::from(path), Path::to_path_buf),
        _ => PathBuf::from(path),
    }
}
