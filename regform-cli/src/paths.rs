//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "regform";
const APPLICATION: &str = "regform";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/regform` or `~/.config/regform`
/// - macOS: `~/Library/Application Support/dev.regform.regform`
/// - Windows: `C:\Users\<User>\AppData\Roaming\regform\regform\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, where logs go.
///
/// - Linux: `$XDG_CACHE_HOME/regform` or `~/.cache/regform`
/// - macOS: `~/Library/Caches/dev.regform.regform`
/// - Windows: `C:\Users\<User>\AppData\Local\regform\regform\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the optional JSON form config.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path of the log file, creating its directory if needed.
///
/// Falls back to the working directory when no cache directory is available.
pub fn log_file() -> PathBuf {
    match cache_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join("regform.log"),
        _ => PathBuf::from("regform.log"),
    }
}
