//! Platform path resolution.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR_NAME: &str = "emoterm";

/// Returns the data directory for emoterm's log file.
///
/// Resolves to `$XDG_DATA_HOME/emoterm` (usually `~/.local/share/emoterm`)
/// on Linux, `~/Library/Application Support/emoterm` on macOS and
/// `%LOCALAPPDATA%\emoterm` on Windows. Returns `None` when the platform
/// data directory cannot be determined.
#[must_use]
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}
