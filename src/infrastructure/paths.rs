//! Sandbox path helpers.
//!
//! Zellij mounts the host filesystem under `/host`; configured paths are
//! rewritten against that mount before any file is opened.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Returns the default directory holding the county datasets and trace log.
///
/// Resolves to `/host/.local/share/countyflow`, which is
/// `~/.local/share/countyflow` when Zellij was started from the home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local").join("share").join("countyflow")
}

/// Rewrites a `~`-prefixed path onto the `/host` mount.
///
/// ```
/// use countyflow::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/data/counties.json"), "/host/data/counties.json");
/// assert_eq!(expand_tilde("/srv/counties.json"), "/srv/counties.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
