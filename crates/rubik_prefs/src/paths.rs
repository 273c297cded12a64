//! Locations of files read and written by the simulator.

use std::path::PathBuf;

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "rubik-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = {
        let dirs = ProjectDirs::from("", "", "rubik");
        if dirs.is_none() {
            log::error!("Error getting config directory");
        }
        dirs
    };
}

/// Returns the default user preferences file.
pub fn prefs_file() -> Result<PathBuf> {
    let dirs = PROJECT_DIRS.as_ref().ok_or_eyre("no config directory")?;
    Ok(dirs
        .config_dir()
        .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")))
}
