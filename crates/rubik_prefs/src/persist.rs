use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Serialize;

use crate::paths;

fn resolve(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => paths::prefs_file(),
    }
}

pub fn user_config_source(path: Option<&Path>) -> Result<impl config::Source + Send + Sync + use<>> {
    let path = resolve(path)?;
    log::debug!("reading preferences from {}", path.display());
    Ok(config::File::from(path)
        .format(crate::PREFS_FILE_FORMAT)
        .required(false))
}

pub fn save(prefs_data: &impl Serialize, path: Option<&Path>) -> Result<()> {
    let path = resolve(path)?;
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(&path)?, prefs_data)?;
    log::info!("saved preferences to {}", path.display());
    Ok(())
}
