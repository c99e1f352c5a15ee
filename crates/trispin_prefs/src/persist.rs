use std::path::{Path, PathBuf};

use eyre::{OptionExt, Result};
use serde::Serialize;

const PREFS_FILE_NAME: &str = "prefs.yaml";

/// Returns the path to the user preferences file in the platform config
/// directory.
pub fn prefs_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "Trispin")
        .ok_or_eyre("no home directory for preferences")?;
    Ok(dirs.config_dir().join(PREFS_FILE_NAME))
}

pub fn user_config_source(path: &Path) -> impl config::Source + Send + Sync + 'static {
    config::File::from(path).format(crate::PREFS_FILE_FORMAT)
}

pub fn save(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    Ok(())
}
