use crate::api::AgendaApi;
use crate::config::AgendaConfig;
use crate::error::{AgendaError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "AGENDA_HOME";

pub struct AgendaContext {
    pub api: AgendaApi<FileStore>,
    pub config: AgendaConfig,
}

/// Picks the data directory: an explicit override wins, then `$AGENDA_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "agenda", "agenda")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AgendaError::Config("Could not determine data directory".to_string()))
}

/// Loads config and the appointment snapshot from `data_dir`.
pub fn open(data_dir: PathBuf) -> Result<AgendaContext> {
    let config = AgendaConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone()).with_data_file(&config.data_file);
    debug!("using snapshot {}", store.data_path().display());

    let api = AgendaApi::new(store, data_dir)?;
    Ok(AgendaContext { api, config })
}

pub fn initialize(override_dir: Option<&Path>) -> Result<AgendaContext> {
    open(resolve_data_dir(override_dir)?)
}
