use super::DataStore;
use crate::error::{AgendaError, Result};
use crate::model::Appointment;
use log::debug;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "appointments.json";

/// Stores the appointment sequence as a pretty-printed JSON array in a single
/// file under `root`.
pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AgendaError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Appointment>> {
        let path = self.data_path();
        if !path.exists() {
            debug!("no snapshot at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(AgendaError::Io)?;
        let appointments: Vec<Appointment> =
            serde_json::from_str(&content).map_err(AgendaError::CorruptStorage)?;
        debug!(
            "loaded {} appointments from {}",
            appointments.len(),
            path.display()
        );
        Ok(appointments)
    }

    fn save(&mut self, appointments: &[Appointment]) -> Result<()> {
        self.ensure_dir()?;

        let path = self.data_path();
        let content =
            serde_json::to_string_pretty(appointments).map_err(AgendaError::CorruptStorage)?;

        // Atomic write: readers see either the old snapshot or the new one
        let tmp_path = self.root.join(format!(".appointments-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(AgendaError::Io(e));
        }

        debug!(
            "saved {} appointments to {}",
            appointments.len(),
            path.display()
        );
        Ok(())
    }
}
