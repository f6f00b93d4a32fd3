use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Client name cannot be empty")]
    EmptyName,
}

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Index {index} is out of range (have {len} appointments)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    #[error("No matching appointments found for \"{0}\"")]
    NotFound(String),

    #[error("Invalid time: {hour}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Sequence is not sorted by the lookup key (first out of order at position {position})")]
    Unsorted { position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage: {0}")]
    CorruptStorage(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
