use crate::error::{Result, ValidationError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Formats accepted when reading `when` back from a snapshot. The first is
/// what we write; the second is the space-separated form older snapshots used.
const WHEN_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "date", deserialize_with = "deserialize_when")]
    pub when: NaiveDateTime,
}

impl Appointment {
    pub fn new(name: String, when: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            when,
        }
    }

    pub fn at(name: String, date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(name, date.and_time(time))
    }

    /// Records read from snapshots written before ids existed come back with
    /// a nil id until the session assigns one.
    pub fn has_id(&self) -> bool {
        !self.id.is_nil()
    }

    /// Lowercased name, the key used for name ordering and search.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Trims a client name and rejects it when nothing is left.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok(trimmed.to_string())
}

fn deserialize_when<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    WHEN_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {}", raw)))
}
