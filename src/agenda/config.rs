use crate::error::{AgendaError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How appointment times are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFormat::TwelveHour => write!(f, "12h"),
            ClockFormat::TwentyFourHour => write!(f, "24h"),
        }
    }
}

impl FromStr for ClockFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "12h" | "12" => Ok(ClockFormat::TwelveHour),
            "24h" | "24" => Ok(ClockFormat::TwentyFourHour),
            _ => Err(format!("Invalid clock format: {} (expected 12h or 24h)", s)),
        }
    }
}

impl ClockFormat {
    /// `chrono` format string for a full appointment timestamp.
    pub fn datetime_pattern(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%Y-%m-%d %I:%M %p",
            ClockFormat::TwentyFourHour => "%Y-%m-%d %H:%M",
        }
    }
}

/// Configuration for agenda, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgendaConfig {
    /// File name of the appointment snapshot inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default)]
    pub clock: ClockFormat,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            clock: ClockFormat::default(),
        }
    }
}

impl AgendaConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "clock"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AgendaError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| AgendaError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AgendaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AgendaError::CorruptStorage)?;
        fs::write(config_path, content).map_err(AgendaError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "clock" => Ok(self.clock.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(|c: char| c == '/' || c == '\\') {
                    return Err(AgendaError::Config(format!(
                        "data-file must be a plain file name, got \"{}\"",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            "clock" => self.clock = value.parse().map_err(AgendaError::Config)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> AgendaError {
    AgendaError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        AgendaConfig::KEYS.join(", ")
    ))
}
