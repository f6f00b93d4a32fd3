use crate::config::AgendaConfig;
use crate::error::Result;
use crate::index::{DisplayAppointment, Selector};
use crate::model::{validate_name, Appointment};
use crate::time::{to_time_of_day, Period};
use chrono::NaiveDate;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_appointments: Vec<Appointment>,
    pub listed_appointments: Vec<DisplayAppointment>,
    pub config: Option<AgendaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.affected_appointments = appointments;
        self
    }

    pub fn with_listed_appointments(mut self, appointments: Vec<DisplayAppointment>) -> Self {
        self.listed_appointments = appointments;
        self
    }

    pub fn with_config(mut self, config: AgendaConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Everything the user fills in for an appointment, as entered.
#[derive(Debug, Clone)]
pub struct AppointmentInput {
    pub name: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub period: Period,
}

impl AppointmentInput {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        period: Period,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            hour,
            minute,
            period,
        }
    }

    /// Validates the input and builds a fresh appointment with a new id.
    pub fn into_appointment(self) -> Result<Appointment> {
        let name = validate_name(&self.name)?;
        let time = to_time_of_day(self.hour, self.minute, self.period)?;
        Ok(Appointment::at(name, self.date, time))
    }
}

impl From<AppointmentInput> for AppointmentPatch {
    fn from(input: AppointmentInput) -> Self {
        Self {
            name: Some(input.name),
            date: Some(input.date),
            hour: Some(input.hour),
            minute: Some(input.minute),
            period: Some(input.period),
        }
    }
}

/// A change to an existing appointment. Fields left as `None` keep their
/// current value.
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub period: Option<Period>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
            && self.period.is_none()
    }
}

/// A request to update the appointment picked by `selector`.
#[derive(Debug, Clone)]
pub struct AppointmentUpdate {
    pub selector: Selector,
    pub patch: AppointmentPatch,
}

impl AppointmentUpdate {
    pub fn new(selector: Selector, patch: impl Into<AppointmentPatch>) -> Self {
        Self {
            selector,
            patch: patch.into(),
        }
    }
}
