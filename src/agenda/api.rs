//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every agenda operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (raw selector strings become [`Selector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O to the terminal and no formatting.
//!
//! `AgendaApi<S: DataStore>` is generic over the storage backend:
//! `AgendaApi<FileStore>` in production, `AgendaApi<InMemoryStore>` in tests.
//!
//! The facade owns the [`Session`]: appointments are loaded once when the API
//! is constructed and every mutating call saves the full sequence before it
//! returns.

use crate::commands;
use crate::error::{AgendaError, Result};
use crate::index::Selector;
use crate::model::Appointment;
use crate::ordering::SortKey;
use crate::store::{DataStore, Session};
use chrono::NaiveDate;
use log::debug;
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    AppointmentInput, AppointmentPatch, AppointmentUpdate, CmdMessage, CmdResult, MessageLevel,
};
pub use crate::time::Period;

/// The main API facade for agenda operations.
pub struct AgendaApi<S: DataStore> {
    session: Session<S>,
    config_dir: PathBuf,
}

impl<S: DataStore> AgendaApi<S> {
    /// Opens a session over `store`. `config_dir` is where `config.json` lives.
    pub fn new(store: S, config_dir: PathBuf) -> Result<Self> {
        let session = Session::open(store)?;
        Ok(Self {
            session,
            config_dir,
        })
    }

    pub fn create_appointment(
        &mut self,
        name: &str,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        period: Period,
    ) -> Result<CmdResult> {
        debug!("api: create_appointment");
        let input = AppointmentInput::new(name, date, hour, minute, period);
        commands::create::run(&mut self.session, input)
    }

    pub fn list_appointments(&self) -> Result<CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn sort_appointments(&mut self, by: SortKey) -> Result<CmdResult> {
        debug!("api: sort_appointments by {}", by);
        commands::sort::run(&mut self.session, by)
    }

    pub fn update_appointment(
        &mut self,
        selector: &str,
        name: &str,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        period: Period,
    ) -> Result<CmdResult> {
        let input = AppointmentInput::new(name, date, hour, minute, period);
        self.update_appointment_partial(selector, input.into())
    }

    pub fn update_appointment_partial(
        &mut self,
        selector: &str,
        patch: AppointmentPatch,
    ) -> Result<CmdResult> {
        debug!("api: update_appointment {}", selector);
        let update = AppointmentUpdate::new(parse_selector(selector)?, patch);
        commands::update::run(&mut self.session, &update)
    }

    pub fn delete_appointment(&mut self, selector: &str) -> Result<CmdResult> {
        debug!("api: delete_appointment {}", selector);
        commands::delete::run(&mut self.session, &parse_selector(selector)?)
    }

    pub fn search_appointments(&mut self, term: &str) -> Result<CmdResult> {
        debug!("api: search_appointments {:?}", term);
        commands::search::run(&mut self.session, term)
    }

    pub fn get_appointment(&self, selector: &str) -> Result<CmdResult> {
        commands::view::run(&self.session, &parse_selector(selector)?)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Read-only view of the current order, for rendering.
    pub fn appointments(&self) -> &[Appointment] {
        self.session.appointments()
    }

    pub fn store(&self) -> &S {
        self.session.store()
    }
}

fn parse_selector(input: &str) -> Result<Selector> {
    input.parse().map_err(AgendaError::Api)
}
