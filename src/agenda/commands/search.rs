//! Name search.
//!
//! Searching re-sorts the book by name and persists that order, then binary
//! searches the lowercased term against the lowercased names. Only names are
//! matched: a term that looks like a date is compared against names too and
//! will normally find nothing.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::index::DisplayAppointment;
use crate::lookup::find_by_key;
use crate::model::Appointment;
use crate::ordering::{sort_appointments, SortKey};
use crate::store::{DataStore, Session};
use log::debug;

pub fn run<S: DataStore>(session: &mut Session<S>, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(AgendaError::Api("Search term cannot be empty".into()));
    }

    let sorted = sort_appointments(session.appointments(), SortKey::Name);
    session.reorder(sorted);
    session.commit()?;

    let target = term.to_lowercase();
    let position = find_by_key(session.appointments(), &target, Appointment::name_key)?
        .ok_or_else(|| AgendaError::NotFound(term.to_string()))?;
    debug!("search for {:?} matched position {}", term, position);

    let found = DisplayAppointment {
        index: position + 1,
        appointment: session.get(position)?.clone(),
    };
    let mut result = CmdResult::default().with_listed_appointments(vec![found]);
    result.add_message(CmdMessage::info("Appointments are now sorted by name"));
    Ok(result)
}
