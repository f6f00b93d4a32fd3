use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_appointments;
use crate::ordering::{sort_appointments, SortKey};
use crate::store::{DataStore, Session};
use log::info;

pub fn run<S: DataStore>(session: &mut Session<S>, by: SortKey) -> Result<CmdResult> {
    let sorted = sort_appointments(session.appointments(), by);
    session.reorder(sorted);
    session.commit()?;

    info!("sorted {} appointments by {}", session.len(), by);
    let mut result =
        CmdResult::default().with_listed_appointments(index_appointments(session.appointments()));
    result.add_message(CmdMessage::success(format!(
        "Appointments sorted by {}",
        by
    )));
    Ok(result)
}
