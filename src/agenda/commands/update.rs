use crate::commands::{AppointmentUpdate, CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::index::resolve;
use crate::model::{validate_name, Appointment};
use crate::store::{DataStore, Session};
use crate::time::{from_time_of_day, to_time_of_day};
use log::info;

pub fn run<S: DataStore>(
    session: &mut Session<S>,
    update: &AppointmentUpdate,
) -> Result<CmdResult> {
    let id = resolve(session.appointments(), &update.selector)?;
    let position = session
        .position_of(&id)
        .ok_or(AgendaError::AppointmentNotFound(id))?;

    if update.patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to update ({})",
            update.selector
        )));
        return Ok(result);
    }

    let current = session.get(position)?;
    let patch = &update.patch;

    // Everything is validated before the sequence is touched
    let name = match &patch.name {
        Some(name) => validate_name(name)?,
        None => current.name.clone(),
    };
    let date = patch.date.unwrap_or_else(|| current.when.date());
    let (hour, minute, period) = from_time_of_day(current.when.time());
    let time = to_time_of_day(
        patch.hour.unwrap_or(hour),
        patch.minute.unwrap_or(minute),
        patch.period.unwrap_or(period),
    )?;

    let updated = Appointment {
        id,
        name,
        when: date.and_time(time),
    };
    session.replace(position, updated.clone())?;
    session.commit()?;

    info!("updated appointment {} ({})", updated.id, updated.name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment updated ({}): {}",
        position + 1,
        updated.name
    )));
    result.affected_appointments.push(updated);
    Ok(result)
}
