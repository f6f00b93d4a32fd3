use crate::commands::{AppointmentInput, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, Session};
use log::info;

pub fn run<S: DataStore>(session: &mut Session<S>, input: AppointmentInput) -> Result<CmdResult> {
    let appointment = input.into_appointment()?;
    session.append(appointment.clone());
    session.commit()?;

    info!("created appointment {} ({})", appointment.id, appointment.name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment added ({}): {}",
        session.len(),
        appointment.name
    )));
    result.affected_appointments.push(appointment);
    Ok(result)
}
