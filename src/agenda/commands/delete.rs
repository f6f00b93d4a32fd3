use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::index::{resolve, Selector};
use crate::store::{DataStore, Session};
use log::info;

pub fn run<S: DataStore>(session: &mut Session<S>, selector: &Selector) -> Result<CmdResult> {
    let id = resolve(session.appointments(), selector)?;
    let position = session
        .position_of(&id)
        .ok_or(AgendaError::AppointmentNotFound(id))?;

    let removed = session.remove_at(position)?;
    session.commit()?;

    info!("deleted appointment {} ({})", removed.id, removed.name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment deleted ({}): {}",
        selector, removed.name
    )));
    result.affected_appointments.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{appointment, ReadOnlyStore, StoreFixture};
    use uuid::Uuid;

    #[test]
    fn removes_and_persists() {
        let mut session = Session::open(StoreFixture::new().with_appointments(3).store).unwrap();

        let result = run(&mut session, &Selector::Index(2)).unwrap();
        assert_eq!(result.affected_appointments[0].name, "Client 2");

        let names: Vec<_> = session.appointments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Client 1", "Client 3"]);
        assert_eq!(session.store().snapshot().len(), 2);
    }

    #[test]
    fn out_of_range_leaves_store_unchanged() {
        let mut session = Session::open(StoreFixture::new().with_appointments(3).store).unwrap();
        let before = session.appointments().to_vec();

        let err = run(&mut session, &Selector::Index(5)).unwrap_err();
        assert!(matches!(err, AgendaError::IndexOutOfRange { index: 5, len: 3 }));
        assert_eq!(session.appointments(), before.as_slice());
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut session = Session::open(StoreFixture::new().with_appointments(1).store).unwrap();
        let err = run(&mut session, &Selector::Id(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, AgendaError::AppointmentNotFound(_)));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn failed_save_reports_io_and_keeps_the_removal() {
        let book = vec![
            appointment("Alice", "2025-01-10 14:30"),
            appointment("Bob", "2025-01-11 09:00"),
        ];
        let mut session = Session::open(ReadOnlyStore::with_appointments(book)).unwrap();

        let err = run(&mut session, &Selector::Index(1)).unwrap_err();
        assert!(matches!(err, AgendaError::Io(_)));
        assert_eq!(session.len(), 1);
        assert_eq!(session.appointments()[0].name, "Bob");
    }
}
