use crate::commands::CmdResult;
use crate::error::{AgendaError, Result};
use crate::index::{resolve, DisplayAppointment, Selector};
use crate::store::{DataStore, Session};

pub fn run<S: DataStore>(session: &Session<S>, selector: &Selector) -> Result<CmdResult> {
    let id = resolve(session.appointments(), selector)?;
    let position = session
        .position_of(&id)
        .ok_or(AgendaError::AppointmentNotFound(id))?;
    let listed = DisplayAppointment {
        index: position + 1,
        appointment: session.get(position)?.clone(),
    };
    Ok(CmdResult::default().with_listed_appointments(vec![listed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_by_index_and_id() {
        let fixture = StoreFixture::new().with_appointments(3);
        let session = Session::open(fixture.store).unwrap();

        let by_index = run(&session, &Selector::Index(2)).unwrap();
        assert_eq!(by_index.listed_appointments[0].appointment.name, "Client 2");
        assert_eq!(by_index.listed_appointments[0].index, 2);

        let id = session.appointments()[2].id;
        let by_id = run(&session, &Selector::Id(id)).unwrap();
        assert_eq!(by_id.listed_appointments[0].index, 3);
    }

    #[test]
    fn out_of_range_index_fails() {
        let session = Session::open(StoreFixture::new().with_appointments(1).store).unwrap();
        assert!(matches!(
            run(&session, &Selector::Index(4)),
            Err(AgendaError::IndexOutOfRange { index: 4, len: 1 })
        ));
    }
}
