use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_appointments;
use crate::store::{DataStore, Session};

pub fn run<S: DataStore>(session: &Session<S>) -> Result<CmdResult> {
    let listed = index_appointments(session.appointments());
    Ok(CmdResult::default().with_listed_appointments(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_stored_order() {
        let fixture = StoreFixture::new()
            .with_appointment("Zed", "2025-01-01 09:00")
            .with_appointment("Amy", "2025-01-02 09:00");
        let session = Session::open(fixture.store).unwrap();

        let result = run(&session).unwrap();
        assert_eq!(result.listed_appointments.len(), 2);
        assert_eq!(result.listed_appointments[0].appointment.name, "Zed");
        assert_eq!(result.listed_appointments[1].index, 2);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let session = Session::open(StoreFixture::new().store).unwrap();
        assert!(run(&session).unwrap().listed_appointments.is_empty());
    }
}
