use super::DataStore;
use crate::error::Result;
use crate::model::Appointment;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Vec<Appointment>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            snapshot: appointments,
            saves: 0,
        }
    }

    /// The last saved sequence.
    pub fn snapshot(&self) -> &[Appointment] {
        &self.snapshot
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Appointment>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, appointments: &[Appointment]) -> Result<()> {
        self.snapshot = appointments.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::AgendaError;
    use chrono::NaiveDateTime;
    use std::io;

    pub fn appointment(name: &str, when: &str) -> Appointment {
        let when = NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M")
            .expect("fixture dates use %Y-%m-%d %H:%M");
        Appointment::new(name.to_string(), when)
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_appointment(mut self, name: &str, when: &str) -> Self {
            self.store.snapshot.push(appointment(name, when));
            self
        }

        pub fn with_appointments(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Client {}", i + 1);
                let when = format!("2025-02-{:02} 09:00", i + 1);
                self.store.snapshot.push(appointment(&name, &when));
            }
            self
        }
    }

    /// A store whose snapshot can be read but never written, like a data file
    /// on a read-only mount.
    pub struct ReadOnlyStore {
        snapshot: Vec<Appointment>,
    }

    impl ReadOnlyStore {
        pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
            Self {
                snapshot: appointments,
            }
        }
    }

    impl DataStore for ReadOnlyStore {
        fn load(&self) -> Result<Vec<Appointment>> {
            Ok(self.snapshot.clone())
        }

        fn save(&mut self, _appointments: &[Appointment]) -> Result<()> {
            Err(AgendaError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only file system",
            )))
        }
    }
}
