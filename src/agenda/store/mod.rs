//! # Storage Layer
//!
//! Appointments live in two places: the in-memory [`Session`], which is the
//! authoritative ordered sequence for the running process, and a persisted
//! snapshot behind the [`DataStore`] trait.
//!
//! ## Snapshot Model
//!
//! There is no incremental log. Every save rewrites the whole sequence, and the
//! command layer saves after every mutation, so the snapshot and the session
//! agree as soon as a command returns.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON array on disk
//! - [`memory::InMemoryStore`]: keeps the snapshot in memory, for tests
//!
//! ## Concurrency
//!
//! None. One process owns the snapshot. A second writer running at the same
//! time silently overwrites it (last write wins).

use crate::error::{AgendaError, Result};
use crate::model::Appointment;
use log::{debug, warn};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Persistence for the full appointment sequence.
pub trait DataStore {
    /// Read the persisted snapshot. An absent snapshot is an empty sequence.
    fn load(&self) -> Result<Vec<Appointment>>;

    /// Replace the persisted snapshot with `appointments`.
    fn save(&mut self, appointments: &[Appointment]) -> Result<()>;
}

/// The running session's ordered appointment sequence and its backing store.
pub struct Session<S: DataStore> {
    store: S,
    appointments: Vec<Appointment>,
}

impl<S: DataStore> Session<S> {
    /// Loads the snapshot once; the session owns the sequence from here on.
    ///
    /// Records without an id get one here, and the snapshot is saved right
    /// away so the ids survive into the next session.
    pub fn open(store: S) -> Result<Self> {
        let mut appointments = store.load()?;

        let mut assigned = 0;
        for appointment in appointments.iter_mut().filter(|a| !a.has_id()) {
            appointment.id = Uuid::new_v4();
            assigned += 1;
        }

        let mut session = Self {
            store,
            appointments,
        };
        if assigned > 0 {
            warn!("assigned ids to {} appointments without one", assigned);
            session.commit()?;
        }

        debug!("session opened with {} appointments", session.len());
        Ok(session)
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Appointment> {
        self.appointments
            .get(index)
            .ok_or(AgendaError::IndexOutOfRange {
                index,
                len: self.appointments.len(),
            })
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.appointments.iter().position(|a| &a.id == id)
    }

    pub fn append(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    pub fn replace(&mut self, index: usize, appointment: Appointment) -> Result<Appointment> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.appointments[index], appointment))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Appointment> {
        self.check_index(index)?;
        Ok(self.appointments.remove(index))
    }

    /// Swaps in a reordered sequence, e.g. the output of a sort.
    pub fn reorder(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;
    }

    /// Persists the current sequence.
    pub fn commit(&mut self) -> Result<()> {
        self.store.save(&self.appointments)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.appointments.len() {
            return Err(AgendaError::IndexOutOfRange {
                index,
                len: self.appointments.len(),
            });
        }
        Ok(())
    }
}
