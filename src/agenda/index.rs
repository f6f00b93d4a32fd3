//! # Display Indexes
//!
//! Users refer to appointments by their 1-based position in the current
//! listing ("delete 3"). Positions shift whenever the book is sorted or an
//! earlier appointment is removed, so they are never used to carry out an
//! operation. A [`Selector`] is resolved to the appointment's stable id against
//! the current order first, and the mutation then goes through the id.
//!
//! A full UUID is also accepted as a selector, which keeps working across
//! sorts.

use crate::error::{AgendaError, Result};
use crate::model::Appointment;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user input that picks one appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based position in the current order.
    Index(usize),
    Id(Uuid),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(i) => write!(f, "{}", i),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(Selector::Index(n));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(Selector::Id(id));
        }
        Err(format!("Invalid selector: {} (expected an index or an id)", s))
    }
}

/// An appointment paired with its 1-based position in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAppointment {
    pub index: usize,
    pub appointment: Appointment,
}

pub fn index_appointments(appointments: &[Appointment]) -> Vec<DisplayAppointment> {
    appointments
        .iter()
        .enumerate()
        .map(|(i, appointment)| DisplayAppointment {
            index: i + 1,
            appointment: appointment.clone(),
        })
        .collect()
}

/// Resolves a selector to a stable id against `appointments` as ordered now.
pub fn resolve(appointments: &[Appointment], selector: &Selector) -> Result<Uuid> {
    match selector {
        Selector::Index(n) => appointments
            .get(n.wrapping_sub(1))
            .map(|a| a.id)
            .ok_or(AgendaError::IndexOutOfRange {
                index: *n,
                len: appointments.len(),
            }),
        Selector::Id(id) => appointments
            .iter()
            .find(|a| &a.id == id)
            .map(|a| a.id)
            .ok_or(AgendaError::AppointmentNotFound(*id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::appointment;

    #[test]
    fn parses_selectors() {
        assert_eq!("3".parse::<Selector>(), Ok(Selector::Index(3)));
        assert_eq!(" 12 ".parse::<Selector>(), Ok(Selector::Index(12)));

        let id = Uuid::new_v4();
        assert_eq!(id.to_string().parse::<Selector>(), Ok(Selector::Id(id)));

        assert!("0".parse::<Selector>().is_err());
        assert!("-1".parse::<Selector>().is_err());
        assert!("alice".parse::<Selector>().is_err());
    }

    #[test]
    fn indexes_are_one_based_in_order() {
        let book = vec![
            appointment("A", "2025-01-01 09:00"),
            appointment("B", "2025-01-02 09:00"),
        ];
        let listed = index_appointments(&book);
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[1].index, 2);
        assert_eq!(listed[1].appointment.name, "B");
    }

    #[test]
    fn resolves_index_and_id() {
        let book = vec![
            appointment("A", "2025-01-01 09:00"),
            appointment("B", "2025-01-02 09:00"),
            appointment("C", "2025-01-03 09:00"),
        ];

        assert_eq!(resolve(&book, &Selector::Index(2)).unwrap(), book[1].id);
        assert_eq!(resolve(&book, &Selector::Id(book[2].id)).unwrap(), book[2].id);

        assert!(matches!(
            resolve(&book, &Selector::Index(5)),
            Err(AgendaError::IndexOutOfRange { index: 5, len: 3 })
        ));
        assert!(matches!(
            resolve(&book, &Selector::Index(0)),
            Err(AgendaError::IndexOutOfRange { index: 0, len: 3 })
        ));
        assert!(matches!(
            resolve(&book, &Selector::Id(Uuid::new_v4())),
            Err(AgendaError::AppointmentNotFound(_))
        ));
    }
}
