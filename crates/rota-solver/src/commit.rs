//! Handing a chosen schedule back to the caller's storage.

use std::collections::HashMap;
use std::convert::Infallible;

use rota_core::{Assignment, SlotId, WorkerId};

/// Receives the worker-to-slot pairings of a committed schedule.
///
/// Implement this over whatever persists shift records; the scheduler never
/// writes anywhere itself.
///
/// # Example
///
/// ```
/// use rota_core::{SlotId, WorkerId};
/// use rota_solver::AssignmentSink;
///
/// struct Printer(Vec<String>);
///
/// impl AssignmentSink for Printer {
///     type Error = std::fmt::Error;
///
///     fn assign(&mut self, slot: &SlotId, worker: &WorkerId) -> Result<(), Self::Error> {
///         self.0.push(format!("{slot} -> {worker}"));
///         Ok(())
///     }
/// }
///
/// let mut printer = Printer(Vec::new());
/// printer.assign(&SlotId::new("mon-early"), &WorkerId::new("ana")).unwrap();
/// assert_eq!(printer.0, vec!["mon-early -> ana"]);
/// ```
pub trait AssignmentSink {
    type Error;

    fn assign(&mut self, slot: &SlotId, worker: &WorkerId) -> Result<(), Self::Error>;
}

impl AssignmentSink for Vec<Assignment> {
    type Error = Infallible;

    fn assign(&mut self, slot: &SlotId, worker: &WorkerId) -> Result<(), Self::Error> {
        self.push(Assignment::new(slot.clone(), Some(worker.clone())));
        Ok(())
    }
}

impl AssignmentSink for HashMap<SlotId, WorkerId> {
    type Error = Infallible;

    fn assign(&mut self, slot: &SlotId, worker: &WorkerId) -> Result<(), Self::Error> {
        self.insert(slot.clone(), worker.clone());
        Ok(())
    }
}
