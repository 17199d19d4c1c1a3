//! Error types for Rota

use thiserror::Error;

use crate::domain::{SlotId, WorkerId};
use crate::time::Minutes;

/// Main error type for Rota operations.
///
/// Every variant describes malformed input or configuration. These abort an
/// invocation before any search starts; rejected candidates are never errors.
#[derive(Debug, Error)]
pub enum RotaError {
    /// The planning horizon is zero days long.
    #[error("planning horizon must span at least one day")]
    EmptyHorizon,

    /// A slot without any work hour.
    #[error("slot {0} has no work hours")]
    EmptySlot(SlotId),

    /// A work hour whose end is not after its start, or that overlaps another
    /// work hour of the same slot.
    #[error("slot {slot} has an invalid work hour [{start}, {end})")]
    InvalidWorkHour {
        slot: SlotId,
        start: Minutes,
        end: Minutes,
    },

    /// A work hour with a negative or non-finite inconvenience multiplier.
    #[error("slot {slot} has an invalid inconvenience multiplier {multiplier}")]
    InvalidInconvenience { slot: SlotId, multiplier: f64 },

    /// A leave interval whose end is not after its start.
    #[error("worker {worker} has an invalid leave [{start}, {end})")]
    InvalidLeave {
        worker: WorkerId,
        start: Minutes,
        end: Minutes,
    },

    /// Two slots share an id.
    #[error("duplicate slot id {0}")]
    DuplicateSlot(SlotId),

    /// Two workers share an id.
    #[error("duplicate worker id {0}")]
    DuplicateWorker(WorkerId),

    /// An assignment references a worker that is not in the worker list.
    #[error("slot {slot} is assigned to unknown worker {worker}")]
    UnknownWorker { slot: SlotId, worker: WorkerId },

    /// An assignment references a slot that is not in the slot list.
    #[error("assignment references unknown slot {0}")]
    UnknownSlot(SlotId),

    /// Error in scheduler configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rota operations
pub type Result<T> = std::result::Result<T, RotaError>;
