//! Candidate generation.
//!
//! - [`ConstructiveProposer`] builds a fresh schedule slot by slot
//! - [`MutationProposer`] perturbs an existing pool member
//!
//! Pre-assigned slots are never changed by either proposer.

mod construction;
mod mutation;


pub use construction::ConstructiveProposer;
pub use mutation::MutationProposer;
