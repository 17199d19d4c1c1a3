//! Shared test fixtures for rota crates.
//!
//! This crate provides problem builders for testing. It does NOT depend on
//! `rota-scoring` or `rota-solver` to avoid circular dependencies.
//!
//! - [`builders`] - one-line workers, slots and problems
//! - [`ward`] - a realistic multi-week ward rota
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rota-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rota_test::builders::{day_slot, problem, worker};
//! use rota_test::ward::WardRota;
//! ```

pub mod builders;
pub mod ward;

pub use builders::{day_slot, problem, quick_config, slot_at, worker};
pub use ward::WardRota;
