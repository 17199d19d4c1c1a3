//! Entry points that hide the scheduler wiring.

use std::path::Path;

use rota_config::SchedulerConfig;
use rota_core::{Result, SchedulingProblem};
use rota_solver::{Scheduler, SchedulerHandle, SchedulerState};

/// Runs one search on the calling thread and returns its final state.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn auto_fill(problem: SchedulingProblem, config: SchedulerConfig) -> Result<SchedulerState> {
    init_console();
    Ok(Scheduler::new(problem, config)?.solve())
}

/// Like [`auto_fill`], with the configuration read from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or holds an
/// invalid configuration.
pub fn auto_fill_from_file(
    problem: SchedulingProblem,
    path: impl AsRef<Path>,
) -> Result<SchedulerState> {
    let config = SchedulerConfig::load(path)?;
    auto_fill(problem, config)
}

/// Starts one search on its own thread.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the thread cannot be
/// started.
pub fn spawn_auto_fill(
    problem: SchedulingProblem,
    config: SchedulerConfig,
) -> Result<SchedulerHandle> {
    init_console();
    Scheduler::new(problem, config)?.spawn()
}

#[cfg(feature = "console")]
fn init_console() {
    crate::console::init();
}

#[cfg(not(feature = "console"))]
fn init_console() {}
