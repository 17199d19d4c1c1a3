//! Solver-level scope.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mutable bookkeeping of one search invocation.
///
/// Owns the random number generator so a seeded run is reproducible.
#[derive(Debug)]
pub struct SolverScope {
    rng: StdRng,
    start_time: Option<Instant>,
    cycle_count: u64,
    last_improvement_cycle: u64,
}

impl SolverScope {
    /// Creates a scope seeded from `seed`, or from the OS when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            start_time: None,
            cycle_count: 0,
            last_improvement_cycle: 0,
        }
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.cycle_count = 0;
        self.last_improvement_cycle = 0;
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn increment_cycle_count(&mut self) -> u64 {
        self.cycle_count += 1;
        self.cycle_count
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Marks the current cycle as having changed the pool.
    pub fn record_improvement(&mut self) {
        self.last_improvement_cycle = self.cycle_count;
    }

    pub fn cycles_since_improvement(&self) -> u64 {
        self.cycle_count - self.last_improvement_cycle
    }
}
