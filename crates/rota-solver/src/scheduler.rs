//! The search loop.

use std::sync::Arc;
use std::thread;

use rand::Rng;
use rota_config::{SchedulerConfig, DEFAULT_TIME_LIMIT};
use rota_core::{Result, RotaError, Schedule, SchedulingProblem, ScheduleStats};
use rota_scoring::{ConstraintEvaluator, HeuristicSet, Violation};
use tokio::sync::watch;
use tracing::{debug, info, trace};

use crate::handle::{CancelToken, SchedulerHandle};
use crate::pool::{Admission, SchedulePool};
use crate::propose::{ConstructiveProposer, MutationProposer};
use crate::scope::SolverScope;
use crate::state::{SchedulerState, ScoredSchedule, SolverStatus};
use crate::termination::{
    ExternalTermination, OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination,
};

/// One auto-fill invocation.
///
/// Each cycle proposes a candidate, rejects it on the first failed hard
/// constraint, scores it otherwise and offers it to the top-K pool.
/// Termination and cancellation are checked once per cycle. A snapshot is
/// published on every new best, every `report_interval_cycles` proposals and
/// once at the end.
///
/// # Examples
///
/// ```
/// use rota_config::SchedulerConfig;
/// use rota_core::{SchedulingProblem, Slot, WorkHour, Worker};
/// use rota_solver::{Scheduler, TerminationReason};
///
/// let problem = SchedulingProblem::new(
///     1,
///     vec![Worker::new("a", "Ana")],
///     vec![Slot::new("early").with_work_hour(WorkHour::new(360, 840, 1.0))],
/// ).unwrap();
///
/// let scheduler = Scheduler::new(problem, SchedulerConfig::new()).unwrap();
/// scheduler.cancel_token().cancel();
///
/// let state = scheduler.solve();
/// assert_eq!(state.termination_reason(), Some(TerminationReason::Cancelled));
/// assert!(state.top_schedules.is_empty());
/// ```
#[derive(Debug)]
pub struct Scheduler {
    problem: Arc<SchedulingProblem>,
    config: Arc<SchedulerConfig>,
    cancel: CancelToken,
    sender: watch::Sender<SchedulerState>,
}

impl Scheduler {
    /// Validates the configuration and prepares an invocation.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::Config`] if the configuration is invalid.
    pub fn new(
        problem: impl Into<Arc<SchedulingProblem>>,
        config: SchedulerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let (sender, _) = watch::channel(SchedulerState::default());
        Ok(Self {
            problem: problem.into(),
            config: Arc::new(config),
            cancel: CancelToken::new(),
            sender,
        })
    }

    pub fn problem(&self) -> &SchedulingProblem {
        &self.problem
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// A token that stops this invocation at the next cycle boundary.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// A receiver of the snapshots this invocation publishes.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.sender.subscribe()
    }

    /// Runs the search on a dedicated thread.
    ///
    /// # Errors
    ///
    /// Returns [`RotaError::Internal`] if the thread cannot be started.
    pub fn spawn(self) -> Result<SchedulerHandle> {
        let cancel = self.cancel.clone();
        let receiver = self.sender.subscribe();
        let thread = thread::Builder::new()
            .name("rota-scheduler".to_string())
            .spawn(move || self.solve())
            .map_err(|e| RotaError::Internal(format!("failed to spawn scheduler thread: {e}")))?;
        Ok(SchedulerHandle::new(cancel, receiver, thread))
    }

    /// Runs the search on the calling thread and returns the final state.
    pub fn solve(self) -> SchedulerState {
        let Self {
            problem,
            config,
            cancel,
            sender,
        } = self;

        let evaluator = ConstraintEvaluator::new(&problem, &config);
        let heuristics = HeuristicSet::from_config(&config.heuristics);
        let constructive = ConstructiveProposer::new(&problem, &evaluator);
        let mutation = MutationProposer::new(&problem, &evaluator, config.search.mutation_size);
        let termination = build_termination(&config, cancel);
        let report_interval = config.search.report_interval_cycles;

        info!(
            event = "solve_start",
            workers = problem.worker_count(),
            slots = problem.slot_count(),
            horizon_days = problem.horizon_days(),
            heuristics = heuristics.len(),
            keep_top_count = config.keep_top_count,
            seeded = config.random_seed.is_some(),
        );

        let mut scope = SolverScope::new(config.random_seed);
        let mut pool = SchedulePool::new(config.keep_top_count);
        let mut state = SchedulerState {
            status: SolverStatus::Solving,
            ..SchedulerState::default()
        };
        scope.start_solving();
        publish(&sender, &mut state, &pool, &scope);

        let reason = loop {
            if let Some(reason) = termination.check(&scope) {
                break reason;
            }
            let cycle = scope.increment_cycle_count();

            let mutate = !pool.is_empty()
                && !mutation.is_exhausted()
                && scope.rng().random_bool(config.search.mutation_rate);
            let candidate = if mutate {
                let base = scope.rng().random_range(0..pool.len());
                let schedule = mutation.propose(&pool[base].schedule, scope.rng());
                check(&problem, &evaluator, schedule)
            } else {
                constructive
                    .propose(&problem, &evaluator, scope.rng())
                    .and_then(|schedule| check(&problem, &evaluator, schedule))
            };

            let mut improved = false;
            match candidate {
                Err(violation) => {
                    state.discarded.record(violation.reason);
                    let slot = violation.slot_id(&problem);
                    trace!(
                        event = "discard",
                        cycle,
                        mutated = mutate,
                        reason = %violation.reason,
                        slot = slot.map(|id| id.as_str()),
                    );
                    if pool.is_empty() {
                        if let Some(id) = slot {
                            state.problem_slot_ids.insert(id.clone());
                        }
                    }
                }
                Ok(schedule) => {
                    state.computed += 1;
                    let (score, heuristic_scores) = heuristics.evaluate(&problem, &schedule);
                    match pool.offer(ScoredSchedule::new(schedule, score, heuristic_scores)) {
                        Admission::NewBest => {
                            scope.record_improvement();
                            improved = true;
                            if let Some(best) = pool.best() {
                                state.problem_slot_ids = best
                                    .schedule
                                    .unassigned_slots()
                                    .map(|slot| problem.slot(slot).id.clone())
                                    .collect();
                            }
                            info!(event = "new_best", cycle, mutated = mutate, score = %score);
                        }
                        Admission::Admitted => scope.record_improvement(),
                        Admission::Rejected | Admission::Duplicate => {}
                    }
                }
            }

            let periodic = cycle % report_interval == 0;
            if periodic {
                debug!(
                    event = "progress",
                    cycle,
                    computed = state.computed,
                    discarded = state.discarded.total(),
                    pool = pool.len(),
                    best = pool.best().map(|b| b.score.value()),
                );
            }
            if improved || periodic {
                publish(&sender, &mut state, &pool, &scope);
            }
        };

        state.status = SolverStatus::Terminated(reason);
        publish(&sender, &mut state, &pool, &scope);

        let spread = pool
            .best()
            .map(|best| ScheduleStats::compute(&problem, &best.schedule).max_deviation());
        info!(
            event = "solve_end",
            reason = %reason,
            cycles = state.cycle_count,
            computed = state.computed,
            discarded = state.discarded.total(),
            dominant_discard = state.discarded.dominant().map(|(r, _)| r.name()),
            pool = state.top_schedules.len(),
            best = state.best().map(|b| b.score.value()),
            max_inconvenience_deviation = spread,
            duration_ms = state.elapsed.as_millis() as u64,
        );
        state
    }
}

fn check(
    problem: &SchedulingProblem,
    evaluator: &ConstraintEvaluator,
    schedule: Schedule,
) -> std::result::Result<Schedule, Violation> {
    evaluator.evaluate(problem, &schedule).map(|()| schedule)
}

/// Copies the pool and counters into `state` and publishes it.
fn publish(
    sender: &watch::Sender<SchedulerState>,
    state: &mut SchedulerState,
    pool: &SchedulePool,
    scope: &SolverScope,
) {
    state.top_schedules = pool.as_slice().to_vec();
    state.cycle_count = scope.cycle_count();
    state.elapsed = scope.elapsed().unwrap_or_default();
    sender.send_replace(state.clone());
}

fn build_termination(config: &SchedulerConfig, cancel: CancelToken) -> impl Termination {
    let limits = config.termination.clone().unwrap_or_default();
    let time_limit = if config.is_unbounded() {
        Some(DEFAULT_TIME_LIMIT)
    } else {
        config.time_limit()
    };
    OrTermination((
        ExternalTermination::new(cancel),
        time_limit.map(TimeTermination::new),
        limits.step_count_limit.map(StepCountTermination::new),
        limits
            .unimproved_step_count_limit
            .map(UnimprovedStepCountTermination::new),
    ))
}
