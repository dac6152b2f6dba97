//! # Simulated Optimization Sequencer
//!
//! A fixed-length fake computation. Progress grows by a jittered amount on
//! every tick and the label changes at two thresholds. A single deadline ends
//! the run, pins progress at 100 and wins over any tick due at the same time.
//!
//! Time is explicit: the owner calls [`Sequencer::advance`] with the current
//! clock reading and the sequencer applies every tick that has come due.
//!
//! ```text
//!  start ─► tick (250ms) ─► tick ─► ... ─► deadline (10s) ─► Completed
//!    │                                         │
//!    └──────────── cancel ─────────────────────┴──► Cancelled
//! ```

mod clock;
mod prompt;

pub use clock::{Clock, FixedJitter, Jitter, ManualClock, RandomJitter};
pub use prompt::{PromptAnswers, PromptField};

use config::constants::{
    FINALIZING_THRESHOLD, PROGRESS_COMPLETE, RUNNING_THRESHOLD, STATUS_FINALIZING,
    STATUS_INITIALIZING, STATUS_RUNNING,
};
use config::ViewerConfig;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ValidationError;

/// Stage of a run, derived from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Initializing,
    Running,
    Finalizing,
    Done,
}

impl Phase {
    /// Phase shown for an in-flight progress value.
    ///
    /// # Examples
    /// ```
    /// use tiptop_viewer::Phase;
    /// assert_eq!(Phase::for_progress(30.0), Phase::Initializing);
    /// assert_eq!(Phase::for_progress(30.5), Phase::Running);
    /// assert_eq!(Phase::for_progress(71.0), Phase::Finalizing);
    /// ```
    pub fn for_progress(progress: f64) -> Phase {
        if progress > FINALIZING_THRESHOLD {
            Phase::Finalizing
        } else if progress > RUNNING_THRESHOLD {
            Phase::Running
        } else {
            Phase::Initializing
        }
    }

    /// Status text for in-flight phases.
    pub fn status_text(self) -> Option<&'static str> {
        match self {
            Phase::Initializing => Some(STATUS_INITIALIZING),
            Phase::Running => Some(STATUS_RUNNING),
            Phase::Finalizing => Some(STATUS_FINALIZING),
            Phase::Done => None,
        }
    }
}

/// A single simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRun {
    pub progress: f64,
    pub phase: Phase,
    pub started_at_ms: u64,
    ticks_applied: u64,
}

impl OptimizationRun {
    fn new(started_at_ms: u64) -> Self {
        Self {
            progress: 0.0,
            phase: Phase::Initializing,
            started_at_ms,
            ticks_applied: 0,
        }
    }

    /// Number of ticks applied so far.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }
}

/// Result of a `start` request that passed the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A run is in progress; the request had no effect.
    AlreadyRunning,
    /// The single run already finished; the request had no effect.
    AlreadyCompleted,
    /// The sequencer was cancelled and accepts nothing.
    Cancelled,
    /// Nothing to optimize is displayed yet.
    NotReady,
}

/// Observable change produced by [`Sequencer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SequencerEvent {
    Progressed { progress: f64, phase: Phase },
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
enum RunState {
    Idle,
    Running(OptimizationRun),
    Completed(OptimizationRun),
    Cancelled(Option<OptimizationRun>),
}

/// Drives at most one [`OptimizationRun`].
#[derive(Debug, Clone)]
pub struct Sequencer {
    state: RunState,
    tick_interval_ms: u64,
    run_duration_ms: u64,
    max_increment: f64,
    progress_ceiling: f64,
}

impl Sequencer {
    /// Creates an idle sequencer with timings from `config`.
    ///
    /// A config built without [`ViewerConfig::new`] may carry a zero interval
    /// or an unusable increment; both are clamped so `advance` always ends.
    pub fn new(config: &ViewerConfig) -> Self {
        let max_increment = if config.max_increment.is_finite() {
            config.max_increment.max(0.0)
        } else {
            0.0
        };
        Self {
            state: RunState::Idle,
            tick_interval_ms: config.tick_interval_ms.max(1),
            run_duration_ms: config.run_duration_ms,
            max_increment,
            progress_ceiling: config.progress_ceiling,
        }
    }

    /// Starts the run at `now_ms`.
    ///
    /// The running/completed guard is checked before the answers, so a
    /// repeated request never reports a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when an answer is empty; nothing changes.
    ///
    /// # Examples
    /// ```
    /// use config::ViewerConfig;
    /// use tiptop_viewer::{PromptAnswers, Sequencer, StartOutcome};
    ///
    /// let mut seq = Sequencer::new(&ViewerConfig::default());
    /// assert!(seq.start(PromptAnswers::new("", "", ""), 0).is_err());
    /// assert_eq!(seq.start(PromptAnswers::new("1", "2", "3"), 0), Ok(StartOutcome::Started));
    /// assert_eq!(seq.start(PromptAnswers::new("1", "2", "3"), 5), Ok(StartOutcome::AlreadyRunning));
    /// ```
    pub fn start(
        &mut self,
        answers: PromptAnswers,
        now_ms: u64,
    ) -> Result<StartOutcome, ValidationError> {
        match self.state {
            RunState::Running(_) => return Ok(StartOutcome::AlreadyRunning),
            RunState::Completed(_) => return Ok(StartOutcome::AlreadyCompleted),
            RunState::Cancelled(_) => return Ok(StartOutcome::Cancelled),
            RunState::Idle => {}
        }
        answers.validate()?;

        info!(now_ms, "optimization run started");
        self.state = RunState::Running(OptimizationRun::new(now_ms));
        Ok(StartOutcome::Started)
    }

    /// Applies every tick due by `now_ms`, then the deadline if it has passed.
    ///
    /// Tick `k` is due at `start + k * interval` and applies only if it falls
    /// strictly before the deadline. Returns nothing unless a run is active.
    pub fn advance(&mut self, now_ms: u64, jitter: &mut dyn Jitter) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        let RunState::Running(run) = &mut self.state else {
            return events;
        };

        let deadline = run.started_at_ms.saturating_add(self.run_duration_ms);
        loop {
            let due = run
                .started_at_ms
                .saturating_add((run.ticks_applied + 1).saturating_mul(self.tick_interval_ms));
            if due > now_ms || due >= deadline {
                break;
            }
            let sample = jitter.sample(self.max_increment);
            let increment = if sample.is_finite() {
                sample.clamp(0.0, self.max_increment)
            } else {
                0.0
            };
            let raw = run.progress + increment;
            run.phase = Phase::for_progress(raw);
            run.progress = raw.min(self.progress_ceiling);
            run.ticks_applied += 1;
            debug!(progress = run.progress, phase = ?run.phase, "tick");
            events.push(SequencerEvent::Progressed {
                progress: run.progress,
                phase: run.phase,
            });
        }

        if now_ms >= deadline {
            let mut finished = *run;
            finished.progress = PROGRESS_COMPLETE;
            finished.phase = Phase::Done;
            info!(ticks = finished.ticks_applied, "optimization run completed");
            self.state = RunState::Completed(finished);
            events.push(SequencerEvent::Completed);
        }
        events
    }

    /// Drops the active run. Later `advance` and `start` calls do nothing.
    pub fn cancel(&mut self) {
        let last = match self.state {
            RunState::Running(run) | RunState::Completed(run) => Some(run),
            RunState::Cancelled(run) => run,
            RunState::Idle => None,
        };
        if matches!(self.state, RunState::Running(_)) {
            info!("optimization run cancelled");
        }
        self.state = RunState::Cancelled(last);
    }

    /// The active, finished or last cancelled run.
    pub fn run(&self) -> Option<&OptimizationRun> {
        match &self.state {
            RunState::Running(run) | RunState::Completed(run) => Some(run),
            RunState::Cancelled(run) => run.as_ref(),
            RunState::Idle => None,
        }
    }

    /// Current progress, 0 before any run.
    pub fn progress(&self) -> f64 {
        self.run().map_or(0.0, |run| run.progress)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, RunState::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running(_))
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, RunState::Completed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, RunState::Cancelled(_))
    }
}

#[cfg(test)]
mod tests;
