//! Sequencer timing and progress tests.

use super::*;
use approx::assert_relative_eq;

fn answers() -> PromptAnswers {
    PromptAnswers::new("1.5", "128", "0.4")
}

fn started(at: u64) -> Sequencer {
    let mut seq = Sequencer::new(&ViewerConfig::default());
    assert_eq!(seq.start(answers(), at), Ok(StartOutcome::Started));
    seq
}

fn progress_events(events: &[SequencerEvent]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|event| match event {
            SequencerEvent::Progressed { progress, .. } => Some(*progress),
            SequencerEvent::Completed => None,
        })
        .collect()
}

#[test]
fn test_validation_blocks_start() {
    let mut seq = Sequencer::new(&ViewerConfig::default());
    let err = seq
        .start(PromptAnswers::new("1", "2", ""), 0)
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingAnswer {
            field: PromptField::VolumeFractionLimit
        }
    );
    assert!(seq.is_idle());
    assert!(seq.run().is_none());
}

#[test]
fn test_whitespace_answers_are_accepted() {
    assert!(PromptAnswers::new(" ", "\t", "x").validate().is_ok());
}

#[test]
fn test_no_ticks_before_first_interval() {
    let mut seq = started(1_000);
    assert!(seq.advance(1_249, &mut FixedJitter(5.0)).is_empty());
    assert_eq!(seq.advance(1_250, &mut FixedJitter(5.0)).len(), 1);
    assert_relative_eq!(seq.progress(), 5.0);
}

#[test]
fn test_catches_up_on_missed_ticks() {
    let mut seq = started(0);
    let events = seq.advance(1_000, &mut FixedJitter(2.0));
    assert_eq!(progress_events(&events), vec![2.0, 4.0, 6.0, 8.0]);
    assert_eq!(seq.run().unwrap().ticks_applied(), 4);
}

#[test]
fn test_phases_follow_thresholds() {
    let mut seq = started(0);
    let mut jitter = FixedJitter(5.0);
    let mut phases = Vec::new();
    for step in 1..=20 {
        for event in seq.advance(step * 250, &mut jitter) {
            if let SequencerEvent::Progressed { progress, phase } = event {
                phases.push((progress, phase));
            }
        }
    }
    assert_eq!(phases[5], (30.0, Phase::Initializing));
    assert_eq!(phases[6], (35.0, Phase::Running));
    assert_eq!(phases[13], (70.0, Phase::Running));
    assert_eq!(phases[14], (75.0, Phase::Finalizing));
}

#[test]
fn test_progress_is_clamped_below_completion() {
    let mut seq = started(0);
    let events = seq.advance(9_999, &mut FixedJitter(5.0));
    let progress = progress_events(&events);
    assert_eq!(progress.len(), 39);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_relative_eq!(*progress.last().unwrap(), 99.0);
    assert!(seq.is_running());
}

#[test]
fn test_deadline_wins_over_coinciding_tick() {
    let mut seq = started(0);
    let events = seq.advance(10_000, &mut FixedJitter(1.0));
    // Ticks at 250..=9750 apply; the tick due at 10000 does not.
    assert_eq!(progress_events(&events).len(), 39);
    assert_eq!(events.last(), Some(&SequencerEvent::Completed));

    let run = seq.run().unwrap();
    assert_eq!(run.phase, Phase::Done);
    assert_relative_eq!(run.progress, 100.0);
    assert!(seq.is_completed());
}

#[test]
fn test_completion_fires_once() {
    let mut seq = started(0);
    assert!(seq
        .advance(20_000, &mut FixedJitter(0.0))
        .contains(&SequencerEvent::Completed));
    assert!(seq.advance(30_000, &mut FixedJitter(5.0)).is_empty());
    assert_eq!(seq.start(answers(), 30_000), Ok(StartOutcome::AlreadyCompleted));
    assert_relative_eq!(seq.progress(), 100.0);
}

#[test]
fn test_second_start_while_running_is_ignored() {
    let mut seq = started(0);
    seq.advance(500, &mut FixedJitter(3.0));
    let before = seq.run().copied();

    // Guard comes before validation, so even empty answers report AlreadyRunning.
    assert_eq!(
        seq.start(PromptAnswers::default(), 600),
        Ok(StartOutcome::AlreadyRunning)
    );
    assert_eq!(seq.run().copied(), before);
}

#[test]
fn test_cancel_freezes_progress() {
    let mut seq = started(0);
    seq.advance(750, &mut FixedJitter(4.0));
    seq.cancel();
    seq.cancel();

    assert!(seq.advance(60_000, &mut FixedJitter(5.0)).is_empty());
    assert!(seq.is_cancelled());
    assert_relative_eq!(seq.progress(), 12.0);
    assert_eq!(seq.start(answers(), 60_000), Ok(StartOutcome::Cancelled));
}

#[test]
fn test_misbehaving_jitter_cannot_reverse_progress() {
    struct Wild(Vec<f64>);
    impl Jitter for Wild {
        fn sample(&mut self, _max: f64) -> f64 {
            self.0.pop().unwrap_or(0.0)
        }
    }

    let mut seq = started(0);
    let mut jitter = Wild(vec![f64::NAN, -10.0, 50.0]);
    let progress = progress_events(&seq.advance(750, &mut jitter));
    assert_eq!(progress, vec![5.0, 5.0, 5.0]);
}

#[test]
fn test_random_jitter_stays_in_range() {
    let mut jitter = RandomJitter::seeded(7);
    for _ in 0..1_000 {
        let value = jitter.sample(5.0);
        assert!((0.0..=5.0).contains(&value));
    }
    assert_eq!(jitter.sample(0.0), 0.0);
}

#[test]
fn test_random_jitter_run_is_monotonic() {
    let mut seq = started(0);
    let mut jitter = RandomJitter::seeded(42);
    let mut last = 0.0;
    for step in 1..40 {
        for progress in progress_events(&seq.advance(step * 250, &mut jitter)) {
            assert!(progress >= last);
            assert!(progress <= 99.0);
            last = progress;
        }
    }
    assert!(seq.is_running());
}

#[test]
fn test_zero_interval_config_still_terminates() {
    let config = ViewerConfig {
        tick_interval_ms: 0,
        run_duration_ms: 10,
        ..ViewerConfig::default()
    };
    let mut seq = Sequencer::new(&config);
    assert_eq!(seq.start(answers(), 0), Ok(StartOutcome::Started));

    let events = seq.advance(5, &mut FixedJitter(1.0));
    assert_eq!(progress_events(&events).len(), 5);
    assert!(seq.is_running());

    let events = seq.advance(100, &mut FixedJitter(1.0));
    assert_eq!(events.last(), Some(&SequencerEvent::Completed));
    assert!(seq.is_completed());
}

#[test]
fn test_invalid_increment_config_adds_nothing() {
    let config = ViewerConfig {
        max_increment: f64::NAN,
        ..ViewerConfig::default()
    };
    let mut seq = Sequencer::new(&config);
    assert_eq!(seq.start(answers(), 0), Ok(StartOutcome::Started));
    seq.advance(1_000, &mut FixedJitter(5.0));
    assert_eq!(seq.progress(), 0.0);
}
