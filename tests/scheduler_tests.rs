// Integration tests for the tick scheduler driving sort runs

use sortty::run::SortRun;
use sortty::scheduler::{
    SchedulerState, TickOutcome, TickScheduler, TickTarget, DELAY_BASE, RATE_DEFAULT,
};
use sortty::sort::{AlgorithmKind, SortError};
use std::time::{Duration, Instant};

fn sort_run(kind: AlgorithmKind, values: &[u32]) -> SortRun {
    SortRun::new(kind, values, 0).expect("non-empty input")
}

/// Fire every pending tick using synthetic time, returning how many rounds ran.
fn run_until_quiescent<T: TickTarget>(scheduler: &mut TickScheduler<T>, start: Instant) -> u64 {
    let mut now = start;
    let mut rounds = 0;
    while let Some(wait) = scheduler.time_until_tick(now) {
        now += wait;
        if scheduler.poll(now).unwrap().is_some() {
            rounds += 1;
        }
        assert!(rounds < 100_000, "scheduler never went quiescent");
    }
    rounds
}

#[test]
fn test_quiescence_with_small_and_large_runs() {
    let mut scheduler = TickScheduler::new();
    scheduler.set_rate(1);
    let reversed = sort_run(AlgorithmKind::Insertion, &[5, 4, 3, 2, 1]);
    let small = scheduler.register(sort_run(AlgorithmKind::Insertion, &[1]));
    let large = scheduler.register(reversed);

    // A one-element run has nothing to do from the start
    assert!(!scheduler.target(small).unwrap().can_advance());
    assert!(scheduler.target(large).unwrap().can_advance());

    let t0 = Instant::now();
    scheduler.start(t0);
    let rounds = run_until_quiescent(&mut scheduler, t0);

    // Reversed input of 5 takes 10 insertion steps, one per round
    assert_eq!(rounds, 10);
    assert_eq!(scheduler.target(large).unwrap().values(), &[1, 2, 3, 4, 5]);
    assert_eq!(scheduler.target(small).unwrap().moves(), 0);

    // Quiescent is still Running; only the driver stops it
    assert!(scheduler.is_quiescent());
    assert!(scheduler.is_running());
    scheduler.stop();
    assert_eq!(scheduler.state(), SchedulerState::Idle);
}

#[test]
fn test_keeps_rescheduling_while_any_target_is_active() {
    let mut scheduler = TickScheduler::new();
    scheduler.register(sort_run(AlgorithmKind::Bubble, &[2, 1]));
    scheduler.register(sort_run(AlgorithmKind::Bubble, &[3, 2, 1]));

    let t0 = Instant::now();
    scheduler.start(t0);
    let delay = scheduler.delay();

    // Round 1: both runs step; the 2-element run finishes
    let first = scheduler.poll(t0 + delay).unwrap();
    assert_eq!(
        first,
        Some(TickOutcome {
            advanced: 2,
            active: true
        })
    );
    assert_eq!(scheduler.time_until_tick(t0 + delay), Some(delay));

    // Rounds 2 and 3: only the 3-element run is left
    let second = scheduler.poll(t0 + delay * 2).unwrap();
    assert_eq!(second.map(|o| o.advanced), Some(1));
    let third = scheduler.poll(t0 + delay * 3).unwrap();
    assert_eq!(
        third,
        Some(TickOutcome {
            advanced: 1,
            active: false
        })
    );
    assert!(scheduler.is_quiescent());
    assert_eq!(scheduler.ticks(), 3);
}

#[test]
fn test_targets_advance_in_registration_order() {
    let mut scheduler = TickScheduler::new();
    let kinds = [
        AlgorithmKind::Heap,
        AlgorithmKind::Bubble,
        AlgorithmKind::Quick,
    ];
    for kind in kinds {
        scheduler.register(sort_run(kind, &[3, 1, 2]));
    }

    let seen: Vec<AlgorithmKind> = scheduler.targets().map(|(_, run)| run.kind()).collect();
    assert_eq!(seen, kinds);
}

#[test]
fn test_rate_sets_the_tick_delay() {
    let mut scheduler: TickScheduler<SortRun> = TickScheduler::new();
    assert_eq!(scheduler.rate(), RATE_DEFAULT);
    assert_eq!(scheduler.delay(), DELAY_BASE * RATE_DEFAULT);

    scheduler.set_rate(0);
    assert_eq!(scheduler.delay(), DELAY_BASE);

    let t0 = Instant::now();
    scheduler.start(t0);
    assert_eq!(scheduler.time_until_tick(t0), Some(DELAY_BASE));
}

#[test]
fn test_stop_cancels_the_pending_tick() {
    let mut scheduler = TickScheduler::new();
    scheduler.register(sort_run(AlgorithmKind::Heap, &[4, 3, 2, 1]));

    let t0 = Instant::now();
    scheduler.start(t0);
    scheduler.stop();

    assert_eq!(scheduler.time_until_tick(t0), None);
    assert_eq!(scheduler.poll(t0 + Duration::from_secs(10)).unwrap(), None);
    assert_eq!(scheduler.ticks(), 0);
}

#[test]
fn test_manual_tick_while_idle() {
    let mut scheduler = TickScheduler::new();
    let id = scheduler.register(sort_run(AlgorithmKind::Bubble, &[2, 1]));

    let outcome = scheduler.tick().unwrap();
    assert_eq!(outcome.advanced, 1);
    assert!(!outcome.active);
    assert_eq!(scheduler.state(), SchedulerState::Idle);
    assert_eq!(scheduler.target(id).unwrap().values(), &[1, 2]);

    // Nothing can advance, so the next round touches no target
    assert_eq!(scheduler.tick().unwrap().advanced, 0);
}

/// A target that claims it can advance but refuses to
struct Broken;

impl TickTarget for Broken {
    fn can_advance(&self) -> bool {
        true
    }

    fn advance_one(&mut self) -> Result<bool, SortError> {
        Err(SortError::IllegalState {
            algorithm: "Broken",
            moves: 0,
        })
    }
}

#[test]
fn test_boxed_targets_of_mixed_types() {
    let mut scheduler: TickScheduler = TickScheduler::new();
    let quick = sort_run(AlgorithmKind::Quick, &[2, 3, 1]);
    scheduler.register(Box::new(quick));
    scheduler.register(Box::new(Broken));

    let t0 = Instant::now();
    scheduler.start(t0);
    let result = scheduler.poll(t0 + scheduler.delay());
    assert!(matches!(result, Err(SortError::IllegalState { .. })));
}
