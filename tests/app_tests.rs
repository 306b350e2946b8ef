// Integration tests for the TUI state machine, driven without a terminal

use crossterm::event::{KeyCode, KeyEvent};
use sortty::config::{Config, MAX_COMPARE_ELEMENTS};
use sortty::input::Arrangement;
use sortty::sort::AlgorithmKind;
use sortty::ui::App;
use std::time::Instant;

fn app(kind: AlgorithmKind, count: usize) -> App {
    let config = Config::new(kind).with_element_count(count).with_seed(1234);
    App::new(config).expect("app with valid config")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::from(code));
}

#[test]
fn test_new_app_binds_one_run_per_algorithm() {
    let app = app(AlgorithmKind::Heap, 12);
    assert_eq!(app.runs.len(), 1);
    assert_eq!(app.values.len(), 12);
    assert!(!app.scheduler.is_running());

    let run = app.runs().next().unwrap();
    assert_eq!(run.kind(), AlgorithmKind::Heap);
    assert_eq!(run.values(), &app.values[..]);
}

#[test]
fn test_same_seed_gives_same_input() {
    let a = app(AlgorithmKind::Bubble, 30);
    let b = app(AlgorithmKind::Quick, 30);
    assert_eq!(a.values, b.values);
}

#[test]
fn test_timer_runs_to_completion_and_stops() {
    let mut app = app(AlgorithmKind::Insertion, 8);
    let t0 = Instant::now();
    app.toggle_running(t0);
    assert!(app.scheduler.is_running());

    let delay = app.scheduler.delay();
    let mut rounds = 0u32;
    while app.scheduler.is_running() {
        rounds += 1;
        app.pump(t0 + delay * rounds);
        assert!(rounds < 1_000, "app never finished");
    }

    assert!(app.is_finished());
    assert_eq!(app.status_message, "Sort complete");
    let run = app.runs().next().unwrap();
    assert!(run.values().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_toggle_running_pauses_and_refuses_when_finished() {
    let mut app = app(AlgorithmKind::Bubble, 6);
    let t0 = Instant::now();
    app.toggle_running(t0);
    app.toggle_running(t0);
    assert!(!app.scheduler.is_running());
    assert_eq!(app.status_message, "Paused");

    press(&mut app, KeyCode::Enter);
    assert!(app.is_finished());

    app.toggle_running(t0);
    assert!(!app.scheduler.is_running());
}

#[test]
fn test_compare_mode_adds_and_removes_a_run() {
    let mut app = app(AlgorithmKind::Bubble, 10);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.config.is_comparison());
    let kinds: Vec<AlgorithmKind> = app.runs().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![AlgorithmKind::Bubble, AlgorithmKind::Insertion]);

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.config.algorithms[1], AlgorithmKind::Quick);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.runs.len(), 1);
}

#[test]
fn test_compare_mode_caps_the_element_count() {
    let mut app = app(AlgorithmKind::Bubble, 400);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.runs.len(), 2);
    assert_eq!(app.config.element_count, MAX_COMPARE_ELEMENTS);
    assert_eq!(app.values.len(), MAX_COMPARE_ELEMENTS);
    assert_eq!(app.config.validate(), Ok(()));

    // Leaving compare mode keeps the smaller count
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.config.element_count, MAX_COMPARE_ELEMENTS);
}

#[test]
fn test_size_presets_wrap_early_in_compare_mode() {
    let mut app = app(AlgorithmKind::Bubble, 200);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.values.len(), 200);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.config.element_count, 50);
    assert_eq!(app.runs.len(), 2);

    press(&mut app, KeyCode::Char('c'));
    for _ in 0..6 {
        press(&mut app, KeyCode::Char('n'));
    }
    assert_eq!(app.config.element_count, 400);
}

#[test]
fn test_second_slot_needs_compare_mode() {
    let mut app = app(AlgorithmKind::Heap, 10);
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.config.algorithms, vec![AlgorithmKind::Heap]);
    assert!(app.status_message.contains("compare"));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.config.algorithms, vec![AlgorithmKind::Bubble]);
}

#[test]
fn test_right_arrow_steps_once() {
    let mut app = app(AlgorithmKind::Bubble, 5);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.runs().next().unwrap().moves(), 2);
    assert_eq!(app.scheduler.ticks(), 2);
}

#[test]
fn test_rate_keys_clamp() {
    let mut app = app(AlgorithmKind::Bubble, 5);
    let start = app.scheduler.rate();

    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.scheduler.rate(), start - 5);
    assert_eq!(app.config.rate, start - 5);

    for _ in 0..50 {
        press(&mut app, KeyCode::Char('-'));
    }
    assert_eq!(app.scheduler.rate(), sortty::scheduler::RATE_HIGH);
}

#[test]
fn test_size_and_arrangement_keys_regenerate_input() {
    let mut app = app(AlgorithmKind::Bubble, 50);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.config.element_count, 75);
    assert_eq!(app.values.len(), 75);

    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.config.arrangement, Arrangement::Sorted);
    assert_eq!(app.values, (1..=75).collect::<Vec<u32>>());
}

#[test]
fn test_backspace_restarts_on_the_same_input() {
    let mut app = app(AlgorithmKind::Quick, 20);
    let original = app.values.clone();

    press(&mut app, KeyCode::Enter);
    assert!(app.is_finished());

    press(&mut app, KeyCode::Backspace);
    assert!(!app.is_finished());
    assert_eq!(app.runs().next().unwrap().values(), &original[..]);
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = app(AlgorithmKind::Bubble, 5);
        press(&mut app, code);
        assert!(app.should_quit);
    }
}
