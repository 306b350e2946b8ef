//! Main TUI application state and logic

use crate::config::Config;
use crate::input;
use crate::run::SortRun;
use crate::scheduler::{TargetId, TickScheduler, TickTarget};
use crate::sort::{AlgorithmKind, SortError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Longest the event loop waits for a key while no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(50);
/// Rate change per `+`/`-` press
const RATE_STEP: u32 = 5;

/// The main application state
pub struct App {
    /// What is being sorted; edited in place by the controls
    pub config: Config,

    /// Drives one [`SortRun`] per displayed algorithm
    pub scheduler: TickScheduler<SortRun>,

    /// Registered runs, left to right
    pub runs: Vec<TargetId>,

    /// The unsorted input every run starts from
    pub values: Vec<u32>,

    /// Source of reshuffles and randomized-pivot seeds
    rng: StdRng,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Set when a run broke the stepping contract
    pub error: Option<String>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app and bind its runs to freshly generated input
    pub fn new(config: Config) -> Result<Self, SortError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let values = input::generate(config.element_count, config.arrangement, &mut rng);

        let mut scheduler = TickScheduler::new();
        scheduler.set_rate(config.rate);

        let mut app = App {
            config,
            scheduler,
            runs: Vec::new(),
            values,
            rng,
            should_quit: false,
            status_message: String::from("Ready!"),
            error: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.rebind()?;
        Ok(app)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.pump(Instant::now());

            // Wake up for the pending tick, or poll keys at the idle rate
            let timeout = self
                .scheduler
                .time_until_tick(Instant::now())
                .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire the scheduler if a tick is due and stop it once nothing can advance.
    pub fn pump(&mut self, now: Instant) {
        if let Err(e) = self.scheduler.poll(now) {
            return self.fail(e);
        }
        if self.scheduler.is_quiescent() {
            self.scheduler.stop();
            self.status_message = "Sort complete".to_string();
        }
    }

    /// All runs have finished
    pub fn is_finished(&self) -> bool {
        self.scheduler.targets().all(|(_, run)| run.is_finished())
    }

    /// The runs in display order
    pub fn runs(&self) -> impl Iterator<Item = &SortRun> + '_ {
        self.runs.iter().filter_map(|id| self.scheduler.target(*id))
    }

    /// Throw away the current runs and bind new ones to `self.values`.
    pub fn rebind(&mut self) -> Result<(), SortError> {
        if self.scheduler.is_running() {
            self.scheduler.stop();
        }
        self.scheduler.clear();
        self.runs.clear();
        self.error = None;

        for kind in self.config.algorithms.clone() {
            let seed = self.rng.random::<u64>();
            let run = SortRun::new(kind, &self.values, seed)?;
            self.runs.push(self.scheduler.register(run));
        }
        debug!(
            algorithms = ?self.config.algorithms,
            elements = self.values.len(),
            "bound runs"
        );
        Ok(())
    }

    /// Generate new input and rebind.
    pub fn reshuffle(&mut self) -> Result<(), SortError> {
        self.values = input::generate(
            self.config.element_count,
            self.config.arrangement,
            &mut self.rng,
        );
        info!(
            elements = self.values.len(),
            arrangement = %self.config.arrangement,
            "generated new input"
        );
        self.rebind()
    }

    fn fail(&mut self, e: SortError) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
        }
        tracing::error!(%e, "sort run failed");
        self.status_message = format!("Error: {}", e);
        self.error = Some(e.to_string());
    }

    fn apply(&mut self, result: Result<(), SortError>, message: String) {
        match result {
            Ok(()) => self.status_message = message,
            Err(e) => self.fail(e),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Chart panels above, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let runs: Vec<&SortRun> = self.runs().collect();
        if !runs.is_empty() {
            let share = 100 / runs.len() as u16;
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(share); runs.len()])
                .split(main_chunks[0]);

            for (run, area) in runs.iter().zip(columns.iter()) {
                super::panes::render_chart_pane(frame, *area, run);
            }
        }

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                is_running: self.scheduler.is_running(),
                has_error: self.error.is_some(),
                is_finished: self.is_finished(),
                rate: self.scheduler.rate(),
                delay: self.scheduler.delay(),
                element_count: self.values.len(),
                arrangement: self.config.arrangement,
                seed: self.config.seed,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle the timer (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_running(Instant::now());
                }
            }
            KeyCode::Right => self.single_tick(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                // Smaller multiplier means a shorter delay
                let rate = self.scheduler.rate().saturating_sub(RATE_STEP);
                self.change_rate(rate);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let rate = self.scheduler.rate().saturating_add(RATE_STEP);
                self.change_rate(rate);
            }
            KeyCode::Char('r') => {
                let result = self.reshuffle();
                self.apply(result, "Shuffled".to_string());
            }
            KeyCode::Char('a') => self.cycle_algorithm(0),
            KeyCode::Char('b') => self.cycle_algorithm(1),
            KeyCode::Char('c') => self.toggle_comparison(),
            KeyCode::Char('n') => {
                let max = self.config.max_elements();
                self.config.element_count = input::next_preset(self.config.element_count, max);
                let result = self.reshuffle();
                let message = format!("{} elements", self.config.element_count);
                self.apply(result, message);
            }
            KeyCode::Char('o') => {
                self.config.arrangement = self.config.arrangement.next();
                let result = self.reshuffle();
                let message = format!("Arrangement: {}", self.config.arrangement);
                self.apply(result, message);
            }
            KeyCode::Enter => self.finish_all(),
            KeyCode::Backspace => {
                let result = self.rebind();
                self.apply(result, "Reset to the same input".to_string());
            }
            _ => {}
        }
    }

    /// Start or stop the timer
    pub fn toggle_running(&mut self, now: Instant) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
            self.status_message = "Paused".to_string();
        } else if self.is_finished() {
            self.status_message = "Nothing left to sort (r to shuffle)".to_string();
        } else {
            self.scheduler.start(now);
            self.status_message = "Running...".to_string();
        }
    }

    /// Advance every run by one step without the timer
    fn single_tick(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
        }
        match self.scheduler.tick() {
            Ok(outcome) if outcome.advanced == 0 => {
                self.status_message = "Nothing left to sort".to_string();
            }
            Ok(_) => self.status_message = "Ticked".to_string(),
            Err(e) => self.fail(e),
        }
    }

    /// Step every run to completion at once
    fn finish_all(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
        }
        let ids = self.runs.clone();
        for id in ids {
            let Some(run) = self.scheduler.target_mut(id) else {
                continue;
            };
            while run.can_advance() {
                if let Err(e) = run.advance_one() {
                    return self.fail(e);
                }
            }
        }
        self.status_message = "Jumped to end".to_string();
    }

    fn change_rate(&mut self, rate: u32) {
        self.scheduler.set_rate(rate);
        self.config.rate = self.scheduler.rate();
        self.status_message = format!(
            "Rate {} ({}ms per tick)",
            self.scheduler.rate(),
            self.scheduler.delay().as_millis()
        );
    }

    fn cycle_algorithm(&mut self, slot: usize) {
        let Some(kind) = self.config.algorithms.get(slot).copied() else {
            self.status_message = "Press c to compare two algorithms".to_string();
            return;
        };
        let next = kind.next();
        self.config.algorithms[slot] = next;
        let result = self.rebind();
        self.apply(result, next.description().to_string());
    }

    fn toggle_comparison(&mut self) {
        if self.config.is_comparison() {
            self.config.algorithms.truncate(1);
        } else {
            let second = self
                .config
                .algorithms
                .first()
                .copied()
                .unwrap_or(AlgorithmKind::Bubble)
                .next();
            self.config.algorithms.push(second);
        }

        let max = self.config.max_elements();
        let result = if self.config.element_count > max {
            self.config.element_count = max;
            self.reshuffle()
        } else {
            self.rebind()
        };
        let message = if self.config.is_comparison() {
            format!("Comparing two algorithms ({} elements)", self.values.len())
        } else {
            "Single algorithm".to_string()
        };
        self.apply(result, message);
    }
}
