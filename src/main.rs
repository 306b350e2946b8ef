// sortty: step-by-step sorting visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::config::{Config, DEFAULT_ELEMENTS};
use sortty::input::{self, Arrangement};
use sortty::run::SortRun;
use sortty::scheduler::{TickScheduler, RATE_DEFAULT};
use sortty::sort::AlgorithmKind;
use sortty::ui::App;

/// Watch sorting algorithms run one move at a time
#[derive(Parser, Debug)]
#[command(name = "sortty")]
#[command(version, about, long_about = None)]
struct Args {
    /// Algorithm to run: bubble, insertion, quick, random-quick, heap
    #[arg(short = 'a', long, default_value = "bubble")]
    algorithm: AlgorithmKind,

    /// Second algorithm to run side by side on the same input
    #[arg(short = 'c', long)]
    compare: Option<AlgorithmKind>,

    /// Number of elements to sort (1-400, or 1-200 when comparing)
    #[arg(short = 'n', long, default_value_t = DEFAULT_ELEMENTS)]
    count: usize,

    /// Initial order: shuffled, sorted, reversed, few-unique
    #[arg(short = 'o', long, default_value = "shuffled")]
    arrangement: Arrangement,

    /// Delay multiplier, 5ms per unit (1 = fastest, 100 = slowest)
    #[arg(short = 'r', long, default_value_t = RATE_DEFAULT)]
    rate: u32,

    /// Random seed for reproducible input. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without the terminal UI and print a summary
    #[arg(long)]
    headless: bool,

    /// Write logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,sortty=info"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    // Without a log file the TUI owns the terminal, so logs are dropped.
    Ok(())
}

/// Drive the scheduler with real sleeps until every run is done.
fn run_headless(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let values = input::generate(config.element_count, config.arrangement, &mut rng);

    let mut scheduler = TickScheduler::new();
    scheduler.set_rate(config.rate);
    for kind in &config.algorithms {
        scheduler.register(SortRun::new(*kind, &values, rng.random())?);
    }

    let started = Instant::now();
    scheduler.start(started);
    while !scheduler.is_quiescent() {
        if let Some(wait) = scheduler.time_until_tick(Instant::now()) {
            std::thread::sleep(wait);
        }
        scheduler.poll(Instant::now())?;
    }
    scheduler.stop();

    info!(
        ticks = scheduler.ticks(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "all runs finished"
    );
    for (_, run) in scheduler.targets() {
        let sorted = run.chart().bars().windows(2).all(|w| w[0] <= w[1]);
        println!(
            "{:<22} moves: {:>7}  exchanges: {:>7}  sorted: {}",
            run.kind().description(),
            run.moves(),
            run.chart().exchanges(),
            sorted
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut config = Config::new(args.algorithm)
        .with_element_count(args.count)
        .with_arrangement(args.arrangement)
        .with_rate(args.rate)
        .with_seed(seed);
    if let Some(second) = args.compare {
        config = config.with_comparison(second);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!(
        algorithms = ?config.algorithms,
        elements = config.element_count,
        arrangement = %config.arrangement,
        rate = config.rate,
        seed,
        "starting session"
    );

    if args.headless {
        return run_headless(&config);
    }

    let mut app = App::new(config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
