// arraytty: live and step-through array notation visualizer

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use arraytty::config::Settings;
use arraytty::interpreter::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_PLAY_INTERVAL_MS};
use arraytty::interpreter::engine;
use arraytty::interpreter::errors::Severity;
use arraytty::parser::parse::parse_program;
use arraytty::timeline::Mode;
use arraytty::ui::App;

/// Program shown when no file is given
const SAMPLE_PROGRAM: &str = "\
// Array notation playground
// Supports int, char, and double arrays.

// Example: Integer Array
int nums[5] = {10, 20, 30, 40, 50};
nums[2] = 85;
nums.insert(0, 5);
nums.remove(3);

// Example: Character Array
char word[4] = \"byte\";
word[0] = 'j';

// Example: Double Array
double ratios[3] = {1.5, 2.7, 3.14};
ratios[1] = 4.2;
";

#[derive(Parser, Debug)]
#[command(name = "arraytty", about = "Visualize C-like array statements in the terminal")]
struct Args {
    /// Source file; a built-in sample is used when absent
    file: Option<PathBuf>,

    /// Replay the file without the TUI, print diagnostics and arrays
    #[arg(long)]
    check: bool,

    /// Start in step mode
    #[arg(long)]
    step: bool,

    /// Quiet period before diagnostics are shown, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Autoplay interval, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PLAY_INTERVAL_MS)]
    play_interval_ms: u64,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arraytty=info"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.check {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

    Ok(())
}

/// Headless replay. Returns true when no error-severity diagnostic was raised.
fn run_check(source: &str) -> bool {
    let program = parse_program(source);
    let replay = engine::replay(&program.lines);

    for diagnostic in &replay.diagnostics {
        match diagnostic.severity {
            Severity::Error | Severity::Warning => warn!(line = diagnostic.location.line, "{}", diagnostic.message()),
            Severity::Hint => info!(line = diagnostic.location.line, "{}", diagnostic.message()),
        }
        println!(
            "{}:{}: {}: {}",
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.severity,
            diagnostic.message()
        );
    }

    for (name, array) in replay.environment.iter() {
        let values: Vec<String> = array.elements().iter().map(ToString::to_string).collect();
        println!("{} {}[{}] = {{{}}}", array.kind(), name, array.len(), values.join(", "));
    }

    info!(
        statements = program.len(),
        arrays = replay.environment.len(),
        diagnostics = replay.diagnostics.len(),
        "check finished"
    );

    !replay
        .diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let source = match &args.file {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: File '{}' not found", path.display());
                std::process::exit(1);
            }
            fs::read_to_string(path)?
        }
        None => SAMPLE_PROGRAM.to_string(),
    };

    if args.check {
        if !run_check(&source) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let settings = Settings {
        debounce: Duration::from_millis(args.debounce_ms),
        play_interval: Duration::from_millis(args.play_interval_ms),
        ..Settings::default()
    };
    let mode = if args.step { Mode::Step } else { Mode::Live };
    info!(%mode, "starting TUI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&source, mode, &settings, Instant::now());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_program_is_clean() {
        assert!(run_check(SAMPLE_PROGRAM));
        let replay = engine::replay(&parse_program(SAMPLE_PROGRAM).lines);
        assert!(replay.diagnostics.is_empty());
        assert_eq!(replay.environment.len(), 3);
    }
}
