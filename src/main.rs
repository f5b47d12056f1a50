// Sortty: stepwise sorting algorithm visualizer for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::data;
use sortty::ui::App;

const MIN_BARS: usize = 2;
const MAX_BARS: usize = 256;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let count = match args.get(1).map(|s| s.as_str()) {
        None => data::DEFAULT_LEN,
        Some("-h") | Some("--help") => {
            eprintln!("Usage: {} [count]", program_name);
            eprintln!();
            eprintln!("Animates sorting algorithms over `count` random bars");
            eprintln!("(default {}, between {} and {}).", data::DEFAULT_LEN, MIN_BARS, MAX_BARS);
            eprintln!();
            eprintln!("Keys: 1-6 pick an algorithm, space plays/pauses, → single-steps,");
            eprintln!("enter finishes the run, g generates new data, r resets, q quits.");
            return Ok(());
        }
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if (MIN_BARS..=MAX_BARS).contains(&n) => n,
            Ok(n) => {
                eprintln!(
                    "Error: bar count {} is out of range ({}..={})",
                    n, MIN_BARS, MAX_BARS
                );
                eprintln!("Usage: {} [count]", program_name);
                std::process::exit(1);
            }
            Err(_) => {
                eprintln!("Error: '{}' is not a valid bar count", raw);
                eprintln!("Usage: {} [count]", program_name);
                std::process::exit(1);
            }
        },
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(data::generate(count));
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
