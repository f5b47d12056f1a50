//! Main TUI application state and logic

use crate::data;
use crate::sort::{Algorithm, Sorter, Step};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Bounds for the per-step delay while playing.
const MIN_SPEED_MS: u64 = 1;
const MAX_SPEED_MS: u64 = 200;
const DEFAULT_SPEED_MS: u64 = 50;
const SPEED_STEP_MS: u64 = 10;

/// The main application state
pub struct App {
    /// Bar values currently on screen, mutated in place by the sorter
    pub data: Vec<u32>,

    /// Copy of `data` from before the current/last run, so a run can be
    /// replayed on the same input
    pub initial: Vec<u32>,

    /// Currently selected algorithm
    pub algorithm: Algorithm,

    /// In-flight sorting state machine, created lazily on the first step
    pub sorter: Option<Sorter<u32>>,

    /// Last reported step, shown as the highlighted pair
    pub highlight: Option<Step>,

    /// Steps taken in the current run
    pub steps_taken: usize,

    /// Whether the current run has drained its trace
    pub finished: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Per-step delay while playing
    pub speed_ms: u64,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over the given bar data
    pub fn new(data: Vec<u32>) -> Self {
        App {
            initial: data.clone(),
            data,
            algorithm: Algorithm::Bubble,
            sorter: None,
            highlight: None,
            steps_taken: 0,
            finished: false,
            is_playing: false,
            speed_ms: DEFAULT_SPEED_MS,
            status_message: String::from("Ready! Pick an algorithm and press space"),
            should_quit: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(self.speed_ms)
            {
                self.advance();
                self.last_play_time = Instant::now();
            }

            // Use poll with a timeout so auto-play keeps ticking
            let poll_ms = self.speed_ms.min(50);
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Header on top, bars in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_header_pane(frame, chunks[0], self.algorithm, self.speed_ms);

        super::panes::render_bars_pane(
            frame,
            chunks[1],
            &self.data,
            self.highlight,
            self.finished,
            data::MAX_VALUE,
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.steps_taken,
            self.is_playing,
            self.finished,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys select an algorithm directly
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.select_algorithm(Algorithm::ALL[idx]);
            }
            KeyCode::Tab => {
                let idx = Algorithm::ALL
                    .iter()
                    .position(|a| *a == self.algorithm)
                    .unwrap_or(0);
                self.select_algorithm(Algorithm::ALL[(idx + 1) % Algorithm::ALL.len()]);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.advance();
            }
            KeyCode::Enter => {
                // Drain the rest of the trace in one go
                self.is_playing = false;
                while !self.finished {
                    self.advance();
                }
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let len = self.data.len();
                self.data = data::generate(len);
                self.initial = self.data.clone();
                self.clear_run();
                self.status_message = String::from("Generated new data");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.data = self.initial.clone();
                self.clear_run();
                self.status_message = String::from("Reset to the unsorted data");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
                self.status_message = format!("Speed: {} ms/step", self.speed_ms);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.speed_ms = (self.speed_ms + SPEED_STEP_MS).min(MAX_SPEED_MS);
                self.status_message = format!("Speed: {} ms/step", self.speed_ms);
            }
            _ => {}
        }
    }

    /// Switch algorithms, abandoning any run in flight. The data keeps
    /// whatever intermediate state it had; `r` restores the input.
    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.clear_run();
        self.status_message = format!("Selected {}", algorithm);
    }

    /// Toggle auto-play mode
    fn toggle_play(&mut self) {
        if self.finished {
            self.status_message = String::from("Already sorted: press g or r first");
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Fire the first step immediately
            self.last_play_time = Instant::now()
                .checked_sub(Duration::from_millis(MAX_SPEED_MS))
                .unwrap_or_else(Instant::now);
            self.status_message = format!("Playing {}...", self.algorithm);
        } else {
            self.status_message = String::from("Paused");
        }
    }

    /// Pull one step from the sorter, starting the run if necessary
    fn advance(&mut self) {
        if self.finished {
            return;
        }
        if self.sorter.is_none() {
            // A fresh trace binds to the current contents, so remember
            // them for the reset key
            self.initial = self.data.clone();
            self.sorter = Some(Sorter::new(self.algorithm, self.data.len()));
        }
        let Some(sorter) = self.sorter.as_mut() else {
            return;
        };
        match sorter.step(&mut self.data) {
            Some(step) => {
                self.highlight = Some(step);
                self.steps_taken += 1;
            }
            None => {
                self.finished = true;
                self.is_playing = false;
                self.highlight = None;
                self.status_message =
                    format!("{} finished in {} steps", self.algorithm, self.steps_taken);
            }
        }
    }

    /// Drop the in-flight run and its highlight state
    fn clear_run(&mut self) {
        self.sorter = None;
        self.highlight = None;
        self.steps_taken = 0;
        self.finished = false;
        self.is_playing = false;
    }
}
