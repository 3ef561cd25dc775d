//! Main TUI application state and logic

use crate::error::Result;
use crate::playback::{PlaybackController, PlaybackState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::time::{Duration, Instant};

/// Upper bound on how long the loop waits for input while nothing is running
const IDLE_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The playback controller owning the data set and the active sort
    pub controller: PlaybackController,

    /// Whether the instructions screen is shown instead of the bars
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time the controller was ticked
    pub last_tick: Instant,

    tick_interval: Duration,
}

impl App {
    /// Create a new app around the given controller
    pub fn new(controller: PlaybackController) -> Self {
        let tick_interval = controller.config().tick_interval();
        App {
            controller,
            show_help: true, // Instructions first, like a title screen
            should_quit: false,
            status_message: String::from("Ready!"),
            last_tick: Instant::now(),
            tick_interval,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance the sort at the configured tick rate
            if self.controller.is_running() && self.last_tick.elapsed() >= self.tick_interval {
                self.last_tick = Instant::now();
                self.tick();
            }

            let timeout = if self.controller.is_running() {
                self.tick_interval.saturating_sub(self.last_tick.elapsed())
            } else {
                IDLE_POLL
            };

            // Use poll with timeout so ticks keep flowing without input
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

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main pane, plus status bar at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        if self.show_help {
            super::panes::render_help_pane(frame, chunks[0]);
        } else {
            super::panes::render_bars_pane(
                frame,
                chunks[0],
                self.controller.dataset(),
                self.controller.current_algorithm_name(),
                self.controller.config().max_value,
            );
        }

        let catalog = self.controller.catalog();
        super::panes::render_status_bar(
            frame,
            chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                state: self.controller.state(),
                algorithm_index: self.controller.selected_index(),
                algorithm_count: catalog.count(),
                steps: self.controller.steps(),
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
                if self.controller.is_running() {
                    return;
                }
                self.controller.start();
                // Tick on the next loop iteration rather than a full interval later
                self.last_tick = Instant::now()
                    .checked_sub(self.tick_interval)
                    .unwrap_or(Instant::now());
                self.status_message =
                    format!("Sorting with {}", self.controller.current_algorithm_name());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = "Array reset".to_string();
            }
            KeyCode::Up => {
                self.cycle(PlaybackController::cycle_next);
            }
            KeyCode::Down => {
                self.cycle(PlaybackController::cycle_prev);
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.show_help = !self.show_help;
            }
            _ => {}
        }
    }

    /// Advance the controller by one tick and report completion
    fn tick(&mut self) {
        if self.controller.tick() == PlaybackState::Finished {
            self.status_message = format!(
                "{} finished in {} step(s)",
                self.controller.current_algorithm_name(),
                self.controller.steps()
            );
        }
    }

    fn cycle(&mut self, change: fn(&mut PlaybackController)) {
        if self.controller.is_running() {
            self.status_message = "Cannot change algorithm while sorting".to_string();
            return;
        }
        change(&mut self.controller);
        self.status_message = format!("Selected {}", self.controller.current_algorithm_name());
    }
}
