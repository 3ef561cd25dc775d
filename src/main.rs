// SortViz: step-by-step sorting algorithm visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use sortviz::config::VisualizerConfig;
use sortviz::logging::init_tracing;
use sortviz::playback::PlaybackController;
use sortviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = VisualizerConfig::default();
    config.validate()?;
    tracing::info!(
        array_len = config.array_len,
        min = config.min_value,
        max = config.max_value,
        tick_rate = config.tick_rate,
        "starting visualizer"
    );

    let controller = PlaybackController::new(config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "visualizer exited with an error");
        eprintln!("Error: {}", err);
    }

    Ok(())
}
