//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the working array drawn as colored vertical bars
//! - [`help`]: the instructions screen
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function that draws into a
//! given area and keeps no state of its own.

pub mod bars;
pub mod help;
pub mod status;

pub use bars::render_bars_pane;
pub use help::render_help_pane;
pub use status::{render_status_bar, StatusRenderData};
