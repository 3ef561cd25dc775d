//! # Introduction
//!
//! SortViz animates sorting algorithms one primitive operation at a time.
//! Every algorithm runs as a suspendable state machine: each step performs a
//! single swap, write-back, or bucket placement, highlights the indices it
//! touched, and hands control back to the render loop. The terminal UI is
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Key press → PlaybackController → StepSequencer::advance → DataSet → TUI
//! ```
//!
//! 1. [`dataset`] — the working array and its per-index highlight roles.
//! 2. [`sorting`] — ten instrumented algorithms behind the
//!    [`sorting::StepSequencer`] trait, plus the [`sorting::AlgorithmCatalog`].
//! 3. [`playback`] — the Idle / Running / Finished controller the shell drives
//!    once per tick.
//! 4. [`config`], [`error`] and [`logging`] — startup settings, the shell's
//!    error type, and log file setup.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, selection, insertion, merge, quick (Lomuto), heap, shell,
//! LSD radix (base 10), bucket, and comb sort.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod playback;
pub mod sorting;
pub mod ui;
