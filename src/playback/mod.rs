//! Playback state machine driving one sort at a time
//!
//! [`PlaybackController`] owns the [`DataSet`], the selected algorithm, and the
//! in-flight [`StepSequencer`]. The shell calls [`PlaybackController::tick`]
//! once per frame and reads the data set back to draw it.
//!
//! # States
//!
//! ```text
//!            start                 tick (Exhausted)
//!   Idle ───────────▶ Running ───────────────────▶ Finished
//!    ▲                   │                            │
//!    └──── reset ────────┴──────────── reset ─────────┘
//!                      Finished ── start ──▶ Running
//! ```
//!
//! Commands that do not apply to the current state (starting or cycling while
//! running, ticking while idle) are silently ignored so stray key presses can
//! never disturb a run.

use crate::config::VisualizerConfig;
use crate::dataset::{DataSet, Value};
use crate::sorting::{AlgorithmCatalog, Step, StepSequencer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Which phase the controller is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    /// Same as `Idle` for input purposes, kept apart so the UI can show "done"
    Finished,
}

pub struct PlaybackController {
    config: VisualizerConfig,
    catalog: AlgorithmCatalog,
    data: DataSet,
    rng: StdRng,
    state: PlaybackState,
    selected: usize,
    active: Option<Box<dyn StepSequencer>>,
    steps: usize,
}

impl PlaybackController {
    /// Create a controller over a freshly generated random data set
    pub fn new(config: VisualizerConfig) -> Self {
        let mut rng = rng_for(&config);
        let data = DataSet::random(
            &mut rng,
            config.array_len,
            config.min_value,
            config.max_value,
        );
        Self::with_parts(config, data, rng)
    }

    /// Create a controller over fixed values. Later resets still generate
    /// random data from the configuration.
    pub fn with_values(config: VisualizerConfig, values: Vec<Value>) -> Self {
        let rng = rng_for(&config);
        Self::with_parts(config, DataSet::from_values(values), rng)
    }

    fn with_parts(config: VisualizerConfig, data: DataSet, rng: StdRng) -> Self {
        PlaybackController {
            config,
            catalog: AlgorithmCatalog::new(),
            data,
            rng,
            state: PlaybackState::Idle,
            selected: 0,
            active: None,
            steps: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn dataset(&self) -> &DataSet {
        &self.data
    }

    pub fn catalog(&self) -> &AlgorithmCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current_algorithm_name(&self) -> &'static str {
        self.catalog.name_at(self.selected)
    }

    /// Number of steps taken by the current (or most recent) run
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Begin sorting with the selected algorithm. Ignored while running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        self.data.clear_roles();
        self.active = Some(self.catalog.instantiate(self.selected, &self.data));
        self.steps = 0;
        self.state = PlaybackState::Running;
        tracing::debug!(
            algorithm = self.current_algorithm_name(),
            len = self.data.len(),
            "sort started"
        );
    }

    /// Advance the running sort by one step and return the resulting state
    pub fn tick(&mut self) -> PlaybackState {
        if !self.is_running() {
            return self.state;
        }

        let step = match self.active.as_mut() {
            Some(sequencer) => sequencer.advance(&mut self.data),
            None => Step::Exhausted,
        };

        match step {
            Step::Continuing => self.steps += 1,
            Step::Exhausted => {
                self.active = None;
                self.data.clear_roles();
                self.state = PlaybackState::Finished;
                tracing::info!(
                    algorithm = self.current_algorithm_name(),
                    steps = self.steps,
                    sorted = self.data.is_sorted(),
                    "sort finished"
                );
            }
        }
        self.state
    }

    /// Discard any run in progress and generate new random values
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!(steps = self.steps, "run abandoned");
        }
        self.data.reset(
            &mut self.rng,
            self.config.array_len,
            self.config.min_value,
            self.config.max_value,
        );
        self.steps = 0;
        self.state = PlaybackState::Idle;
        tracing::debug!(len = self.data.len(), "data set reset");
    }

    /// Select the next algorithm. Ignored while running.
    pub fn cycle_next(&mut self) {
        if !self.is_running() {
            self.selected = self.catalog.next_index(self.selected);
            tracing::debug!(algorithm = self.current_algorithm_name(), "algorithm selected");
        }
    }

    /// Select the previous algorithm. Ignored while running.
    pub fn cycle_prev(&mut self) {
        if !self.is_running() {
            self.selected = self.catalog.prev_index(self.selected);
            tracing::debug!(algorithm = self.current_algorithm_name(), "algorithm selected");
        }
    }
}

/// Seeded generator when the configuration pins a seed, entropy otherwise
fn rng_for(config: &VisualizerConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
