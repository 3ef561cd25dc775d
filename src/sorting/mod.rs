//! Instrumented sorting algorithms
//!
//! Every algorithm is written as an explicit state machine implementing
//! [`StepSequencer`]. Each call to [`StepSequencer::advance`] performs the next
//! indivisible mutation of the [`DataSet`] (a swap, a write-back, a bucket
//! placement), highlights the indices involved, and returns control to the
//! caller.
//!
//! # Algorithms
//!
//! - [`bubble`], [`selection`], [`insertion`], [`shell`], [`comb`]: loop
//!   indices only
//! - [`merge`], [`quick`]: recursion replaced by an explicit work stack
//! - [`heap`]: build/extract phase plus an in-flight sift-down
//! - [`radix`], [`bucket`]: distribution passes written back one slot per step
//! - [`catalog`]: the ordered list of named constructors
//!
//! # Step Contract
//!
//! `advance` first clears the highlight left by the previous step, so an
//! observer polling between calls never sees more than one step's worth of
//! highlighted indices. Once a sequencer returns [`Step::Exhausted`] it keeps
//! returning it and never touches the data again. Arrays with fewer than two
//! elements are exhausted on the first call.

pub mod bubble;
pub mod bucket;
pub mod catalog;
pub mod comb;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use crate::dataset::DataSet;

pub use catalog::{AlgorithmCatalog, AlgorithmDescriptor};

/// Result of a single [`StepSequencer::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One mutation was performed and more work remains
    Continuing,
    /// The algorithm has finished; nothing was mutated
    Exhausted,
}

/// A suspendable sorting computation over a [`DataSet`]
pub trait StepSequencer {
    /// Perform the next indivisible mutation
    fn advance(&mut self, data: &mut DataSet) -> Step;
}

/// Drive a sequencer until it reports [`Step::Exhausted`], returning the number
/// of `Continuing` steps it took
pub fn run_to_end(sequencer: &mut dyn StepSequencer, data: &mut DataSet) -> usize {
    let mut steps = 0;
    while sequencer.advance(data) == Step::Continuing {
        steps += 1;
    }
    steps
}
