//! Insertion sort

use super::{Step, StepSequencer};
use crate::dataset::DataSet;

/// Shifts each key left one slot per step while it is strictly smaller than
/// its left neighbour. Equal keys stop the shift, keeping the sort stable.
///
/// A shift is an adjacent swap with the key, so the array is a permutation of
/// the input at every pause.
#[derive(Debug)]
pub struct InsertionSort {
    len: usize,
    next: usize,
    // Current position of the key being inserted
    key_pos: Option<usize>,
}

impl InsertionSort {
    pub fn new(data: &DataSet) -> Self {
        InsertionSort {
            len: data.len(),
            next: 1,
            key_pos: None,
        }
    }
}

impl StepSequencer for InsertionSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            if let Some(pos) = self.key_pos {
                if pos > 0 && data.get(pos) < data.get(pos - 1) {
                    data.swap(pos - 1, pos);
                    data.mark_pair(pos - 1, pos);
                    self.key_pos = Some(pos - 1);
                    return Step::Continuing;
                }
                self.key_pos = None;
                self.next += 1;
            }

            if self.next >= self.len {
                return Step::Exhausted;
            }
            self.key_pos = Some(self.next);
        }
    }
}
