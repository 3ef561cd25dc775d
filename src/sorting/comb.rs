//! Comb sort

use super::{Step, StepSequencer};
use crate::dataset::DataSet;

/// Bubble sort over a shrinking gap (factor 10/13, never below 1). Finishes
/// once a gap-1 pass makes no swap.
#[derive(Debug)]
pub struct CombSort {
    len: usize,
    gap: usize,
    swapped: bool,
    cursor: usize,
    in_pass: bool,
}

impl CombSort {
    pub fn new(data: &DataSet) -> Self {
        let len = data.len();
        CombSort {
            len,
            gap: len,
            // A single element never needs a pass
            swapped: len > 1,
            cursor: 0,
            in_pass: false,
        }
    }
}

impl StepSequencer for CombSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            if self.in_pass {
                while self.cursor + self.gap < self.len {
                    let i = self.cursor;
                    self.cursor += 1;
                    if data.get(i) > data.get(i + self.gap) {
                        data.swap(i, i + self.gap);
                        data.mark_pair(i, i + self.gap);
                        self.swapped = true;
                        return Step::Continuing;
                    }
                }
                self.in_pass = false;
            }

            if self.len < 2 || (self.gap == 1 && !self.swapped) {
                return Step::Exhausted;
            }

            self.gap = (self.gap * 10 / 13).max(1);
            self.swapped = false;
            self.cursor = 0;
            self.in_pass = true;
        }
    }
}
