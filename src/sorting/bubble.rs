//! Bubble sort

use super::{Step, StepSequencer};
use crate::dataset::DataSet;

/// Adjacent compare-and-swap passes, suspending after every swap.
///
/// Pass `i` scans `0..n-1-i`; there is no early exit on a clean pass.
#[derive(Debug)]
pub struct BubbleSort {
    len: usize,
    pass: usize,
    cursor: usize,
}

impl BubbleSort {
    pub fn new(data: &DataSet) -> Self {
        BubbleSort {
            len: data.len(),
            pass: 0,
            cursor: 0,
        }
    }
}

impl StepSequencer for BubbleSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        while self.pass + 1 < self.len {
            while self.cursor + 1 < self.len - self.pass {
                let j = self.cursor;
                self.cursor += 1;
                if data.get(j) > data.get(j + 1) {
                    data.swap(j, j + 1);
                    data.mark_pair(j, j + 1);
                    return Step::Continuing;
                }
            }
            self.pass += 1;
            self.cursor = 0;
        }

        Step::Exhausted
    }
}
