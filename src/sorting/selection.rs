//! Selection sort

use super::{Step, StepSequencer};
use crate::dataset::DataSet;

/// One step per placed minimum: the inner scan runs to completion inside a
/// single `advance`, then the minimum is swapped into position.
///
/// The swap happens even when the minimum is already in place, so a sorted
/// array of length `n` still takes `n` steps.
#[derive(Debug)]
pub struct SelectionSort {
    len: usize,
    next: usize,
}

impl SelectionSort {
    pub fn new(data: &DataSet) -> Self {
        SelectionSort {
            len: data.len(),
            next: 0,
        }
    }
}

impl StepSequencer for SelectionSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        if self.len < 2 || self.next >= self.len {
            return Step::Exhausted;
        }

        let i = self.next;
        let mut min = i;
        for j in i + 1..self.len {
            if data.get(j) < data.get(min) {
                min = j;
            }
        }

        data.swap(i, min);
        data.mark_pair(min, i);
        self.next += 1;
        Step::Continuing
    }
}
