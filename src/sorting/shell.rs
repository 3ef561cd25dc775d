//! Shell sort

use super::{Step, StepSequencer};
use crate::dataset::DataSet;

/// Gapped insertion sort with gaps `n/2, n/4, ..., 1`. Each shift of an
/// element by one gap is one step.
#[derive(Debug)]
pub struct ShellSort {
    len: usize,
    gap: usize,
    next: usize,
    key_pos: Option<usize>,
}

impl ShellSort {
    pub fn new(data: &DataSet) -> Self {
        let gap = data.len() / 2;
        ShellSort {
            len: data.len(),
            gap,
            next: gap,
            key_pos: None,
        }
    }
}

impl StepSequencer for ShellSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            if self.gap == 0 {
                return Step::Exhausted;
            }
            let gap = self.gap;

            if let Some(pos) = self.key_pos {
                if pos >= gap && data.get(pos - gap) > data.get(pos) {
                    data.swap(pos - gap, pos);
                    data.mark_pair(pos, pos - gap);
                    self.key_pos = Some(pos - gap);
                    return Step::Continuing;
                }
                self.key_pos = None;
                self.next += 1;
                continue;
            }

            if self.next < self.len {
                self.key_pos = Some(self.next);
            } else {
                self.gap /= 2;
                self.next = self.gap;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pass_uses_half_length_gap() {
        let mut data = DataSet::from_values(vec![4, 9, 1, 3]);
        let mut sort = ShellSort::new(&data);

        // gap 2: 1 moves before 4
        assert_eq!(sort.advance(&mut data), Step::Continuing);
        assert_eq!(data.values(), &[1, 9, 4, 3]);
        assert_eq!(data.highlighted(), vec![0, 2]);
    }
}
