//! Quick sort (Lomuto partition)

use super::{Step, StepSequencer};
use crate::dataset::{DataSet, Value};

/// In-flight partition of the inclusive range `[start, end]`
#[derive(Debug)]
struct Partition {
    start: usize,
    end: usize,
    pivot: Value,
    store: usize,
    cursor: usize,
}

/// Quick sort with the last element of each range as pivot.
///
/// Every swap during a partition is one step, including the no-op swaps where
/// the scan cursor and the store index coincide. Placing the pivot is a step of
/// its own whenever the pivot actually moves. Pending ranges live on an
/// explicit stack, left range on top.
#[derive(Debug)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl QuickSort {
    pub fn new(data: &DataSet) -> Self {
        let ranges = if data.len() > 1 {
            vec![(0, data.len() - 1)]
        } else {
            Vec::new()
        };
        QuickSort {
            ranges,
            partition: None,
        }
    }
}

impl StepSequencer for QuickSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            if let Some(part) = self.partition.as_mut() {
                while part.cursor < part.end {
                    let i = part.cursor;
                    part.cursor += 1;
                    if data.get(i) < part.pivot {
                        data.swap(i, part.store);
                        data.mark_pair(i, part.store);
                        part.store += 1;
                        return Step::Continuing;
                    }
                }

                let (start, end, p) = (part.start, part.end, part.store);
                self.partition = None;
                if p + 1 < end {
                    self.ranges.push((p + 1, end));
                }
                if p > start + 1 {
                    self.ranges.push((start, p - 1));
                }
                if p != end {
                    data.swap(p, end);
                    data.mark_pair(end, p);
                    return Step::Continuing;
                }
                continue;
            }

            let Some((start, end)) = self.ranges.pop() else {
                return Step::Exhausted;
            };
            self.partition = Some(Partition {
                start,
                end,
                pivot: data.get(end),
                store: start,
                cursor: start,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::run_to_end;

    #[test]
    fn test_two_elements_take_a_step() {
        let mut data = DataSet::from_values(vec![2, 1]);
        let mut sort = QuickSort::new(&data);

        assert_eq!(sort.advance(&mut data), Step::Continuing);
        assert_eq!(data.values(), &[1, 2]);
        assert_eq!(sort.advance(&mut data), Step::Exhausted);
    }

    #[test]
    fn test_partition_moves_smaller_left() {
        let mut data = DataSet::from_values(vec![7, 2, 9, 1, 5]);
        let mut sort = QuickSort::new(&data);

        // 7 is skipped, then 2 < 5 is swapped into the store slot
        assert_eq!(sort.advance(&mut data), Step::Continuing);
        assert_eq!(data.values(), &[2, 7, 9, 1, 5]);

        let steps = run_to_end(&mut sort, &mut data);
        assert!(steps > 0);
        assert_eq!(data.values(), &[1, 2, 5, 7, 9]);
    }
}
