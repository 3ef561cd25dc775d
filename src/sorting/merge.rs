//! Merge sort

use super::{Step, StepSequencer};
use crate::dataset::{DataSet, Role, Value};

/// Pending work on the explicit stack, replacing the recursive calls
#[derive(Debug)]
enum MergeTask {
    /// Sort the half-open range `[start, end)`
    Sort { start: usize, end: usize },
    /// Merge the sorted halves `[start, mid)` and `[mid, end)`
    Merge { start: usize, mid: usize, end: usize },
    /// Copy a merged run back into the array, one element per step
    WriteBack {
        start: usize,
        merged: Vec<Value>,
        next: usize,
    },
}

/// Top-down merge sort. Both halves are sorted before they are merged, and the
/// merged run is written back one element per step.
#[derive(Debug)]
pub struct MergeSort {
    tasks: Vec<MergeTask>,
}

impl MergeSort {
    pub fn new(data: &DataSet) -> Self {
        MergeSort {
            tasks: vec![MergeTask::Sort {
                start: 0,
                end: data.len(),
            }],
        }
    }
}

impl StepSequencer for MergeSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        while let Some(task) = self.tasks.pop() {
            match task {
                MergeTask::Sort { start, end } => {
                    if end - start > 1 {
                        let mid = (start + end) / 2;
                        // Pushed in reverse so the left half runs first
                        self.tasks.push(MergeTask::Merge { start, mid, end });
                        self.tasks.push(MergeTask::Sort { start: mid, end });
                        self.tasks.push(MergeTask::Sort { start, end: mid });
                    }
                }
                MergeTask::Merge { start, mid, end } => {
                    let merged = merge_runs(&data.values()[start..mid], &data.values()[mid..end]);
                    self.tasks.push(MergeTask::WriteBack {
                        start,
                        merged,
                        next: 0,
                    });
                }
                MergeTask::WriteBack {
                    start,
                    merged,
                    next,
                } => {
                    if let Some(&value) = merged.get(next) {
                        data.write(start + next, value);
                        data.set_role(start + next, Role::Placed);
                        self.tasks.push(MergeTask::WriteBack {
                            start,
                            merged,
                            next: next + 1,
                        });
                        return Step::Continuing;
                    }
                }
            }
        }

        Step::Exhausted
    }
}

/// Merge two sorted runs. The right element is taken only when strictly
/// smaller, so ties keep the left run's element first.
fn merge_runs(left: &[Value], right: &[Value]) -> Vec<Value> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        if right[r] < left[l] {
            merged.push(right[r]);
            r += 1;
        } else {
            merged.push(left[l]);
            l += 1;
        }
    }
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}
