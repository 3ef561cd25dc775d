//! Heap sort

use super::{Step, StepSequencer};
use crate::dataset::DataSet;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Heapify nodes `remaining - 1` down to 0
    Build { remaining: usize },
    /// Swap the root into slot `end`, then re-sift the heap `[0, end)`
    Extract { end: usize },
}

/// Sift-down of `node` within the heap prefix `[0, size)`
#[derive(Debug, Clone, Copy)]
struct Sift {
    size: usize,
    node: usize,
}

/// Max-heap sort. Each sift-down swap and each root extraction is one step.
#[derive(Debug)]
pub struct HeapSort {
    len: usize,
    phase: Phase,
    sift: Option<Sift>,
}

impl HeapSort {
    pub fn new(data: &DataSet) -> Self {
        HeapSort {
            len: data.len(),
            phase: Phase::Build {
                remaining: data.len() / 2,
            },
            sift: None,
        }
    }
}

impl StepSequencer for HeapSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            if let Some(Sift { size, node }) = self.sift.take() {
                let largest = largest_of_family(data, size, node);
                if largest != node {
                    data.swap(node, largest);
                    data.mark_pair(node, largest);
                    self.sift = Some(Sift {
                        size,
                        node: largest,
                    });
                    return Step::Continuing;
                }
                continue;
            }

            match self.phase {
                Phase::Build { remaining } if remaining > 0 => {
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift {
                        size: self.len,
                        node: remaining - 1,
                    });
                }
                Phase::Build { .. } => {
                    self.phase = Phase::Extract {
                        end: self.len.saturating_sub(1),
                    };
                }
                Phase::Extract { end } if end > 0 => {
                    data.swap(end, 0);
                    data.mark_pair(end, 0);
                    self.phase = Phase::Extract { end: end - 1 };
                    self.sift = Some(Sift { size: end, node: 0 });
                    return Step::Continuing;
                }
                Phase::Extract { .. } => return Step::Exhausted,
            }
        }
    }
}

/// Index of the largest of `node` and its children inside `[0, size)`.
/// Children win only when strictly larger.
fn largest_of_family(data: &DataSet, size: usize, node: usize) -> usize {
    let left = 2 * node + 1;
    let right = 2 * node + 2;
    let mut largest = node;

    if left < size && data.get(node) < data.get(left) {
        largest = left;
    }
    if right < size && data.get(largest) < data.get(right) {
        largest = right;
    }
    largest
}
