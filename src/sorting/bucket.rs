//! Bucket sort

use super::{Step, StepSequencer};
use crate::dataset::{DataSet, Role, Value};

#[derive(Debug)]
enum Phase {
    /// Drop element `next` into its bucket
    Scatter { next: usize },
    /// Write the concatenated, per-bucket sorted output back
    Gather { output: Vec<Value>, next: usize },
}

/// Bucket sort with one bucket per element.
///
/// Bucket width is `max / n`, clamped to at least 1 so that arrays whose
/// maximum is smaller than their length still distribute. Values at or above
/// `n * width` all land in the last bucket.
#[derive(Debug)]
pub struct BucketSort {
    len: usize,
    width: u64,
    buckets: Vec<Vec<Value>>,
    phase: Phase,
}

impl BucketSort {
    pub fn new(data: &DataSet) -> Self {
        let len = data.len();
        let width = if len == 0 {
            1
        } else {
            (data.max_value() as u64 / len as u64).max(1)
        };
        let phase = if len > 1 {
            Phase::Scatter { next: 0 }
        } else {
            Phase::Gather {
                output: Vec::new(),
                next: 0,
            }
        };
        BucketSort {
            len,
            width,
            buckets: vec![Vec::new(); len],
            phase,
        }
    }

    fn bucket_index(&self, value: Value) -> usize {
        let index = (value as u64 / self.width).min(self.len as u64 - 1);
        index as usize
    }
}

impl StepSequencer for BucketSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            match &mut self.phase {
                Phase::Scatter { next } if *next < self.len => {
                    let i = *next;
                    *next += 1;
                    let value = data.get(i);
                    let bucket = self.bucket_index(value);
                    self.buckets[bucket].push(value);
                    data.set_role(i, Role::Compare);
                    return Step::Continuing;
                }
                Phase::Scatter { .. } => {
                    let mut output = Vec::with_capacity(self.len);
                    for mut bucket in self.buckets.drain(..) {
                        bucket.sort();
                        output.extend(bucket);
                    }
                    self.phase = Phase::Gather { output, next: 0 };
                }
                Phase::Gather { output, next } => {
                    let Some(&value) = output.get(*next) else {
                        return Step::Exhausted;
                    };
                    data.write(*next, value);
                    data.set_role(*next, Role::Placed);
                    *next += 1;
                    return Step::Continuing;
                }
            }
        }
    }
}
