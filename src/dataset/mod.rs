//! Working array for the visualizer
//!
//! This module provides the data the sorting algorithms operate on:
//! - [`DataSet`]: the array of values plus a parallel array of [`Role`]s
//! - [`Role`]: per-index highlight for the step currently on screen
//!
//! # Highlight Tracking
//!
//! Roles are visualization metadata only and never influence sort logic. The
//! data set remembers which indices are currently highlighted, so clearing the
//! highlight of the previous step touches only those slots instead of the
//! whole array.
//!
//! # Bounds
//!
//! Indices come from algorithm-internal loop state, so an out-of-range index is
//! a bug in the caller. Every accessor panics on it rather than returning an
//! error.

use rand::Rng;

/// Element type of the working array
pub type Value = u32;

/// Highlight role of a single index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Idle,
    Compare, // Source of the current mutation
    Placed,  // Destination of the current mutation
}

/// The array being sorted together with its highlight annotations
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    values: Vec<Value>,
    roles: Vec<Role>,
    highlighted: Vec<usize>,
}

impl DataSet {
    /// Create a data set of `n` random values in `[low, high]`
    pub fn random<R: Rng>(rng: &mut R, n: usize, low: Value, high: Value) -> Self {
        let mut data = DataSet::default();
        data.reset(rng, n, low, high);
        data
    }

    /// Create a data set holding exactly `values`, all roles idle
    pub fn from_values(values: Vec<Value>) -> Self {
        let roles = vec![Role::Idle; values.len()];
        DataSet {
            values,
            roles,
            highlighted: Vec::new(),
        }
    }

    /// Regenerate the array as `n` uniform random values in `[low, high]`
    pub fn reset<R: Rng>(&mut self, rng: &mut R, n: usize, low: Value, high: Value) {
        assert!(low <= high, "invalid value range {}..={}", low, high);
        self.values = (0..n).map(|_| rng.gen_range(low..=high)).collect();
        self.roles = vec![Role::Idle; n];
        self.highlighted.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the values, for drawing and inspection
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Read-only view of the roles, parallel to [`DataSet::values`]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn get(&self, index: usize) -> Value {
        self.values[self.checked(index)]
    }

    /// Largest value in the array, or 0 when empty
    pub fn max_value(&self) -> Value {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Check whether the values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Exchange two values
    pub fn swap(&mut self, i: usize, j: usize) {
        let (i, j) = (self.checked(i), self.checked(j));
        self.values.swap(i, j);
    }

    /// Overwrite a single slot
    pub fn write(&mut self, index: usize, value: Value) {
        let index = self.checked(index);
        self.values[index] = value;
    }

    /// Replace every value at once. The length must not change.
    pub fn replace_all(&mut self, values: Vec<Value>) {
        assert_eq!(
            values.len(),
            self.values.len(),
            "replace_all must preserve the array length"
        );
        self.values = values;
        self.clear_roles();
    }

    /// Set the role of one index
    pub fn set_role(&mut self, index: usize, role: Role) {
        let index = self.checked(index);
        self.roles[index] = role;
        if role != Role::Idle && !self.highlighted.contains(&index) {
            self.highlighted.push(index);
        }
    }

    /// Highlight a two-index mutation: `compare` is the source, `placed` the
    /// destination. When both are the same index, `Compare` is kept.
    pub fn mark_pair(&mut self, compare: usize, placed: usize) {
        self.set_role(placed, Role::Placed);
        self.set_role(compare, Role::Compare);
    }

    /// Reset every highlighted index back to [`Role::Idle`]
    pub fn clear_roles(&mut self) {
        for index in self.highlighted.drain(..) {
            self.roles[index] = Role::Idle;
        }
        debug_assert_eq!(self.values.len(), self.roles.len());
    }

    /// Indices that currently carry a non-idle role
    pub fn highlighted(&self) -> Vec<usize> {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, role)| **role != Role::Idle)
            .map(|(i, _)| i)
            .collect()
    }

    fn checked(&self, index: usize) -> usize {
        assert!(
            index < self.values.len(),
            "index {} out of bounds for data set of length {}",
            index,
            self.values.len()
        );
        index
    }
}
