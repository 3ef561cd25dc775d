//! LSD radix sort, base 10

use super::{Step, StepSequencer};
use crate::dataset::{DataSet, Role, Value};

const RADIX: usize = 10;

/// One stable counting-sort pass per decimal digit, least significant first.
/// The distribution of a pass is computed at once; writing it back takes one
/// step per slot.
#[derive(Debug)]
pub struct RadixSort {
    max: Value,
    // None once every digit has been processed
    exp: Option<Value>,
    pass: Vec<Value>,
    cursor: usize,
}

impl RadixSort {
    pub fn new(data: &DataSet) -> Self {
        RadixSort {
            max: data.max_value(),
            exp: if data.len() > 1 { Some(1) } else { None },
            pass: Vec::new(),
            cursor: 0,
        }
    }
}

impl StepSequencer for RadixSort {
    fn advance(&mut self, data: &mut DataSet) -> Step {
        data.clear_roles();

        loop {
            if let Some(&value) = self.pass.get(self.cursor) {
                data.write(self.cursor, value);
                data.set_role(self.cursor, Role::Placed);
                self.cursor += 1;
                return Step::Continuing;
            }

            if !self.pass.is_empty() {
                self.pass.clear();
                self.exp = self.exp.and_then(|exp| exp.checked_mul(RADIX as Value));
            }

            match self.exp {
                Some(exp) if self.max / exp > 0 => {
                    self.pass = counting_pass(data.values(), exp);
                    self.cursor = 0;
                }
                _ => {
                    self.exp = None;
                    return Step::Exhausted;
                }
            }
        }
    }
}

/// Stable distribution of `values` by the decimal digit at `exp`
fn counting_pass(values: &[Value], exp: Value) -> Vec<Value> {
    let digit = |v: Value| ((v / exp) % RADIX as Value) as usize;

    let mut count = [0usize; RADIX];
    for &v in values {
        count[digit(v)] += 1;
    }
    for d in 1..RADIX {
        count[d] += count[d - 1];
    }

    let mut output = vec![0; values.len()];
    for &v in values.iter().rev() {
        let d = digit(v);
        count[d] -= 1;
        output[count[d]] = v;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_pass_orders_by_digit() {
        assert_eq!(
            counting_pass(&[170, 45, 75, 90, 802, 24, 2, 66], 1),
            vec![170, 90, 802, 2, 24, 45, 75, 66]
        );
        assert_eq!(
            counting_pass(&[170, 90, 802, 2, 24, 45, 75, 66], 10),
            vec![802, 2, 24, 45, 66, 170, 75, 90]
        );
    }

    #[test]
    fn test_pass_count_follows_digit_count() {
        let mut data = DataSet::from_values(vec![305, 12, 7, 999]);
        let mut sort = RadixSort::new(&data);

        let steps = crate::sorting::run_to_end(&mut sort, &mut data);
        // three digits, one write-back per slot per digit
        assert_eq!(steps, 3 * 4);
        assert_eq!(data.values(), &[7, 12, 305, 999]);
    }

    #[test]
    fn test_all_zero_is_exhausted_immediately() {
        let mut data = DataSet::from_values(vec![0, 0, 0]);
        let mut sort = RadixSort::new(&data);
        assert_eq!(sort.advance(&mut data), Step::Exhausted);
    }
}
