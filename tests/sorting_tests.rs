// Integration tests for the instrumented sorting algorithms

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortviz::dataset::{DataSet, Role, Value};
use sortviz::sorting::{run_to_end, AlgorithmCatalog, Step};

const SIZES: [usize; 6] = [0, 1, 2, 10, 100, 1000];

fn random_values(seed: u64, n: usize, high: Value) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..=high)).collect()
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Run algorithm `index` over `values`, checking role hygiene at every pause.
/// Returns the final values and the number of `Continuing` steps.
fn run_checked(index: usize, values: Vec<Value>) -> (Vec<Value>, usize) {
    let catalog = AlgorithmCatalog::new();
    let mut data = DataSet::from_values(values);
    let mut sequencer = catalog.instantiate(index, &data);
    let name = catalog.name_at(index);

    let mut steps = 0;
    while sequencer.advance(&mut data) == Step::Continuing {
        steps += 1;
        let highlighted = data.highlighted();
        assert!(
            !highlighted.is_empty() && highlighted.len() <= 2,
            "{} highlighted {:?} at step {}",
            name,
            highlighted,
            steps
        );
        assert_eq!(data.values().len(), data.roles().len());
    }
    assert!(
        data.highlighted().is_empty(),
        "{} left highlights after finishing",
        name
    );
    (data.values().to_vec(), steps)
}

// === CORRECTNESS ===

#[test]
fn test_every_algorithm_sorts_random_input() {
    let catalog = AlgorithmCatalog::new();
    for index in 0..catalog.count() {
        for (seed, &n) in SIZES.iter().enumerate() {
            let input = random_values(seed as u64 + 11, n, 530);
            let expected = sorted_copy(&input);
            let output = if n <= 100 {
                run_checked(index, input).0
            } else {
                // highlight checks scan the whole array; skip them for the big case
                let mut data = DataSet::from_values(input);
                let mut sequencer = catalog.instantiate(index, &data);
                run_to_end(sequencer.as_mut(), &mut data);
                data.values().to_vec()
            };
            assert_eq!(
                output,
                expected,
                "{} failed for n = {}",
                catalog.name_at(index),
                n
            );
        }
    }
}

#[test]
fn test_every_algorithm_sorts_duplicates_and_small_ranges() {
    let catalog = AlgorithmCatalog::new();
    for index in 0..catalog.count() {
        // values far below the length exercise the bucket width guard
        let input = random_values(99, 200, 3);
        let expected = sorted_copy(&input);
        let (output, _) = run_checked(index, input);
        assert_eq!(output, expected, "{}", catalog.name_at(index));
    }
}

#[test]
fn test_every_algorithm_sorts_reversed_input() {
    let catalog = AlgorithmCatalog::new();
    let input: Vec<Value> = (0..64).rev().collect();
    for index in 0..catalog.count() {
        let (output, steps) = run_checked(index, input.clone());
        assert_eq!(output, (0..64).collect::<Vec<_>>(), "{}", catalog.name_at(index));
        assert!(steps > 0);
    }
}

#[test]
fn test_large_values_do_not_overflow() {
    let catalog = AlgorithmCatalog::new();
    let input = vec![u32::MAX, 0, u32::MAX - 1, 4_000_000_000, 7, 1_000_000_000];
    let expected = sorted_copy(&input);
    for index in 0..catalog.count() {
        let (output, _) = run_checked(index, input.clone());
        assert_eq!(output, expected, "{}", catalog.name_at(index));
    }
}

// === STEP CONTRACT ===

#[test]
fn test_unsorted_input_takes_at_least_one_step() {
    let catalog = AlgorithmCatalog::new();
    let inputs: [Vec<Value>; 4] = [vec![2, 1], vec![1, 3, 2], vec![5, 3, 8, 1], vec![1, 1, 0]];
    for index in 0..catalog.count() {
        for input in &inputs {
            let (_, steps) = run_checked(index, input.clone());
            assert!(
                steps >= 1,
                "{} took no steps on {:?}",
                catalog.name_at(index),
                input
            );
        }
    }
}

#[test]
fn test_short_arrays_are_exhausted_immediately() {
    let catalog = AlgorithmCatalog::new();
    for index in 0..catalog.count() {
        for values in [vec![], vec![42]] {
            let mut data = DataSet::from_values(values.clone());
            let mut sequencer = catalog.instantiate(index, &data);
            assert_eq!(
                sequencer.advance(&mut data),
                Step::Exhausted,
                "{}",
                catalog.name_at(index)
            );
            assert_eq!(data.values(), values.as_slice());
        }
    }
}

#[test]
fn test_no_mutation_after_exhaustion() {
    let catalog = AlgorithmCatalog::new();
    for index in 0..catalog.count() {
        let mut data = DataSet::from_values(random_values(5, 40, 100));
        let mut sequencer = catalog.instantiate(index, &data);
        run_to_end(sequencer.as_mut(), &mut data);

        let finished = data.values().to_vec();
        for _ in 0..3 {
            assert_eq!(sequencer.advance(&mut data), Step::Exhausted);
            assert_eq!(data.values(), finished.as_slice());
            assert!(data.roles().iter().all(|r| *r == Role::Idle));
        }
    }
}

#[test]
fn test_in_place_algorithms_keep_the_multiset_at_every_pause() {
    let catalog = AlgorithmCatalog::new();
    let in_place = [
        "Bubble Sort",
        "Selection Sort",
        "Insertion Sort",
        "Quick Sort",
        "Heap Sort",
        "Shell Sort",
        "Comb Sort",
    ];
    let input = random_values(21, 50, 40);
    let expected = sorted_copy(&input);

    for index in 0..catalog.count() {
        if !in_place.contains(&catalog.name_at(index)) {
            continue;
        }
        let mut data = DataSet::from_values(input.clone());
        let mut sequencer = catalog.instantiate(index, &data);
        while sequencer.advance(&mut data) == Step::Continuing {
            assert_eq!(sorted_copy(data.values()), expected, "{}", catalog.name_at(index));
        }
    }
}

// === PER-ALGORITHM SCENARIOS ===

#[test]
fn test_bubble_sort_intermediate_states() {
    let mut data = DataSet::from_values(vec![5, 3, 8, 1]);
    let mut sequencer = AlgorithmCatalog::new().instantiate(0, &data);

    let expected: [&[Value]; 4] = [&[3, 5, 8, 1], &[3, 5, 1, 8], &[3, 1, 5, 8], &[1, 3, 5, 8]];
    for state in expected {
        assert_eq!(sequencer.advance(&mut data), Step::Continuing);
        assert_eq!(data.values(), state);
    }
    assert_eq!(sequencer.advance(&mut data), Step::Exhausted);
}

#[test]
fn test_bubble_sort_highlights_swapped_pair() {
    let mut data = DataSet::from_values(vec![5, 3, 8, 1]);
    let mut sequencer = AlgorithmCatalog::new().instantiate(0, &data);

    sequencer.advance(&mut data);
    assert_eq!(data.roles(), &[Role::Compare, Role::Placed, Role::Idle, Role::Idle]);
    sequencer.advance(&mut data);
    assert_eq!(data.roles(), &[Role::Idle, Role::Idle, Role::Compare, Role::Placed]);
}

#[test]
fn test_selection_sort_steps_once_per_position_on_sorted_input() {
    let (output, steps) = run_checked(1, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(output, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(steps, 6);
}

#[test]
fn test_insertion_sort_shifts_strictly_smaller_keys_only() {
    // the second 2 never passes the first one
    let mut data = DataSet::from_values(vec![2, 2, 1]);
    let mut sequencer = AlgorithmCatalog::new().instantiate(2, &data);

    assert_eq!(sequencer.advance(&mut data), Step::Continuing);
    assert_eq!(data.values(), &[2, 1, 2]);
    assert_eq!(sequencer.advance(&mut data), Step::Continuing);
    assert_eq!(data.values(), &[1, 2, 2]);
    assert_eq!(sequencer.advance(&mut data), Step::Exhausted);
}

#[test]
fn test_sorted_input_step_counts() {
    let catalog = AlgorithmCatalog::new();
    let sorted: Vec<Value> = (1..=8).collect();
    let expected = [
        ("Bubble Sort", 0),
        ("Selection Sort", 8),
        ("Insertion Sort", 0),
        // every element is written back once per merge level
        ("Merge Sort", 24),
        // no-op swaps against each pivot: 7 + 6 + ... + 1
        ("Quick Sort", 28),
        // 6 build sifts, 7 extractions and 9 extract sifts
        ("Heap Sort", 22),
        ("Shell Sort", 0),
        // one write-back per element for the single digit
        ("Radix Sort", 8),
        // scatter plus gather
        ("Bucket Sort", 16),
        ("Comb Sort", 0),
    ];

    for (name, steps) in expected {
        let index = catalog.iter().position(|d| d.name == name).unwrap();
        let (output, taken) = run_checked(index, sorted.clone());
        assert_eq!(output, sorted);
        assert_eq!(taken, steps, "{}", name);
    }
}

#[test]
fn test_quick_sort_places_pivot_between_partitions() {
    let mut data = DataSet::from_values(vec![3, 9, 1, 5]);
    let mut sequencer = AlgorithmCatalog::new().instantiate(4, &data);

    // 3 < 5 (no-op swap), 1 < 5 swaps with 9, then the pivot moves to slot 2
    assert_eq!(sequencer.advance(&mut data), Step::Continuing);
    assert_eq!(data.values(), &[3, 9, 1, 5]);
    assert_eq!(sequencer.advance(&mut data), Step::Continuing);
    assert_eq!(data.values(), &[3, 1, 9, 5]);
    assert_eq!(sequencer.advance(&mut data), Step::Continuing);
    assert_eq!(data.values(), &[3, 1, 5, 9]);
}

#[test]
fn test_heap_sort_extracts_maximum_to_the_end() {
    let mut data = DataSet::from_values(vec![9, 4, 7, 1]);
    let mut sequencer = AlgorithmCatalog::new().instantiate(5, &data);

    // already a max-heap: the first step swaps the root into the last slot
    assert_eq!(sequencer.advance(&mut data), Step::Continuing);
    assert_eq!(data.values(), &[1, 4, 7, 9]);
    assert_eq!(data.roles()[3], Role::Compare);
    assert_eq!(data.roles()[0], Role::Placed);
}

#[test]
fn test_bucket_sort_small_maximum() {
    // max / n == 0 would divide by zero without the width guard
    let (output, steps) = run_checked(8, vec![2, 0, 1, 2, 0, 1, 0, 2, 1, 0]);
    assert_eq!(output, vec![0, 0, 0, 0, 1, 1, 1, 2, 2, 2]);
    assert_eq!(steps, 20);
}
