//! The fixed, ordered list of algorithms offered by the visualizer

use super::bubble::BubbleSort;
use super::bucket::BucketSort;
use super::comb::CombSort;
use super::heap::HeapSort;
use super::insertion::InsertionSort;
use super::merge::MergeSort;
use super::quick::QuickSort;
use super::radix::RadixSort;
use super::selection::SelectionSort;
use super::shell::ShellSort;
use super::StepSequencer;
use crate::dataset::DataSet;

/// A named constructor for a [`StepSequencer`]
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    factory: fn(&DataSet) -> Box<dyn StepSequencer>,
}

impl AlgorithmDescriptor {
    /// Build a fresh sequencer over the current contents of `data`
    pub fn instantiate(&self, data: &DataSet) -> Box<dyn StepSequencer> {
        (self.factory)(data)
    }
}

fn bubble(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(BubbleSort::new(data))
}

fn selection(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(SelectionSort::new(data))
}

fn insertion(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(InsertionSort::new(data))
}

fn merge(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(MergeSort::new(data))
}

fn quick(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(QuickSort::new(data))
}

fn heap(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(HeapSort::new(data))
}

fn shell(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(ShellSort::new(data))
}

fn radix(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(RadixSort::new(data))
}

fn bucket(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(BucketSort::new(data))
}

fn comb(data: &DataSet) -> Box<dyn StepSequencer> {
    Box::new(CombSort::new(data))
}

static ALGORITHMS: [AlgorithmDescriptor; 10] = [
    AlgorithmDescriptor {
        name: "Bubble Sort",
        factory: bubble,
    },
    AlgorithmDescriptor {
        name: "Selection Sort",
        factory: selection,
    },
    AlgorithmDescriptor {
        name: "Insertion Sort",
        factory: insertion,
    },
    AlgorithmDescriptor {
        name: "Merge Sort",
        factory: merge,
    },
    AlgorithmDescriptor {
        name: "Quick Sort",
        factory: quick,
    },
    AlgorithmDescriptor {
        name: "Heap Sort",
        factory: heap,
    },
    AlgorithmDescriptor {
        name: "Shell Sort",
        factory: shell,
    },
    AlgorithmDescriptor {
        name: "Radix Sort",
        factory: radix,
    },
    AlgorithmDescriptor {
        name: "Bucket Sort",
        factory: bucket,
    },
    AlgorithmDescriptor {
        name: "Comb Sort",
        factory: comb,
    },
];

/// Read-only view over the algorithm table
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmCatalog {
    entries: &'static [AlgorithmDescriptor],
}

impl Default for AlgorithmCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmCatalog {
    pub fn new() -> Self {
        AlgorithmCatalog {
            entries: &ALGORITHMS,
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Name of the algorithm at `index`. Panics when out of range.
    pub fn name_at(&self, index: usize) -> &'static str {
        self.entries[index].name
    }

    /// Build a sequencer for the algorithm at `index`. Panics when out of range.
    pub fn instantiate(&self, index: usize, data: &DataSet) -> Box<dyn StepSequencer> {
        self.entries[index].instantiate(data)
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.count()
    }

    pub fn prev_index(&self, index: usize) -> usize {
        (index + self.count() - 1) % self.count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.entries.iter()
    }
}
