//! Array sorting algorithms.
//!
//! Sorts a homogeneous slice of [`Value`]s in place into ascending order
//! using the typed-value comparator. Stability varies per algorithm:
//! bubble and insertion are stable, shell and quick are not.
//!
//! Timing is the caller's concern; the functions here are pure
//! transformations bounded only by input size. Callers that expose the
//! quadratic algorithms interactively should warn above a size threshold
//! (see the engine facade), but every algorithm remains correct at any size.

use serde::{Deserialize, Serialize};

use algovis_common::Value;

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
    /// Adjacent-swap passes until a pass makes no swap. O(n²), stable.
    Bubble,
    /// Classic shift-and-insert. O(n²), stable.
    Insertion,
    /// Gap sequence `len/2, len/4, …, 1` with gap-insertion. Unstable.
    Shell,
    /// Library comparison sort (quicksort semantics). Unstable, O(n log n)
    /// average.
    Quick,
}

impl SortAlgorithm {
    /// Returns true for the O(n²) algorithms.
    #[must_use]
    pub fn is_quadratic(self) -> bool {
        matches!(self, SortAlgorithm::Bubble | SortAlgorithm::Insertion)
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Quick => "quick",
        }
    }
}

/// Sorts `values` in place into ascending order.
pub fn sort(values: &mut [Value], algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(values),
        SortAlgorithm::Insertion => insertion_sort(values),
        SortAlgorithm::Shell => shell_sort(values),
        SortAlgorithm::Quick => values.sort_unstable_by(|a, b| a.compare(b)),
    }
}

fn bubble_sort(values: &mut [Value]) {
    let len = values.len();
    if len < 2 {
        return;
    }
    loop {
        let mut swapped = false;
        for j in 0..len - 1 {
            if values[j].compare(&values[j + 1]).is_gt() {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

fn insertion_sort(values: &mut [Value]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1].compare(&values[j]).is_gt() {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn shell_sort(values: &mut [Value]) {
    let len = values.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && values[j - gap].compare(&values[j]).is_gt() {
                values.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Quick,
    ];

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    fn is_sorted(values: &[Value]) -> bool {
        values.windows(2).all(|w| !w[0].compare(&w[1]).is_gt())
    }

    #[test]
    fn test_sorts_ints() {
        for algo in ALL {
            let mut data = ints(&[5, 3, 8, 1, 9, 2, 7, 2]);
            sort(&mut data, algo);
            assert_eq!(
                data,
                ints(&[1, 2, 2, 3, 5, 7, 8, 9]),
                "algorithm {algo:?} failed"
            );
        }
    }

    #[test]
    fn test_sorts_other_kinds() {
        for algo in ALL {
            let mut floats: Vec<Value> = [2.5, 0.1, 1.75].map(Value::Float).to_vec();
            sort(&mut floats, algo);
            assert!(is_sorted(&floats));

            let mut chars: Vec<Value> = ['q', 'a', 'm'].map(Value::Char).to_vec();
            sort(&mut chars, algo);
            assert_eq!(chars, ['a', 'm', 'q'].map(Value::Char).to_vec());

            let mut texts: Vec<Value> = ["pear", "apple", "fig"].map(Value::from).to_vec();
            sort(&mut texts, algo);
            assert_eq!(texts, ["apple", "fig", "pear"].map(Value::from).to_vec());
        }
    }

    #[test]
    fn test_empty_and_single() {
        for algo in ALL {
            let mut empty: Vec<Value> = vec![];
            sort(&mut empty, algo);
            assert!(empty.is_empty());

            let mut one = ints(&[4]);
            sort(&mut one, algo);
            assert_eq!(one, ints(&[4]));
        }
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        for algo in ALL {
            let mut asc = ints(&[1, 2, 3, 4, 5]);
            sort(&mut asc, algo);
            assert_eq!(asc, ints(&[1, 2, 3, 4, 5]));

            let mut desc = ints(&[5, 4, 3, 2, 1]);
            sort(&mut desc, algo);
            assert_eq!(desc, ints(&[1, 2, 3, 4, 5]));
        }
    }

    proptest! {
        #[test]
        fn prop_sorted_permutation(input in prop::collection::vec(-1000i64..1000, 0..64)) {
            for algo in ALL {
                let mut data = ints(&input);
                sort(&mut data, algo);
                prop_assert!(is_sorted(&data));

                let mut expected = input.clone();
                expected.sort_unstable();
                prop_assert_eq!(&data, &ints(&expected));
            }
        }
    }
}
