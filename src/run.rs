use crate::base_case::binary_insertion_sort;

/// Half-open index interval `[start, end)` of a non-decreasing stretch of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn new(start: usize, end: usize) -> Run {
        debug_assert!(start <= end);
        Run { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `arr` into maximal non-decreasing runs. A new run starts at every strict descent.
pub fn decompose<T: Ord>(arr: &[T]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = 0;
    while start < arr.len() {
        let end = ascending_end(arr, start);
        runs.push(Run::new(start, end));
        start = end;
    }
    runs
}

fn ascending_end<T: Ord>(arr: &[T], start: usize) -> usize {
    let mut end = start + 1;
    while end < arr.len() && arr[end - 1] <= arr[end] {
        end += 1;
    }
    end
}

/// Finds the run starting at `start`. A strictly decreasing prefix is reversed in
/// place, so the returned run is always ascending. Equal neighbours never start a
/// descent, which keeps the reversal stable.
pub fn extend_and_reverse_run<T: Ord>(arr: &mut [T], start: usize) -> usize {
    let n = arr.len();
    if start + 1 >= n {
        return n.min(start + 1);
    }
    if arr[start + 1] < arr[start] {
        let mut end = start + 2;
        while end < n && arr[end] < arr[end - 1] {
            end += 1;
        }
        arr[start..end].reverse();
        end
    } else {
        ascending_end(arr, start)
    }
}

/// Returns the next run for a merge policy, at least `min_run` long unless the
/// input ends first. Short runs are topped up with binary insertion sort.
pub fn next_run<T: Ord + Copy>(arr: &mut [T], start: usize, min_run: usize, reverse: bool) -> Run {
    let end = if reverse {
        extend_and_reverse_run(arr, start)
    } else {
        ascending_end(arr, start)
    };
    let run = Run::new(start, end);
    if run.len() >= min_run || end == arr.len() {
        return run;
    }
    let forced_end = arr.len().min(start + min_run);
    binary_insertion_sort(&mut arr[start..forced_end], run.len());
    Run::new(start, forced_end)
}
