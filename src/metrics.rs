//! Measures of presortedness.
//!
//! Every measure is a pure function of a materialized sequence and comes with a
//! normalization into `[0, 1]` given the sequence length. Sequences with `n <= 1`
//! have zero disorder under every measure.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Raw measures in the fixed order runs, inversions, rem, osc, dis, ham, max.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawMetrics {
    pub runs: u64,
    pub inversions: u64,
    /// Length of the longest non-decreasing subsequence. `n - rem` is the number
    /// of removals needed to sort.
    pub rem: u64,
    pub osc: u64,
    pub dis: u64,
    pub ham: u64,
    pub max: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NormalizedMetrics {
    pub runs: f64,
    pub inversions: f64,
    pub rem: f64,
    pub osc: f64,
    pub dis: f64,
    pub ham: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisorderMetricsResult {
    pub n: usize,
    pub raw: RawMetrics,
    pub normalized: NormalizedMetrics,
}

impl RawMetrics {
    pub fn to_array(&self) -> [u64; 7] {
        [self.runs, self.inversions, self.rem, self.osc, self.dis, self.ham, self.max]
    }
}

impl NormalizedMetrics {
    pub fn to_array(&self) -> [f64; 7] {
        [self.runs, self.inversions, self.rem, self.osc, self.dis, self.ham, self.max]
    }
}

/// Computes all seven measures of `arr`. The input is not modified.
pub fn compute_all<T: Ord + Copy + Hash>(arr: &[T]) -> DisorderMetricsResult {
    let n = arr.len();
    let positions = stable_positions(arr);
    let displacements = positions.iter().enumerate().map(|(i, &p)| p.abs_diff(i) as u64);

    let raw = RawMetrics {
        runs: runs(arr),
        inversions: inversions(arr),
        rem: longest_non_decreasing(arr),
        osc: oscillations(arr),
        dis: displacements.clone().sum(),
        ham: hamming(arr),
        max: displacements.max().unwrap_or(0),
    };
    let normalized = NormalizedMetrics {
        runs: normalize_runs(raw.runs, n),
        inversions: normalize_inversions(raw.inversions, n),
        rem: normalize_rem(raw.rem, n),
        osc: normalize_osc(raw.osc, n),
        dis: normalize_dis(raw.dis, n),
        ham: normalize_ham(raw.ham, n),
        max: normalize_max(raw.max, n),
    };
    DisorderMetricsResult { n, raw, normalized }
}

/// Number of maximal non-decreasing runs; a run ends at every strict descent.
pub fn runs<T: Ord>(arr: &[T]) -> u64 {
    if arr.is_empty() {
        return 0;
    }
    1 + arr.windows(2).filter(|w| w[1] < w[0]).count() as u64
}

/// Number of pairs `i < j` with `arr[i] > arr[j]`, counted by a bottom-up
/// mergesort over a private copy. No recursion.
pub fn inversions<T: Ord + Copy>(arr: &[T]) -> u64 {
    let n = arr.len();
    let mut src = arr.to_vec();
    let mut dst = arr.to_vec();
    let mut count = 0;
    let mut width = 1;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            count += merge_counting(&src[lo..mid], &src[mid..hi], &mut dst[lo..hi]);
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }
    count
}

fn merge_counting<T: Ord + Copy>(left: &[T], right: &[T], out: &mut [T]) -> u64 {
    let (mut i, mut j, mut k) = (0, 0, 0);
    let mut count = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
            count += (left.len() - i) as u64;
        }
        k += 1;
    }
    out[k..k + left.len() - i].copy_from_slice(&left[i..]);
    k += left.len() - i;
    out[k..].copy_from_slice(&right[j..]);
    count
}

/// Length of the longest non-decreasing subsequence (patience sorting).
pub fn longest_non_decreasing<T: Ord + Copy>(arr: &[T]) -> u64 {
    let mut tails: Vec<T> = Vec::new();
    for &x in arr {
        let pos = tails.partition_point(|t| *t <= x);
        if pos == tails.len() {
            tails.push(x);
        } else {
            tails[pos] = x;
        }
    }
    tails.len() as u64
}

/// Minimum number of elements to remove so the rest is sorted.
pub fn removals<T: Ord + Copy>(arr: &[T]) -> u64 {
    arr.len() as u64 - longest_non_decreasing(arr)
}

/// Interior points that are strict local peaks or valleys.
pub fn oscillations<T: Ord>(arr: &[T]) -> u64 {
    arr.windows(3)
        .filter(|w| (w[0] < w[1] && w[1] > w[2]) || (w[0] > w[1] && w[1] < w[2]))
        .count() as u64
}

/// Position every element takes in the stably sorted sequence. Equal values
/// receive their sorted slots in left-to-right order.
pub fn stable_positions<T: Ord + Copy + Hash>(arr: &[T]) -> Vec<usize> {
    let mut sorted = arr.to_vec();
    sorted.sort();
    let mut slots: HashMap<T, VecDeque<usize>> = HashMap::with_capacity(sorted.len());
    for (i, x) in sorted.iter().enumerate() {
        slots.entry(*x).or_default().push_back(i);
    }
    arr.iter()
        .map(|x| {
            slots
                .get_mut(x)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| unreachable!("every value of the input has a sorted slot"))
        })
        .collect()
}

/// Sum of `|sorted position - position|` over all elements.
pub fn displacement_sum<T: Ord + Copy + Hash>(arr: &[T]) -> u64 {
    stable_positions(arr)
        .iter()
        .enumerate()
        .map(|(i, &p)| p.abs_diff(i) as u64)
        .sum()
}

/// Largest `|sorted position - position|` of any element.
pub fn max_displacement<T: Ord + Copy + Hash>(arr: &[T]) -> u64 {
    stable_positions(arr)
        .iter()
        .enumerate()
        .map(|(i, &p)| p.abs_diff(i) as u64)
        .max()
        .unwrap_or(0)
}

/// Positions where `arr` differs from its sorted version.
pub fn hamming<T: Ord + Copy>(arr: &[T]) -> u64 {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();
    arr.iter().zip(&sorted).filter(|(a, b)| a != b).count() as u64
}

pub fn normalize_runs(runs: u64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    (runs as f64 - 1.0) / (n as f64 - 1.0)
}

pub fn normalize_inversions(inversions: u64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let n = n as f64;
    inversions as f64 / (n * (n - 1.0) / 2.0)
}

/// Takes the raw longest non-decreasing subsequence length and returns the
/// fraction of elements that must be removed, `(n - lis) / n`.
pub fn normalize_rem(lis: u64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    (n as u64).saturating_sub(lis) as f64 / n as f64
}

pub fn normalize_osc(osc: u64, n: usize) -> f64 {
    if n < 3 {
        return 0.0;
    }
    osc as f64 / (n as f64 - 2.0)
}

/// Divides by the largest possible displacement sum, `floor(n^2 / 2)`.
pub fn normalize_dis(dis: u64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let square = n as f64 * n as f64;
    let denom = if n % 2 == 0 { square / 2.0 } else { (square - 1.0) / 2.0 };
    dis as f64 / denom
}

pub fn normalize_ham(ham: u64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    ham as f64 / n as f64
}

pub fn normalize_max(max: u64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    max as f64 / (n as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input() {
        let result = compute_all(&[1, 2, 3, 4, 5]);
        assert_eq!(
            result.raw,
            RawMetrics { runs: 1, inversions: 0, rem: 5, osc: 0, dis: 0, ham: 0, max: 0 }
        );
        assert_eq!(result.normalized.to_array(), [0.0; 7]);
    }

    #[test]
    fn reversed_input() {
        // sorted = [1, 2, 3, 4, 5]; only the middle element is already in place
        let result = compute_all(&[5, 4, 3, 2, 1]);
        assert_eq!(
            result.raw,
            RawMetrics { runs: 5, inversions: 10, rem: 1, osc: 0, dis: 12, ham: 4, max: 4 }
        );
        assert_eq!(result.normalized.runs, 1.0);
        assert_eq!(result.normalized.inversions, 1.0);
        assert_eq!(result.normalized.dis, 1.0);
        assert_eq!(result.normalized.max, 1.0);
        assert_eq!(result.normalized.rem, 0.8);
    }

    #[test]
    fn inversions_with_duplicates() {
        let arr = [1, 3, 2, 3, 1];
        assert_eq!(inversions(&arr), 4);
        assert_eq!(arr, [1, 3, 2, 3, 1]);
    }

    #[test]
    fn ties_keep_displacement_at_zero() {
        assert_eq!(displacement_sum(&[7, 7, 7, 7]), 0);
        assert_eq!(stable_positions(&[2, 1, 2, 1]), vec![2, 0, 3, 1]);
        assert_eq!(displacement_sum(&[2, 1, 2, 1]), 2 + 1 + 1 + 2);
        assert_eq!(max_displacement(&[2, 1, 2, 1]), 2);
    }

    #[test]
    fn oscillation_needs_strict_turns() {
        assert_eq!(oscillations(&[1, 3, 1, 3, 1]), 3);
        assert_eq!(oscillations(&[1, 3, 3, 1]), 0);
        assert_eq!(normalize_osc(3, 5), 1.0);
    }

    #[test]
    fn degenerate_lengths_are_zero() {
        for arr in [&[][..], &[9][..]] {
            let result = compute_all(arr);
            assert_eq!(result.normalized.to_array(), [0.0; 7]);
            assert_eq!(result.raw.inversions, 0);
            assert_eq!(result.raw.ham, 0);
        }
        assert_eq!(runs::<i32>(&[]), 0);
        assert_eq!(runs(&[9]), 1);
        assert_eq!(normalize_osc(0, 2), 0.0);
    }

    #[test]
    fn odd_length_dis_denominator() {
        assert_eq!(normalize_dis(12, 5), 1.0);
        assert_eq!(normalize_dis(8, 4), 1.0);
    }

    #[test]
    fn removals_complement_lis() {
        let arr = [3, 1, 2, 2, 0, 4];
        assert_eq!(longest_non_decreasing(&arr), 4);
        assert_eq!(removals(&arr), 2);
    }
}
