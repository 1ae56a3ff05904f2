//! Comparison sorts that do not merge runs. They report the number of element
//! writes into the sequence so their cost can be set against the run-merge policies.

use std::mem;

/// Linear insertion sort. Returns the writes into `arr`: one per shifted
/// element plus one per placed key, so sorted input costs `n - 1`.
pub fn insertion_sort<T: Ord + Copy>(arr: &mut [T]) -> u64 {
    let mut moves = 0;
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            moves += 1;
            j -= 1;
        }
        arr[j] = key;
        moves += 1;
    }
    moves
}

/// Quicksort with the middle element as pivot and Lomuto partitioning.
/// Not stable. Returns the writes into `arr`, two per swap (self-swaps included).
///
/// Recurses into the smaller side and loops on the larger one, so the stack
/// depth stays logarithmic even when many keys are equal.
pub fn quick_sort<T: Ord + Copy>(mut arr: &mut [T]) -> u64 {
    let mut moves = 0;
    while arr.len() > 1 {
        let (p, partition_moves) = partition(arr);
        moves += partition_moves;
        let (left, right) = mem::take(&mut arr).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            moves += quick_sort(left);
            arr = right;
        } else {
            moves += quick_sort(right);
            arr = left;
        }
    }
    moves
}

/// Moves the middle element to its final slot and returns that slot with the
/// writes performed. Everything `<=` the pivot ends up left of it.
fn partition<T: Ord + Copy>(arr: &mut [T]) -> (usize, u64) {
    let high = arr.len() - 1;
    let mid = high / 2;
    let pivot = arr[mid];
    arr.swap(mid, high);
    let mut swaps = 1;

    let mut i = 0;
    for j in 0..high {
        if arr[j] <= pivot {
            arr.swap(i, j);
            swaps += 1;
            i += 1;
        }
    }
    arr.swap(i, high);
    swaps += 1;
    (i, 2 * swaps)
}
