//! PowerSort merge policy (Munro & Wild, "Nearly-Optimal Mergesorts").
//!
//! Every boundary between two adjacent runs is a node of the merge tree. Its
//! power is the depth that node would get in a perfectly balanced tree over the
//! number line `[0, n)`, computed from the midpoints of both runs only. Runs wait
//! on a stack indexed by power; before a node of power `k` is placed, every
//! pending run with a larger power is merged into the current run.

use log::debug;

use crate::element::Element;
use crate::merge::RunMerger;
use crate::run::{next_run, Run};

/// Power of the node between runs `[begin_a, begin_b)` and `[begin_b, end_b)`
/// inside the working interval `[begin, end)`.
///
/// Both midpoints are scaled by two, so the relative offsets `l` and `r` live in
/// `[0, 2n)`. Doubling them modulo `n` yields one binary digit of each midpoint
/// per step; the power is the number of equal leading digits plus one.
pub fn node_power(begin: usize, end: usize, begin_a: usize, begin_b: usize, end_b: usize) -> u32 {
    let n = (end - begin) as u64;
    assert!(n < 1 << 62, "interval too large for node power");
    assert!(begin <= begin_a && begin_a < begin_b && begin_b < end_b && end_b <= end);

    let mut l = (begin_a - begin) as u64 + (begin_b - begin) as u64;
    let mut r = (begin_b - begin) as u64 + (end_b - begin) as u64;

    let mut common_bits = 0;
    let mut digit_a = l >= n;
    let mut digit_b = r >= n;
    while digit_a == digit_b {
        common_bits += 1;
        if digit_a {
            l -= n;
            r -= n;
        }
        l *= 2;
        r *= 2;
        digit_a = l >= n;
        digit_b = r >= n;
    }
    common_bits + 1
}

/// Sorts `arr` with the node-power policy. Descending runs are reversed and runs
/// shorter than `min_run` are extended before they take part in merging.
pub fn power_sort<T: Element>(arr: &mut [T], min_run: usize, merger: &mut RunMerger<T>) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    // powers never exceed floor(log2 n) + 1
    let mut stack: Vec<Option<Run>> = vec![None; n.ilog2() as usize + 2];
    let mut top = 0;

    let mut run_a = next_run(arr, 0, min_run, true);
    while run_a.end < n {
        let run_b = next_run(arr, run_a.end, min_run, true);
        let power = node_power(0, n, run_a.start, run_b.start, run_b.end) as usize;
        assert_ne!(power, top, "node power repeats the stack top");

        for level in (power + 1..=top).rev() {
            if let Some(pending) = stack[level].take() {
                run_a = merger.merge(arr, pending, run_a);
            }
        }

        if power >= stack.len() {
            stack.resize(power + 1, None);
        }
        stack[power] = Some(run_a);
        top = power;
        run_a = run_b;
    }

    debug!("power sort: collapsing {} pending runs", stack.iter().flatten().count());
    for level in (1..=top).rev() {
        if let Some(pending) = stack[level].take() {
            run_a = merger.merge(arr, pending, run_a);
        }
    }
    assert_eq!(run_a, Run::new(0, n));
}
