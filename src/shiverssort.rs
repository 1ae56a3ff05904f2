//! Adaptive ShiversSort merge policy (Jugé).
//!
//! Pending runs sit on a stack, bottom = leftmost. A run of length `len` has size
//! class `floor(log2(len / c))`. Adjacent entries are merged while the top of the
//! stack breaks the "classes strictly decrease towards the top" invariant; only
//! then is the next run pushed.

use log::debug;

use crate::element::Element;
use crate::merge::RunMerger;
use crate::run::{next_run, Run};

pub fn size_class(len: usize, c: usize) -> i32 {
    (len as f64 / c as f64).log2().floor() as i32
}

fn classes_decrease(stack: &[Run], c: usize) -> bool {
    stack
        .windows(2)
        .all(|w| size_class(w[0].len(), c) > size_class(w[1].len(), c))
}

/// Sorts `arr` with the size-class stack policy.
pub fn adaptive_shivers_sort<T: Element>(
    arr: &mut [T],
    c: usize,
    min_run: usize,
    merger: &mut RunMerger<T>,
) {
    assert!(c > 0, "stack constant must be positive");
    let n = arr.len();
    if n < 2 {
        return;
    }

    let class = |run: &Run| size_class(run.len(), c);
    let mut stack: Vec<Run> = Vec::new();
    let mut next = 0;

    loop {
        let h = stack.len();
        if h >= 3
            && (class(&stack[h - 1]) >= class(&stack[h - 3])
                || class(&stack[h - 2]) >= class(&stack[h - 3]))
        {
            let right = stack.remove(h - 2);
            stack[h - 3] = merger.merge(arr, stack[h - 3], right);
        } else if h >= 2 && class(&stack[h - 1]) >= class(&stack[h - 2]) {
            let right = stack[h - 1];
            stack.truncate(h - 1);
            stack[h - 2] = merger.merge(arr, stack[h - 2], right);
        } else if next < n {
            assert!(classes_decrease(&stack, c), "stack invariant broken: {:?}", stack);
            let run = next_run(arr, next, min_run, false);
            next = run.end;
            stack.push(run);
        } else {
            break;
        }
    }

    debug!("shivers sort: collapsing {} pending runs", stack.len());
    while let Some(right) = stack.pop() {
        match stack.last_mut() {
            Some(left) => *left = merger.merge(arr, *left, right),
            None => {
                assert_eq!(right, Run::new(0, n));
                break;
            }
        }
    }
}
