use std::any::type_name;
use std::mem::size_of;

use log::trace;

use crate::config::BufferStrategy;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::run::Run;

/// Work done by the merges of one sort call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeCostCounters {
    /// Number of merge steps.
    pub merges: u64,
    /// Sum of `len(left) + len(right)` over all merges.
    pub merge_cost: u64,
    /// Elements written back into the sequence.
    pub element_moves: u64,
    /// Cells written into the scratch buffer, sentinels included.
    pub buffer_cells: u64,
    pub element_size: usize,
}

impl MergeCostCounters {
    pub fn for_element<T>() -> MergeCostCounters {
        MergeCostCounters {
            element_size: size_of::<T>(),
            ..MergeCostCounters::default()
        }
    }

    pub fn buffer_bytes(&self) -> u64 {
        self.buffer_cells * self.element_size as u64
    }
}

/// Merges adjacent sorted runs through one reusable scratch buffer.
///
/// The buffer is owned by a single sort call and handed to each merge by
/// `&mut self`; it never outlives the call.
#[derive(Debug)]
pub struct RunMerger<T> {
    strategy: BufferStrategy,
    sentinel: Option<T>,
    scratch: Vec<T>,
    pub counters: MergeCostCounters,
}

impl<T: Element> RunMerger<T> {
    /// Builds a merger for sequences of up to `n` elements.
    pub fn new(strategy: BufferStrategy, n: usize) -> Result<RunMerger<T>> {
        if strategy == BufferStrategy::Sentinel && T::sentinel().is_none() {
            return Err(Error::SentinelUnavailable(type_name::<T>()));
        }
        Ok(RunMerger {
            strategy,
            sentinel: T::sentinel(),
            scratch: Vec::with_capacity(strategy.scratch_len(n)),
            counters: MergeCostCounters::for_element::<T>(),
        })
    }

    /// Replaces `arr[left.start..right.end]` with the stable merge of both runs.
    ///
    /// Panics if the runs are not adjacent.
    pub fn merge(&mut self, arr: &mut [T], left: Run, right: Run) -> Run {
        assert_eq!(left.end, right.start, "runs {:?} and {:?} are not adjacent", left, right);
        let merged = Run::new(left.start, right.end);
        if left.is_empty() || right.is_empty() {
            return merged;
        }
        trace!(
            "merge [{}, {}) + [{}, {}) with {}",
            left.start,
            left.end,
            right.start,
            right.end,
            self.strategy
        );

        let (l, m, r) = (left.start, left.end, right.end);
        self.counters.merges += 1;
        self.counters.merge_cost += (r - l) as u64;

        match self.strategy {
            BufferStrategy::FullCopy => self.merge_full_copy(arr, l, m, r),
            BufferStrategy::HalfCopy => self.merge_half_copy(arr, l, m, r),
            BufferStrategy::Sentinel => match self.sentinel {
                // a real value equal to the sentinel at the end of the right run
                // would be taken after the left sentinel
                Some(sentinel) if arr[r - 1] < sentinel => {
                    self.merge_sentinel(arr, l, m, r, sentinel)
                }
                _ => self.merge_full_copy(arr, l, m, r),
            },
        }
        merged
    }

    fn merge_full_copy(&mut self, arr: &mut [T], l: usize, m: usize, r: usize) {
        self.scratch.clear();
        self.scratch.extend_from_slice(&arr[l..r]);
        let buf = &self.scratch;

        let n1 = m - l;
        let total = r - l;
        let (mut i, mut j, mut k) = (0, n1, l);
        while i < n1 && j < total {
            if buf[i] <= buf[j] {
                arr[k] = buf[i];
                i += 1;
            } else {
                arr[k] = buf[j];
                j += 1;
            }
            k += 1;
        }
        arr[k..k + n1 - i].copy_from_slice(&buf[i..n1]);
        k += n1 - i;
        arr[k..r].copy_from_slice(&buf[j..total]);

        self.counters.buffer_cells += total as u64;
        self.counters.element_moves += total as u64;
    }

    /// Copies only the shorter run. Forward merge when the left run is copied,
    /// backward merge when the right one is; the remainder of the other run
    /// stays in place and is not counted as moved.
    fn merge_half_copy(&mut self, arr: &mut [T], l: usize, m: usize, r: usize) {
        let n1 = m - l;
        let n2 = r - m;
        self.scratch.clear();

        if n1 <= n2 {
            self.scratch.extend_from_slice(&arr[l..m]);
            let buf = &self.scratch;
            let (mut i, mut j, mut k) = (0, m, l);
            while i < n1 && j < r {
                if buf[i] <= arr[j] {
                    arr[k] = buf[i];
                    i += 1;
                } else {
                    arr[k] = arr[j];
                    j += 1;
                }
                k += 1;
            }
            arr[k..k + n1 - i].copy_from_slice(&buf[i..n1]);

            self.counters.buffer_cells += n1 as u64;
            self.counters.element_moves += (n1 + (j - m)) as u64;
        } else {
            self.scratch.extend_from_slice(&arr[m..r]);
            let buf = &self.scratch;
            let (mut i, mut j, mut k) = (m, n2, r);
            while i > l && j > 0 {
                k -= 1;
                if arr[i - 1] <= buf[j - 1] {
                    arr[k] = buf[j - 1];
                    j -= 1;
                } else {
                    arr[k] = arr[i - 1];
                    i -= 1;
                }
            }
            arr[k - j..k].copy_from_slice(&buf[..j]);

            self.counters.buffer_cells += n2 as u64;
            self.counters.element_moves += (n2 + (m - i)) as u64;
        }
    }

    fn merge_sentinel(&mut self, arr: &mut [T], l: usize, m: usize, r: usize, sentinel: T) {
        let n1 = m - l;
        self.scratch.clear();
        self.scratch.extend_from_slice(&arr[l..m]);
        self.scratch.push(sentinel);
        self.scratch.extend_from_slice(&arr[m..r]);
        self.scratch.push(sentinel);
        let buf = &self.scratch;

        let (mut i, mut j) = (0, n1 + 1);
        for slot in arr[l..r].iter_mut() {
            if buf[i] <= buf[j] {
                *slot = buf[i];
                i += 1;
            } else {
                *slot = buf[j];
                j += 1;
            }
        }

        self.counters.buffer_cells += (r - l + 2) as u64;
        self.counters.element_moves += (r - l) as u64;
    }
}
